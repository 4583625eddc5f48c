use serde::Deserialize;

/// Body of a successful `authorization_code` grant from the accounts service.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub refresh_token: String,
}

/// Error body returned by the accounts service, e.g. `{"error":"invalid_grant"}`.
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Error body returned by the Web API, e.g. `{"error":{"status":401,"message":"..."}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
