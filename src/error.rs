use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing token")]
    MissingToken,

    #[error("{0}")]
    Upstream(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Upstream(msg) => {
                tracing::warn!("Spotify request failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TokenExchange(ref msg) => {
                tracing::error!("Token exchange failed: {}", msg);
                // Plain body, the cause stays in the server log
                return (StatusCode::INTERNAL_SERVER_ERROR, "Error getting tokens").into_response();
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_response() {
        let response = AppError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_string(response).await, r#"{"error":"Missing token"}"#);
    }

    #[tokio::test]
    async fn test_upstream_error_is_bad_request() {
        let response = AppError::Upstream("Spotify API returned 403 Forbidden".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Spotify API returned 403 Forbidden"}"#
        );
    }

    #[tokio::test]
    async fn test_token_exchange_hides_cause() {
        let response = AppError::TokenExchange("invalid_grant: Invalid authorization code".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Error getting tokens");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, r#"{"error":"Internal server error"}"#);
    }
}
