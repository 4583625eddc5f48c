use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ApiErrorResponse, TimeRange, TokenErrorResponse, TokenResponse};
use reqwest::{Client, Url};
use serde_json::Value;
use std::fmt;

/// Capabilities requested on every login.
pub const SCOPES: [&str; 6] = [
    "user-read-private",
    "user-read-email",
    "user-top-read",
    "user-read-recently-played",
    "user-read-playback-state",
    "user-read-currently-playing",
];

/// Fixed page size for every collection endpoint.
pub const PAGE_SIZE: u32 = 20;

#[derive(Clone)]
pub struct SpotifyClient {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    authorize_url: Url,
    token_url: Url,
    top_artists_url: Url,
    top_tracks_url: Url,
    recently_played_url: Url,
    client: Client,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_url", &self.token_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SpotifyClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.spotify_timeout {
            builder = builder.timeout(timeout);
        }

        let accounts = &config.spotify_accounts_url;
        let api = &config.spotify_api_url;

        Ok(Self {
            client_id: config.spotify_client_id.clone(),
            client_secret: config.spotify_client_secret.clone(),
            redirect_uri: config.spotify_redirect_uri.clone(),
            authorize_url: accounts.join("authorize")?,
            token_url: accounts.join("api/token")?,
            top_artists_url: api.join("v1/me/top/artists")?,
            top_tracks_url: api.join("v1/me/top/tracks")?,
            recently_played_url: api.join("v1/me/player/recently-played")?,
            client: builder.build()?,
        })
    }

    /// Provider login page the browser is sent to.
    pub fn authorize_url(&self) -> Url {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("scope", &SCOPES.join(" "))
            .append_pair("redirect_uri", &self.redirect_uri);
        url
    }

    /// Trades an authorization code for an access/refresh token pair.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        tracing::debug!("Exchanging authorization code at {}", self.token_url);

        let response = self
            .client
            .post(self.token_url.clone())
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::TokenExchange(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::TokenExchange(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(TokenErrorResponse {
                    error,
                    error_description: Some(description),
                }) => format!("{}: {}", error, description),
                Ok(TokenErrorResponse { error, .. }) => error,
                Err(_) => body.chars().take(200).collect(),
            };
            return Err(AppError::TokenExchange(format!(
                "Token endpoint returned {}: {}",
                status, detail
            )));
        }

        // The body carries the tokens, keep it out of the error message
        let tokens: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::TokenExchange(format!("Failed to parse token response: {}", e)))?;

        tracing::debug!(
            "Token granted: type={}, scope={}",
            tokens.token_type.as_deref().unwrap_or("unknown"),
            tokens.scope.as_deref().unwrap_or("")
        );

        Ok(tokens)
    }

    pub async fn top_artists(&self, token: &str, time_range: TimeRange) -> Result<Value> {
        self.get_json(
            self.top_artists_url.clone(),
            &[("limit", PAGE_SIZE.to_string()), ("time_range", time_range.to_string())],
            token,
        )
        .await
    }

    pub async fn top_tracks(&self, token: &str, time_range: TimeRange) -> Result<Value> {
        self.get_json(
            self.top_tracks_url.clone(),
            &[("limit", PAGE_SIZE.to_string()), ("time_range", time_range.to_string())],
            token,
        )
        .await
    }

    pub async fn recently_played(&self, token: &str) -> Result<Value> {
        self.get_json(
            self.recently_played_url.clone(),
            &[("limit", PAGE_SIZE.to_string())],
            token,
        )
        .await
    }

    /// Single GET against the Web API, relaying the JSON body untouched.
    async fn get_json(&self, url: Url, params: &[(&str, String)], token: &str) -> Result<Value> {
        tracing::debug!("Fetching {} with {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request to Spotify failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => format!("Spotify API returned {}: {}", status, err.error.message),
                Err(_) => format!("Spotify API returned {}", status),
            };
            return Err(AppError::Upstream(message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Upstream(format!("Malformed response from Spotify: {}", e)))
    }
}
