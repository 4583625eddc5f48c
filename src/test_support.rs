use crate::api::AppState;
use crate::config::Config;
use axum::{body::Body, http::header, response::Response};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

/// Config whose accounts and API base URLs both point at `spotify_url`.
pub fn test_config(spotify_url: &str) -> Config {
    Config::from_lookup(|key| {
        let value = match key {
            "SPOTIFY_CLIENT_ID" => "test-client-id",
            "SPOTIFY_CLIENT_SECRET" => "test-client-secret",
            "SPOTIFY_REDIRECT_URI" => "http://127.0.0.1:3000/callback",
            "FRONTEND_URI" => "http://frontend.test",
            "SPOTIFY_ACCOUNTS_URL" | "SPOTIFY_API_URL" => spotify_url,
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("test config is valid")
}

pub fn test_state(spotify_url: &str) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(spotify_url)).expect("test state builds"))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
