use crate::api::middleware::RequireSpotifyToken;
use crate::api::{found, AppState};
use crate::error::{AppError, Result};
use crate::models::SessionStatus;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
    /// Set by Spotify instead of `code` when the user declines
    error: Option<String>,
}

async fn login(State(state): State<Arc<AppState>>) -> Response {
    found(state.spotify.authorize_url().to_string())
}

async fn callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Result<impl IntoResponse> {
    if let Some(error) = query.error {
        return Err(AppError::TokenExchange(format!("Authorization was not granted: {}", error)));
    }

    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::TokenExchange("Callback is missing the authorization code".to_string()))?;

    let tokens = state.spotify.exchange_code(&code).await?;
    tracing::info!("Session established, access token valid for {}s", tokens.expires_in);

    let jar = state.session.establish(jar, &tokens);
    Ok((jar, found(format!("{}/logged", state.config.frontend_uri))))
}

async fn me(RequireSpotifyToken(_token): RequireSpotifyToken) -> Json<SessionStatus> {
    Json(SessionStatus { authenticated: true })
}

async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    (state.session.clear(jar), StatusCode::NO_CONTENT)
}
