use crate::error::{AppError, Result};
use crate::services::SessionCookies;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// Access token taken from the session cookie. Rejects with 401 before the
/// handler runs, so no Spotify call is made without a token.
pub struct RequireSpotifyToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequireSpotifyToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = SessionCookies::access_token(&jar).ok_or_else(|| {
            tracing::debug!("Rejecting {} without a session cookie", parts.uri.path());
            AppError::MissingToken
        })?;

        Ok(RequireSpotifyToken(token))
    }
}
