pub mod auth;
pub mod middleware;
pub mod stats;

pub use auth::auth_routes;
pub use stats::stats_routes;

use crate::config::Config;
use crate::services::{SessionCookies, SpotifyClient};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub struct AppState {
    pub config: Config,
    pub spotify: SpotifyClient,
    pub session: SessionCookies,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            spotify: SpotifyClient::new(&config)?,
            session: SessionCookies::new(&config),
            config,
        })
    }
}

/// `302 Found` to `location`.
pub(crate) fn found(location: impl Into<String>) -> Response {
    let location: String = location.into();
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
