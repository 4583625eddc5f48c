use crate::api::middleware::RequireSpotifyToken;
use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::TimeRange;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn stats_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/top-artists", get(top_artists))
        .route("/top-tracks", get(top_tracks))
        .route("/recently-played", get(recently_played))
}

#[derive(Debug, Default, Deserialize)]
struct TopItemsQuery {
    time_range: Option<String>,
}

impl TopItemsQuery {
    fn time_range(&self) -> Result<TimeRange> {
        match self.time_range.as_deref() {
            None | Some("") => Ok(TimeRange::default()),
            Some(raw) => raw.parse().map_err(AppError::Validation),
        }
    }
}

async fn top_artists(
    State(state): State<Arc<AppState>>,
    RequireSpotifyToken(token): RequireSpotifyToken,
    WithRejection(Query(query), _): WithRejection<Query<TopItemsQuery>, AppError>,
) -> Result<Json<Value>> {
    let time_range = query.time_range()?;
    let data = state.spotify.top_artists(&token, time_range).await?;
    Ok(Json(data))
}

async fn top_tracks(
    State(state): State<Arc<AppState>>,
    RequireSpotifyToken(token): RequireSpotifyToken,
    WithRejection(Query(query), _): WithRejection<Query<TopItemsQuery>, AppError>,
) -> Result<Json<Value>> {
    let time_range = query.time_range()?;
    let data = state.spotify.top_tracks(&token, time_range).await?;
    Ok(Json(data))
}

async fn recently_played(
    State(state): State<Arc<AppState>>,
    RequireSpotifyToken(token): RequireSpotifyToken,
) -> Result<Json<Value>> {
    let data = state.spotify.recently_played(&token).await?;
    Ok(Json(data))
}
