use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the single-page app (plain HTML/JS/CSS, no build step)
#[derive(RustEmbed)]
#[folder = "frontend"]
pub struct Assets;

pub async fn serve_frontend(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // Try to serve the requested file
    if let Some(content) = Assets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    // If not found, check if it's a directory index
    let index_path = format!("{}/index.html", path.trim_end_matches('/'));
    if let Some(content) = Assets::get(&index_path) {
        return serve_asset(&index_path, content.data.into_owned());
    }

    // Client-side routes such as /logged are resolved by the app itself
    if let Some(content) = Assets::get("index.html") {
        return serve_asset("index.html", content.data.into_owned());
    }

    not_found()
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, cache_control_value(path).to_string()),
        ],
        data,
    )
        .into_response()
}

fn cache_control_value(path: &str) -> &'static str {
    // Pages must be revalidated so a redeploy is picked up immediately
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::body_string;

    async fn fetch(path: &str) -> Response {
        serve_frontend(path.parse().unwrap()).await.into_response()
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let response = fetch("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert!(body_string(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let response = fetch("/logged").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_script_is_served_with_its_type() {
        let response = fetch("/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().contains("javascript"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=3600");
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control_value("index.html"), "no-cache");
        assert_eq!(cache_control_value("style.css"), "public, max-age=3600");
    }
}
