/// Static frontend serving with SPA fallback
///
/// Non-`/api` paths serve the frontend bundle. Unmatched paths fall back to
/// the index document so deep links into the SPA resolve client-side.
/// Hashed assets get a long-lived immutable cache header; the index
/// document (and extensionless SPA routes resolving to it) must always
/// revalidate.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Builds the frontend router for non-`/api` paths
pub fn router(static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let serve = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(serve)
        .layer(middleware::from_fn(cache_control))
}

async fn cache_control(request: Request, next: Next) -> Response {
    let long_lived = is_hashed_asset(request.uri().path());
    let mut response = next.run(request).await;

    let value = if long_lived {
        HeaderValue::from_static("public, max-age=31536000, immutable")
    } else {
        HeaderValue::from_static("no-cache")
    };
    response.headers_mut().insert(header::CACHE_CONTROL, value);

    response
}

/// True for paths with a non-HTML file extension
fn is_hashed_asset(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => !ext.eq_ignore_ascii_case("html"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_assets_are_long_lived() {
        assert!(is_hashed_asset("/assets/main.a1b2c3.js"));
        assert!(is_hashed_asset("/styles.css"));
        assert!(is_hashed_asset("/favicon.ico"));
    }

    #[test]
    fn test_documents_and_routes_revalidate() {
        assert!(!is_hashed_asset("/"));
        assert!(!is_hashed_asset("/index.html"));
        assert!(!is_hashed_asset("/chorelists/3"));
        assert!(!is_hashed_asset("/.well-known"));
    }
}
