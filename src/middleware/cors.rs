use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API; uploads and downloads come from browser clients.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
        .expose_headers([axum::http::header::CONTENT_DISPOSITION])
}
