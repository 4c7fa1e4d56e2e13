/// Mailgate API - single-endpoint HTTP relay
///
/// Dispatch is purely on the HTTP method; the path is ignored. GET answers a
/// fixed health payload, POST relays an email, and OPTIONS preflights are
/// answered by the CORS layer. Everything else is a 405.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

// Re-export commonly used types
pub use context::ApiContext;
pub use error::ApiError;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    middleware as axum_middleware,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Maximum accepted request body size. The contract carries no attachments,
/// so real payloads sit far below this.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the service router.
///
/// Method dispatch lives on the fallback so that every path resolves to the
/// same operations.
pub fn app(ctx: Arc<ApiContext>) -> Router {
    let relay_endpoint = get(api::health::handler)
        .post(api::send::handler)
        .with_state(ctx);

    Router::new()
        .fallback_service(relay_endpoint)
        // Request logging middleware
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // CORS middleware allowing all origins; also answers OPTIONS preflights
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
