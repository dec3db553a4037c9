//! Application router assembly.
//!
//! [`build_app_router`] is the single place routes meet middleware; `main.rs`
//! and the integration tests both call it, so the stack under test is the
//! stack in production.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;
use crate::uploads::MAX_IMAGE_BYTES;

/// Request body cap: a maximum-size image plus room for the other form
/// fields, so the 5 MB image rule is enforced by the upload check rather
/// than a transport error.
const BODY_LIMIT_BYTES: usize = MAX_IMAGE_BYTES + 1024 * 1024;

/// Assemble the routes and the middleware stack.
///
/// `/health` and `/uploads` sit at the root; everything else lives under
/// `/api`. Layers wrap bottom-up, so requests pass CORS first, then request-id
/// stamping, tracing, the timeout, and panic recovery before reaching a
/// handler.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");
    let uploads_root = state.uploads.root().to_path_buf();

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        // Uploaded images are plain static files.
        .nest_service("/uploads", ServeDir::new(uploads_root))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS layer admitting the configured origins with credentials.
///
/// An origin that does not parse aborts startup; a server running with a
/// half-applied CORS list is worse than one that refuses to boot.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
