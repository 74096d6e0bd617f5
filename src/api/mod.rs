//! API Layer - the conversion endpoint plus liveness
//!
//! One POST route does the work; everything else is plumbing.

pub mod convert;

use crate::ai::SqlGenerator;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn router(generator: Arc<SqlGenerator>) -> Router {
    Router::new()
        .route("/convert", post(convert::convert_handler))
        .route("/health", get(health_check))
        .layer(Extension(generator))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
