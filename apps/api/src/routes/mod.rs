pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::generation::handlers::handle_generate;
use crate::state::AppState;
use crate::text::handlers::{handle_extract, MAX_UPLOAD_BYTES};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test", get(health::test_handler))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/generate", post(handle_generate))
        .route(
            "/api/extract",
            post(handle_extract).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
