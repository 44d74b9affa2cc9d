pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analysis/jd-score",
            post(handlers::handle_jd_score),
        )
        .route("/api/v1/analysis/:id", get(handlers::handle_get_analysis))
        .with_state(state)
}
