pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recipe::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/recipes/generate", post(handlers::handle_generate))
        .route("/api/v1/recipes/parse", post(handlers::handle_parse))
        .with_state(state)
}
