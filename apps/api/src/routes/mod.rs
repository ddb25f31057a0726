pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::blueprint::handlers::handle_get_project_info;
use crate::display::handlers::handle_normalize;
use crate::errors::AppError;
use crate::state::AppState;
use crate::synthesis::handlers::handle_turn_to_prompt;

async fn not_found() -> Result<(), AppError> {
    Err(AppError::NotFound)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::hello_handler))
        .route("/api/", get(health::hello_handler))
        // Blueprint Generator
        .route("/api/getprojectinfo", post(handle_get_project_info))
        // Prompt Synthesizer
        .route("/api/turntoprompt", post(handle_turn_to_prompt))
        // Display normalization
        .route("/api/normalize", post(handle_normalize))
        .fallback(not_found)
        .with_state(state)
}
