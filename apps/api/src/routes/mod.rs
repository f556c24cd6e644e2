pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .route("/preset-questions", get(handlers::handle_preset_questions))
        .route("/documents", get(handlers::handle_list_documents))
        .with_state(state)
}
