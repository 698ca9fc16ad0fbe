pub mod download;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile data for the front end
        .route("/api/profile", get(profile::handle_get_profile))
        .route("/api/profile/career", get(profile::handle_get_career))
        // Chat assistant
        .route("/api/chat", post(chat::handle_chat))
        // Resume downloads
        .route("/api/download/:format", get(download::handle_download))
        .with_state(state)
}
