//! API routes module

pub mod chatbot;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chatbot UI page and chat relay
        .nest("/chatbot", chatbot::router())
}
