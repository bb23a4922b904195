//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::Router;
use axum::body::Body;

use chatrelay::api::AppState;
use chatrelay::api::app;
use chatrelay::core::AppConfig;

/// Creates a test application router pointed at the given chatbot
/// backend address.
pub fn test_app(bot_api_url: &str) -> Router {
    let app_config = AppConfig {
        bot_api_url: bot_api_url.to_string(),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid utf-8")
}
