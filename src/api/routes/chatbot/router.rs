//! Router for the chatbot page and chat relay

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};

use super::public;
use crate::api::state::AppState;
use crate::bot;

type SharedState = Arc<RwLock<AppState>>;

/// Fixed user-facing text for any relay failure. Failure detail is
/// logged, never returned to the caller.
const RELAY_FAILED_TEXT: &str = "Sorry, something went wrong.";

/// Serve the chat UI page
async fn chatbot_page() -> Html<&'static str> {
    Html(include_str!("../../../../web-ui/src/chatbot.html"))
}

/// Forward one message to the chatbot backend and normalize the
/// outcome. Success passes the backend's reply through as-is; every
/// failure becomes the same fixed 500 envelope.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> impl IntoResponse {
    let bot_api_url = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.config.bot_api_url.clone()
    };

    match bot::reply(&bot_api_url, &payload.message).await {
        Ok(reply) => (StatusCode::OK, Json(public::ChatReply { reply })).into_response(),
        Err(err) => {
            tracing::error!("Chat relay failed: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(public::ChatReply {
                    reply: RELAY_FAILED_TEXT.into(),
                }),
            )
                .into_response()
        }
    }
}

/// Create the chatbot router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(chatbot_page))
        .route("/chat", post(chat_handler))
}
