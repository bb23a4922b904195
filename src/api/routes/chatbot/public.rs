//! Public types for the chatbot API
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply envelope for the relay. `reply` is whatever the backend
/// produced, including `null` when the backend omitted the field.
#[derive(Serialize)]
pub struct ChatReply {
    pub reply: Value,
}
