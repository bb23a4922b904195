//! HTTP client for the external chatbot backend.

use std::time::Duration;

use anyhow::{Context, Error, Result, bail};
use serde_json::{Value, json};

/// How long to wait for the backend before giving up on a reply.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Request the next reply from the chatbot backend.
///
/// Issues exactly one `POST /chat` with a bounded timeout and no
/// retries. Returns the `reply` field from the response body as-is,
/// which is `Null` when the backend omits it. The caller decides
/// whether to substitute anything.
pub async fn reply(api_base_url: &str, message: &str) -> Result<Value, Error> {
    let url = format!("{}/chat", api_base_url.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .timeout(REPLY_TIMEOUT)
        .json(&json!({ "message": message }))
        .send()
        .await
        .context("Error communicating with chatbot backend")?;

    if !response.status().is_success() {
        bail!("Chatbot backend returned an error: {}", response.status());
    }

    let body: Value = response
        .json()
        .await
        .context("Chatbot backend returned an unreadable body")?;
    Ok(body.get("reply").cloned().unwrap_or(Value::Null))
}
