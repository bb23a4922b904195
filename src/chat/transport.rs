//! Transports for delivering a user message and fetching the reply.
//!
//! The relay and the direct-to-backend paths speak the same wire
//! shape, so they are two implementations of one trait. The relay is
//! the default: it owns the upstream timeout and turns backend
//! failure detail into a fixed envelope, and it keeps the browser
//! out of cross-origin territory.

use std::sync::Arc;

use anyhow::{Error, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Wire reply from either the relay or the backend itself.
#[derive(Deserialize, Debug)]
pub struct BotReply {
    pub reply: Option<String>,
}

#[async_trait]
pub trait ChatTransport {
    /// Deliver one message and return the reply. No timeout is
    /// applied at this layer; whoever answers owns enforcement.
    async fn send(&self, message: &str) -> Result<BotReply, Error>;
}

pub type BoxedTransport = Box<dyn ChatTransport + Send + Sync + 'static>;

#[async_trait]
impl ChatTransport for BoxedTransport {
    async fn send(&self, message: &str) -> Result<BotReply, Error> {
        (**self).send(message).await
    }
}

#[async_trait]
impl<T: ChatTransport + Send + Sync + ?Sized> ChatTransport for Arc<T> {
    async fn send(&self, message: &str) -> Result<BotReply, Error> {
        (**self).send(message).await
    }
}

/// Sends messages through the relay endpoint.
pub struct RelayTransport {
    api_base_url: String,
}

impl RelayTransport {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}

impl Default for RelayTransport {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8080")
    }
}

#[async_trait]
impl ChatTransport for RelayTransport {
    async fn send(&self, message: &str) -> Result<BotReply, Error> {
        let url = format!(
            "{}/chatbot/chat",
            self.api_base_url.trim_end_matches("/")
        );
        post_chat(&url, message).await
    }
}

/// Sends messages straight at the chatbot backend, bypassing the
/// relay. Kept for local debugging against a backend that allows it.
pub struct DirectTransport {
    api_base_url: String,
}

impl DirectTransport {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}

impl Default for DirectTransport {
    fn default() -> Self {
        Self::new("http://127.0.0.1:5000")
    }
}

#[async_trait]
impl ChatTransport for DirectTransport {
    async fn send(&self, message: &str) -> Result<BotReply, Error> {
        let url = format!("{}/chat", self.api_base_url.trim_end_matches("/"));
        post_chat(&url, message).await
    }
}

async fn post_chat(url: &str, message: &str) -> Result<BotReply, Error> {
    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .json(&json!({ "message": message }))
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("Chat request failed: {}", response.status());
    }

    Ok(response.json().await?)
}
