//! The core models for the visible chat transcript.

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            sender,
            text: text.to_string(),
        }
    }
}

/// Ordered log of everything said in the current session.
///
/// Append-only: messages are never removed or reordered. The one
/// in-place mutation is `update_last`, used to grow the trailing
/// placeholder while a reply is being revealed.
#[derive(Default)]
pub struct Transcript(Vec<ChatMessage>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.0.clone()
    }

    pub fn append(&mut self, msg: ChatMessage) {
        self.0.push(msg)
    }

    /// Replace the text of the most recent message. Does nothing on
    /// an empty transcript.
    pub fn update_last(&mut self, text: &str) {
        if let Some(last) = self.0.last_mut() {
            last.text = text.to_string();
        }
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
