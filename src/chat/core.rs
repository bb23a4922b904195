//! The client-side state machine for a chat session.

use tokio::sync::mpsc;

use super::models::{ChatMessage, Sender, Transcript};
use super::reveal::reveal;
use super::transport::ChatTransport;

/// Shown in place of a reply when the send fails outright.
pub const SEND_FAILED_TEXT: &str = "Error: Unable to process your request.";

/// Substituted when the backend reply is empty or missing.
pub const EMPTY_REPLY_TEXT: &str = "I couldn't understand that.";

/// Owns the visible transcript and runs one send at a time.
///
/// A send appends the user's message, makes a single transport call,
/// and reveals the reply word by word. Failures surface as a fixed
/// in-transcript error message rather than an `Err`. `send` takes
/// `&mut self`, so a second send cannot interleave with a reveal
/// that is still in progress.
pub struct ChatClient<T: ChatTransport> {
    transport: T,
    transcript: Transcript,
    typing: bool,
    tx: Option<mpsc::UnboundedSender<String>>,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            transcript: Transcript::new(),
            typing: false,
            tx: None,
        }
    }

    /// Like `new` but streams reveal deltas to a live view.
    pub fn with_updates(transport: T, tx: mpsc::UnboundedSender<String>) -> Self {
        Self {
            transport,
            transcript: Transcript::new(),
            typing: false,
            tx: Some(tx),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Submit one message. Empty or whitespace-only input is ignored
    /// without touching the transcript or the network.
    pub async fn send(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }

        self.transcript
            .append(ChatMessage::new(Sender::User, input));
        self.typing = true;

        match self.transport.send(input).await {
            Ok(reply) => {
                let text = match reply.reply {
                    Some(text) if !text.is_empty() => text,
                    _ => EMPTY_REPLY_TEXT.to_string(),
                };
                reveal(&mut self.transcript, self.tx.as_ref(), &text).await;
            }
            Err(err) => {
                tracing::error!("Chat send failed: {}", err);
                self.transcript
                    .append(ChatMessage::new(Sender::Assistant, SEND_FAILED_TEXT));
            }
        }

        self.typing = false;
    }
}
