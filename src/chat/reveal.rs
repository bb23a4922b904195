//! Incremental word-by-word display of a completed reply.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use super::models::{ChatMessage, Sender, Transcript};

/// Pause between revealed words.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(50);

/// Reveal `full_text` into the transcript one word at a time.
///
/// Appends an empty assistant placeholder, then rebuilds its text
/// token by token with a pause between steps. Tokens are split on
/// single spaces so the finished text reproduces `full_text` exactly,
/// runs of spaces included. Each new token is also emitted on `tx` so
/// a live view can render the increment; a dropped receiver does not
/// stop the reveal. Dropping the returned future cancels it.
pub async fn reveal(
    transcript: &mut Transcript,
    tx: Option<&mpsc::UnboundedSender<String>>,
    full_text: &str,
) {
    transcript.append(ChatMessage::new(Sender::Assistant, ""));

    let mut current = String::new();
    for (i, word) in full_text.split(' ').enumerate() {
        if i > 0 {
            current.push(' ');
        }
        current.push_str(word);
        transcript.update_last(&current);

        if let Some(tx) = tx {
            let delta = if i > 0 {
                format!(" {}", word)
            } else {
                word.to_string()
            };
            let _ = tx.send(delta);
        }

        sleep(REVEAL_INTERVAL).await;
    }
}
