//! Client-side chat: transcript state, transports, and the reveal
//! procedure.

mod core;
pub mod models;
mod reveal;
pub mod transport;

pub use self::core::{ChatClient, EMPTY_REPLY_TEXT, SEND_FAILED_TEXT};
pub use models::{ChatMessage, Sender, Transcript};
pub use reveal::{REVEAL_INTERVAL, reveal};
pub use transport::{BotReply, BoxedTransport, ChatTransport, DirectTransport, RelayTransport};
