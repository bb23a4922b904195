mod client;
pub use client::{REPLY_TIMEOUT, reply};
