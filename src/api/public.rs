//! Public API types

// Re-export public types from each route

pub mod chatbot {
    pub use crate::api::routes::chatbot::public::*;
}
