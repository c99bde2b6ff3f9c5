//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and collects
//! them into one [`crate::types::FrameInput`] per frame. Works in terminals
//! without key-release events by treating soft drop as held until a timeout.

pub mod collector;
pub mod map;

pub use frametris_types as types;

pub use collector::{FrameInputCollector, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, should_quit};
