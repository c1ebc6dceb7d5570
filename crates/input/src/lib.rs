//! Terminal input module.
//!
//! This crate is independent of any UI framework. It maps `crossterm` key events
//! into [`crate::types::GameAction`] and provides a DAS/ARR input handler suitable
//! for terminal environments (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{Actions, HorizontalDirection, InputHandler};
pub use map::{handle_key_event, is_mute_key, should_quit};
