//! Terminal input module (engine-facing).
//!
//! This crate is the keyboard map: it translates `crossterm` key events into
//! the [`crate::types::Key`] values the event handlers consume, playing the
//! role the raw-code lookup table plays on real hardware. It knows nothing
//! about game state.

pub mod map;

pub use tui_snake_types as types;

pub use map::{should_quit, translate_key};
