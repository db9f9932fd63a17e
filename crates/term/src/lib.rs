//! Terminal display module.
//!
//! The display surface is a fixed 80x25 text-mode screen held in memory:
//! a glyph byte and a color-attribute byte per cell plus an auto-advancing
//! text cursor, the layout of classic text-mode video memory. Game code
//! paints into the [`Screen`]; the [`TerminalRenderer`] flushes it to a real
//! terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep painting pure so tests can assert on screen contents
//! - Flush efficiently (full frame once, then changed cells only)

pub mod renderer;
pub mod screen;
pub mod view;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Screen, TextCell};
