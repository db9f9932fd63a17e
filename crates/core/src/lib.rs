//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the snake, the food, the
//! menu/playing/game-over state machine, and the pseudo-random generator.
//! It has **zero dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: the RNG is seeded once at boot, so play sequences
//!   are reproducible from power-on
//! - **Testable**: every rule is exercised without a display attached
//! - **Portable**: the same state machine runs under any event source
//!
//! # Module Structure
//!
//! - [`rng`]: 31-bit linear congruential generator for food placement
//! - [`snake`]: the bounded snake body and its heading
//! - [`game`]: game state, simulation step, food placement, command buffer
//!
//! # Event model
//!
//! Nothing in this crate waits or blocks. The embedder owns one [`Game`] and
//! calls into it from exactly two places: a keystroke handler (recording
//! direction intent or editing the command buffer) and a timer handler
//! (counting ticks via [`Game::on_tick`] and stepping via [`Game::step`]).

pub mod game;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game::{Game, StepResult};
pub use rng::{Lcg, BOOT_SEED};
pub use snake::Snake;
