//! Event dispatch: the two handlers that drive the one game instance.
//!
//! The [`Runtime`] owns the process-wide [`Game`] and its [`Screen`] and
//! exposes exactly two entry points: [`Runtime::handle_key`] for keystroke
//! events and [`Runtime::handle_tick`] for timer events. Both run to
//! completion without blocking; every recoverable condition (dropped input,
//! rejected turn, collision) is resolved inside the handler that sees it,
//! so neither returns an error.
//!
//! # Non-reentrancy
//!
//! The shared state carries no lock. Correctness is a precondition on the
//! dispatcher, not on the handlers: events must be delivered one at a time
//! from a single thread, and a handler must never be entered while another
//! is still running. This mirrors the serialization an interrupt controller
//! provides when each source is acknowledged before further delivery. An
//! embedder that lets event sources preempt each other must treat each
//! handler call as a critical section.

use tui_snake_core::{Game, StepResult};
use tui_snake_term::{view, Screen};
use tui_snake_types::{Direction, Key, Mode, Pacing};

/// Movement-key slice of the keyboard map.
fn direction_for(ch: char) -> Option<Direction> {
    match ch {
        'w' | 'W' => Some(Direction::Up),
        's' | 'S' => Some(Direction::Down),
        'a' | 'A' => Some(Direction::Left),
        'd' | 'D' => Some(Direction::Right),
        _ => None,
    }
}

/// Owns the game and the screen; dispatch target for both event sources.
pub struct Runtime {
    game: Game,
    screen: Screen,
    pacing: Pacing,
}

impl Runtime {
    /// Boot into the menu with the reference (timer-paced) behavior.
    pub fn new() -> Self {
        Self::with_pacing(Pacing::TimerPaced)
    }

    pub fn with_pacing(pacing: Pacing) -> Self {
        let mut screen = Screen::new();
        view::draw_menu_prompt(&mut screen);
        Self {
            game: Game::new(),
            screen,
            pacing,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Keystroke event handler. Consumes exactly one translated key press.
    pub fn handle_key(&mut self, key: Key) {
        match self.game.mode() {
            Mode::Menu => self.menu_key(key),
            Mode::Playing => self.playing_key(key),
            Mode::GameOver => self.game_over_key(key),
        }
    }

    /// Timer event handler. Consumes exactly one tick.
    ///
    /// Below the speed divisor nothing changes but the tick counter; at the
    /// divisor the simulation advances one step and the field is repainted.
    /// Under input-paced play the timer drives nothing.
    pub fn handle_tick(&mut self) {
        if self.game.mode() != Mode::Playing || self.pacing == Pacing::InputPaced {
            return;
        }
        if !self.game.on_tick() {
            return;
        }
        self.step_and_render();
    }

    fn menu_key(&mut self, key: Key) {
        match key {
            Key::Enter => {
                // The buffer is cleared whether or not it matched.
                let start = self.game.command_matches_start();
                self.game.clear_command();
                if start {
                    self.game.restart();
                    self.screen.clear();
                    view::draw_border(&mut self.screen);
                    view::draw_field(&mut self.screen, &self.game);
                } else {
                    self.screen.newline();
                }
            }
            Key::Char(ch) => {
                // Echo only what the buffer actually kept.
                if self.game.push_command(ch) {
                    self.screen.put_char(ch as u8);
                }
            }
        }
    }

    fn playing_key(&mut self, key: Key) {
        let Key::Char(ch) = key else {
            return;
        };
        let Some(direction) = direction_for(ch) else {
            return;
        };
        if !self.game.turn(direction) {
            return;
        }
        // Reference behavior records intent only; the legacy mode steps the
        // game synchronously on every accepted turn.
        if self.pacing == Pacing::InputPaced {
            self.step_and_render();
        }
    }

    fn game_over_key(&mut self, key: Key) {
        if key == Key::Enter {
            self.game.to_menu();
            view::draw_menu_prompt(&mut self.screen);
        }
    }

    fn step_and_render(&mut self) {
        match self.game.step() {
            StepResult::Crashed => view::draw_game_over(&mut self.screen),
            StepResult::Moved | StepResult::Ate => {
                view::draw_field(&mut self.screen, &self.game)
            }
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
