//! Terminal snake runner (default binary).
//!
//! This is the event dispatcher. Two asynchronous sources drive the game:
//! the keyboard event stream and a fixed-period timer deadline. Each pass
//! of the loop delivers at most one event into the runtime, so the two
//! handlers are never re-entered and never run concurrently — the
//! dispatcher upholds the engine's non-reentrancy contract.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::engine::Runtime;
use tui_snake::input::{should_quit, translate_key};
use tui_snake::term::TerminalRenderer;
use tui_snake::types::TIMER_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut runtime = Runtime::new();
    let tick_interval = Duration::from_millis(TIMER_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(runtime.screen())?;

        // Wait for a keystroke, but never past the next timer deadline.
        let timeout = tick_interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            // Reading the event frees the queue to deliver the next one —
            // this rendition's interrupt acknowledgment.
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(k) = translate_key(key) {
                        runtime.handle_key(k);
                    }
                }
                _ => {}
            }
        }

        // Deliver every tick period that elapsed, keeping the cadence fixed
        // even when input handling ran long.
        while last_tick.elapsed() >= tick_interval {
            last_tick += tick_interval;
            runtime.handle_tick();
        }
    }
}
