//! Event-driven scenarios through the runtime's two handlers.

use tui_snake::engine::Runtime;
use tui_snake::types::{Key, Mode, COMMAND_BUFFER_CAP, MENU_PROMPT, SPEED_DIVISOR};

fn type_command(runtime: &mut Runtime, cmd: &str) {
    for ch in cmd.chars() {
        runtime.handle_key(Key::Char(ch));
    }
}

fn screen_row(runtime: &Runtime, y: u16, len: usize) -> String {
    (0..len as u16)
        .map(|x| runtime.screen().get(x, y).unwrap().glyph as char)
        .collect()
}

#[test]
fn test_menu_prompt_is_shown_at_boot() {
    let runtime = Runtime::new();
    assert_eq!(
        screen_row(&runtime, 0, MENU_PROMPT.len()),
        MENU_PROMPT
    );
}

#[test]
fn test_incomplete_then_complete_start_command() {
    let mut runtime = Runtime::new();

    // "star" + confirm: incomplete match, stays in the menu.
    type_command(&mut runtime, "star");
    runtime.handle_key(Key::Enter);
    assert_eq!(runtime.game().mode(), Mode::Menu);

    // "start" + confirm: transitions and resets the round.
    type_command(&mut runtime, "start");
    runtime.handle_key(Key::Enter);
    assert_eq!(runtime.game().mode(), Mode::Playing);
    assert_eq!(runtime.game().score(), 0);
    assert_eq!(runtime.game().snake().len(), 3);
}

#[test]
fn test_command_beyond_capacity_is_dropped_and_not_echoed() {
    let mut runtime = Runtime::new();
    type_command(&mut runtime, "abcdefghijkl");

    assert_eq!(runtime.game().command().len(), COMMAND_BUFFER_CAP);
    // Echo stopped with the buffer: cursor sits right after the ninth char.
    assert_eq!(runtime.screen().cursor_pos(), (COMMAND_BUFFER_CAP as u16, 1));
    assert_eq!(screen_row(&runtime, 1, 10), "abcdefghi ");
}

#[test]
fn test_full_session_round_trip() {
    let mut runtime = Runtime::new();

    type_command(&mut runtime, "start");
    runtime.handle_key(Key::Enter);
    assert_eq!(runtime.game().mode(), Mode::Playing);

    // Let the game run until the snake hits the east wall.
    while runtime.game().mode() == Mode::Playing {
        runtime.handle_tick();
    }
    assert_eq!(runtime.game().mode(), Mode::GameOver);
    assert_eq!(screen_row(&runtime, 0, 10), "GAME OVER!");

    // Confirm returns to the menu with the prompt back up.
    runtime.handle_key(Key::Enter);
    assert_eq!(runtime.game().mode(), Mode::Menu);
    assert_eq!(
        screen_row(&runtime, 0, MENU_PROMPT.len()),
        MENU_PROMPT
    );

    // And the menu accepts "start" again.
    type_command(&mut runtime, "start");
    runtime.handle_key(Key::Enter);
    assert_eq!(runtime.game().mode(), Mode::Playing);
    assert_eq!(runtime.game().score(), 0);
}

#[test]
fn test_effective_speed_is_timer_rate_over_divisor() {
    let mut runtime = Runtime::new();
    type_command(&mut runtime, "start");
    runtime.handle_key(Key::Enter);

    let start_x = runtime.game().snake().head().x;
    // 3 * SPEED_DIVISOR ticks must advance the snake exactly 3 cells.
    for _ in 0..3 * SPEED_DIVISOR {
        runtime.handle_tick();
    }
    assert_eq!(runtime.game().snake().head().x, start_x + 3);
}

#[test]
fn test_keystroke_rate_does_not_change_game_speed() {
    let mut runtime = Runtime::new();
    type_command(&mut runtime, "start");
    runtime.handle_key(Key::Enter);

    // A burst of direction keys between ticks moves nothing.
    let head = runtime.game().snake().head();
    for _ in 0..50 {
        runtime.handle_key(Key::Char('w'));
        runtime.handle_key(Key::Char('d'));
    }
    assert_eq!(runtime.game().snake().head(), head);

    // The next due step applies the last latched direction once.
    for _ in 0..SPEED_DIVISOR {
        runtime.handle_tick();
    }
    assert_eq!(runtime.game().snake().head().x, head.x + 1);
}
