//! View functions: paint the game into the screen.
//!
//! Pure (no I/O); everything here can be asserted on in unit tests. The
//! field repaint is a full repaint of the playfield interior every step —
//! damage tracking lives in the renderer, not here.

use crate::core::Game;
use crate::screen::Screen;
use crate::types::{
    ATTR_BLANK, ATTR_BODY, ATTR_BORDER, ATTR_FOOD, ATTR_HEAD, GAME_HEIGHT, GAME_WIDTH,
    GAME_OVER_BANNER, GAME_OVER_HINT, GLYPH_BLANK, GLYPH_BODY, GLYPH_BORDER, GLYPH_FOOD,
    GLYPH_HEAD, MENU_PROMPT, SCORE_LABEL, SCORE_ROW,
};

/// Clear the screen and show the menu prompt.
pub fn draw_menu_prompt(screen: &mut Screen) {
    screen.clear();
    screen.print(MENU_PROMPT);
    screen.newline();
}

/// Draw the `#` ring around the playfield.
pub fn draw_border(screen: &mut Screen) {
    let right = (GAME_WIDTH + 1) as u16;
    let bottom = (GAME_HEIGHT + 1) as u16;
    for x in 0..=right {
        screen.set_cell(x, 0, GLYPH_BORDER, ATTR_BORDER);
        screen.set_cell(x, bottom, GLYPH_BORDER, ATTR_BORDER);
    }
    for y in 0..=bottom {
        screen.set_cell(0, y, GLYPH_BORDER, ATTR_BORDER);
        screen.set_cell(right, y, GLYPH_BORDER, ATTR_BORDER);
    }
}

/// Repaint the playfield interior: blank cells, food, snake, score.
///
/// The head gets a distinct glyph and color from the rest of the body.
pub fn draw_field(screen: &mut Screen, game: &Game) {
    for y in 1..=GAME_HEIGHT as u16 {
        for x in 1..=GAME_WIDTH as u16 {
            screen.set_cell(x, y, GLYPH_BLANK, ATTR_BLANK);
        }
    }

    let food = game.food();
    screen.set_cell(food.x as u16, food.y as u16, GLYPH_FOOD, ATTR_FOOD);

    for (i, seg) in game.snake().body().iter().enumerate() {
        let (glyph, attr) = if i == 0 {
            (GLYPH_HEAD, ATTR_HEAD)
        } else {
            (GLYPH_BODY, ATTR_BODY)
        };
        screen.set_cell(seg.x as u16, seg.y as u16, glyph, attr);
    }

    draw_score(screen, game.score());
}

/// Clear the screen and show the end-of-game banner.
pub fn draw_game_over(screen: &mut Screen) {
    screen.clear();
    screen.print(GAME_OVER_BANNER);
    screen.newline();
    screen.print(GAME_OVER_HINT);
}

/// Print `Score: N` under the playfield.
///
/// The decimal text is built by hand: least-significant digits are pushed
/// onto a small stack and emitted in reverse, with an explicit case for a
/// zero score.
fn draw_score(screen: &mut Screen, score: u32) {
    screen.set_cursor(0, SCORE_ROW);
    screen.print(SCORE_LABEL);

    let mut digits = [0u8; 10];
    let mut n = 0;
    let mut value = score;
    if value == 0 {
        digits[0] = b'0';
        n = 1;
    } else {
        while value > 0 {
            digits[n] = b'0' + (value % 10) as u8;
            value /= 10;
            n += 1;
        }
    }
    while n > 0 {
        n -= 1;
        screen.put_char(digits[n]);
    }
}
