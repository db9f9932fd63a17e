//! TerminalRenderer: flushes the text-mode screen to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite cells that
//! changed since the previous flush. The diff is purely an optimization:
//! the screen contents the game painted are what appears, full repaint or
//! not.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::screen::Screen;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush the screen to the terminal.
    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.buf.clear();
        match &self.last {
            None => encode_full_into(screen, &mut self.buf)?,
            Some(prev) => {
                if prev == screen {
                    return Ok(());
                }
                encode_diff_into(prev, screen, &mut self.buf)?;
            }
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(screen),
            None => self.last = Some(screen.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_attr: Option<u8> = None;
    for y in 0..screen.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..screen.width() {
            let cell = screen.get(x, y).unwrap_or_default();
            if current_attr != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current_attr = Some(cell.attr);
            }
            out.queue(Print(cell.glyph as char))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs only) into `out`.
pub fn encode_diff_into(prev: &Screen, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    let mut current_attr: Option<u8> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_attr != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current_attr = Some(cell.attr);
            }
            out.queue(Print(cell.glyph as char))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_attr_into(out: &mut Vec<u8>, attr: u8) -> Result<()> {
    out.queue(SetForegroundColor(vga_color(attr & 0x0F)))?;
    out.queue(SetBackgroundColor(vga_color(attr >> 4)))?;
    Ok(())
}

/// Map one text-mode color nibble to a terminal color.
fn vga_color(nibble: u8) -> Color {
    match nibble & 0x0F {
        0x0 => Color::Black,
        0x1 => Color::DarkBlue,
        0x2 => Color::DarkGreen,
        0x3 => Color::DarkCyan,
        0x4 => Color::DarkRed,
        0x5 => Color::DarkMagenta,
        0x6 => Color::DarkYellow,
        0x7 => Color::Grey,
        0x8 => Color::DarkGrey,
        0x9 => Color::Blue,
        0xA => Color::Green,
        0xB => Color::Cyan,
        0xC => Color::Red,
        0xD => Color::Magenta,
        0xE => Color::Yellow,
        _ => Color::White,
    }
}

fn for_each_changed_run(
    prev: &Screen,
    next: &Screen,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
