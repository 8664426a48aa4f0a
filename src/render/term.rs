use std::io::{stdout, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::game::board::{COLS, ROWS};
use crate::game::Coord;

/// Crossterm-backed display.
///
/// Puts the terminal into raw mode on an alternate screen for the
/// lifetime of the value; `close` (or, failing that, `Drop`) restores
/// it. Cells are queued and flushed per call, which is plenty for the
/// handful of cells a tick touches.
pub struct TermDisplay {
    stdout: Stdout,
    restored: bool,
}

impl TermDisplay {
    pub fn new() -> Result<Self> {
        let mut stdout = stdout();
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self {
            stdout,
            restored: false,
        })
    }

    fn print_at(&mut self, pos: Coord, ch: char) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.col as u16, pos.row as u16),
            style::Print(ch)
        )?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.stdout, LeaveAlternateScreen, cursor::Show)
            .context("Failed to leave alternate screen")?;
        Ok(())
    }
}

impl super::Display for TermDisplay {
    fn draw_border(&mut self) -> Result<()> {
        for col in 0..COLS {
            let ch = if col == 0 || col == COLS - 1 { '+' } else { '-' };
            self.print_at(Coord::new(0, col), ch)?;
            self.print_at(Coord::new(ROWS - 1, col), ch)?;
        }
        for row in 1..ROWS - 1 {
            self.print_at(Coord::new(row, 0), '|')?;
            self.print_at(Coord::new(row, COLS - 1), '|')?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&mut self, pos: Coord, glyph: char) -> Result<()> {
        self.print_at(pos, glyph)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn erase_cell(&mut self, pos: Coord) -> Result<()> {
        self.draw_cell(pos, ' ')
    }

    fn draw_status(&mut self, score: u32, delay_ms: u64) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(2, 0),
            style::Print(format!(" Score : {score}  Speed : {delay_ms} ")),
            cursor::MoveTo(27, 0),
            style::Print(" SNAKE ")
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    fn close(&mut self, final_score: u32) -> Result<()> {
        self.restore()?;
        println!("\nScore - {final_score}");
        Ok(())
    }
}

impl Drop for TermDisplay {
    fn drop(&mut self) {
        // Last-ditch restore if close() was never reached
        let _ = self.restore();
    }
}
