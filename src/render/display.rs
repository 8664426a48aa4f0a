use anyhow::Result;

use crate::game::Coord;

/// Where the game draws.
///
/// A pure sink: the loop tells it which cells changed and it puts
/// glyphs there. No game rules live behind this trait, which is what
/// lets the loop tests run against a recording stub.
pub trait Display {
    /// Draw the playfield frame once at game start
    fn draw_border(&mut self) -> Result<()>;

    /// Put `glyph` at `pos`
    fn draw_cell(&mut self, pos: Coord, glyph: char) -> Result<()>;

    /// Blank out `pos`
    fn erase_cell(&mut self, pos: Coord) -> Result<()>;

    /// Refresh the header line with the current score and tick delay
    fn draw_status(&mut self, score: u32, delay_ms: u64) -> Result<()>;

    /// Tear down and report the final score
    fn close(&mut self, final_score: u32) -> Result<()>;
}
