//! Text rendering of the board.

use std::io::Write;

use crate::board::Board;
use crate::error::Result;
use crate::simulation::Stats;

/// Moves the cursor home, clears the screen and the scrollback.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J\x1b[3J";

pub const ALIVE: char = '*';
pub const DEAD: char = '@';

/// Something that can present one frame of the simulation.
pub trait Renderer {
    /// Presents `board` as it stands after `stats.generation` generations.
    fn render(&mut self, board: &Board, stats: &Stats) -> Result<()>;
}

/// Renders the board as one line of text per row, terminated by `'\n'`.
///
/// # Arguments
///
/// * `board` - The board to render
/// * `alive` - Character used for live cells
/// * `dead` - Character used for dead cells
pub fn board_text(board: &Board, alive: char, dead: char) -> String {
    let mut text = String::with_capacity(board.rows() * (board.cols() + 1));
    for row in board.iter_rows() {
        for &cell in row {
            text.push(if cell { alive } else { dead });
        }
        text.push('\n');
    }
    text
}

/// Writes frames straight to a terminal stream using ANSI escape sequences.
pub struct AnsiRenderer<W: Write> {
    out: W,
}

impl<W: Write> AnsiRenderer<W> {
    /// Renders into `out`, usually locked stdout.
    pub fn new(out: W) -> Self {
        AnsiRenderer { out }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, board: &Board, _stats: &Stats) -> Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.write_all(board_text(board, ALIVE, DEAD).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
