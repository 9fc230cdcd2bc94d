//! Compiled-in configuration: board sizes, timing and starting scenarios.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use crate::board::Board;
use crate::error::Result;
use crate::patterns::{self, Pattern};

/// Time allotted to one frame when pacing at a fixed rate (10 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Probability of a cell starting alive in the random soup.
pub const SOUP_DENSITY: f64 = 0.3;
pub const SOUP_SEED: u64 = 0x5EED_11FE;

/// Share of the terminal width given to the grid panel in the TUI.
pub const GRID_PANEL_PERCENT: u16 = 75;

/// A fixed starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// A single glider on a 20x40 board, stepped by hand.
    Glider,
    /// Glider gun, gliders and an eater on a 32x80 board, at a fixed rate.
    Menagerie,
    /// Random cells on a 40x80 board, shown in the interactive front end.
    Soup,
}

const GLIDER_LAYOUT: &[(&Pattern, (isize, isize))] = &[(&patterns::GLIDER, (9, 7))];

const MENAGERIE_LAYOUT: &[(&Pattern, (isize, isize))] = &[
    (&patterns::GOSPER_GLIDER_GUN, (1, 1)),
    (&patterns::GLIDER, (12, 50)),
    (&patterns::GLIDER, (20, 4)),
    (&patterns::EATER, (24, 60)),
];

impl Scenario {
    /// Board dimensions as `(rows, cols)`.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Scenario::Glider => (20, 40),
            Scenario::Menagerie => (32, 80),
            Scenario::Soup => (40, 80),
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Glider => "glider",
            Scenario::Menagerie => "menagerie",
            Scenario::Soup => "soup",
        }
    }

    /// Patterns stamped onto the empty board, with their origins.
    pub fn layout(self) -> &'static [(&'static Pattern, (isize, isize))] {
        match self {
            Scenario::Glider => GLIDER_LAYOUT,
            Scenario::Menagerie => MENAGERIE_LAYOUT,
            Scenario::Soup => &[],
        }
    }

    /// Builds the starting board.
    pub fn board(self) -> Result<Board> {
        let (rows, cols) = self.dimensions();
        if self == Scenario::Soup {
            let mut rng = StdRng::seed_from_u64(SOUP_SEED);
            return Board::random(rows, cols, SOUP_DENSITY, &mut rng);
        }
        let mut board = Board::new(rows, cols)?;
        for (pattern, origin) in self.layout() {
            board.place(pattern, *origin);
        }
        Ok(board)
    }
}
