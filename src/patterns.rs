//! Named Life patterns, as cell offsets from their top-left corner.

/// A named arrangement of live cells.
pub struct Pattern {
    pub name: &'static str,
    /// `(row, col)` offsets of the live cells.
    pub cells: &'static [(usize, usize)],
}

/// Travels one cell down and one cell right every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
};

/// Eater 1: a still life that destroys gliders hitting it.
pub const EATER: Pattern = Pattern {
    name: "Eater",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 2), (3, 2), (3, 3)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period 2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Gosper glider gun, emitting a glider every 30 generations.
#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};
