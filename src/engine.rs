//! Generation step.
//!
//! Both steps copy the board first and evaluate every cell against that copy,
//! so every transition in one pass reads the same generation.

use std::ops::{Add, AddAssign};

use rayon::prelude::*;

use crate::board::Board;
use crate::rules::{self, Rule};

/// Cells that changed state during one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// Dead cells that became alive.
    pub born: u64,
    /// Live cells that died.
    pub died: u64,
}

impl Add for Changes {
    type Output = Changes;

    fn add(self, rhs: Changes) -> Changes {
        Changes {
            born: self.born + rhs.born,
            died: self.died + rhs.died,
        }
    }
}

impl AddAssign for Changes {
    fn add_assign(&mut self, rhs: Changes) {
        *self = *self + rhs;
    }
}

/// Advances `board` one generation, visiting cells in row-major order.
pub fn step(board: &mut Board) -> Changes {
    let len = board.cells().len();
    update_cells(board, 0..len)
}

/// Advances `board` one generation, computing rows in parallel.
///
/// Produces exactly the same board as [`step`].
pub fn step_parallel(board: &mut Board) -> Changes {
    let snapshot = board.clone();
    let cols = snapshot.cols();
    board
        .cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .map(|(row, out)| {
            let mut changes = Changes::default();
            for (col, cell) in out.iter_mut().enumerate() {
                changes += apply(cell, &snapshot, row, col);
            }
            changes
        })
        .reduce(Changes::default, |a, b| a + b)
}

/// Updates the cells at the given storage indices from a snapshot taken
/// before any of them is written.
fn update_cells(board: &mut Board, order: impl IntoIterator<Item = usize>) -> Changes {
    let snapshot = board.clone();
    let cols = snapshot.cols();
    let cells = board.cells_mut();
    let mut changes = Changes::default();
    for idx in order {
        changes += apply(&mut cells[idx], &snapshot, idx / cols, idx % cols);
    }
    changes
}

fn apply(cell: &mut bool, snapshot: &Board, row: usize, col: usize) -> Changes {
    let alive = snapshot.cells()[row * snapshot.cols() + col];
    let neighbors = snapshot.alive_neighbors(row, col);
    let mut changes = Changes::default();
    match rules::evaluate(alive, neighbors) {
        Some(rule @ (Rule::Underpopulation | Rule::Overpopulation)) => {
            *cell = rule.outcome();
            changes.died += 1;
        }
        Some(Rule::Birth) => {
            *cell = true;
            changes.born += 1;
        }
        Some(Rule::Survival) => *cell = true,
        None => {}
    }
    changes
}
