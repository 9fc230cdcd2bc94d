//! Fixed-size toroidal board.

use rand::Rng;

use crate::error::{LifeError, Result};
use crate::patterns::Pattern;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Maps any signed coordinate into `[0, dim)`, so the edges of the board meet.
///
/// # Arguments
///
/// * `index` - The coordinate to normalize, possibly negative or `>= dim`
/// * `dim` - The size of the axis; must be non-zero
///
/// # Returns
///
/// The wrapped coordinate.
pub fn wrap(index: isize, dim: usize) -> usize {
    index.rem_euclid(dim as isize) as usize
}

/// The game board: `rows * cols` cells stored row-major, `true` meaning alive.
///
/// Every coordinate handed to the board is wrapped first, so out-of-range
/// access is impossible and the topology is a torus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates a fully dead board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::EmptyBoard`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyBoard { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Creates a board where each cell is alive with probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`; NaN counts as `0`.
    pub fn random<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Result<Self> {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let mut board = Board::new(rows, cols)?;
        for cell in board.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major storage index of a wrapped coordinate.
    pub fn index(&self, row: isize, col: isize) -> usize {
        wrap(row, self.rows) * self.cols + wrap(col, self.cols)
    }

    /// Whether the cell at the wrapped coordinate is alive.
    pub fn get(&self, row: isize, col: isize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Sets the cell at the wrapped coordinate.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Flat view of the cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Counts the number of live neighbors for the cell at `(row, col)`.
    ///
    /// The board is treated as toroidal, meaning the edges wrap around to the
    /// opposite side.
    ///
    /// # Returns
    ///
    /// The number of live neighbors (0-8)
    pub fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(row + dr, col + dc))
            .count() as u8
    }

    /// Counts the total number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// `true` when no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, &alive)| alive.then_some((idx / cols, idx % cols)))
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Stamps a pattern onto the board with its top-left corner at `origin`.
    ///
    /// Cells falling off an edge wrap to the opposite edge.
    pub fn place(&mut self, pattern: &Pattern, origin: (isize, isize)) {
        for &(row, col) in pattern.cells {
            self.set(origin.0 + row as isize, origin.1 + col as isize, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn wrap_maps_into_range() {
        assert_eq!(wrap(0, 10), 0);
        assert_eq!(wrap(9, 10), 9);
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(-11, 10), 9);
        assert_eq!(wrap(23, 10), 3);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Board::new(0, 5),
            Err(LifeError::EmptyBoard { rows: 0, cols: 5 })
        ));
        assert!(Board::new(5, 0).is_err());
    }

    #[test]
    fn index_is_row_major() {
        let board = Board::new(3, 4).unwrap();
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(1, 2), 6);
        assert_eq!(board.index(2, 3), 11);
        assert_eq!(board.index(-1, -1), 11);
        assert_eq!(board.index(3, 4), 0);
    }

    #[test]
    fn set_and_get_wrap() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(-1, 5, true);
        assert!(board.get(3, 1));
        assert_eq!(board.population(), 1);
        assert_eq!(board.alive_cells().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn corner_sees_all_opposite_corners() {
        let mut board = Board::new(5, 5).unwrap();
        board.set(4, 4, true);
        board.set(4, 0, true);
        board.set(0, 4, true);
        assert_eq!(board.alive_neighbors(0, 0), 3);
    }

    #[test]
    fn neighbor_count_excludes_self() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, true);
        assert_eq!(board.alive_neighbors(1, 1), 0);
    }

    #[test]
    fn neighbor_count_never_exceeds_eight() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = Board::random(6, 9, 0.6, &mut rng).unwrap();
            for row in 0..board.rows() {
                for col in 0..board.cols() {
                    assert!(board.alive_neighbors(row, col) <= 8);
                }
            }
        }
    }

    #[test]
    fn full_board_counts_eight() {
        let mut board = Board::new(3, 3).unwrap();
        board.cells_mut().fill(true);
        assert_eq!(board.alive_neighbors(0, 0), 8);
    }

    #[test]
    fn place_wraps_pattern() {
        let mut board = Board::new(5, 5).unwrap();
        board.place(&patterns::BLOCK, (4, 4));
        assert!(board.get(4, 4));
        assert!(board.get(4, 0));
        assert!(board.get(0, 4));
        assert!(board.get(0, 0));
        assert_eq!(board.population(), 4);
    }

    #[test]
    fn random_density_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let full = Board::random(4, 4, 1.5, &mut rng).unwrap();
        assert_eq!(full.population(), 16);
        let empty = Board::random(4, 4, -0.2, &mut rng).unwrap();
        assert!(empty.is_dead());
        let nan = Board::random(4, 4, f64::NAN, &mut rng).unwrap();
        assert!(nan.is_dead());
    }

    #[test]
    fn clear_kills_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::random(8, 8, 0.5, &mut rng).unwrap();
        board.clear();
        assert!(board.is_dead());
    }
}
