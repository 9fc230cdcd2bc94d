//! Error types for torus_life.

use std::io;
use thiserror::Error;

/// Errors surfaced by board construction and terminal output.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A board was requested with a zero-length side.
    #[error("board dimensions must be non-zero, got {rows}x{cols}")]
    EmptyBoard {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Reading input or writing a frame failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
