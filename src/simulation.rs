//! The board together with its running statistics, and the frame loop.

use log::{debug, info};

use crate::board::Board;
use crate::engine::{self, Changes};
use crate::error::Result;
use crate::pacing::{Pace, Pacer};
use crate::render::Renderer;

/// Stores statistics about the simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Current generation number
    pub generation: u64,
    /// Total number of cells created since start
    pub cells_created: u64,
    /// Total number of cells destroyed since start
    pub cells_destroyed: u64,
    /// Current number of living cells
    pub current_population: u64,
}

impl Stats {
    /// Average births per generation so far.
    pub fn birth_rate(&self) -> f64 {
        self.cells_created as f64 / self.generation.max(1) as f64
    }

    /// Average deaths per generation so far.
    pub fn death_rate(&self) -> f64 {
        self.cells_destroyed as f64 / self.generation.max(1) as f64
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    stats: Stats,
    parallel: bool,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        let stats = Stats {
            current_population: board.population() as u64,
            ..Stats::default()
        };
        Simulation {
            board,
            stats,
            parallel: false,
        }
    }

    /// Selects the rayon-backed step; the resulting boards are identical.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Advances the board one generation and updates the statistics.
    pub fn advance(&mut self) -> Changes {
        let changes = if self.parallel {
            engine::step_parallel(&mut self.board)
        } else {
            engine::step(&mut self.board)
        };

        self.stats.generation += 1;
        self.stats.cells_created += changes.born;
        self.stats.cells_destroyed += changes.died;
        self.stats.current_population = self.board.population() as u64;
        debug!(
            "generation {}: +{} -{} = {}",
            self.stats.generation, changes.born, changes.died, self.stats.current_population
        );
        changes
    }

    /// Runs the render, step, wait loop.
    ///
    /// Each frame renders the current board, advances one generation and then
    /// hands control to the pacer. The loop ends after `limit` generations, or
    /// when the pacer says to stop; with no limit only the pacer can end it.
    ///
    /// # Returns
    ///
    /// The number of generations advanced.
    ///
    /// # Errors
    ///
    /// Propagates rendering and pacing I/O failures.
    pub fn run<R, P>(&mut self, renderer: &mut R, pacer: &mut P, limit: Option<u64>) -> Result<u64>
    where
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        let mut advanced = 0;
        loop {
            if limit.is_some_and(|limit| advanced >= limit) {
                break;
            }
            pacer.begin_frame();
            renderer.render(&self.board, &self.stats)?;
            self.advance();
            advanced += 1;

            if limit.is_some_and(|limit| advanced >= limit) {
                break;
            }
            if pacer.wait()? == Pace::Stop {
                info!("pacer stopped the simulation");
                break;
            }
        }
        info!(
            "stopped at generation {} with {} live cells",
            self.stats.generation, self.stats.current_population
        );
        Ok(advanced)
    }
}
