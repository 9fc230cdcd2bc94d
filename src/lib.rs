//! # Torus Life
//!
//! Conway's Game of Life on a fixed-size toroidal grid, rendered to a terminal.
//!
//! ## Features
//!
//! * Toroidal (wrap-around) board with row-major storage
//! * Snapshot-based generation step, sequential or data-parallel
//! * Plain ANSI renderer and an interactive `ratatui` front end
//! * Manual line-step and fixed-rate frame pacing
//! * Compiled-in scenarios: glider, pattern menagerie, random soup

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod pacing;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod telemetry;
pub mod tui;

pub use board::{wrap, Board};
pub use config::Scenario;
pub use engine::{step, step_parallel, Changes};
pub use error::{LifeError, Result};
pub use pacing::{Clock, FixedRatePacer, LinePacer, Pace, Pacer, SystemClock};
pub use patterns::Pattern;
pub use render::{AnsiRenderer, Renderer};
pub use rules::Rule;
pub use simulation::{Simulation, Stats};
