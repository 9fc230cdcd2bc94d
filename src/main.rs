//! Interactive Game of Life on a toroidal board.
//!
//! # Controls
//!
//! * Space: Play/Pause the simulation
//! * Enter: Step forward one generation (when paused)
//! * q: Quit the application

use std::error::Error;

use log::info;
use torus_life::{telemetry, tui, Scenario, Simulation};

const SCENARIO: Scenario = Scenario::Menagerie;

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_logging();
    info!("starting interactive {} scenario", SCENARIO.name());

    let sim = Simulation::new(SCENARIO.board()?).parallel(true);
    tui::run(sim)?;

    Ok(())
}
