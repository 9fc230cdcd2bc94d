//! Interactive front end over a seeded random board.

use std::error::Error;

use log::info;
use torus_life::{telemetry, tui, Scenario, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_logging();
    let scenario = Scenario::Soup;
    info!("starting interactive {} scenario", scenario.name());

    let sim = Simulation::new(scenario.board()?).parallel(true);
    tui::run(sim)?;

    Ok(())
}
