//! A single glider, one generation per line of input.

use std::error::Error;
use std::io;

use log::info;
use torus_life::{telemetry, AnsiRenderer, LinePacer, Scenario, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_logging();
    let scenario = Scenario::Glider;
    info!("starting {} scenario, press Enter to step", scenario.name());

    let mut sim = Simulation::new(scenario.board()?);
    let mut renderer = AnsiRenderer::new(io::stdout().lock());
    let mut pacer = LinePacer::new(io::stdin().lock());
    sim.run(&mut renderer, &mut pacer, None)?;

    Ok(())
}
