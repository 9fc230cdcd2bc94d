//! Glider gun, gliders and an eater, animated at a fixed frame rate.

use std::error::Error;
use std::io;

use log::info;
use torus_life::{telemetry, AnsiRenderer, FixedRatePacer, Scenario, Simulation};

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init_logging();
    let scenario = Scenario::Menagerie;
    let mut pacer = FixedRatePacer::system();
    info!(
        "starting {} scenario at {:?} per frame",
        scenario.name(),
        pacer.interval()
    );

    let mut sim = Simulation::new(scenario.board()?);
    let mut renderer = AnsiRenderer::new(io::stdout().lock());
    sim.run(&mut renderer, &mut pacer, None)?;

    Ok(())
}
