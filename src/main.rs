use clap::Parser;
use config::Config;
use gui::label::format_distance_km;
use sim::{
    error::SimulationError,
    system::{relative_energy_drift, StellarSystem},
    units::{AU, TIME_STEP},
};

mod config;
mod gui;
mod sim;

fn run_headless(system: &mut StellarSystem, steps: u64) -> Result<(), SimulationError> {
    let initial_energy = system.total_energy()?;
    system.evolve(steps)?;
    let energy = system.total_energy()?;

    println!(
        "{} steps ({:.1} days simulated, {:?})",
        system.steps,
        system.elapsed_time() / TIME_STEP,
        system.semantics
    );
    for body in system.bodies.iter() {
        println!(
            "{:>10}: x = {:+.4} AU, y = {:+.4} AU, to anchor {}, {} trail points",
            body.name,
            body.position[0] / AU,
            body.position[1] / AU,
            format_distance_km(body.distance_to_anchor),
            body.trail.len()
        );
    }
    if let Some(anchor) = system.anchor() {
        println!("Distances measured to {}", anchor.name);
    }
    let [px, py] = system.total_momentum();
    println!("Total momentum: ({:.4e}, {:.4e}) kg m/s", px, py);
    if let Some(drift) = relative_energy_drift(initial_energy, energy) {
        println!("Relative energy drift: {:.3e}", drift);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let params = config.initial_parameters();
    let mut system = StellarSystem::new(
        &params,
        config.semantics.into(),
        config.trail_capacity(),
    )?;

    if config.headless {
        run_headless(&mut system, config.steps)?;
        return Ok(());
    }
    gui::run(system, &params)?;
    Ok(())
}
