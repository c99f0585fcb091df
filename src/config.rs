use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use crate::sim::{
    initial_parameters::{InitialParameters, RandomSystemParameters},
    system::StepSemantics,
    units::AU,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Scenario {
    /// Sun, Mercury, Venus, Earth and Mars.
    Reference,
    /// The Sun and one planet on a circular orbit at 1 AU.
    TwoBody,
    /// A star with randomly placed planets.
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Semantics {
    Sequential,
    Simultaneous,
}

impl From<Semantics> for StepSemantics {
    fn from(semantics: Semantics) -> Self {
        match semantics {
            Semantics::Sequential => StepSemantics::Sequential,
            Semantics::Simultaneous => StepSemantics::Simultaneous,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "planetary_orbits", about = "Newtonian orbits of a small planetary system")]
pub(crate) struct Config {
    #[arg(long, value_enum, default_value_t = Scenario::Reference)]
    pub(crate) scenario: Scenario,

    /// Whether bodies advanced earlier in a pass affect later ones.
    #[arg(long, value_enum, default_value_t = Semantics::Sequential)]
    pub(crate) semantics: Semantics,

    /// Keep at most this many trail points per body; 0 keeps all of them.
    #[arg(long, default_value_t = 0)]
    pub(crate) trail_capacity: usize,

    /// Number of planets in the random scenario.
    #[arg(long, default_value_t = 4)]
    pub(crate) bodies: u32,

    /// Seed of the random scenario.
    #[arg(long, default_value_t = 0)]
    pub(crate) seed: u64,

    /// Run without a window and print a summary.
    #[arg(long)]
    pub(crate) headless: bool,

    /// Number of one-day steps in headless mode.
    #[arg(long, default_value_t = 365)]
    pub(crate) steps: u64,
}

impl Config {
    pub(crate) fn initial_parameters(&self) -> InitialParameters {
        match self.scenario {
            Scenario::Reference => InitialParameters::default(),
            Scenario::TwoBody => InitialParameters::two_body_circular(AU),
            Scenario::Random => {
                let params = RandomSystemParameters {
                    body_count: self.bodies,
                    ..Default::default()
                };
                InitialParameters::random(&params, &mut StdRng::seed_from_u64(self.seed))
            }
        }
    }

    pub(crate) fn trail_capacity(&self) -> Option<usize> {
        Some(self.trail_capacity).filter(|c| *c > 0)
    }
}
