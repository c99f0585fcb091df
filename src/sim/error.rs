use std::{error::Error, fmt::Display};

use super::units::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SimulationError {
    /// Two bodies sit on the same point, so the force between them is undefined.
    DegenerateDistance { first: u32, second: u32 },
    NonPositiveMass { name: String, mass: Float },
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateDistance { first, second } => write!(
                f,
                "bodies {} and {} coincide, gravitational force is undefined",
                first, second
            ),
            Self::NonPositiveMass { name, mass } => {
                write!(f, "body '{}' has non-positive mass {} kg", name, mass)
            }
        }
    }
}

impl Error for SimulationError {}
