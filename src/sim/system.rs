use crate::sim::{
    body::Body,
    error::SimulationError,
    initial_parameters::InitialParameters,
    units::{Float, Vector, DIMENSIONALITY, TIME_STEP},
};

/// How a full pass over the bodies sees the positions of its neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum StepSemantics {
    /// Bodies are advanced one after the other, each one seeing the already
    /// advanced positions of the bodies before it in the same pass.
    #[default]
    Sequential,
    /// All forces are evaluated on the pre-step state, then applied.
    Simultaneous,
}

/// Net pull on one body from every other body in the set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NetForce {
    pub(crate) force: Vector,
    pub(crate) distance_to_anchor: Float,
}

pub(crate) fn net_force(bodies: &[Body], index: usize) -> Result<NetForce, SimulationError> {
    let body = &bodies[index];
    let mut force = [0.; DIMENSIONALITY];
    let mut distance_to_anchor = 0.;
    for other in bodies.iter() {
        if other == body {
            continue;
        }
        let attraction = body.attraction(other)?;
        if other.is_anchor() {
            distance_to_anchor = attraction.distance;
        }
        for k in 0..DIMENSIONALITY {
            force[k] += attraction.force[k];
        }
    }
    Ok(NetForce {
        force,
        distance_to_anchor,
    })
}

/// Semi-implicit Euler: velocity from the force first, then position from the new velocity.
fn apply_net_force(body: &mut Body, net: NetForce, time_step: Float) {
    let mass = body.mass();
    for k in 0..DIMENSIONALITY {
        body.velocity[k] += net.force[k] / mass * time_step;
    }
    for k in 0..DIMENSIONALITY {
        body.position[k] += body.velocity[k] * time_step;
    }
    body.distance_to_anchor = net.distance_to_anchor;
    body.trail.record(body.position);
}

/// Advances `bodies[index]` by one time step against the current state of all others.
///
/// Only `bodies[index]` is mutated, and not at all if the force cannot be computed.
pub(crate) fn advance_one_step(bodies: &mut [Body], index: usize) -> Result<(), SimulationError> {
    let net = net_force(bodies, index)?;
    apply_net_force(&mut bodies[index], net, TIME_STEP);
    Ok(())
}

#[derive(Clone, Debug)]
pub(crate) struct StellarSystem {
    pub(crate) steps: u64,
    pub(crate) bodies: Vec<Body>,
    pub(crate) semantics: StepSemantics,
}

impl StellarSystem {
    pub(crate) fn new(
        params: &InitialParameters,
        semantics: StepSemantics,
        trail_capacity: Option<usize>,
    ) -> Result<StellarSystem, SimulationError> {
        let bodies = params
            .bodies
            .iter()
            .enumerate()
            .map(|(i, definition)| Body::new(i as u32, definition, trail_capacity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StellarSystem {
            steps: 0,
            bodies,
            semantics,
        })
    }

    pub(crate) fn elapsed_time(&self) -> Float {
        self.steps as Float * TIME_STEP
    }

    /// Advances every body by one time step.
    ///
    /// On error `steps` is left unchanged, but in a sequential pass the bodies
    /// before the failing one keep their advanced state and trail point.
    pub(crate) fn step(&mut self) -> Result<(), SimulationError> {
        match self.semantics {
            StepSemantics::Sequential => {
                for i in 0..self.bodies.len() {
                    advance_one_step(&mut self.bodies, i)?;
                }
            }
            StepSemantics::Simultaneous => {
                let forces = (0..self.bodies.len())
                    .map(|i| net_force(&self.bodies, i))
                    .collect::<Result<Vec<_>, _>>()?;
                for (body, net) in self.bodies.iter_mut().zip(forces) {
                    apply_net_force(body, net, TIME_STEP);
                }
            }
        }
        self.steps += 1;
        Ok(())
    }

    pub(crate) fn evolve(&mut self, steps: u64) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    pub(crate) fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_anchor())
    }

    pub(crate) fn total_kinetic_energy(&self) -> Float {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub(crate) fn total_potential_energy(&self) -> Result<Float, SimulationError> {
        let mut energy = 0.;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                energy += self.bodies[i].potential_energy_with(&self.bodies[j])?;
            }
        }
        Ok(energy)
    }

    pub(crate) fn total_energy(&self) -> Result<Float, SimulationError> {
        Ok(self.total_kinetic_energy() + self.total_potential_energy()?)
    }

    pub(crate) fn total_momentum(&self) -> Vector {
        let mut momentum = [0.; DIMENSIONALITY];
        for body in self.bodies.iter() {
            let p = body.momentum();
            for k in 0..DIMENSIONALITY {
                momentum[k] += p[k];
            }
        }
        momentum
    }
}

/// Energy change relative to the starting energy, if the starting energy is nonzero.
pub(crate) fn relative_energy_drift(initial: Float, current: Float) -> Option<Float> {
    if initial == 0. {
        None
    } else {
        Some((current - initial) / initial.abs())
    }
}
