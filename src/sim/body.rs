use crate::sim::{
    error::SimulationError,
    initial_parameters::BodyDefinition,
    trail::Trail,
    units::{Float, Vector, DIMENSIONALITY, G},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// The gravitational center; other bodies report their distance to it.
    Anchor,
    Orbiting,
}

/// Force exerted on one body by another, together with their separation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Attraction {
    pub(crate) force: Vector,
    pub(crate) distance: Float,
}

#[derive(Clone, Debug)]
pub(crate) struct Body {
    pub(crate) index: u32,
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) position: Vector,
    pub(crate) velocity: Vector,
    pub(crate) distance_to_anchor: Float,
    pub(crate) trail: Trail,
    mass: Float,
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Body {
    pub(crate) fn new(
        index: u32,
        definition: &BodyDefinition,
        trail_capacity: Option<usize>,
    ) -> Result<Body, SimulationError> {
        if !(definition.mass.is_finite() && definition.mass > 0.) {
            return Err(SimulationError::NonPositiveMass {
                name: definition.name.clone(),
                mass: definition.mass,
            });
        }
        Ok(Body {
            index,
            name: definition.name.clone(),
            role: definition.role,
            position: definition.position,
            velocity: definition.velocity,
            distance_to_anchor: 0.,
            trail: Trail::with_capacity(trail_capacity),
            mass: definition.mass,
        })
    }

    pub(crate) fn mass(&self) -> Float {
        self.mass
    }

    pub(crate) fn is_anchor(&self) -> bool {
        self.role == Role::Anchor
    }

    fn separation(&self, other: &Self) -> Vector {
        let mut r = [0.; DIMENSIONALITY];
        for i in 0..DIMENSIONALITY {
            r[i] = other.position[i] - self.position[i];
        }
        r
    }

    pub(crate) fn distance_to(&self, other: &Self) -> Float {
        let r = self.separation(other);
        r.iter().map(|x| x * x).sum::<Float>().sqrt()
    }

    fn degenerate_distance(&self, other: &Self) -> SimulationError {
        SimulationError::DegenerateDistance {
            first: self.index,
            second: other.index,
        }
    }

    /// Inverse-square pull of `other` on `self`, pointing from `self` towards `other`.
    ///
    /// Fails when the separation is too small for the force to be representable.
    pub(crate) fn attraction(&self, other: &Self) -> Result<Attraction, SimulationError> {
        let [dx, dy] = self.separation(other);
        let r_squared = dx * dx + dy * dy;
        if r_squared == 0. {
            return Err(self.degenerate_distance(other));
        }

        let distance = r_squared.sqrt();
        let magnitude = G * self.mass * other.mass / (distance * distance);
        if !magnitude.is_finite() {
            return Err(self.degenerate_distance(other));
        }
        let theta = dy.atan2(dx);
        Ok(Attraction {
            force: [theta.cos() * magnitude, theta.sin() * magnitude],
            distance,
        })
    }

    pub(crate) fn kinetic_energy(&self) -> Float {
        let speed_squared = self.velocity.iter().map(|x| x * x).sum::<Float>();
        0.5 * self.mass * speed_squared
    }

    pub(crate) fn potential_energy_with(&self, other: &Self) -> Result<Float, SimulationError> {
        let distance = self.distance_to(other);
        let energy = -G * self.mass * other.mass / distance;
        if distance == 0. || !energy.is_finite() {
            return Err(self.degenerate_distance(other));
        }
        Ok(energy)
    }

    pub(crate) fn momentum(&self) -> Vector {
        [self.velocity[0] * self.mass, self.velocity[1] * self.mass]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::units::AU;
    use approx::assert_relative_eq;

    fn body(index: u32, role: Role, position: Vector, mass: Float) -> Body {
        let definition = BodyDefinition::new(format!("body {}", index), role, position, mass);
        Body::new(index, &definition, None).unwrap()
    }

    #[test]
    fn attraction_is_antisymmetric() {
        let body1 = body(1, Role::Orbiting, [0., 0.], 5.9742e24);
        let body2 = body(2, Role::Orbiting, [0.3 * AU, -0.7 * AU], 6.39e23);

        let f_12 = body1.attraction(&body2).unwrap();
        let f_21 = body2.attraction(&body1).unwrap();
        println!("Force on body 1:\n{:?}", f_12);
        println!("Force on body 2:\n{:?}", f_21);

        assert_relative_eq!(f_12.force[0], -f_21.force[0], max_relative = 1e-9);
        assert_relative_eq!(f_12.force[1], -f_21.force[1], max_relative = 1e-9);
        assert_relative_eq!(f_12.distance, f_21.distance);
    }

    #[test]
    fn attraction_follows_inverse_square_law() {
        let sun = body(0, Role::Anchor, [0., 0.], 1.98882e30);
        let earth = body(1, Role::Orbiting, [AU, 0.], 5.9742e24);

        let attraction = earth.attraction(&sun).unwrap();
        let expected = G * 1.98882e30 * 5.9742e24 / (AU * AU);

        assert_relative_eq!(attraction.force[0], -expected, max_relative = 1e-12);
        assert!(attraction.force[1].abs() < 1e-9 * expected);
        assert_relative_eq!(attraction.distance, AU);
    }

    #[test]
    fn attraction_points_towards_other_body() {
        let body1 = body(1, Role::Orbiting, [1., 1.], 1e10);
        let body2 = body(2, Role::Orbiting, [-2., 5.], 1e10);

        let f = body1.attraction(&body2).unwrap().force;

        assert!(f[0] < 0.);
        assert!(f[1] > 0.);
        assert_relative_eq!(f[1] / f[0], 4. / -3., max_relative = 1e-12);
    }

    #[test]
    fn coincident_bodies_raise_degenerate_distance() {
        let body1 = body(1, Role::Orbiting, [AU, AU], 1.);
        let body2 = body(2, Role::Orbiting, [AU, AU], 1.);

        let result = body1.attraction(&body2);

        assert_eq!(
            result,
            Err(SimulationError::DegenerateDistance {
                first: 1,
                second: 2
            })
        );
        assert!(body1.potential_energy_with(&body2).is_err());
    }

    #[test]
    fn nearly_coincident_bodies_raise_degenerate_distance() {
        let body1 = body(1, Role::Orbiting, [0., 0.], 1.);
        let body2 = body(2, Role::Orbiting, [1e-160, 0.], 1.);

        let result = body1.attraction(&body2);
        println!("{:?}", result);

        assert_eq!(
            result,
            Err(SimulationError::DegenerateDistance {
                first: 1,
                second: 2
            })
        );
        assert!(body2.attraction(&body1).is_err());
    }

    #[test]
    fn potential_energy_of_nearly_coincident_bodies_is_rejected() {
        let body1 = body(1, Role::Orbiting, [0., 0.], 1e30);
        let body2 = body(2, Role::Orbiting, [0., 1e-300], 1e30);

        assert!(body1.potential_energy_with(&body2).is_err());
    }

    #[test]
    fn close_but_representable_bodies_attract_finitely() {
        let body1 = body(1, Role::Orbiting, [0., 0.], 1.);
        let body2 = body(2, Role::Orbiting, [1e-100, 0.], 1.);

        let attraction = body1.attraction(&body2).unwrap();

        assert!(attraction.force.iter().all(|f| f.is_finite()));
        assert!(attraction.force[0] > 0.);
    }

    #[test]
    fn identity_is_by_index_not_by_state() {
        let body1 = body(1, Role::Orbiting, [0., 0.], 1.);
        let body2 = body(2, Role::Orbiting, [0., 0.], 1.);
        let body1_copy = body(1, Role::Orbiting, [5., 5.], 3.);

        assert!(body1 != body2);
        assert!(body1 == body1_copy);
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        for mass in [0., -1., Float::NAN] {
            let definition = BodyDefinition::new("void", Role::Orbiting, [0., 0.], mass);
            let result = Body::new(0, &definition, None);
            assert!(matches!(
                result,
                Err(SimulationError::NonPositiveMass { .. })
            ));
        }
    }

    #[test]
    fn energies_of_a_simple_pair() {
        let mut body1 = body(1, Role::Orbiting, [0., 0.], 2.);
        body1.velocity = [3., 4.];
        let body2 = body(2, Role::Orbiting, [0., 2.], 5.);

        assert_relative_eq!(body1.kinetic_energy(), 25.);
        assert_relative_eq!(body1.potential_energy_with(&body2).unwrap(), -G * 5.);
        assert_eq!(body1.momentum(), [6., 8.]);
    }
}
