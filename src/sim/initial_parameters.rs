use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::{
    body::Role,
    units::{Float, Vector, AU, G, KM},
};

pub(crate) type Rgb = [u8; 3];

pub(crate) const WHITE: Rgb = [255, 255, 255];
pub(crate) const YELLOW: Rgb = [255, 255, 0];
pub(crate) const BLUE: Rgb = [100, 149, 237];
pub(crate) const RED: Rgb = [188, 39, 50];
pub(crate) const DARK_GREY: Rgb = [80, 78, 81];

pub(crate) const SUN_MASS: Float = 1.98882e30;
pub(crate) const EARTH_MASS: Float = 5.9742e24;

/// Starting state of one body. Color and radius are only read by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BodyDefinition {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) position: Vector,
    pub(crate) velocity: Vector,
    pub(crate) mass: Float,
    pub(crate) color: Rgb,
    pub(crate) display_radius: f32,
}

impl BodyDefinition {
    pub(crate) fn new(name: impl Into<String>, role: Role, position: Vector, mass: Float) -> Self {
        Self {
            name: name.into(),
            role,
            position,
            velocity: [0., 0.],
            mass,
            color: WHITE,
            display_radius: 8.,
        }
    }

    pub(crate) fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub(crate) fn with_appearance(mut self, color: Rgb, display_radius: f32) -> Self {
        self.color = color;
        self.display_radius = display_radius;
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct InitialParameters {
    pub(crate) bodies: Vec<BodyDefinition>,
}

/// The Sun with Mercury, Venus, Earth and Mars at their initial conjunctions.
impl Default for InitialParameters {
    fn default() -> Self {
        Self {
            bodies: vec![
                BodyDefinition::new("Sun", Role::Anchor, [0., 0.], SUN_MASS)
                    .with_appearance(YELLOW, 30.),
                BodyDefinition::new("Mercury", Role::Orbiting, [0.387 * AU, 0.], 3.30e23)
                    .with_velocity([0., -47.4 * KM])
                    .with_appearance(DARK_GREY, 8.),
                BodyDefinition::new("Venus", Role::Orbiting, [0.723 * AU, 0.], 4.8685e24)
                    .with_velocity([0., -35.2 * KM])
                    .with_appearance(WHITE, 14.),
                BodyDefinition::new("Earth", Role::Orbiting, [-AU, 0.], EARTH_MASS)
                    .with_velocity([0., 29.783 * KM])
                    .with_appearance(BLUE, 16.),
                BodyDefinition::new("Mars", Role::Orbiting, [-1.524 * AU, 0.], 6.39e23)
                    .with_velocity([0., 24.077 * KM])
                    .with_appearance(RED, 12.),
            ],
        }
    }
}

pub(crate) fn circular_velocity(central_mass: Float, distance: Float) -> Float {
    (G * central_mass / distance).sqrt()
}

pub(crate) struct RandomSystemParameters {
    pub(crate) body_count: u32,
    pub(crate) stellar_mass: Float,
    pub(crate) min_orbit: Float,
    pub(crate) max_orbit: Float,
    pub(crate) mean_planet_mass: Float,
    pub(crate) velocity_variance: Float,
}

impl Default for RandomSystemParameters {
    fn default() -> Self {
        Self {
            body_count: 4,
            stellar_mass: SUN_MASS,
            min_orbit: 0.3 * AU,
            max_orbit: 1.6 * AU,
            mean_planet_mass: EARTH_MASS,
            velocity_variance: 0.02,
        }
    }
}

const PLANET_COLORS: [Rgb; 4] = [DARK_GREY, WHITE, BLUE, RED];

impl InitialParameters {
    /// An anchor at the origin and one planet on an exactly circular orbit.
    pub(crate) fn two_body_circular(distance: Float) -> Self {
        let velocity = circular_velocity(SUN_MASS, distance);
        Self {
            bodies: vec![
                BodyDefinition::new("Sun", Role::Anchor, [0., 0.], SUN_MASS)
                    .with_appearance(YELLOW, 30.),
                BodyDefinition::new("Planet", Role::Orbiting, [distance, 0.], EARTH_MASS)
                    .with_velocity([0., velocity])
                    .with_appearance(BLUE, 16.),
            ],
        }
    }

    /// An anchor plus planets on roughly circular orbits, perturbed by a
    /// relative velocity spread of `velocity_variance`.
    pub(crate) fn random<R: Rng>(params: &RandomSystemParameters, rng: &mut R) -> Self {
        let mut bodies = vec![BodyDefinition::new(
            "Star",
            Role::Anchor,
            [0., 0.],
            params.stellar_mass,
        )
        .with_appearance(YELLOW, 30.)];

        let radii = Uniform::new_inclusive(params.min_orbit, params.max_orbit);
        let angles = Uniform::new(0., std::f64::consts::TAU);
        let masses: Normal<Float> = Normal::new(1., 0.3).unwrap();
        let perturbation = Normal::new(0., params.velocity_variance.max(0.)).unwrap();

        for i in 0..params.body_count {
            let radius = radii.sample(rng);
            let angle: Float = angles.sample(rng);
            let mass = params.mean_planet_mass * masses.sample(rng).abs().max(0.05);
            let speed =
                circular_velocity(params.stellar_mass, radius) * (1. + perturbation.sample(rng));
            bodies.push(
                BodyDefinition::new(
                    format!("Planet {}", i + 1),
                    Role::Orbiting,
                    [radius * angle.cos(), radius * angle.sin()],
                    mass,
                )
                .with_velocity([-speed * angle.sin(), speed * angle.cos()])
                .with_appearance(PLANET_COLORS[i as usize % PLANET_COLORS.len()], 10.),
            );
        }
        Self { bodies }
    }
}
