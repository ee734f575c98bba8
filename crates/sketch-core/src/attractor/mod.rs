//! Strange-attractor particle clouds.
//!
//! Particles start on the unit sphere and are pushed through a
//! [`VectorField`] with one explicit Euler step per frame. The accumulated
//! state lives in `raw_position`; what gets drawn is that state projected
//! onto a sphere of radius `scale`. Drift from the crude integrator is part
//! of the look and is never corrected.

pub mod field;

pub use field::{FieldFn, VectorField};

use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::AttractorConfig;
use crate::error::{ensure_positive, Result};
use crate::frame::{Animated, Frame};
use crate::particle::ParticleSet;
use crate::random::RandomSource;

/// What to do with a particle whose next position is NaN or infinite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DivergencePolicy {
    /// Store it anyway; the particle leaves the picture.
    #[default]
    Propagate,
    /// Keep the particle at its last finite position.
    Hold,
}

pub struct Attractor {
    pub particles: ParticleSet,
    pub field: VectorField,
    pub timestep: f32,
    pub scale: f32,
    pub divergence: DivergencePolicy,
    steps: u64,
}

impl Attractor {
    pub fn new<R: RandomSource + ?Sized>(config: &AttractorConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let particles = ParticleSet::on_unit_sphere(config.particle_count, rng);
        tracing::debug!(
            field = %config.field,
            particles = config.particle_count,
            timestep = config.timestep,
            "attractor created"
        );
        Ok(Self {
            particles,
            field: config.field,
            timestep: config.timestep,
            scale: config.scale,
            divergence: config.divergence,
            steps: 0,
        })
    }

    /// Advance every particle by one Euler step.
    ///
    /// Returns how many particles were held back by [`DivergencePolicy::Hold`]
    /// (always zero under `Propagate`).
    pub fn step(&mut self) -> usize {
        let held = step_particles(
            &mut self.particles,
            self.field.function(),
            self.timestep,
            self.scale,
            self.divergence,
        );
        self.steps += 1;
        if held > 0 {
            tracing::warn!(field = %self.field, held, step = self.steps, "attractor diverged");
        }
        held
    }

    /// Change the projection radius for every later step.
    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        self.scale = ensure_positive("scale", scale)?;
        Ok(())
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Re-seed every particle on the unit sphere.
    pub fn reinitialize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.particles = ParticleSet::on_unit_sphere(self.particles.count, rng);
        self.steps = 0;
    }
}

impl Animated for Attractor {
    /// The step size is fixed, so frame timing is ignored.
    fn update(&mut self, _frame: &Frame) {
        self.step();
    }

    fn positions(&self) -> &[Vec3] {
        &self.particles.position
    }
}

/// One Euler step over a whole particle set, followed by projection.
///
/// Returns the number of particles held under [`DivergencePolicy::Hold`].
pub fn step_particles(
    particles: &mut ParticleSet,
    field: FieldFn,
    timestep: f32,
    scale: f32,
    policy: DivergencePolicy,
) -> usize {
    let raw = &mut particles.raw_position;
    let out = &mut particles.position;

    #[cfg(feature = "parallel")]
    let held = raw
        .par_iter_mut()
        .zip(out.par_iter_mut())
        .map(|(r, o)| advance(r, o, field, timestep, scale, policy) as usize)
        .sum();

    #[cfg(not(feature = "parallel"))]
    let held = raw
        .iter_mut()
        .zip(out.iter_mut())
        .map(|(r, o)| advance(r, o, field, timestep, scale, policy) as usize)
        .sum();

    held
}

/// Returns `true` when the particle was held.
#[inline]
fn advance(
    raw: &mut Vec3,
    out: &mut Vec3,
    field: FieldFn,
    timestep: f32,
    scale: f32,
    policy: DivergencePolicy,
) -> bool {
    let next = *raw + field(*raw, timestep);
    if policy == DivergencePolicy::Hold && !next.is_finite() {
        *out = project(*raw, scale);
        return true;
    }
    *raw = next;
    *out = project(next, scale);
    false
}

/// Scale `p` onto a sphere of radius `scale`.
///
/// Zero stays zero; NaN and infinite input come out as NaN. The vector is
/// divided by its largest component first so that very large or very small
/// finite input survives the squared length.
#[inline]
pub fn project(p: Vec3, scale: f32) -> Vec3 {
    if !p.is_finite() {
        return Vec3::NAN;
    }
    let m = p.abs().max_element();
    if m == 0.0 {
        return Vec3::ZERO;
    }
    let q = p / m;
    q / q.length() * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    fn blow_up(p: Vec3, _dt: f32) -> Vec3 {
        Vec3::new(f32::INFINITY, 0.0, 0.0) + p
    }

    #[test]
    fn test_project_zero_and_nan() {
        assert_eq!(project(Vec3::ZERO, 2.0), Vec3::ZERO);
        assert!(project(Vec3::new(f32::NAN, 0.0, 0.0), 1.0).is_nan());
        assert!(project(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0).is_nan());
    }

    #[test]
    fn test_propagate_keeps_non_finite() {
        let mut particles = ParticleSet::new(1);
        particles.raw_position[0] = Vec3::ONE;
        let held = step_particles(&mut particles, blow_up, 0.01, 1.0, DivergencePolicy::Propagate);
        assert_eq!(held, 0);
        assert!(!particles.raw_position[0].is_finite());
    }

    #[test]
    fn test_hold_keeps_last_finite_position() {
        let mut particles = ParticleSet::new(2);
        particles.raw_position[0] = Vec3::ONE;
        particles.raw_position[1] = Vec3::new(0.0, 2.0, 0.0);
        let held = step_particles(&mut particles, blow_up, 0.01, 1.5, DivergencePolicy::Hold);
        assert_eq!(held, 2);
        assert_eq!(particles.raw_position[0], Vec3::ONE);
        assert!((particles.position[1] - Vec3::new(0.0, 1.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_step_counts() {
        let mut rng = RngSource::seeded(1);
        let config = AttractorConfig { particle_count: 16, ..AttractorConfig::default() };
        let mut attractor = Attractor::new(&config, &mut rng).expect("valid config");
        attractor.step();
        attractor.update(&Frame::default());
        assert_eq!(attractor.steps(), 2);
        attractor.reinitialize(&mut rng);
        assert_eq!(attractor.steps(), 0);
    }
}
