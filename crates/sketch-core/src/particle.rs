use glam::Vec3;

use crate::random::RandomSource;

/// SoA particle storage for attractor clouds.
///
/// `raw_position[i]` is the accumulated simulation state; `position[i]` is
/// the render-ready projection of that same particle and is only ever
/// derived from it.
pub struct ParticleSet {
    pub count: usize,
    pub raw_position: Vec<Vec3>,
    pub position: Vec<Vec3>,
}

impl ParticleSet {
    /// All particles at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            raw_position: vec![Vec3::ZERO; count],
            position: vec![Vec3::ZERO; count],
        }
    }

    /// Scatter particles uniformly over the unit sphere, writing the same
    /// sample into both buffers.
    pub fn on_unit_sphere<R: RandomSource + ?Sized>(count: usize, rng: &mut R) -> Self {
        let raw_position: Vec<Vec3> = (0..count).map(|_| rng.on_sphere(1.0)).collect();
        Self {
            count,
            position: raw_position.clone(),
            raw_position,
        }
    }

    /// Flat `[x, y, z, x, y, z, ...]` view of the projected positions.
    pub fn position_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }
}
