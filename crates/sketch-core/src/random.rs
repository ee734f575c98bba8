//! Injected randomness.
//!
//! Builders never reach for a global RNG; they take a [`RandomSource`] so a
//! test can hand them a scripted sequence and a host can hand them a seeded
//! generator.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f32) as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Fair coin.
    fn chance(&mut self) -> bool {
        self.next_unit() < 0.5
    }

    /// Uniform point on a sphere of the given radius.
    fn on_sphere(&mut self, radius: f32) -> Vec3 {
        let phi = self.next_unit() * TAU;
        let theta = (self.next_unit() * 2.0 - 1.0).acos();
        Vec3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.sin() * phi.sin(),
            radius * theta.cos(),
        )
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` generator.
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}
