//! Square pyramids whose apexes lean along a swirling field.
//!
//! Pyramids are y-up with their base corner at the local origin; the apex
//! sits above the base centre until [`Pyramid::lean_apex`] swings it around.

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use glam::Vec3;

use crate::config::PyramidConfig;
use crate::error::{ensure_positive, Result};
use crate::frame::{Animated, Frame};
use crate::math::{map_range, noise2};
use crate::mesh::MeshGeometry;

pub const PYRAMID_TRIANGLES: usize = 6;

/// How far the convergence point strays from its origin on each axis.
pub const WANDER_RADIUS: f32 = 5.0;

/// Indices of the apex in the pyramid's vertex list.
const APEX_SLOTS: [usize; 4] = [2, 5, 8, 11];

#[derive(Clone, Debug)]
pub struct Pyramid {
    pub base: f32,
    pub height: f32,
    /// Where the local origin sits in the field.
    pub offset: Vec3,
    mesh: MeshGeometry,
}

impl Pyramid {
    pub fn new(base: f32, height: f32, offset: Vec3) -> Result<Self> {
        ensure_positive("pyramid base", base)?;
        ensure_positive("pyramid height", height)?;
        Ok(Self { base, height, offset, mesh: pyramid_geometry(base, height) })
    }

    /// Distance from a base corner to the base centre.
    pub fn radius(&self) -> f32 {
        self.base * std::f32::consts::SQRT_2 / 2.0
    }

    /// Swing the apex to angle `theta` around the local origin.
    pub fn lean_apex(&mut self, theta: f32) {
        let r = self.radius();
        let (sin, cos) = theta.sin_cos();
        for p in self.mesh.positions_mut() {
            if p.y > 0.0 {
                p.x = r * cos;
                p.z = r * sin;
            }
        }
    }

    pub fn apex(&self) -> Vec3 {
        self.mesh.positions()[APEX_SLOTS[0]]
    }

    pub fn mesh(&self) -> &MeshGeometry {
        &self.mesh
    }
}

/// Four sides and a two-triangle base.
pub fn pyramid_geometry(base: f32, height: f32) -> MeshGeometry {
    let s = base;
    let apex = Vec3::new(s / 2.0, height, s / 2.0);
    let p1 = Vec3::ZERO;
    let p2 = Vec3::new(s, 0.0, 0.0);
    let p3 = Vec3::new(s, 0.0, s);
    let p4 = Vec3::new(0.0, 0.0, s);

    let mut mesh = MeshGeometry::with_capacity(PYRAMID_TRIANGLES);
    mesh.push_triangle(p2, p1, apex);
    mesh.push_triangle(p3, p2, apex);
    mesh.push_triangle(p4, p3, apex);
    mesh.push_triangle(p1, p4, apex);
    mesh.push_triangle(p1, p2, p3);
    mesh.push_triangle(p1, p3, p4);
    mesh
}

/// Direction of the swirl field at `(x, z)`, relative to the convergence
/// point. The twist tightens and relaxes once per loop.
pub fn swirl_angle(x: f32, z: f32, playhead: f32) -> f32 {
    let t = map_range((PI * playhead).sin(), 0.0, 1.0, PI / 16.0, FRAC_PI_4);
    let hx = ((z - x) * t).sin();
    let hz = ((-x - z) * t).sin();
    hz.atan2(hx)
}

/// Noise-driven angle in `[-2π, 2π]`.
fn wander_angle(x: f32, y: f32) -> f32 {
    TAU * (2.0 * noise2(x * 0.1, y * 0.1) - 1.0)
}

/// Staircase of pyramid columns, merged into one mesh for upload.
///
/// Each frame the convergence point wanders around `origin` and every apex
/// leans along the swirl around it.
pub struct PyramidField {
    pyramids: Vec<Pyramid>,
    mesh: MeshGeometry,
    pub origin: Vec3,
    convergence: Vec3,
}

impl PyramidField {
    pub fn new(config: &PyramidConfig) -> Result<Self> {
        config.validate()?;
        let mut pyramids = Vec::new();
        let mut x_off = 0.0;
        for count in config.min_count..=config.max_count {
            let base = config.span / count as f32;
            for idx in 0..count {
                let offset = Vec3::new(x_off, 0.0, idx as f32 * base);
                pyramids.push(Pyramid::new(base, base * config.height_ratio, offset)?);
            }
            x_off += base;
        }

        let mut mesh = MeshGeometry::with_capacity(pyramids.len() * PYRAMID_TRIANGLES);
        for p in &pyramids {
            mesh.append_translated(p.mesh(), p.offset);
        }

        let origin = match mesh.bounds() {
            Some((lo, hi)) => {
                let c = (lo + hi) * 0.5;
                Vec3::new(c.x, 1.0, c.z)
            }
            None => Vec3::Y,
        };

        tracing::debug!(pyramids = pyramids.len(), "pyramid field built");
        Ok(Self { pyramids, mesh, origin, convergence: origin })
    }

    pub fn pyramids(&self) -> &[Pyramid] {
        &self.pyramids
    }

    pub fn len(&self) -> usize {
        self.pyramids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pyramids.is_empty()
    }

    pub fn convergence(&self) -> Vec3 {
        self.convergence
    }

    /// Move the wander centre and snap the convergence point onto it.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.convergence = origin;
    }

    /// Move the convergence point along its noise path for this playhead.
    pub fn wander(&mut self, playhead: f32) {
        let t = (playhead * TAU).sin();
        let c = self.convergence;
        let x_off = wander_angle(c.x / 100.0, t);
        let z_off = wander_angle(c.z / 100.0, t + 0.5);
        self.convergence.x = self.origin.x + WANDER_RADIUS * x_off.cos();
        self.convergence.z = self.origin.z + WANDER_RADIUS * z_off.sin();
    }

    /// Lean every apex along the swirl around the convergence point.
    pub fn distort(&mut self, playhead: f32) {
        let c = self.convergence;
        let stride = PYRAMID_TRIANGLES * 3;
        let world = self.mesh.positions_mut();
        for (pyramid, slot) in self.pyramids.iter_mut().zip(world.chunks_exact_mut(stride)) {
            let theta = swirl_angle(pyramid.offset.x - c.x, pyramid.offset.z - c.z, playhead);
            pyramid.lean_apex(theta);
            for (dst, src) in slot.iter_mut().zip(pyramid.mesh.positions()) {
                *dst = *src + pyramid.offset;
            }
        }
    }

    pub fn mesh(&self) -> &MeshGeometry {
        &self.mesh
    }
}

impl Animated for PyramidField {
    fn update(&mut self, frame: &Frame) {
        self.wander(frame.playhead);
        self.distort(frame.playhead);
    }

    fn positions(&self) -> &[Vec3] {
        self.mesh.positions()
    }
}
