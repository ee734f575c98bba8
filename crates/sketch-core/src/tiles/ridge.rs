//! Square ridge tiles.
//!
//! A tile of side `a` keeps its four corners flat and lifts the midpoints of
//! its four edges to height `h`. The six triangles are cut along one of the
//! two diagonals, which decides which way the crease runs.

use glam::Vec3;

use crate::config::RidgeConfig;
use crate::error::Result;
use crate::mesh::MeshGeometry;
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagonal {
    /// Crease from `(x0, y0)` to `(x2, y2)`.
    Main,
    /// Crease from `(x2, y0)` to `(x0, y2)`.
    Anti,
}

pub const RIDGE_TRIANGLES: usize = 6;

/// One tile with its low corner at `(x, y)`.
pub fn ridge_tile(x: f32, y: f32, a: f32, h: f32, diagonal: Diagonal) -> [Vec3; RIDGE_TRIANGLES * 3] {
    let [x0, x1, x2] = [x, x + a / 2.0, x + a];
    let [y0, y1, y2] = [y, y + a / 2.0, y + a];
    let p = |px: f32, py: f32, pz: f32| Vec3::new(px, py, pz);

    match diagonal {
        Diagonal::Main => [
            p(x1, y0, h), p(x2, y0, 0.0), p(x2, y1, h),
            p(x0, y0, 0.0), p(x1, y0, h), p(x2, y1, h),
            p(x0, y0, 0.0), p(x2, y1, h), p(x2, y2, 0.0),
            p(x0, y0, 0.0), p(x2, y2, 0.0), p(x1, y2, h),
            p(x0, y0, 0.0), p(x1, y2, h), p(x0, y1, h),
            p(x0, y1, h), p(x1, y2, h), p(x0, y2, 0.0),
        ],
        Diagonal::Anti => [
            p(x0, y0, 0.0), p(x1, y0, h), p(x0, y1, h),
            p(x0, y1, h), p(x1, y0, h), p(x0, y2, 0.0),
            p(x1, y0, h), p(x2, y0, 0.0), p(x0, y2, 0.0),
            p(x0, y2, 0.0), p(x2, y0, 0.0), p(x2, y1, h),
            p(x0, y2, 0.0), p(x2, y1, h), p(x1, y2, h),
            p(x1, y2, h), p(x2, y1, h), p(x2, y2, 0.0),
        ],
    }
}

/// A centred `segments x segments` field of ridge tiles, each with a
/// coin-flip diagonal.
pub fn ridge_sculpture<R: RandomSource + ?Sized>(config: &RidgeConfig, rng: &mut R) -> Result<MeshGeometry> {
    config.validate()?;
    let n = config.segments;
    let a = config.size / n as f32;
    let half = config.size / 2.0;
    let mut mesh = MeshGeometry::with_capacity(n * n * RIDGE_TRIANGLES);

    for iy in 0..n {
        for ix in 0..n {
            let x = half - (iy + 1) as f32 * a;
            let y = half - (ix + 1) as f32 * a;
            let diagonal = if rng.chance() { Diagonal::Main } else { Diagonal::Anti };
            mesh.extend_triangles(&ridge_tile(x, y, a, config.height, diagonal));
        }
    }

    tracing::debug!(segments = n, triangles = mesh.triangle_count(), "ridge sculpture built");
    Ok(mesh)
}
