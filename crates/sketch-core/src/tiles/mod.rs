//! Procedural tile meshes.
//!
//! A [`TileGrid`] splits a centred rectangle into cells of four triangular
//! faces; every face is subdivided by a [`Fold`] chosen through a
//! [`FoldSet`] and the results are concatenated into one unindexed
//! [`MeshGeometry`]. Ridge tiles and pyramid fields are separate builders
//! that share the same output type.

pub mod fold;
pub mod grid;
pub mod layout;
pub mod pyramid;
pub mod ridge;

pub use fold::{Fold, Side};
pub use grid::{TileCell, TileGrid};
pub use layout::{FoldSet, TILE_LAYOUTS};
pub use pyramid::{pyramid_geometry, swirl_angle, Pyramid, PyramidField, PYRAMID_TRIANGLES};
pub use ridge::{ridge_sculpture, ridge_tile, Diagonal, RIDGE_TRIANGLES};

use crate::config::TileConfig;
use crate::error::Result;
use crate::mesh::MeshGeometry;
use crate::random::RandomSource;

/// Four faces, three triangles each.
pub const TRIANGLES_PER_CELL: usize = 4 * Fold::TRIANGLES;

/// Subdivide every face of `grid`, drawing folds from `folds`.
pub fn tessellate<R: RandomSource + ?Sized>(
    grid: &TileGrid,
    folds: FoldSet,
    elevation: f32,
    rng: &mut R,
) -> MeshGeometry {
    let mut mesh = MeshGeometry::with_capacity(grid.cell_count() * TRIANGLES_PER_CELL);
    for cell in grid.cells() {
        let picked = folds.pick(rng);
        for (fold, [a, b, c]) in picked.into_iter().zip(cell.faces()) {
            mesh.extend_triangles(&fold.apply(a, b, c, elevation));
        }
    }
    mesh
}

/// Build one folded sculpture from `config`.
pub fn fold_sculpture<R: RandomSource + ?Sized>(config: &TileConfig, rng: &mut R) -> Result<MeshGeometry> {
    let grid = TileGrid::from_config(config)?;
    let mesh = tessellate(&grid, config.folds, config.elevation, rng);
    tracing::debug!(
        cols = grid.cols,
        rows = grid.rows,
        folds = ?config.folds,
        triangles = mesh.triangle_count(),
        "fold sculpture built"
    );
    Ok(mesh)
}
