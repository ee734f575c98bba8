use crate::attractor::{DivergencePolicy, VectorField};
use crate::error::{ensure_nonzero, ensure_positive, Result, SketchError};
use crate::tiles::FoldSet;

/// Height of the raised vertex in every fold pattern.
pub const ELEVATION: f32 = 0.25;

/// Morph rate of ridge sculptures, independent of the target count.
pub const RIDGE_MORPH_RATE: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttractorConfig {
    pub particle_count: usize,
    pub field: VectorField,
    /// Euler step applied once per frame.
    pub timestep: f32,
    /// Radius of the sphere particles are projected onto.
    pub scale: f32,
    pub divergence: DivergencePolicy,
}

impl Default for AttractorConfig {
    fn default() -> Self {
        Self {
            particle_count: 10_000,
            field: VectorField::LorenzMod2,
            timestep: 0.001,
            scale: 1.125,
            divergence: DivergencePolicy::Propagate,
        }
    }
}

impl AttractorConfig {
    /// Defaults with `field` swapped in, using the step that suits it.
    pub fn for_field(field: VectorField) -> Self {
        Self {
            field,
            timestep: field.default_timestep(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("particle count", self.particle_count)?;
        ensure_positive("scale", self.scale)?;
        // A zero step is allowed: it freezes the simulation in place.
        if !self.timestep.is_finite() || self.timestep < 0.0 {
            return Err(SketchError::InvalidParameter {
                name: "timestep",
                value: self.timestep,
            });
        }
        Ok(())
    }
}

/// Folded-paper grid surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileConfig {
    pub width: f32,
    pub height: f32,
    pub cols: usize,
    pub rows: usize,
    pub elevation: f32,
    pub folds: FoldSet,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            cols: 5,
            rows: 5,
            elevation: ELEVATION,
            folds: FoldSet::TileLayouts,
        }
    }
}

impl TileConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("grid width", self.width)?;
        ensure_positive("grid height", self.height)?;
        ensure_nonzero("grid columns", self.cols)?;
        ensure_nonzero("grid rows", self.rows)?;
        if !self.elevation.is_finite() {
            return Err(SketchError::InvalidParameter {
                name: "elevation",
                value: self.elevation,
            });
        }
        Ok(())
    }
}

/// Square grid of diagonal ridge tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RidgeConfig {
    pub size: f32,
    pub segments: usize,
    pub height: f32,
}

impl Default for RidgeConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            segments: 5,
            height: ELEVATION,
        }
    }
}

impl RidgeConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("ridge grid size", self.size)?;
        ensure_nonzero("ridge segments", self.segments)?;
        Ok(())
    }
}

/// Staircase of pyramid columns: column `k` holds `k` pyramids of base
/// `span / k`, for `k` in `min_count..=max_count`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PyramidConfig {
    pub span: f32,
    pub min_count: usize,
    pub max_count: usize,
    /// Pyramid height as a multiple of its base.
    pub height_ratio: f32,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            span: 11.0,
            min_count: 11,
            max_count: 28,
            height_ratio: 2.0,
        }
    }
}

impl PyramidConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("pyramid span", self.span)?;
        ensure_positive("pyramid height ratio", self.height_ratio)?;
        ensure_nonzero("pyramid column size", self.min_count)?;
        if self.max_count < self.min_count {
            return Err(SketchError::ZeroCount("pyramid columns"));
        }
        Ok(())
    }
}

/// Morph sequence settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphConfig {
    /// Number of distinct targets per loop.
    pub targets: usize,
    /// Multiplied by the frame delta to get the lerp factor.
    pub rate: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self { targets: 4, rate: 3.0 }
    }
}

impl MorphConfig {
    /// Rate of `targets - 1`, which is what the paper-fold loop uses.
    pub fn with_targets(targets: usize) -> Self {
        Self {
            targets,
            rate: targets.saturating_sub(1).max(1) as f32,
        }
    }

    /// Fixed rate used by the ridge-tile loop.
    pub fn for_ridges(targets: usize) -> Self {
        Self { targets, rate: RIDGE_MORPH_RATE }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("morph targets", self.targets)?;
        ensure_positive("morph rate", self.rate)?;
        Ok(())
    }
}
