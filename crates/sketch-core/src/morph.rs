//! Ease a mesh toward target shapes.
//!
//! Every frame each vertex moves a fraction `rate * delta_time` of the way
//! to its counterpart in the target. That fraction is applied to what is
//! left of the gap, so the mesh approaches the target geometrically and
//! never lands on it in a finite number of frames. Swapping the target
//! mid-way simply redirects the motion.

use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::MorphConfig;
use crate::error::{Result, SketchError};
use crate::frame::{Animated, Frame};
use crate::mesh::MeshGeometry;

/// Move every vertex of `current` toward `target` by `factor`, componentwise.
///
/// Slices of different length are truncated to the shorter one; use
/// [`morph_toward`] or [`MorphSequence`] when the counts need checking.
pub fn lerp_positions(current: &mut [Vec3], target: &[Vec3], factor: f32) {
    #[cfg(feature = "parallel")]
    current
        .par_iter_mut()
        .zip(target.par_iter())
        .for_each(|(c, t)| *c = c.lerp(*t, factor));

    #[cfg(not(feature = "parallel"))]
    for (c, t) in current.iter_mut().zip(target) {
        *c = c.lerp(*t, factor);
    }
}

/// Check that two meshes can be morphed into each other.
pub fn check_compatible(current: &MeshGeometry, target: &MeshGeometry) -> Result<()> {
    if current.vertex_count() != target.vertex_count() {
        return Err(SketchError::VertexCountMismatch {
            expected: current.vertex_count(),
            found: target.vertex_count(),
            target: None,
        });
    }
    Ok(())
}

/// One morph step of `current` toward `target`.
pub fn morph_toward(
    current: &mut MeshGeometry,
    target: &MeshGeometry,
    delta_time: f32,
    rate: f32,
) -> Result<()> {
    check_compatible(current, target)?;
    lerp_positions(current.positions_mut(), target.positions(), rate * delta_time);
    Ok(())
}

/// A mesh easing through a looping list of targets picked by the playhead.
///
/// For `n` targets `T0..Tn-1` the sequence is `T0, T1, ..., Tn-1, T0`. The
/// mesh starts as a copy of `T0` and at playhead `p` heads for entry
/// `floor(p * n) + 1`, so the last stretch of the loop returns to `T0`.
pub struct MorphSequence {
    current: MeshGeometry,
    targets: Vec<MeshGeometry>,
    rate: f32,
    active: usize,
}

impl MorphSequence {
    pub fn new(targets: Vec<MeshGeometry>, rate: f32) -> Result<Self> {
        crate::error::ensure_positive("morph rate", rate)?;
        let first = targets.first().ok_or(SketchError::ZeroCount("morph targets"))?;
        let expected = first.vertex_count();
        if let Some((idx, bad)) = targets
            .iter()
            .enumerate()
            .find(|(_, t)| t.vertex_count() != expected)
        {
            tracing::warn!(target_index = idx, expected, found = bad.vertex_count(), "morph target rejected");
            return Err(SketchError::VertexCountMismatch {
                expected,
                found: bad.vertex_count(),
                target: Some(idx),
            });
        }

        let current = first.clone();
        let mut targets = targets;
        targets.push(current.clone());
        tracing::debug!(
            targets = targets.len() - 1,
            vertices = expected,
            rate,
            "morph sequence created"
        );
        Ok(Self { current, targets, rate, active: 1 })
    }

    /// Build `config.targets` meshes with `build` and sequence them.
    pub fn generate<F>(config: &MorphConfig, mut build: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<MeshGeometry>,
    {
        config.validate()?;
        let targets = (0..config.targets).map(&mut build).collect::<Result<Vec<_>>>()?;
        Self::new(targets, config.rate)
    }

    /// Number of distinct targets (the looping copy of `T0` excluded).
    pub fn target_count(&self) -> usize {
        self.targets.len() - 1
    }

    /// Sequence entry the mesh heads for at `playhead`.
    pub fn target_index(&self, playhead: f32) -> usize {
        let n = self.target_count();
        let idx = (playhead.max(0.0) * n as f32).floor() as usize + 1;
        idx.min(n)
    }

    /// Ease toward the target for this playhead.
    pub fn advance(&mut self, playhead: f32, delta_time: f32) {
        let idx = self.target_index(playhead);
        if idx != self.active {
            tracing::trace!(from = self.active, to = idx, "morph target switched");
            self.active = idx;
        }
        lerp_positions(
            self.current.positions_mut(),
            self.targets[idx].positions(),
            self.rate * delta_time,
        );
    }

    /// Snap back to the first target, as at the start of a loop.
    pub fn rewind(&mut self) {
        self.current = self.targets[0].clone();
        self.active = 1;
    }

    pub fn current(&self) -> &MeshGeometry {
        &self.current
    }

    pub fn active_target(&self) -> &MeshGeometry {
        &self.targets[self.active]
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Animated for MorphSequence {
    fn update(&mut self, frame: &Frame) {
        self.advance(frame.playhead, frame.delta_time);
    }

    fn positions(&self) -> &[Vec3] {
        self.current.positions()
    }
}
