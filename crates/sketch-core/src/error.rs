//! Error types for sketch construction.
//!
//! Everything that can fail does so while a sketch is being set up. Once an
//! attractor, tiling or morph sequence exists, per-frame updates are
//! infallible.

use std::fmt;

/// Errors raised while building a sketch component.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// A count that must be positive was zero (particles, cells, targets...).
    ZeroCount(&'static str),
    /// A float parameter was zero, negative, NaN or infinite.
    InvalidParameter { name: &'static str, value: f32 },
    /// Two meshes that must share topology have different vertex counts.
    VertexCountMismatch {
        expected: usize,
        found: usize,
        /// Position of the offending target in a sequence, if any.
        target: Option<usize>,
    },
    /// A flat buffer length was not a whole number of triangles.
    IncompleteTriangles(usize),
    /// A vector field name did not match any known field.
    UnknownField(String),
    /// A fold set name did not match any known set or fold.
    UnknownFoldSet(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::ZeroCount(what) => write!(f, "{} must be at least 1", what),
            SketchError::InvalidParameter { name, value } => {
                write!(f, "{} must be positive and finite, got {}", name, value)
            }
            SketchError::VertexCountMismatch { expected, found, target: Some(idx) } => write!(
                f,
                "morph target {} has {} vertices, expected {}",
                idx, found, expected
            ),
            SketchError::VertexCountMismatch { expected, found, target: None } => write!(
                f,
                "morph target has {} vertices, current mesh has {}",
                found, expected
            ),
            SketchError::IncompleteTriangles(len) => write!(
                f,
                "vertex buffer of length {} is not a whole number of triangles",
                len
            ),
            SketchError::UnknownField(name) => write!(
                f,
                "unknown vector field '{}' (expected lorenz, lorenz-mod2, aizawa, dadras or dequan)",
                name
            ),
            SketchError::UnknownFoldSet(name) => write!(
                f,
                "unknown fold set '{}' (expected per-face, any, layouts or a single fold name)",
                name
            ),
        }
    }
}

impl std::error::Error for SketchError {}

pub type Result<T> = std::result::Result<T, SketchError>;

/// Reject zero, negative and non-finite values.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SketchError::InvalidParameter { name, value })
    }
}

pub(crate) fn ensure_nonzero(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(SketchError::ZeroCount(name))
    } else {
        Ok(value)
    }
}
