//! Geometry engines for looping generative sketches.
//!
//! - [`attractor`]: particle clouds integrated through chaotic vector fields
//! - [`tiles`]: folded-paper grids, ridge tiles and pyramid fields
//! - [`morph`]: easing one mesh through a looping list of targets
//!
//! Everything is driven once per frame by the host through [`Frame`] and
//! hands back position buffers ready for upload.

pub mod attractor;
pub mod config;
pub mod error;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod morph;
pub mod particle;
pub mod random;
pub mod tiles;

pub use attractor::{Attractor, DivergencePolicy, VectorField};
pub use config::{AttractorConfig, MorphConfig, PyramidConfig, RidgeConfig, TileConfig, ELEVATION};
pub use error::{Result, SketchError};
pub use frame::{Animated, Frame};
pub use mesh::MeshGeometry;
pub use morph::MorphSequence;
pub use random::{RandomSource, RngSource};
