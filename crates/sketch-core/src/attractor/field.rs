//! Chaotic vector fields.
//!
//! Every field maps a point and a timestep to the Euler delta for that step,
//! i.e. the derivative already multiplied by `dt`. Constants are fixed per
//! field.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::SketchError;

/// Signature shared by every field.
pub type FieldFn = fn(Vec3, f32) -> Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VectorField {
    Lorenz,
    LorenzMod2,
    Aizawa,
    Dadras,
    Dequan,
}

impl VectorField {
    pub const ALL: [VectorField; 5] = [
        VectorField::Lorenz,
        VectorField::LorenzMod2,
        VectorField::Aizawa,
        VectorField::Dadras,
        VectorField::Dequan,
    ];

    pub fn function(self) -> FieldFn {
        match self {
            VectorField::Lorenz => lorenz,
            VectorField::LorenzMod2 => lorenz_mod2,
            VectorField::Aizawa => aizawa,
            VectorField::Dadras => dadras,
            VectorField::Dequan => dequan,
        }
    }

    #[inline]
    pub fn delta(self, p: Vec3, dt: f32) -> Vec3 {
        (self.function())(p, dt)
    }

    /// Step size that keeps this field's cloud readable at one step per frame.
    pub fn default_timestep(self) -> f32 {
        match self {
            VectorField::Aizawa => 0.005,
            _ => 0.001,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VectorField::Lorenz => "lorenz",
            VectorField::LorenzMod2 => "lorenz-mod2",
            VectorField::Aizawa => "aizawa",
            VectorField::Dadras => "dadras",
            VectorField::Dequan => "dequan",
        }
    }
}

impl fmt::Display for VectorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VectorField {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        VectorField::ALL
            .into_iter()
            .find(|f| f.name() == key || f.name().replace('-', "") == key)
            .ok_or_else(|| SketchError::UnknownField(s.to_string()))
    }
}

/// Lorenz system, `sigma = 10`, `rho = 28`, `beta = 8/3`.
pub fn lorenz(p: Vec3, dt: f32) -> Vec3 {
    let beta = 8.0 / 3.0;
    let rho = 28.0;
    let sigma = 10.0;
    Vec3::new(
        sigma * (p.y - p.x) * dt,
        (p.x * (rho - p.z) - p.y) * dt,
        (p.x * p.y - beta * p.z) * dt,
    )
}

/// Modified Lorenz ("Lorenz mod 2").
pub fn lorenz_mod2(p: Vec3, dt: f32) -> Vec3 {
    let (a, b, c, d) = (0.9, 5.0, 9.9, 1.0);
    let Vec3 { x, y, z } = p;
    Vec3::new(
        (-a * x + y * y - z * z + a * c) * dt,
        (x * (y - b * z) + d) * dt,
        (-z + x * (b * y + z)) * dt,
    )
}

/// Aizawa attractor. `e` is part of the published constant set but does not
/// appear in the form used here.
pub fn aizawa(p: Vec3, dt: f32) -> Vec3 {
    let (a, b, c, d, f) = (0.95, 0.7, 0.6, 3.5, 0.1);
    let Vec3 { x, y, z } = p;
    Vec3::new(
        ((z - b) * x - d * y) * dt,
        (d * x + (z - b) * y) * dt,
        (c + a * z - (z * z * z) / 3.0 - x * x + f * z * (x * x * x)) * dt,
    )
}

pub fn dadras(p: Vec3, dt: f32) -> Vec3 {
    let (a, b, c, d, e) = (3.0, 2.7, 1.7, 2.0, 9.0);
    let Vec3 { x, y, z } = p;
    Vec3::new(
        (y - a * x + b * y * z) * dt,
        (c * y - x * z + z) * dt,
        (d * x * y - e * z) * dt,
    )
}

/// Dequan Li attractor.
pub fn dequan(p: Vec3, dt: f32) -> Vec3 {
    let (a, b, c, d, e, f) = (40.0, 1.833, 0.16, 0.65, 55.0, 20.0);
    let Vec3 { x, y, z } = p;
    Vec3::new(
        (a * (y - x) + c * x * z) * dt,
        (e * x + f * y - x * z) * dt,
        (b * z + x * y - d * x * x) * dt,
    )
}
