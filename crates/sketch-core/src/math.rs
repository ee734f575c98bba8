use glam::Vec3;

/// Scalar linear interpolation, unclamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `value` from `[in_min, in_max]` to `[out_min, out_max]`, unclamped.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if (in_max - in_min).abs() < f32::EPSILON {
        out_min
    } else {
        out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
    }
}

/// Hash a lattice point to `[0, 1)`.
pub fn hash12(x: f32, y: f32) -> f32 {
    let px = (x * 0.1031).fract();
    let py = (y * 0.1031).fract();
    let pz = (x * 0.1031).fract(); // .xyx
    let dot = px * (py + 33.33) + py * (pz + 33.33) + pz * (px + 33.33);
    let (px, py, pz) = (px + dot, py + dot, pz + dot);
    ((px + py) * pz).fract().abs()
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Smooth 2D value noise in `[0, 1]`.
pub fn noise2(x: f32, y: f32) -> f32 {
    let (ix, iy) = (x.floor(), y.floor());
    let fx = smoothstep(0.0, 1.0, x - ix);
    let fy = smoothstep(0.0, 1.0, y - iy);
    let bottom = lerp(hash12(ix, iy), hash12(ix + 1.0, iy), fx);
    let top = lerp(hash12(ix, iy + 1.0), hash12(ix + 1.0, iy + 1.0), fx);
    lerp(bottom, top, fy)
}

/// Midpoint of two points.
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    a.lerp(b, 0.5)
}

/// Unit normal of triangle `(a, b, c)` with counter-clockwise winding,
/// or zero for a degenerate triangle.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (c - b).cross(a - b).normalize_or_zero()
}
