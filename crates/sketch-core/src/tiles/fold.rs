//! Paper-fold subdivision patterns.
//!
//! Each pattern takes one triangular face `(a, b, c)`, where `a` and `b` are
//! the outer corners shared with neighbouring cells and `c` is the cell
//! centre, and returns three triangles with exactly one derived vertex `d`
//! lifted to the elevation height.
//!
//! ```text
//!   a *****mp***** b
//!      *********
//!       ***d***      center: d halfway between c and mp
//!        *****       edge:   d halfway along a-c or b-c
//!         ***        raised: d directly above c
//!          c
//! ```

use glam::Vec3;

use crate::math::midpoint;

/// Which outer corner a pattern leans toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Toward `a`.
    First,
    /// Toward `b`.
    Second,
}

impl Side {
    #[inline]
    fn pick(self, a: Vec3, b: Vec3) -> Vec3 {
        match self {
            Side::First => a,
            Side::Second => b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fold {
    /// Raise the point halfway between the centre and the outer edge midpoint.
    Center,
    /// Raise the midpoint of the `a-c` (`First`) or `b-c` (`Second`) edge.
    Edge(Side),
    /// Raise a point beside the centre, pushed halfway toward `a` or `b`
    /// along the axis the outer edge runs on.
    FaceEdge(Side),
    /// Like `Center`, but only the outer sub-triangle `b, d, a` is drawn,
    /// leaving the inner part of the face open.
    SmallRaisedFace,
    /// Raise the centre itself.
    RaisedFace,
}

impl Fold {
    pub const ALL: [Fold; 7] = [
        Fold::Center,
        Fold::Edge(Side::First),
        Fold::Edge(Side::Second),
        Fold::FaceEdge(Side::First),
        Fold::FaceEdge(Side::Second),
        Fold::SmallRaisedFace,
        Fold::RaisedFace,
    ];

    /// Vertices emitted per face, identical for every pattern.
    pub const VERTICES: usize = 9;
    pub const TRIANGLES: usize = Self::VERTICES / 3;

    pub fn name(self) -> &'static str {
        match self {
            Fold::Center => "center",
            Fold::Edge(Side::First) => "edge-a",
            Fold::Edge(Side::Second) => "edge-b",
            Fold::FaceEdge(Side::First) => "face-edge-a",
            Fold::FaceEdge(Side::Second) => "face-edge-b",
            Fold::SmallRaisedFace => "small-raised-face",
            Fold::RaisedFace => "raised-face",
        }
    }

    /// Subdivide face `(a, b, c)`, lifting the derived vertex to `elevation`.
    pub fn apply(self, a: Vec3, b: Vec3, c: Vec3, elevation: f32) -> [Vec3; Self::VERTICES] {
        match self {
            Fold::Center => {
                let d = lifted(midpoint(c, midpoint(a, b)), elevation);
                [b, d, a, c, d, b, a, d, c]
            }
            Fold::Edge(side) => {
                let d = lifted(midpoint(side.pick(a, b), c), elevation);
                [b, d, a, a, d, c, c, d, b]
            }
            Fold::FaceEdge(side) => {
                let axis = edge_axis(a, b);
                let mut dest = c;
                dest[axis] = side.pick(a, b)[axis];
                let d = lifted(midpoint(c, dest), elevation);
                [b, d, a, a, d, c, c, d, b]
            }
            Fold::SmallRaisedFace => {
                let d = lifted(midpoint(c, midpoint(a, b)), elevation);
                [b, d, a, b, d, a, b, d, a]
            }
            Fold::RaisedFace => {
                let d = Vec3::new(c.x, c.y, elevation);
                [a, d, c, c, d, b, a, b, d]
            }
        }
    }
}

#[inline]
fn lifted(p: Vec3, elevation: f32) -> Vec3 {
    Vec3::new(p.x, p.y, elevation)
}

/// First of x, y on which `a` and `b` differ; x for a degenerate edge.
#[inline]
fn edge_axis(a: Vec3, b: Vec3) -> usize {
    if a.x != b.x {
        0
    } else if a.y != b.y {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(2.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(1.0, -1.0, 0.0);

    fn elevated(vertices: &[Vec3]) -> Vec<Vec3> {
        let mut out: Vec<Vec3> = vertices.iter().copied().filter(|v| v.z != 0.0).collect();
        out.dedup();
        out
    }

    #[test]
    fn test_every_fold_lifts_exactly_one_point() {
        for fold in Fold::ALL {
            let vertices = fold.apply(A, B, C, 0.25);
            let lifted = elevated(&vertices);
            assert!(!lifted.is_empty(), "{:?} lifted nothing", fold);
            assert!(
                lifted.iter().all(|v| *v == lifted[0]),
                "{:?} lifted more than one distinct point: {:?}",
                fold,
                lifted
            );
            assert_eq!(lifted[0].z, 0.25);
        }
    }

    #[test]
    fn test_center_point() {
        let v = Fold::Center.apply(A, B, C, 0.25);
        // mp = (1, 0), d = halfway between c and mp
        assert_eq!(v[1], Vec3::new(1.0, -0.5, 0.25));
        assert_eq!(&v[..3], &[B, v[1], A]);
    }

    #[test]
    fn test_edge_sides() {
        let first = Fold::Edge(Side::First).apply(A, B, C, 0.25);
        let second = Fold::Edge(Side::Second).apply(A, B, C, 0.25);
        assert_eq!(first[1], Vec3::new(0.5, -0.5, 0.25));
        assert_eq!(second[1], Vec3::new(1.5, -0.5, 0.25));
    }

    #[test]
    fn test_face_edge_moves_along_outer_edge_axis() {
        // Outer edge runs along x, so d slides from c toward a.x / b.x
        let first = Fold::FaceEdge(Side::First).apply(A, B, C, 0.25);
        let second = Fold::FaceEdge(Side::Second).apply(A, B, C, 0.25);
        assert_eq!(first[1], Vec3::new(0.5, -1.0, 0.25));
        assert_eq!(second[1], Vec3::new(1.5, -1.0, 0.25));

        // Vertical outer edge: slide along y instead
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        let c = Vec3::new(-1.0, 1.0, 0.0);
        let v = Fold::FaceEdge(Side::Second).apply(a, b, c, 0.25);
        assert_eq!(v[1], Vec3::new(-1.0, 1.5, 0.25));
    }

    #[test]
    fn test_small_raised_face_repeats_outer_triangle() {
        let v = Fold::SmallRaisedFace.apply(A, B, C, 0.25);
        assert_eq!(v[0..3], v[3..6]);
        assert_eq!(v[0..3], v[6..9]);
        assert_eq!(v[0], B);
        assert_eq!(v[2], A);
    }

    #[test]
    fn test_raised_face_pinned_output() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);
        let d = Vec3::new(0.0, 1.0, 0.25);
        assert_eq!(
            Fold::RaisedFace.apply(a, b, c, 0.25),
            [a, d, c, c, d, b, a, b, d]
        );
    }
}
