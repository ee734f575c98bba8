use std::str::FromStr;

use crate::error::SketchError;
use crate::random::RandomSource;
use crate::tiles::fold::{Fold, Side};

const C: Fold = Fold::Center;
const R: Fold = Fold::RaisedFace;
const S: Fold = Fold::SmallRaisedFace;
const E0: Fold = Fold::Edge(Side::First);
const E1: Fold = Fold::Edge(Side::Second);
const F0: Fold = Fold::FaceEdge(Side::First);
const F1: Fold = Fold::FaceEdge(Side::Second);

/// Hand-picked four-face layouts. Faces are ordered right, bottom, left, top
/// (see [`TileCell::faces`](crate::tiles::TileCell::faces)).
pub const TILE_LAYOUTS: [[Fold; 4]; 12] = [
    [R, R, R, R],
    [E0, E1, C, C],
    [E1, E0, E1, E0],
    [C, C, E0, E1],
    [C, C, C, C],
    [C, E0, E1, C],
    [E0, E1, E0, E1],
    [E1, C, C, E0],
    [S, F1, C, F0],
    [F0, S, F1, C],
    [C, F0, S, F1],
    [F1, C, F0, S],
];

/// How folds are chosen across a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoldSet {
    /// Every face picks centre, edge (random side) or raised face.
    PerFace,
    /// Every face picks uniformly from all of [`Fold::ALL`].
    AnyFold,
    /// Every cell picks one of [`TILE_LAYOUTS`].
    TileLayouts,
    /// Every face uses the same fold.
    Single(Fold),
}

impl FoldSet {
    /// Folds for the four faces of one cell.
    pub fn pick<R: RandomSource + ?Sized>(self, rng: &mut R) -> [Fold; 4] {
        match self {
            FoldSet::PerFace => std::array::from_fn(|_| pick_basic(rng)),
            FoldSet::AnyFold => std::array::from_fn(|_| Fold::ALL[rng.pick_index(Fold::ALL.len())]),
            FoldSet::TileLayouts => TILE_LAYOUTS[rng.pick_index(TILE_LAYOUTS.len())],
            FoldSet::Single(fold) => [fold; 4],
        }
    }
}

/// Accepts `per-face`, `any`, `layouts`, or a single [`Fold::name`].
impl FromStr for FoldSet {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "per-face" | "perface" => Ok(FoldSet::PerFace),
            "any" | "any-fold" => Ok(FoldSet::AnyFold),
            "layouts" | "tile-layouts" => Ok(FoldSet::TileLayouts),
            _ => Fold::ALL
                .into_iter()
                .find(|f| f.name() == key)
                .map(FoldSet::Single)
                .ok_or_else(|| SketchError::UnknownFoldSet(s.to_string())),
        }
    }
}

fn pick_basic<R: RandomSource + ?Sized>(rng: &mut R) -> Fold {
    match rng.pick_index(3) {
        0 => Fold::Center,
        1 => {
            let side = if rng.chance() { Side::First } else { Side::Second };
            Fold::Edge(side)
        }
        _ => Fold::RaisedFace,
    }
}
