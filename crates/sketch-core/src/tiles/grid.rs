use glam::Vec3;

use crate::config::TileConfig;
use crate::error::Result;

/// Centred rectangular grid in the z = 0 plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGrid {
    pub width: f32,
    pub height: f32,
    pub cols: usize,
    pub rows: usize,
}

/// One grid cell, split into four triangular faces around its centre.
///
/// ```text
///  (x2,-y2) *-----------* (x0,-y2)
///           | \   3   / |
///           |  2  C  0  |
///           | /   1   \ |
///  (x2,-y0) *-----------* (x0,-y0)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileCell {
    pub row: usize,
    pub col: usize,
    /// Corners in face order: `(x0,-y0)`, `(x0,-y2)`, `(x2,-y2)`, `(x2,-y0)`.
    pub corners: [Vec3; 4],
    pub center: Vec3,
}

impl TileCell {
    /// The four faces, each listed with its two outer corners first and the
    /// centre last.
    pub fn faces(&self) -> [[Vec3; 3]; 4] {
        let [p00, p02, p22, p20] = self.corners;
        let c = self.center;
        [
            [p00, p02, c],
            [p20, p00, c],
            [p22, p20, c],
            [p02, p22, c],
        ]
    }
}

impl TileGrid {
    pub fn new(width: f32, height: f32, cols: usize, rows: usize) -> Result<Self> {
        let grid = Self { width, height, cols, rows };
        TileConfig { width, height, cols, rows, ..TileConfig::default() }.validate()?;
        Ok(grid)
    }

    pub fn from_config(config: &TileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            cols: config.cols,
            rows: config.rows,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    pub fn cell_size(&self) -> (f32, f32) {
        (self.width / self.cols as f32, self.height / self.rows as f32)
    }

    pub fn cell(&self, row: usize, col: usize) -> TileCell {
        let (w, h) = self.cell_size();
        let y0 = (row + 1) as f32 * h - self.height / 2.0;
        let y1 = y0 - h / 2.0;
        let y2 = y0 - h;
        let x0 = (col + 1) as f32 * w - self.width / 2.0;
        let x1 = x0 - w / 2.0;
        let x2 = x0 - w;
        TileCell {
            row,
            col,
            corners: [
                Vec3::new(x0, -y0, 0.0),
                Vec3::new(x0, -y2, 0.0),
                Vec3::new(x2, -y2, 0.0),
                Vec3::new(x2, -y0, 0.0),
            ],
            center: Vec3::new(x1, -y1, 0.0),
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = TileCell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| self.cell(row, col)))
    }
}
