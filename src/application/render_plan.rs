//! Visibility culling between the viewport and the grid.
//!
//! Drawing code must only see what this module hands out: the alive set is
//! unbounded, so it is never walked in full just to draw a frame.

use crate::domain::{Cell, SparseGrid};
use super::Viewport;

/// Grid lines are skipped below this on-screen cell size (pixels).
/// Crossed between zoom 0.6 (9px) and 0.7 (10.5px).
pub const GRID_LINE_MIN_CELL_PX: f64 = 10.0;

/// Inclusive integer rectangle of world cells touching the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl VisibleBounds {
    /// Top-left world corner floored, bottom-right ceiled
    pub fn from_viewport(viewport: &Viewport, canvas_w: f64, canvas_h: f64) -> Self {
        let (left, top) = viewport.screen_to_world(0.0, 0.0, canvas_w, canvas_h);
        let (right, bottom) = viewport.screen_to_world(canvas_w, canvas_h, canvas_w, canvas_h);
        Self {
            min_x: left.floor() as i64,
            min_y: top.floor() as i64,
            max_x: right.ceil() as i64,
            max_y: bottom.ceil() as i64,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x..=self.max_x).contains(&cell.x) && (self.min_y..=self.max_y).contains(&cell.y)
    }

    pub fn min_cell(&self) -> Cell {
        Cell::new(self.min_x, self.min_y)
    }

    pub fn max_cell(&self) -> Cell {
        Cell::new(self.max_x, self.max_y)
    }

    /// Number of cells in the rectangle, saturating
    pub fn area(&self) -> u64 {
        let w = (i128::from(self.max_x) - i128::from(self.min_x) + 1).max(0);
        let h = (i128::from(self.max_y) - i128::from(self.min_y) + 1).max(0);
        u64::try_from(w.saturating_mul(h)).unwrap_or(u64::MAX)
    }

    fn iter(self) -> impl Iterator<Item = Cell> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Cell::new(x, y)))
    }
}

/// Alive cells inside `bounds`.
///
/// Walks whichever is smaller: the rectangle (probing membership) or the
/// alive set (bounds-checking each cell). Both yield the same cells.
pub fn visible_cells(grid: &SparseGrid, bounds: VisibleBounds) -> Vec<Cell> {
    if bounds.area() < grid.count() as u64 {
        bounds.iter().filter(|&c| grid.contains(c)).collect()
    } else {
        grid.iter().filter(|&c| bounds.contains(c)).collect()
    }
}

/// Screen-space positions of the grid lines crossing the canvas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// x of each vertical line
    pub vertical: Vec<f64>,
    /// y of each horizontal line
    pub horizontal: Vec<f64>,
}

pub fn should_draw_grid_lines(viewport: &Viewport) -> bool {
    viewport.scaled_cell_size() >= GRID_LINE_MIN_CELL_PX
}

pub fn grid_lines(viewport: &Viewport, bounds: VisibleBounds, canvas_w: f64, canvas_h: f64) -> GridLines {
    let vertical = (bounds.min_x..=bounds.max_x)
        .map(|x| viewport.world_to_screen(x as f64, 0.0, canvas_w, canvas_h).0)
        .collect();
    let horizontal = (bounds.min_y..=bounds.max_y)
        .map(|y| viewport.world_to_screen(0.0, y as f64, canvas_w, canvas_h).1)
        .collect();
    GridLines { vertical, horizontal }
}
