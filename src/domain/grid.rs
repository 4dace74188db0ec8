use std::collections::HashSet;

use rand::Rng;

use super::Cell;

/// SparseGrid stores only the alive cells of an unbounded plane.
/// A cell is alive if and only if it is a member; memory grows with
/// the population, never with the extent of the pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashSet<Cell>,
}

impl SparseGrid {
    /// Create an empty grid (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell alive. Adding an alive cell is a no-op.
    pub fn add(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Mark a cell dead. Removing a dead cell is a no-op.
    pub fn remove(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Flip a cell; returns the new state (true = alive)
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Read-only view of the alive set. Iteration order is unspecified.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of alive cells
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Smallest rectangle (min corner, max corner) holding every alive cell
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Bring each cell in the inclusive rectangle `min..=max` to life with
    /// probability `density`. Cells outside the rectangle keep their state;
    /// cells inside that lose the roll are left as they were.
    pub fn randomize_region<R: Rng>(&mut self, min: Cell, max: Cell, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if rng.random_bool(density) {
                    self.add(Cell::new(x, y));
                }
            }
        }
    }
}

impl FromIterator<Cell> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<HashSet<Cell>> for SparseGrid {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

impl Extend<Cell> for SparseGrid {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_of(cells: &[(i64, i64)]) -> SparseGrid {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut grid = SparseGrid::new();
        grid.add(Cell::new(1, 2));
        grid.add(Cell::new(1, 2));
        assert_eq!(grid.count(), 1);
        assert!(grid.contains(Cell::new(1, 2)));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut grid = grid_of(&[(0, 0)]);
        grid.remove(Cell::new(5, 5));
        assert_eq!(grid, grid_of(&[(0, 0)]));
        grid.remove(Cell::new(0, 0));
        grid.remove(Cell::new(0, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_toggle_involution() {
        let original = grid_of(&[(0, 0), (-3, 4), (100, -100)]);
        for c in [Cell::new(0, 0), Cell::new(7, 7), Cell::new(i64::MIN, i64::MAX)] {
            let mut grid = original.clone();
            let first = grid.toggle(c);
            assert_eq!(first, !original.contains(c));
            grid.toggle(c);
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = SparseGrid::new();
        grid.add(Cell::new(-1_000_000, -42));
        assert!(grid.contains(Cell::new(-1_000_000, -42)));
        assert!(!grid.contains(Cell::new(1_000_000, 42)));
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_of(&[(0, 0), (1, 1)]);
        grid.clear();
        assert_eq!(grid.count(), 0);
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(SparseGrid::new().bounding_box(), None);
        let grid = grid_of(&[(2, -1), (-4, 3), (0, 0)]);
        assert_eq!(grid.bounding_box(), Some((Cell::new(-4, -1), Cell::new(2, 3))));
    }

    #[test]
    fn test_randomize_region_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = grid_of(&[(50, 50)]);
        grid.randomize_region(Cell::new(-5, -5), Cell::new(5, 5), 0.5, &mut rng);

        assert!(grid.contains(Cell::new(50, 50)));
        let inside = grid.iter().filter(|c| c.x.abs() <= 5 && c.y.abs() <= 5).count();
        assert_eq!(inside + 1, grid.count());
        assert!(inside > 0 && inside < 121);
    }

    #[test]
    fn test_randomize_region_full_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = SparseGrid::new();
        grid.randomize_region(Cell::new(0, 0), Cell::new(3, 2), 1.0, &mut rng);
        assert_eq!(grid.count(), 12);
    }
}
