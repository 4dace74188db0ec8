//! Sparse generation stepping for an unbounded grid.
//!
//! Only alive cells and their Moore neighbors can change state in the next
//! generation: a dead cell with no alive neighbor is never born under a rule
//! without B0. Evaluating that candidate set instead of a bounded window
//! makes one step cost O(population), whatever the pattern's extent.

use std::collections::HashSet;

use log::trace;
use rayon::prelude::*;

use super::{Cell, CellState, ConwayRule, Rule, SparseGrid};

/// Every alive cell plus its 8 neighbors, de-duplicated
pub fn candidate_cells(grid: &SparseGrid) -> HashSet<Cell> {
    let mut candidates = HashSet::with_capacity(grid.count() * 9);
    for cell in grid.iter() {
        candidates.insert(cell);
        candidates.extend(cell.neighbors());
    }
    candidates
}

/// Alive cells among the 8 neighbors of `cell` (the cell itself excluded)
pub fn count_live_neighbors(grid: &SparseGrid, cell: Cell) -> u8 {
    cell.neighbors().filter(|&n| grid.contains(n)).count() as u8
}

fn next_state(grid: &SparseGrid, cell: Cell, rule: &dyn Rule) -> CellState {
    let current = CellState::from_alive(grid.contains(cell));
    rule.evolve(current, count_live_neighbors(grid, cell))
}

/// Compute the next generation. The input grid is never mutated.
pub fn step(grid: &SparseGrid, rule: &dyn Rule) -> SparseGrid {
    let candidates = candidate_cells(grid);
    trace!("step: {} alive, {} candidates", grid.count(), candidates.len());

    candidates
        .into_iter()
        .filter(|&cell| next_state(grid, cell, rule).is_alive())
        .collect()
}

/// Parallel variant of [`step`] using rayon; produces the same grid.
/// Pays off once the population reaches a few thousand cells.
pub fn step_parallel(grid: &SparseGrid, rule: &dyn Rule) -> SparseGrid {
    let candidates = candidate_cells(grid);
    trace!("step_parallel: {} alive, {} candidates", grid.count(), candidates.len());

    let survivors: HashSet<Cell> = candidates
        .into_par_iter()
        .filter(|&cell| next_state(grid, cell, rule).is_alive())
        .collect();
    SparseGrid::from(survivors)
}

/// One generation under Conway's B3/S23
pub fn step_conway(grid: &SparseGrid) -> SparseGrid {
    step(grid, &ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HighLifeRule, presets};
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_of(cells: &[(i64, i64)]) -> SparseGrid {
        cells.iter().copied().map(Cell::from).collect()
    }

    fn shifted(grid: &SparseGrid, dx: i64, dy: i64) -> SparseGrid {
        grid.iter().map(|c| c.offset(dx, dy)).collect()
    }

    #[test]
    fn test_empty_fixed_point() {
        let empty = SparseGrid::new();
        assert!(candidate_cells(&empty).is_empty());
        assert_eq!(step_conway(&empty), empty);
    }

    #[test]
    fn test_candidates_deduplicated() {
        // Neighborhoods of two adjacent cells cover a 4x3 block
        let grid = grid_of(&[(0, 0), (1, 0)]);
        assert_eq!(candidate_cells(&grid).len(), 12);

        let single = grid_of(&[(5, -5)]);
        assert_eq!(candidate_cells(&single).len(), 9);
    }

    #[test]
    fn test_count_live_neighbors_excludes_self() {
        let grid = grid_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(count_live_neighbors(&grid, Cell::new(0, 0)), 3);
        assert_eq!(count_live_neighbors(&grid, Cell::new(2, 2)), 1);
        assert_eq!(count_live_neighbors(&grid, Cell::new(-5, -5)), 0);
    }

    #[test]
    fn test_block_still_life() {
        let block = grid_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(step_conway(&block), block);
    }

    #[test]
    fn test_blinker_oscillator() {
        let horizontal = grid_of(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = grid_of(&[(1, -1), (1, 0), (1, 1)]);

        let next = step_conway(&horizontal);
        assert_eq!(next, vertical);
        assert_eq!(step_conway(&next), horizontal);
    }

    #[test]
    fn test_glider_translation() {
        let mut glider = SparseGrid::new();
        presets::glider().place_on(&mut glider, Cell::new(0, 0));

        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = step_conway(&grid);
        }
        assert_eq!(grid, shifted(&glider, 1, 1));
    }

    #[test]
    fn test_glider_crosses_origin_into_negative_space() {
        let mut glider = SparseGrid::new();
        presets::glider().place_on(&mut glider, Cell::new(-10, -10));

        let mut grid = glider.clone();
        for _ in 0..40 {
            grid = step_conway(&grid);
        }
        assert_eq!(grid, shifted(&glider, 10, 10));
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_of(&[(0, 0), (1, 0), (2, 0)]);
        let before = grid.clone();
        let _ = step_conway(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_determinism() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = SparseGrid::new();
        grid.randomize_region(Cell::new(-20, -20), Cell::new(20, 20), 0.35, &mut rng);

        assert_eq!(step_conway(&grid), step_conway(&grid));
    }

    #[test]
    fn test_lonely_cells_die() {
        let grid = grid_of(&[(0, 0), (10, 10)]);
        assert!(step_conway(&grid).is_empty());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = SparseGrid::new();
        grid.randomize_region(Cell::new(-40, -25), Cell::new(40, 25), 0.3, &mut rng);

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..5 {
            serial = step(&serial, &ConwayRule);
            parallel = step_parallel(&parallel, &ConwayRule);
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_rule_is_respected() {
        // Dead center has 6 alive neighbors: born only under HighLife
        let grid = grid_of(&[(-1, -1), (0, -1), (1, -1), (-1, 1), (0, 1), (1, 1)]);
        assert!(!step(&grid, &ConwayRule).contains(Cell::new(0, 0)));
        assert!(step(&grid, &HighLifeRule).contains(Cell::new(0, 0)));
    }
}
