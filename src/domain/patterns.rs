use super::{Cell, SparseGrid};

/// A named arrangement of alive cells that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<(i64, i64)>,  // Offsets from the pattern's top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Absolute cells of the pattern with its top-left corner at `origin`
    pub fn cells_at(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Top-left corner that centers the pattern on `cell`
    pub fn centered_origin(&self, cell: Cell) -> Cell {
        cell.offset(-(self.width / 2), -(self.height / 2))
    }

    /// Stamp the pattern onto the grid; existing alive cells are kept
    pub fn place_on(&self, grid: &mut SparseGrid, origin: Cell) {
        grid.extend(self.cells_at(origin));
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;
    
    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }
    
    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }
    
    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }
    
    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }
    
    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ]
        )
    }
    
    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }
    
    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),
                
                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                
                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                
                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ]
        )
    }
    
    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }
    
    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }
    
    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }
    
    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::step_conway;

    #[test]
    fn test_dimensions_derived_from_cells() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
    }

    #[test]
    fn test_place_on_negative_origin() {
        let mut grid = SparseGrid::new();
        presets::block().place_on(&mut grid, Cell::new(-10, -20));
        assert_eq!(grid.count(), 4);
        assert!(grid.contains(Cell::new(-10, -20)));
        assert!(grid.contains(Cell::new(-9, -19)));
    }

    #[test]
    fn test_centered_origin() {
        let pulsar = presets::pulsar();
        assert_eq!(pulsar.centered_origin(Cell::new(0, 0)), Cell::new(-6, -6));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_oscillator_periods() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            let mut start = SparseGrid::new();
            pattern.place_on(&mut start, Cell::new(0, 0));
            let mut grid = start.clone();
            for _ in 0..period {
                grid = step_conway(&grid);
            }
            assert_eq!(grid, start, "{} should repeat after {} steps", pattern.name, period);
        }
    }

    #[test]
    fn test_lwss_moves_two_cells_per_period() {
        let mut start = SparseGrid::new();
        presets::lwss().place_on(&mut start, Cell::new(0, 0));
        let mut grid = start.clone();
        for _ in 0..4 {
            grid = step_conway(&grid);
        }
        assert_eq!(grid.count(), start.count());
        let moved: SparseGrid = start.iter().map(|c| c.offset(-2, 0)).collect();
        assert_eq!(grid, moved);
    }
}
