use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

/// Offsets of the 8 Moore-neighborhood cells.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A coordinate on the unbounded grid plane.
/// Negative coordinates are as valid as positive ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell shifted by (dx, dy). Wraps at the edges of the i64 range.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The 8 surrounding cells, excluding `self`
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Canonical key form: `x,y` in decimal.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = LifeError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidCellKey(key.to_owned());
        let (x, y) = key.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// Alive/dead state of a single cell, as seen by a [`Rule`](super::Rule).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(CellState::Alive.evolve(4), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(8), CellState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let c = Cell::new(-5, 7);
        let n: Vec<Cell> = c.neighbors().collect();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        assert!(n.iter().all(|m| (m.x - c.x).abs() <= 1 && (m.y - c.y).abs() <= 1));
    }

    #[test]
    fn test_key_round_trip() {
        let c = Cell::new(-12, 340);
        assert_eq!(c.to_string(), "-12,340");
        assert_eq!("-12,340".parse::<Cell>().unwrap(), c);
        assert_eq!(" 3 , -4 ".parse::<Cell>().unwrap(), Cell::new(3, -4));
    }

    #[test]
    fn test_malformed_key_rejected() {
        for key in ["", "1", "1;2", "a,2", "1,b", "1,2,3"] {
            assert!(
                matches!(key.parse::<Cell>(), Err(LifeError::InvalidCellKey(_))),
                "{key:?} should not parse"
            );
        }
    }
}
