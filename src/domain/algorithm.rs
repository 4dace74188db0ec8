//! Algorithm enum for selecting the stepping implementation.

use serde::{Deserialize, Serialize};

use super::{Rule, SparseGrid, engine};

/// Available stepping strategies. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Candidate set evaluated on the calling thread
    #[default]
    Sparse,
    /// Candidate set classified across the rayon pool
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    /// One-line summary shown under the stats
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Alive set + neighbors, serial",
            Algorithm::SparseParallel => "Alive set + neighbors, parallel",
        }
    }

    /// Advance `grid` one generation with this strategy
    pub fn step(self, grid: &SparseGrid, rule: &dyn Rule) -> SparseGrid {
        match self {
            Algorithm::Sparse => engine::step(grid, rule),
            Algorithm::SparseParallel => engine::step_parallel(grid, rule),
        }
    }
}
