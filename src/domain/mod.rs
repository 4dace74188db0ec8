mod cell;
mod grid;
mod rules;
mod patterns;
mod algorithm;
pub mod engine;

pub use cell::{Cell, CellState, NEIGHBOR_OFFSETS};
pub use grid::SparseGrid;
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule, rule_by_name};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
