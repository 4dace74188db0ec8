use super::CellState;

/// Trait for cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life.
///
/// The sparse stepper only evaluates alive cells and their neighbors, so a
/// rule must never give birth to a cell with zero alive neighbors (no B0).
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, neighbors: u8) -> CellState;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        current.evolve(neighbors)
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born.
/// Creates replicators - patterns that create copies of themselves
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3 | 6) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Dead, 2) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// Day & Night (B3678/S34678)
#[derive(Clone, Copy)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Alive, 3 | 4 | 6 | 7 | 8) => CellState::Alive,
            (CellState::Dead, 3 | 6 | 7 | 8) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

/// Look up a rule by its display name (case-insensitive)
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name))
}
