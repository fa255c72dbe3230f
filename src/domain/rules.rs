/// Trait for cellular automaton rules.
/// The step engine asks the rule for every cell's next state.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Next alive flag of a cell given its current flag and live neighbor count
    fn next_state(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
