use super::{Algorithm, LifeGrid, rules::{Rule, default_rule}};

/// StepEngine advances a grid by whole generations.
///
/// A step has two phases: every cell's next state is computed from current
/// flags only, then all cells commit together. No cell ever sees a
/// neighbor's already-updated state, so the sweep order does not matter.
pub struct StepEngine {
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
}

impl StepEngine {
    pub fn new(rule: Box<dyn Rule>, algorithm: Algorithm) -> Self {
        Self { rule, algorithm }
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Perform one generation transition in place
    pub fn step(&self, grid: &mut LifeGrid) {
        match self.algorithm {
            Algorithm::Serial => grid.stage_serial(self.rule.as_ref()),
            Algorithm::Parallel => grid.stage_parallel(self.rule.as_ref()),
        }
        grid.commit();
    }
}

impl Default for StepEngine {
    fn default() -> Self {
        Self::new(default_rule(), Algorithm::default())
    }
}
