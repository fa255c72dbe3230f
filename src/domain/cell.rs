/// CellState is the per-position record of the simulation.
/// `next` is scratch space for the step engine and is never exposed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellState {
    previous: bool,
    current: bool,
    next: bool,
}

/// How a cell changed across the last committed step.
/// This is what a presenter maps to a color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Dead before, alive now
    Born,
    /// Alive before, dead now
    Died,
    Alive,
    Dead,
}

impl CellState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.current
    }

    /// State before the last committed step
    pub const fn was_alive(self) -> bool {
        self.previous
    }

    pub const fn transition(self) -> Transition {
        match (self.previous, self.current) {
            (false, true) => Transition::Born,
            (true, false) => Transition::Died,
            (true, true) => Transition::Alive,
            (false, false) => Transition::Dead,
        }
    }

    pub(super) fn set_alive(&mut self, alive: bool) {
        self.current = alive;
    }

    /// Write the value computed during the read phase of a step
    pub(super) fn stage(&mut self, next: bool) {
        self.next = next;
    }

    /// Shift the generations: previous <- current, current <- next
    pub(super) fn commit(&mut self) {
        self.previous = self.current;
        self.current = self.next;
    }

    /// Fresh state with only the current flag set
    pub(super) const fn seeded(alive: bool) -> Self {
        Self {
            previous: false,
            current: alive,
            next: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead_everywhere() {
        let cell = CellState::default();
        assert!(!cell.is_alive());
        assert!(!cell.was_alive());
        assert_eq!(cell.transition(), Transition::Dead);
    }

    #[test]
    fn test_commit_shifts_generations() {
        let mut cell = CellState::seeded(true);
        cell.stage(false);
        cell.commit();
        assert!(cell.was_alive());
        assert!(!cell.is_alive());
        assert_eq!(cell.transition(), Transition::Died);

        cell.stage(true);
        cell.commit();
        assert_eq!(cell.transition(), Transition::Born);

        cell.stage(true);
        cell.commit();
        assert_eq!(cell.transition(), Transition::Alive);
    }

    #[test]
    fn test_painting_touches_only_current() {
        let mut cell = CellState::default();
        cell.set_alive(true);
        assert!(cell.is_alive());
        assert!(!cell.was_alive());
    }
}
