use super::Outcome;

/// How a cell got to its current state in the last generation.
/// Presentation only; the simulation never reads it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Transition {
    /// Dead and stayed dead, or not evaluated yet
    #[default]
    Idle,
    Born,
    Survived,
    Died,
}

/// Cell represents the fundamental unit in Conway's Game of Life.
/// Its position always matches its index in the grid buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
    transition: Transition,
}

impl Cell {
    /// Create a dead cell at the given position
    pub const fn dead(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: false,
            transition: Transition::Idle,
        }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// Bring the cell to life outside of rule evaluation (seeding, stamping)
    pub(crate) fn revive(&mut self) {
        self.alive = true;
        self.transition = Transition::Idle;
    }

    /// Kill the cell outside of rule evaluation
    pub(crate) fn kill(&mut self) {
        self.alive = false;
        self.transition = Transition::Idle;
    }

    /// Apply a rule outcome, given the liveness the cell had before it.
    pub(crate) fn apply(&mut self, was_alive: bool, outcome: Outcome) {
        self.alive = outcome.is_alive();
        self.transition = match (was_alive, outcome) {
            (false, Outcome::Born) => Transition::Born,
            (true, Outcome::Survives) => Transition::Survived,
            (true, Outcome::Dies) => Transition::Died,
            // A rule may report Born for a live cell or Survives for a
            // dead one; liveness is what counts.
            (true, Outcome::Born) => Transition::Survived,
            (false, Outcome::Survives) => Transition::Born,
            (false, Outcome::Dies) => Transition::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cell_keeps_position() {
        let cell = Cell::dead(3, 7);
        assert_eq!((cell.row(), cell.col()), (3, 7));
        assert!(!cell.is_alive());
        assert_eq!(cell.transition(), Transition::Idle);
    }

    #[test]
    fn test_apply_tags_transitions() {
        let mut cell = Cell::dead(0, 0);

        cell.apply(false, Outcome::Born);
        assert!(cell.is_alive());
        assert_eq!(cell.transition(), Transition::Born);

        cell.apply(true, Outcome::Survives);
        assert!(cell.is_alive());
        assert_eq!(cell.transition(), Transition::Survived);

        cell.apply(true, Outcome::Dies);
        assert!(!cell.is_alive());
        assert_eq!(cell.transition(), Transition::Died);

        cell.apply(false, Outcome::Dies);
        assert!(!cell.is_alive());
        assert_eq!(cell.transition(), Transition::Idle);
    }

    #[test]
    fn test_revive_and_kill_reset_transition() {
        let mut cell = Cell::dead(1, 1);
        cell.apply(false, Outcome::Born);
        cell.kill();
        assert!(!cell.is_alive());
        assert_eq!(cell.transition(), Transition::Idle);
        cell.revive();
        assert!(cell.is_alive());
        assert_eq!(cell.transition(), Transition::Idle);
    }
}
