/// Result of evaluating a rule for one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Dead cell comes to life
    Born,
    /// Live cell stays alive
    Survives,
    /// Cell is dead in the next generation, whether it was alive or not
    Dies,
}

impl Outcome {
    /// Liveness after the transition
    pub const fn is_alive(self) -> bool {
        matches!(self, Outcome::Born | Outcome::Survives)
    }
}

/// Trait for cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the outcome for a cell from its liveness and live-neighbor count
    fn evaluate(&self, alive: bool, neighbors: u8) -> Outcome;
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

    fn evaluate(&self, alive: bool, neighbors: u8) -> Outcome {
        match (alive, neighbors) {
            // underpopulation
            (true, 0 | 1) => Outcome::Dies,
            (true, 2 | 3) => Outcome::Survives,
            // overpopulation
            (true, _) => Outcome::Dies,
            // reproduction
            (false, 3) => Outcome::Born,
            (false, _) => Outcome::Dies,
        }
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evaluate(&self, alive: bool, neighbors: u8) -> Outcome {
        match (alive, neighbors) {
            (true, 2 | 3) => Outcome::Survives,
            (false, 3 | 6) => Outcome::Born,
            _ => Outcome::Dies,
        }
    }
}

/// Seeds (B2/S)
/// Every live cell dies each generation
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evaluate(&self, alive: bool, neighbors: u8) -> Outcome {
        match (alive, neighbors) {
            (false, 2) => Outcome::Born,
            _ => Outcome::Dies,
        }
    }
}

/// Day & Night (B3678/S34678)
/// Symmetric rule - inverse of a pattern follows same rules
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evaluate(&self, alive: bool, neighbors: u8) -> Outcome {
        match (alive, neighbors) {
            (true, 3 | 4 | 6 | 7 | 8) => Outcome::Survives,
            (false, 3 | 6 | 7 | 8) => Outcome::Born,
            _ => Outcome::Dies,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evaluate(true, 0), Outcome::Dies);
        assert_eq!(rule.evaluate(true, 1), Outcome::Dies);

        // Survival
        assert_eq!(rule.evaluate(true, 2), Outcome::Survives);
        assert_eq!(rule.evaluate(true, 3), Outcome::Survives);

        // Overpopulation
        assert_eq!(rule.evaluate(true, 4), Outcome::Dies);
        assert_eq!(rule.evaluate(true, 8), Outcome::Dies);

        // Reproduction
        assert_eq!(rule.evaluate(false, 3), Outcome::Born);
    }

    #[test]
    fn test_conway_dead_cells_stay_dead() {
        let rule = ConwayRule;
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(rule.evaluate(false, n), Outcome::Dies, "n = {n}");
        }
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = HighLifeRule;

        // HighLife specific: birth with 6 neighbors
        assert_eq!(rule.evaluate(false, 6), Outcome::Born);
        assert_eq!(rule.evaluate(false, 3), Outcome::Born);
        assert_eq!(rule.evaluate(true, 6), Outcome::Dies);
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = SeedsRule;

        // All living cells die
        assert_eq!(rule.evaluate(true, 0), Outcome::Dies);
        assert_eq!(rule.evaluate(true, 2), Outcome::Dies);
        assert_eq!(rule.evaluate(true, 8), Outcome::Dies);

        // Only born with 2 neighbors
        assert_eq!(rule.evaluate(false, 2), Outcome::Born);
        assert_eq!(rule.evaluate(false, 3), Outcome::Dies);
    }

    #[test]
    fn test_day_and_night_survival() {
        let rule = DayAndNightRule;
        assert_eq!(rule.evaluate(true, 4), Outcome::Survives);
        assert_eq!(rule.evaluate(true, 2), Outcome::Dies);
        assert_eq!(rule.evaluate(false, 8), Outcome::Born);
    }

    #[test]
    fn test_outcome_liveness() {
        assert!(Outcome::Born.is_alive());
        assert!(Outcome::Survives.is_alive());
        assert!(!Outcome::Dies.is_alive());
    }

    #[test]
    fn test_rule_names_are_unique() {
        let names: Vec<_> = all_rules().iter().map(|r| r.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
        assert_eq!(default_rule().name(), "Conway");
    }
}
