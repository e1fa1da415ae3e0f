use super::{ConwayRule, Grid, GridError, Rule};

/// Simulation owns a grid and the rule that evolves it.
///
/// Each call to [`Simulation::advance`] evaluates the rule for every cell
/// against the current generation only, stages the results and then swaps
/// them in, so no cell ever sees a neighbor's next state.
///
/// Seeding and stamping happen on a [`Grid`] before it is handed over with
/// [`Simulation::from_grid`]; afterwards only `advance` changes it.
///
/// ```compile_fail
/// use term_life::domain::Simulation;
///
/// let mut sim = Simulation::new(5, 5).unwrap();
/// sim.grid_mut().set_alive(0, 0);
/// ```
pub struct Simulation {
    grid: Grid,
    rule: Box<dyn Rule>,
    generation: u64,
}

impl Simulation {
    /// Create a Conway simulation on an empty grid
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        Self::with_rule(height, width, Box::new(ConwayRule))
    }

    pub fn with_rule(height: usize, width: usize, rule: Box<dyn Rule>) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(height, width)?, rule))
    }

    /// Take ownership of an already seeded grid. Generation counting starts at 0.
    pub fn from_grid(grid: Grid, rule: Box<dyn Rule>) -> Self {
        Self {
            grid,
            rule,
            generation: 0,
        }
    }

    /// Advance the whole grid by one generation
    pub fn advance(&mut self) {
        let (height, width) = self.grid.dimensions();

        for row in 0..height {
            for col in 0..width {
                let alive = self.grid.get(row, col).is_alive();
                let neighbors = self.grid.count_live_neighbors(row, col);
                let outcome = self.rule.evaluate(alive, neighbors);
                self.grid.stage(row, col, outcome);
            }
        }

        self.grid.swap();
        self.generation += 1;
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of completed `advance` calls
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }
}
