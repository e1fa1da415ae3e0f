mod cell;
mod error;
mod grid;
mod patterns;
mod rules;
mod simulation;

pub use cell::{Cell, Transition};
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{
    ConwayRule, DayAndNightRule, HighLifeRule, Outcome, Rule, SeedsRule, all_rules, default_rule,
};
pub use simulation::Simulation;
