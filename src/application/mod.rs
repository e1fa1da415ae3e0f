mod config;
mod driver;
mod seeding;

pub use config::{Config, ConfigError, PatternKind, Placement, RuleKind, StyleKind};
pub use driver::{Driver, FixedDelay, Pacer};
pub use seeding::seed_random;
