// Domain layer - grid, rules and the simulation
pub mod domain;

// Application layer - configuration, seeding and the render loop
pub mod application;

// Infrastructure layer - terminal output
pub mod rendering;

// Re-exports for convenience
pub use application::{Config, Driver, FixedDelay};
pub use domain::{Cell, Grid, GridError, Outcome, Pattern, Rule, Simulation, presets};
pub use rendering::{GlyphStyle, TerminalRenderer};
