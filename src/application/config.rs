//! Run configuration.
//!
//! A [`Config`] can be deserialized from a JSON file; every field has a
//! default, so a partial file (or no file at all) is fine. The CLI layers its
//! flags on top of whatever was loaded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::seeding::seed_random;
use crate::domain::{
    ConwayRule, DayAndNightRule, Grid, GridError, HighLifeRule, Pattern, Rule, SeedsRule,
    Simulation, presets,
};
use crate::rendering::GlyphStyle;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("initial live percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(u8),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Rule selection, mapped onto the domain rule types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    #[default]
    Conway,
    HighLife,
    Seeds,
    DayAndNight,
}

impl RuleKind {
    pub fn build(self) -> Box<dyn Rule> {
        match self {
            RuleKind::Conway => Box::new(ConwayRule),
            RuleKind::HighLife => Box::new(HighLifeRule),
            RuleKind::Seeds => Box::new(SeedsRule),
            RuleKind::DayAndNight => Box::new(DayAndNightRule),
        }
    }
}

/// Named preset patterns that can be placed from config or the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Glider,
    GliderGun,
    Block,
    Blinker,
    Toad,
    Beacon,
    Lwss,
    RPentomino,
    Acorn,
}

impl PatternKind {
    pub fn pattern(self) -> &'static Pattern {
        match self {
            PatternKind::Glider => &presets::GLIDER,
            PatternKind::GliderGun => &presets::GLIDER_GUN,
            PatternKind::Block => &presets::BLOCK,
            PatternKind::Blinker => &presets::BLINKER,
            PatternKind::Toad => &presets::TOAD,
            PatternKind::Beacon => &presets::BEACON,
            PatternKind::Lwss => &presets::LWSS,
            PatternKind::RPentomino => &presets::R_PENTOMINO,
            PatternKind::Acorn => &presets::ACORN,
        }
    }
}

/// A pattern stamped at an anchor before the first generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pattern: PatternKind,
    pub row: isize,
    pub col: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    #[default]
    Plain,
    Transitions,
}

impl From<StyleKind> for GlyphStyle {
    fn from(kind: StyleKind) -> Self {
        match kind {
            StyleKind::Plain => GlyphStyle::Plain,
            StyleKind::Transitions => GlyphStyle::Transitions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid rows
    pub height: usize,
    /// Grid columns
    pub width: usize,
    /// Pause between rendered generations
    pub generation_delay_ms: u64,
    /// Random fill density; `None` skips random seeding
    pub initial_live_percentage: Option<u8>,
    /// RNG seed for reproducible fills
    pub seed: Option<u64>,
    pub rule: RuleKind,
    pub style: StyleKind,
    pub placements: Vec<Placement>,
    /// Stop after this many generations; run forever when unset
    pub max_generations: Option<u64>,
    /// Clear the terminal before each frame
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: 50,
            width: 90,
            generation_delay_ms: 300,
            initial_live_percentage: None,
            seed: None,
            rule: RuleKind::default(),
            style: StyleKind::default(),
            placements: vec![Placement {
                pattern: PatternKind::GliderGun,
                row: 20,
                col: 20,
            }],
            max_generations: None,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Check the values before anything is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(GridError::InvalidDimensions {
                height: self.height,
                width: self.width,
            }
            .into());
        }
        if let Some(percentage) = self.initial_live_percentage {
            if percentage > 100 {
                return Err(ConfigError::InvalidPercentage(percentage));
            }
        }
        Ok(())
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Seed and stamp a grid, then hand it to a new simulation
    pub fn build_simulation(&self) -> Result<Simulation, ConfigError> {
        self.validate()?;

        let mut grid = Grid::new(self.height, self.width)?;

        if let Some(percentage) = self.initial_live_percentage {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            seed_random(&mut grid, percentage, &mut rng);
        }

        for placement in &self.placements {
            let pattern = placement.pattern.pattern();
            debug!(
                "stamping {} at ({}, {})",
                pattern.name, placement.row, placement.col
            );
            pattern.stamp(&mut grid, placement.row, placement.col);
        }

        let simulation = Simulation::from_grid(grid, self.rule.build());

        info!(
            "Built {}x{} {} simulation with {} live cells",
            self.height,
            self.width,
            simulation.rule().name(),
            simulation.grid().population()
        );
        Ok(simulation)
    }
}
