use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use term_life::application::{
    Config, Driver, FixedDelay, PatternKind, Placement, RuleKind, StyleKind,
};
use term_life::rendering::TerminalRenderer;

#[derive(Parser, Debug)]
#[command(name = "term_life", about = "Conway's Game of Life in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Grid rows
    #[arg(long)]
    height: Option<usize>,
    /// Grid columns
    #[arg(long)]
    width: Option<usize>,
    /// Delay between generations in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Fill the grid randomly with this percentage of live cells
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    live_percent: Option<u8>,
    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    rule: Option<RuleKind>,
    #[arg(long, value_enum)]
    style: Option<StyleKind>,
    /// Place a single preset pattern, replacing the configured placements
    #[arg(long, value_enum, requires = "at")]
    pattern: Option<PatternKind>,
    /// Anchor for --pattern as ROW,COL
    #[arg(long, value_parser = parse_anchor, allow_hyphen_values = true, requires = "pattern")]
    at: Option<(isize, isize)>,
    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u64>,
    /// Keep previous frames instead of clearing the screen
    #[arg(long)]
    no_clear: bool,
}

fn parse_anchor(value: &str) -> Result<(isize, isize), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<isize>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(delay) = self.delay_ms {
            config.generation_delay_ms = delay;
        }
        if self.live_percent.is_some() {
            config.initial_live_percentage = self.live_percent;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if let (Some(pattern), Some((row, col))) = (self.pattern, self.at) {
            config.placements = vec![Placement { pattern, row, col }];
        }
        if self.generations.is_some() {
            config.max_generations = self.generations;
        }
        if self.no_clear {
            config.clear_screen = false;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // Frames go to stdout; keep logs quiet unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = Cli::parse().into_config().context("Failed to load configuration")?;
    let simulation = config
        .build_simulation()
        .context("Invalid simulation configuration")?;

    let renderer = TerminalRenderer::new(config.style.into(), config.clear_screen);
    let mut driver = Driver::new(simulation, renderer, FixedDelay(config.generation_delay()));

    info!("Starting term_life");
    let stdout = io::stdout();
    driver
        .run(&mut stdout.lock(), config.max_generations)
        .context("Failed to write frame")?;

    Ok(())
}
