use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use torus_snake::app::GameLoop;
use torus_snake::game::GameConfig;
use torus_snake::input::TermInput;
use torus_snake::render::{Display, TermDisplay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Terminal snake on a toroidal board")]
struct Cli {
    /// Write a trace of game events to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Load game settings from a TOML file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let mut display = TermDisplay::new()?;
    let mut input = TermInput::new();
    let mut game = GameLoop::new(&config);

    let score = game.run(&mut display, &mut input)?;
    display.close(score)?;

    Ok(())
}

/// Log to a file rather than the terminal the game is drawing on.
/// Level defaults to info, overridable through RUST_LOG.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
