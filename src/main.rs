use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tui_snake::game::GameConfig;
use tui_snake::logging;
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// YAML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Initial tick interval in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.initial_speed_ms = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting snake");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
