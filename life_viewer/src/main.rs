// main.rs - Interactive Conway's Game of Life viewer

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;     // Viewer state around the engine
mod config;  // life.toml with the [viewer] section
mod layout;  // Cell <-> screen mapping
mod theme;   // Colors
mod ui;      // eframe::App impl

use app::LifeApp;
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "life.toml")]
    config: PathBuf,

    /// Grid width in cells
    #[arg(long)]
    cols: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    rows: Option<i32>,

    /// Start with wrapped (toroidal) edges
    #[arg(long)]
    wrap: bool,

    /// Seed for the random fill
    #[arg(long)]
    seed: Option<u64>,

    /// Generations per second
    #[arg(long)]
    speed: Option<f64>,

    /// Fill the board randomly at startup with this density
    #[arg(long)]
    density: Option<f64>,

    /// Pause automatically when the board repeats a recent state
    #[arg(long)]
    pause_on_cycle: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if self.wrap {
            config.grid.wrap = true;
        }
        if self.seed.is_some() {
            config.grid.seed = self.seed;
        }
        if let Some(speed) = self.speed {
            config.simulation.speed = speed;
        }
        if let Some(density) = self.density {
            config.grid.initial_density = density;
        }
        if self.pause_on_cycle {
            config.simulation.pause_on_cycle = true;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let app = LifeApp::new(&config)?;
    let size = layout::window_size(&config.viewer, config.grid.cols, config.grid.rows);
    info!(cols = config.grid.cols, rows = config.grid.rows, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
