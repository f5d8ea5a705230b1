// config.rs - life.toml as seen by the viewer: engine sections plus [viewer]

use std::path::Path;

use anyhow::{Context, Result};
use life_engine::{GridConfig, LifeConfig, SimulationConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

pub type Rgb = [u8; 3];

/// Look and feel of the board and control panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Edge length of one cell in points.
    pub tile: f32,
    /// Gap left between neighbouring cells.
    pub gap: f32,
    pub panel_width: f32,
    pub padding: f32,
    /// Density used by the Random button.
    pub random_density: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Also light up the hovered cell's linked neighbors.
    pub highlight_neighbors: bool,
    pub colors: ColorConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile: 10.0,
            gap: 1.0,
            panel_width: 290.0,
            padding: 14.0,
            random_density: 0.25,
            min_speed: 1.0,
            max_speed: 60.0,
            highlight_neighbors: false,
            colors: ColorConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub dead: Rgb,
    pub alive: Rgb,
    pub hover: Rgb,
    pub neighbor: Rgb,
    pub grid_line: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [14, 15, 18],
            dead: [30, 32, 38],
            alive: [235, 220, 140],
            hover: [120, 190, 210],
            neighbor: [21, 225, 90],
            grid_line: [38, 40, 46],
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.tile >= 2.0, "viewer.tile must be at least 2");
        anyhow::ensure!(
            self.gap >= 0.0 && self.gap < self.tile,
            "viewer.gap must be in [0, tile)"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.random_density),
            "viewer.random_density must be in [0, 1]"
        );
        anyhow::ensure!(
            self.min_speed > 0.0 && self.min_speed < self.max_speed,
            "viewer.min_speed must be positive and below max_speed"
        );
        Ok(())
    }
}

/// The whole config file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub viewer: ViewerConfig,
}

impl AppConfig {
    pub fn life(&self) -> LifeConfig {
        LifeConfig {
            grid: self.grid.clone(),
            simulation: self.simulation.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.life().validate()?;
        self.viewer.validate()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parsing config")?;
        config.validate()?;
        Ok(config)
    }

    /// Missing file means defaults; a broken one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("loading {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
