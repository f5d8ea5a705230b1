//! Configuration for the grid and the simulation clock.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change. Sections map onto `life.toml`:
//!
//! ```toml
//! [grid]
//! cols = 80
//! rows = 60
//! wrap = true
//! seed = 42
//! initial_density = 0.0
//! initial_patterns = [
//!     { pattern = "glider", col = 19, row = 19 },
//!     { pattern = "pulsar" },
//! ]
//!
//! [simulation]
//! speed = 10.0
//! max_steps_per_frame = 8
//! pause_on_cycle = true
//! cycle_history = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::grid::MAX_DIMENSION;
use crate::patterns;

/// A built-in pattern to stamp at startup. Missing coordinates centre it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<i32>,
}

impl Placement {
    pub fn at(pattern: &str, col: i32, row: i32) -> Self {
        Self {
            pattern: pattern.to_string(),
            col: Some(col),
            row: Some(row),
        }
    }

    pub fn centered(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            col: None,
            row: None,
        }
    }
}

/// Board size, edge behaviour and starting contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
    pub wrap: bool,
    /// Seed for the board RNG; `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Fraction of cells alive at startup; 0 leaves the board to the patterns.
    pub initial_density: f64,
    pub initial_patterns: Vec<Placement>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 60,
            wrap: false,
            seed: None,
            initial_density: 0.0,
            initial_patterns: vec![
                Placement::at("glider", 19, 19),
                Placement::at("blinker", 20, 17),
            ],
        }
    }
}

/// Stepping rate and catch-up behaviour.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second.
    pub speed: f64,
    /// `None` catches up on every missed step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps_per_frame: Option<u32>,
    pub pause_on_cycle: bool,
    pub cycle_history: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            max_steps_per_frame: None,
            pause_on_cycle: false,
            cycle_history: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidConfig(message()))
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        ensure(grid.cols > 0 && grid.cols <= MAX_DIMENSION, || {
            format!("grid.cols must be in 1..={MAX_DIMENSION}, got {}", grid.cols)
        })?;
        ensure(grid.rows > 0 && grid.rows <= MAX_DIMENSION, || {
            format!("grid.rows must be in 1..={MAX_DIMENSION}, got {}", grid.rows)
        })?;
        ensure((0.0..=1.0).contains(&grid.initial_density), || {
            format!("grid.initial_density must be in [0, 1], got {}", grid.initial_density)
        })?;
        for placement in &grid.initial_patterns {
            ensure(patterns::find(&placement.pattern).is_some(), || {
                format!("unknown pattern '{}'", placement.pattern)
            })?;
        }

        let sim = &self.simulation;
        ensure(sim.speed.is_finite() && sim.speed > 0.0, || {
            format!("simulation.speed must be positive, got {}", sim.speed)
        })?;
        ensure(sim.max_steps_per_frame != Some(0), || {
            "simulation.max_steps_per_frame must be at least 1".to_string()
        })?;
        ensure(!sim.pause_on_cycle || sim.cycle_history > 0, || {
            "simulation.cycle_history must be positive when pause_on_cycle is set".to_string()
        })?;

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(LifeConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(LifeConfig::from_toml("").unwrap(), LifeConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = LifeConfig::from_toml(
            r#"
            [grid]
            cols = 20
            wrap = true

            [simulation]
            speed = 30.0
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.cols, 20);
        assert_eq!(config.grid.rows, 60);
        assert!(config.grid.wrap);
        assert_eq!(config.simulation.speed, 30.0);
        assert_eq!(config.simulation.cycle_history, 10);
    }

    #[test]
    fn placements_parse_with_and_without_coordinates() {
        let config = LifeConfig::from_toml(
            r#"
            [grid]
            initial_patterns = [
                { pattern = "toad", col = 3, row = 4 },
                { pattern = "Pulsar" },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.grid.initial_patterns,
            vec![Placement::at("toad", 3, 4), Placement::centered("Pulsar")]
        );
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string(&LifeConfig::default()).unwrap();
        assert_eq!(LifeConfig::from_toml(&text).unwrap(), LifeConfig::default());
    }

    #[test]
    fn rejects_zero_width() {
        let config = LifeConfig {
            grid: GridConfig {
                cols: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_density_and_speed() {
        let mut config = LifeConfig::default();
        config.grid.initial_density = 1.5;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.simulation.speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.simulation.speed = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_pattern() {
        let mut config = LifeConfig::default();
        config.grid.initial_patterns.push(Placement::centered("spaceship"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_step_cap_and_empty_history() {
        let mut config = LifeConfig::default();
        config.simulation.max_steps_per_frame = Some(0);
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.simulation.pause_on_cycle = true;
        config.simulation.cycle_history = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            LifeConfig::from_toml("[grid]\ncols = \"wide\""),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = LifeConfig::load_or_default("/definitely/not/here/life.toml").unwrap();
        assert_eq!(config, LifeConfig::default());
    }
}
