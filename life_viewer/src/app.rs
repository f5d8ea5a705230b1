// app.rs - Viewer state wrapped around the engine's Simulation

use std::time::Instant;

use anyhow::Result;
use life_engine::{PATTERNS, Simulation};
use tracing::debug;

use crate::config::{AppConfig, ViewerConfig};
use crate::theme::Theme;

/// What a held mouse button does to the cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Paint,
    Erase,
}

/// Controls the panel can trigger; keyboard shortcuts map onto the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    ToggleWrap,
    ApplyPattern,
}

pub struct LifeApp {
    pub sim              : Simulation,
    pub viewer           : ViewerConfig,
    pub theme            : Theme,
    pub hovered          : Option<(i32, i32)>,
    pub selected_pattern : usize,
    pub random_density   : f64,
    last_frame           : Instant,
}

impl LifeApp {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let sim = Simulation::new(&config.life())?;
        Ok(Self {
            sim,
            theme: Theme::from(&config.viewer.colors),
            random_density: config.viewer.random_density,
            viewer: config.viewer.clone(),
            hovered: None,
            selected_pattern: 0,
            last_frame: Instant::now(),
        })
    }

    /// Feeds the wall-clock time since the previous frame to the engine.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.sim.advance(dt)
    }

    pub fn run(&mut self, command: Command) {
        debug!(?command, "command");
        match command {
            Command::ToggleRunning => self.sim.toggle_running(),
            Command::Step => self.sim.step(),
            Command::Clear => self.sim.clear(),
            Command::Randomize => {
                self.sim.set_running(false);
                self.sim.randomize(self.random_density);
            }
            Command::ToggleWrap => {
                self.sim.toggle_wrap();
            }
            Command::ApplyPattern => {
                if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
                    self.sim.load_pattern(pattern);
                }
            }
        }
    }

    pub fn brush(&mut self, brush: Brush, (col, row): (i32, i32)) {
        match brush {
            Brush::Paint => self.sim.paint(col, row),
            Brush::Erase => self.sim.erase(col, row),
        }
    }

    /// Cells to outline around the hovered one, if the option is on.
    pub fn highlighted_neighbors(&self) -> Vec<(i32, i32)> {
        match self.hovered {
            Some((col, row)) if self.viewer.highlight_neighbors => {
                self.sim.grid().neighbors(col, row).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "Generation {} | Alive {} | {} | {:.1} gen/s",
            self.sim.generation(),
            self.sim.alive_count(),
            if self.sim.is_wrapped() { "Wrapped" } else { "Bounded" },
            self.sim.speed(),
        )
    }
}
