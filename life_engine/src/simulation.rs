// simulation.rs - Grid plus the run state a frame loop drives

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use crate::clock::{FixedTimestep, clamp_speed};
use crate::config::LifeConfig;
use crate::error::{Error, Result};
use crate::grid::{Grid, Topology};
use crate::history::CycleDetector;
use crate::patterns::{self, Pattern};
use crate::stepper::step_once;

/// Everything the input side can poke at: the board, the generation
/// counter, running/paused, speed and the step clock.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid       : Grid,
    generation : u64,
    running    : bool,
    speed      : f64,
    clock      : FixedTimestep,
    rng        : ChaCha8Rng,
    cycles     : Option<CycleDetector>,
}

impl Simulation {
    /// Builds the board described by `config`, paused at generation 0.
    pub fn new(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let grid_config = &config.grid;

        let mut grid = Grid::with_topology(
            grid_config.cols,
            grid_config.rows,
            Topology::from_wrap(grid_config.wrap),
        )?;

        let mut rng = match grid_config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        if grid_config.initial_density > 0.0 {
            grid.randomize(grid_config.initial_density, &mut rng);
        }

        for placement in &grid_config.initial_patterns {
            let pattern = patterns::find(&placement.pattern)
                .ok_or_else(|| Error::InvalidConfig(format!("unknown pattern '{}'", placement.pattern)))?;
            match (placement.col, placement.row) {
                (Some(col), Some(row)) => patterns::stamp(&mut grid, pattern, col, row),
                _ => patterns::stamp_centered(&mut grid, pattern),
            }
        }

        let sim = &config.simulation;
        let cycles = sim.pause_on_cycle.then(|| CycleDetector::new(sim.cycle_history));

        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            wrap = grid.is_wrapped(),
            alive = grid.alive_count(),
            "simulation ready"
        );

        Ok(Self {
            grid,
            generation: 0,
            running: false,
            speed: clamp_speed(sim.speed),
            clock: FixedTimestep::with_max_steps(sim.max_steps_per_frame),
            rng,
            cycles,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_wrapped(&self) -> bool {
        self.grid.is_wrapped()
    }

    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    pub fn set_running(&mut self, running: bool) {
        if !running {
            self.clock.reset();
        }
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = clamp_speed(speed);
    }

    /// Feeds one frame's elapsed time to the clock and runs the steps due.
    /// Returns how many generations were advanced.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            self.clock.reset();
            return 0;
        }

        let due = self.clock.advance(dt, self.speed);
        let mut done = 0;
        for _ in 0..due {
            self.step_generation();
            done += 1;
            if self.repeats_recent_state() {
                info!(generation = self.generation, "board repeats a recent state, pausing");
                self.set_running(false);
                break;
            }
        }
        if done > 0 {
            trace!(steps = done, generation = self.generation, "advanced");
        }
        done
    }

    /// Single manual step; always leaves the simulation paused.
    pub fn step(&mut self) {
        self.set_running(false);
        self.step_generation();
    }

    fn step_generation(&mut self) {
        if let Some(detector) = &mut self.cycles {
            detector.observe(self.grid.state_hash());
        }
        step_once(&mut self.grid);
        self.generation += 1;
    }

    fn repeats_recent_state(&self) -> bool {
        self.cycles
            .as_ref()
            .is_some_and(|detector| detector.contains(self.grid.state_hash()))
    }

    fn restart_history(&mut self) {
        self.generation = 0;
        if let Some(detector) = &mut self.cycles {
            detector.reset();
        }
    }

    pub fn toggle_wrap(&mut self) -> Topology {
        let topology = self.grid.toggle_wrap();
        if let Some(detector) = &mut self.cycles {
            detector.reset();
        }
        topology
    }

    /// Empties the board, pauses and restarts the generation count.
    pub fn clear(&mut self) {
        self.set_running(false);
        self.grid.clear();
        self.restart_history();
    }

    pub fn randomize(&mut self, density: f64) {
        self.grid.randomize(density, &mut self.rng);
        self.restart_history();
    }

    pub fn paint(&mut self, col: i32, row: i32) {
        self.grid.set_alive(col, row, true);
    }

    pub fn erase(&mut self, col: i32, row: i32) {
        self.grid.set_alive(col, row, false);
    }

    pub fn toggle_cell(&mut self, col: i32, row: i32) {
        self.grid.toggle(col, row);
    }

    pub fn stamp(&mut self, pattern: &Pattern, col: i32, row: i32) {
        patterns::stamp(&mut self.grid, pattern, col, row);
    }

    /// Replaces the board with `pattern` centred, like a fresh start.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.set_running(false);
        self.grid.clear();
        patterns::stamp_centered(&mut self.grid, pattern);
        self.restart_history();
        info!(pattern = pattern.name, "pattern loaded");
    }
}
