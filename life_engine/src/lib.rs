// lib.rs - Conway's Game of Life engine
//
// Grid topology, the two-phase generation step, and the fixed-timestep
// clock. Rendering lives elsewhere and only reads from here.

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod simulation;
pub mod stepper;

pub use clock::{FixedTimestep, MAX_SPEED, MIN_SPEED};
pub use config::{GridConfig, LifeConfig, Placement, SimulationConfig};
pub use error::{Error, Result};
pub use grid::{CellView, Grid, MAX_DIMENSION, Topology};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};
pub use simulation::Simulation;
pub use stepper::{next_state, step_once};
