// clock.rs - Fixed-timestep accumulator driving generations from frame time

use std::time::Duration;

use tracing::warn;

/// Slowest accepted rate in generations per second.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest accepted rate; keeps the step interval above zero.
pub const MAX_SPEED: f64 = 1000.0;

/// Clamps a requested rate into [MIN_SPEED, MAX_SPEED]. NaN and infinities
/// fall back to MIN_SPEED.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        MIN_SPEED
    }
}

/// Time between generations at `speed`, truncated to whole nanoseconds so
/// that `speed` intervals never add up to more than one second.
pub fn step_interval(speed: f64) -> Duration {
    let nanos = (1e9 / clamp_speed(speed)) as u64;
    Duration::from_nanos(nanos.max(1))
}

/// Turns variable frame deltas into a count of fixed-size steps.
///
/// Time is kept in whole nanoseconds, so the same total elapsed time gives
/// the same number of steps however it is split across frames.
#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    accumulated         : Duration,
    max_steps_per_frame : Option<u32>,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// With a cap, a frame that falls further behind than `max` steps drops
    /// the rest of its backlog instead of carrying it forward.
    pub fn with_max_steps(max: Option<u32>) -> Self {
        Self {
            accumulated: Duration::ZERO,
            max_steps_per_frame: max,
        }
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn max_steps_per_frame(&self) -> Option<u32> {
        self.max_steps_per_frame
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Adds `dt` and returns how many steps are now due at `speed`.
    pub fn advance(&mut self, dt: Duration, speed: f64) -> u32 {
        self.accumulated += dt;
        let interval = step_interval(speed);

        let mut steps = 0u32;
        while self.accumulated >= interval {
            if self.max_steps_per_frame.is_some_and(|max| steps >= max) {
                let dropped = self.accumulated.as_nanos() / interval.as_nanos();
                warn!(steps, dropped, "step backlog over cap, dropping");
                self.accumulated = Duration::from_nanos(
                    (self.accumulated.as_nanos() % interval.as_nanos()) as u64,
                );
                break;
            }
            self.accumulated -= interval;
            steps += 1;
        }
        steps
    }
}
