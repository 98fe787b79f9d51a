//! Step pacing for interactive playback.
//!
//! The core simulation is a synchronous step function with no real-time
//! dependency; pacing is layered on top by the frame loop. A [`Pacer`] turns
//! frame time into a step budget, so tests can drive the world directly while
//! the binary chooses between a fixed rate and an unthrottled mode.

/// Converts elapsed frame time into a number of simulation steps to run.
pub trait Pacer {
    /// Steps to run for a frame that took `frame_dt` seconds.
    fn budget(&mut self, frame_dt: f32) -> usize;
}

/// Runs the simulation at a fixed number of ticks per second.
#[derive(Debug, Clone)]
pub struct FixedRate {
    ticks_per_second: f32,
    accumulator: f32,
}

impl FixedRate {
    /// Creates a pacer targeting `ticks_per_second`.
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            ticks_per_second,
            accumulator: 0.0,
        }
    }

    /// Changes the target rate, keeping the fractional carry.
    pub fn set_rate(&mut self, ticks_per_second: f32) {
        self.ticks_per_second = ticks_per_second;
    }

    /// The current target rate.
    pub fn rate(&self) -> f32 {
        self.ticks_per_second
    }
}

impl Pacer for FixedRate {
    fn budget(&mut self, frame_dt: f32) -> usize {
        self.accumulator += frame_dt * self.ticks_per_second;
        // A stalled frame pays back at most one second of backlog.
        self.accumulator = self.accumulator.min(self.ticks_per_second);
        let steps = self.accumulator.floor();
        self.accumulator -= steps;
        steps as usize
    }
}

/// Runs a fixed batch of steps every frame, as fast as the host allows.
#[derive(Debug, Clone)]
pub struct Turbo {
    /// Steps per frame.
    pub steps_per_frame: usize,
}

impl Pacer for Turbo {
    fn budget(&mut self, _frame_dt: f32) -> usize {
        self.steps_per_frame
    }
}
