//! Fixed-rate scheduling
//!
//! `timer_loop` drives a tick callback at a fixed rate in real time.
//! `FixedStep` is for frontends that get variable frame deltas and need to
//! know how many simulation ticks to run for each frame.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta accepted before clamping (seconds)
const MAX_FRAME_DT: f64 = 0.25;

/// Call `tick_fn` `rate` times per second until it breaks.
///
/// Late ticks are not made up: after an overrun the next tick starts right
/// away and the schedule restarts from there.
pub fn timer_loop<F>(rate: u32, mut tick_fn: F)
where
    F: FnMut() -> ControlFlow<()>,
{
    let period = Duration::from_secs_f64(1.0 / rate.max(1) as f64);
    let mut next = Instant::now();
    loop {
        if tick_fn().is_break() {
            break;
        }
        next += period;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        } else {
            log::trace!("tick overran by {:?}", now - next);
            next = now;
        }
    }
}

/// Accumulates real frame time into whole simulation ticks.
///
/// Used by frontends that render at their own frame rate (see
/// `Game::advance_frame`); the headless binary does not need it.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed seconds and return how many ticks to run.
    ///
    /// Capped at `MAX_SUBSTEPS`; time beyond the cap is dropped so a stalled
    /// frame cannot trigger a long catch-up burst.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }
}
