//! Fixed-tick time accumulators
//!
//! Every timer in the game is a running seconds counter advanced once per
//! tick by `SIM_DT`. Events fire by comparing the counter to a threshold.

use serde::{Deserialize, Serialize};

use crate::consts::{JUMP_FRAME, WALK_FRAME_WRAP, WALK_FRAMES_PER_SEC};

/// A running time counter in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    seconds: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.seconds += dt;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.seconds = 0.0;
    }

    #[inline]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Fires once the counter reaches `threshold`, resetting to zero.
    /// Any overshoot is discarded rather than carried into the next period.
    pub fn fire_at(&mut self, threshold: f64) -> bool {
        if self.seconds >= threshold {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Set the counter directly (debug/testing)
    pub fn set(&mut self, seconds: f64) {
        self.seconds = seconds;
    }
}

/// Walk-cycle animation driven by a fractional frame counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Fractional frame position; the integer part selects the walk frame
    clock: f64,
    /// Frame selected this tick
    frame: usize,
}

impl AnimationState {
    /// Standing still. The walk counter is kept so walking resumes mid-cycle.
    pub fn idle(&mut self) {
        self.frame = 0;
    }

    /// Advance the walk cycle by one tick of `dt` seconds
    pub fn walk(&mut self, dt: f64) {
        self.clock += WALK_FRAMES_PER_SEC * dt;
        if self.clock > WALK_FRAME_WRAP {
            self.clock = 0.0;
        }
        self.frame = self.clock as usize;
    }

    /// Airborne pose
    pub fn jump(&mut self) {
        self.frame = JUMP_FRAME;
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }
}
