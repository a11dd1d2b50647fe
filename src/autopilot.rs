//! Demo bot
//!
//! Plays through the same keyboard interface as a person: each tick it looks
//! at the state and decides which keys to hold. It sidesteps the meteor that
//! will reach the dino soonest, otherwise walks toward hearts, otherwise
//! drifts back to the middle.

use crate::consts::*;
use crate::platform::{Key, PressedKeys};
use crate::sim::{GamePhase, GameState};

/// Only meteors arriving within this many ticks are worth dodging
const LOOKAHEAD_TICKS: f32 = 45.0;
/// Extra horizontal clearance kept from a threatening meteor
const CLEARANCE: f32 = 12.0;
/// Distance from a screen edge where the bot turns around
const EDGE_MARGIN: f32 = 60.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    keys: PressedKeys,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the keys to hold for the next tick
    pub fn update(&mut self, state: &GameState) -> &PressedKeys {
        self.keys.release_all();

        if state.phase == GamePhase::Idle {
            self.keys.press(Key::Return);
            return &self.keys;
        }
        if !state.is_running() {
            return &self.keys;
        }

        let player = &state.player.body;
        let x = player.pos.x;

        if let Some(threat_x) = nearest_threat(state) {
            let go_right = if x < EDGE_MARGIN {
                true
            } else if x > SCREEN_WIDTH - EDGE_MARGIN {
                false
            } else {
                threat_x <= x
            };
            self.keys
                .press(if go_right { Key::RightArrow } else { Key::LeftArrow });
            return &self.keys;
        }

        let target = state
            .collectables
            .iter()
            .map(|c| c.body.pos.x)
            .min_by(|a, b| (a - x).abs().total_cmp(&(b - x).abs()))
            .unwrap_or(SCREEN_WIDTH / 2.0);
        let tolerance = if state.collectables.is_empty() {
            50.0
        } else {
            PLAYER_SPEED
        };
        if target - x > tolerance {
            self.keys.press(Key::RightArrow);
        } else if x - target > tolerance {
            self.keys.press(Key::LeftArrow);
        }
        &self.keys
    }
}

/// x of the meteor on a collision course that lands first
fn nearest_threat(state: &GameState) -> Option<f32> {
    let player = &state.player.body;
    state
        .meteors
        .iter()
        .filter(|m| m.body.min().y <= player.max().y)
        .filter(|m| {
            let reach = m.body.half_extents.x + player.half_extents.x + CLEARANCE;
            (m.body.pos.x - player.pos.x).abs() < reach
        })
        .map(|m| {
            let gap = (player.min().y - m.body.max().y).max(0.0);
            (gap / m.fall_speed.max(1) as f32, m.body.pos.x)
        })
        .filter(|(ticks, _)| *ticks <= LOOKAHEAD_TICKS)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, threat_x)| threat_x)
}
