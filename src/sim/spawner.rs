//! Meteor and collectable spawning
//!
//! Spawn timers are accumulators that reset to zero when they fire.

use rand::Rng;

use super::body::Body;
use super::state::{Collectable, GameState, Meteor};
use super::waves::WaveConfig;
use crate::consts::*;

fn random_x<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0..SCREEN_WIDTH as u32) as f32
}

/// Create a meteor above the screen with speed drawn from the wave's range
pub fn spawn_meteor<R: Rng>(rng: &mut R, wave: &WaveConfig) -> Meteor {
    let x = random_x(rng);
    let scale = rng.random_range(METEOR_MIN_SCALE..METEOR_MAX_SCALE);
    let fall_speed = rng.random_range(wave.min_speed..wave.max_speed);
    let mut body = Body::square(x, SPAWN_Y, METEOR_SIZE);
    body.scale_by(scale);
    body.vel.y = fall_speed as f32;
    Meteor {
        body,
        fall_speed,
        scale,
    }
}

/// Create a heart pickup above the screen
pub fn spawn_collectable<R: Rng>(rng: &mut R) -> Collectable {
    let x = random_x(rng);
    let mut body = Body::square(x, SPAWN_Y, COLLECTABLE_SIZE);
    body.vel.y = COLLECTABLE_FALL_SPEED;
    Collectable { body }
}

/// Advance both spawn timers by `dt` and add whatever fires this tick
pub fn update_spawners(state: &mut GameState, dt: f64) {
    let wave = *state.current_wave();

    state.meteor_spawn_clock.advance(dt);
    if state.meteor_spawn_clock.fire_at(wave.spawn_interval) {
        let meteor = spawn_meteor(state.rng(), &wave);
        log::debug!(
            "meteor at x={} speed={} scale={:.2}",
            meteor.body.pos.x,
            meteor.fall_speed,
            meteor.scale
        );
        state.meteors.push(meteor);
    }

    state.collectable_spawn_clock.advance(dt);
    // The clock keeps running while lives are capped, so a heart drops as
    // soon as the player falls back under the cap.
    if state.lives >= MAX_LIVES {
        return;
    }
    let Some(interval) = wave.collectable_interval() else {
        return;
    };
    if state.collectable_spawn_clock.fire_at(interval) {
        let collectable = spawn_collectable(state.rng());
        log::debug!("collectable at x={}", collectable.body.pos.x);
        state.collectables.push(collectable);
    }
}
