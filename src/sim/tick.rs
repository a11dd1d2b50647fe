//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{resolve_collectable_pickups, resolve_meteor_hits};
use super::player::update_player;
use super::spawner::update_spawners;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Walk left (left arrow / a)
    pub left: bool,
    /// Walk right (right arrow / d)
    pub right: bool,
    /// Jump (up arrow / w / space)
    pub jump: bool,
    /// Start a new run when not playing (return)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    state.events.clear();
    state.hit_flash = false;

    if input.restart && !state.is_running() {
        state.reset();
    }

    // Idle, Won and Lost wait for the restart key
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    update_player(state, input, dt);
    if resolve_meteor_hits(state) {
        // Out of lives: nothing else moves this tick
        return;
    }
    resolve_collectable_pickups(state);

    cycle_waves(state, dt);
}

/// Advance the wave clock and run whichever part of the wave cycle it falls in.
///
/// `(0, duration]` plays the wave, `(duration, duration + 3]` is the pause
/// before the next one, and past that the next wave starts. The final wave
/// skips the pause and wins on the first tick past its duration.
pub fn cycle_waves(state: &mut GameState, dt: f64) {
    state.wave_clock.advance(dt);
    let duration = state.current_wave().duration;
    let clock = state.wave_clock.seconds();

    if clock <= duration {
        state.phase = GamePhase::Playing;
        update_spawners(state, dt);
        advance_pools(state);
    } else if clock <= duration + INTER_WAVE_PAUSE {
        if state.is_last_wave() {
            state.score += WAVE_BONUS;
            state.phase = GamePhase::Won;
            state.clear_pools();
            state.events.push(GameEvent::Won);
            log::info!("Player survived all waves with score {}", state.score);
            return;
        }
        if state.phase == GamePhase::Playing {
            state.phase = GamePhase::InterWavePause;
            state.events.push(GameEvent::WaveCleared {
                wave: state.wave_index,
            });
            log::info!(
                "Wave {} of {} complete, score {}",
                state.wave_index + 1,
                state.waves.len(),
                state.score
            );
        }
        state.clear_pools();
    } else {
        state.wave_clock.reset();
        state.score += WAVE_BONUS;
        state.clear_pools();
        state.player.respawn();
        state.wave_index += 1;
        state.phase = GamePhase::Playing;
        state.events.push(GameEvent::WaveStarted {
            wave: state.wave_index,
        });
        log::info!("Wave {} starting", state.wave_index + 1);
    }
}

/// Let meteors and collectables fall, dropping anything well below the screen
pub fn advance_pools(state: &mut GameState) {
    let floor = SCREEN_HEIGHT + DESPAWN_MARGIN;

    for meteor in &mut state.meteors {
        meteor.body.move_speed();
    }
    state.meteors.retain(|m| m.body.pos.y < floor);

    for collectable in &mut state.collectables {
        collectable.body.move_speed();
    }
    state.collectables.retain(|c| c.body.pos.y < floor);
}
