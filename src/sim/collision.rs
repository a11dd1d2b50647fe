//! Player-vs-entity collisions and scoring
//!
//! Every overlapping entity in a pool is resolved in the same tick. Pools are
//! filtered with `retain`, so removal never skips the next element.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{HIT_PENALTY, MAX_LIVES, PICKUP_BONUS};

/// Remove every meteor touching the player, costing a life and points each.
///
/// Returns true if the player ran out of lives this tick.
pub fn resolve_meteor_hits(state: &mut GameState) -> bool {
    let player = state.player.body;
    let before = state.meteors.len();
    state.meteors.retain(|m| !player.touches(&m.body));
    let hits = before - state.meteors.len();

    for _ in 0..hits {
        state.lives = state.lives.saturating_sub(1);
        state.score -= HIT_PENALTY;
        state.hit_flash = true;
        state.events.push(GameEvent::PlayerHit { lives: state.lives });
        log::debug!("hit by meteor, {} lives left", state.lives);
    }

    if hits > 0 && state.lives == 0 {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::Lost);
        log::info!(
            "Player lost on wave {} with score {}",
            state.wave_index + 1,
            state.score
        );
        return true;
    }
    false
}

/// Collect every heart touching the player. Lives are not capped here.
pub fn resolve_collectable_pickups(state: &mut GameState) {
    let player = state.player.body;
    let before = state.collectables.len();
    state.collectables.retain(|c| !player.touches(&c.body));
    let picked = before - state.collectables.len();

    for _ in 0..picked {
        state.lives += 1;
        state.score += PICKUP_BONUS;
        state.events.push(GameEvent::CollectablePicked { lives: state.lives });
        log::debug!("picked up heart, {} lives", state.lives);
    }
    if picked > 0 && state.lives > MAX_LIVES {
        log::warn!(
            "{} lives exceeds the health bar range, display is clamped",
            state.lives
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Body;
    use crate::sim::state::{Collectable, Meteor};

    fn meteor_at(x: f32, y: f32) -> Meteor {
        Meteor {
            body: Body::square(x, y, 64.0),
            fall_speed: 5,
            scale: 1.0,
        }
    }

    fn heart_at(x: f32, y: f32) -> Collectable {
        Collectable {
            body: Body::square(x, y, 32.0),
        }
    }

    fn playing() -> GameState {
        let mut state = GameState::new(3);
        state.reset();
        state.events.clear();
        state
    }

    #[test]
    fn test_meteor_hit_costs_life_and_points() {
        let mut state = playing();
        state.lives = 3;
        let p = state.player.body.pos;
        state.meteors.push(meteor_at(p.x, p.y));
        state.meteors.push(meteor_at(p.x, -500.0));

        assert!(!resolve_meteor_hits(&mut state));
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, -HIT_PENALTY);
        assert_eq!(state.meteors.len(), 1);
        assert!(state.hit_flash);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_adjacent_hits_are_not_skipped() {
        let mut state = playing();
        state.lives = 5;
        let p = state.player.body.pos;
        for _ in 0..3 {
            state.meteors.push(meteor_at(p.x, p.y));
        }
        resolve_meteor_hits(&mut state);
        assert_eq!(state.lives, 2);
        assert!(state.meteors.is_empty());
        assert_eq!(state.score, -3 * HIT_PENALTY);
    }

    #[test]
    fn test_last_life_loses() {
        let mut state = playing();
        let p = state.player.body.pos;
        state.meteors.push(meteor_at(p.x + 10.0, p.y));
        state.meteors.push(meteor_at(p.x - 10.0, p.y));

        assert!(resolve_meteor_hits(&mut state));
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.events.last(), Some(&GameEvent::Lost));
    }

    #[test]
    fn test_pickup_adds_life_past_cap() {
        let mut state = playing();
        state.lives = 9;
        let p = state.player.body.pos;
        state.collectables.push(heart_at(p.x, p.y));
        state.collectables.push(heart_at(p.x + 200.0, p.y));

        resolve_collectable_pickups(&mut state);
        assert_eq!(state.lives, 10);
        assert_eq!(state.score, PICKUP_BONUS);
        assert_eq!(state.collectables.len(), 1);
        assert_eq!(
            state.events,
            vec![GameEvent::CollectablePicked { lives: 10 }]
        );
    }
}
