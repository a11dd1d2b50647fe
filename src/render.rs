//! Frame rendering
//!
//! Turns the current `GameState` into draw calls. Nothing here mutates the
//! simulation; which screen is drawn depends only on the phase.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Canvas, Color, Sprite};
use crate::sim::{Facing, GamePhase, GameState};

const CENTER: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
const HEALTH_BAR_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, 750.0);

#[inline]
fn at_y(y: f32) -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, y)
}

/// Compose and present one frame
pub fn render_frame<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear(Color::Black);

    match state.phase {
        GamePhase::Idle => {}
        GamePhase::Playing => draw_playfield(state, canvas),
        // The killing hit still gets its red frame; "YOU DIED" follows next tick
        GamePhase::Lost if state.hit_flash => draw_playfield(state, canvas),
        GamePhase::InterWavePause => {
            draw_playfield(state, canvas);
            draw_wave_complete(state, canvas);
        }
        GamePhase::Won => {
            canvas.clear(Color::DarkGreen);
            canvas.draw_text("YOU SURVIVED", 100, Color::White, CENTER);
            canvas.draw_text(
                &format!("+{WAVE_BONUS} pts!"),
                75,
                Color::Yellow,
                at_y(200.0),
            );
            draw_final_score(state, canvas);
        }
        GamePhase::Lost => {
            canvas.clear(Color::DarkRed);
            canvas.draw_text("YOU DIED", 100, Color::White, CENTER);
            draw_final_score(state, canvas);
        }
    }

    if !state.is_running() {
        canvas.draw_text("Press [RETURN] To Play", 50, Color::White, at_y(50.0));
    }

    canvas.display();
}

fn draw_final_score<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.draw_text(
        &format!("Final Score: {}", state.score),
        50,
        Color::Yellow,
        at_y(SCREEN_HEIGHT / 2.0 - 150.0),
    );
}

fn draw_playfield<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.draw_sprite(Sprite::Background, CENTER, 1.0, false);

    if let Some(n) = end_of_wave_countdown(state) {
        canvas.draw_text(&n.to_string(), 150, Color::White, CENTER);
    }

    for meteor in &state.meteors {
        canvas.draw_sprite(Sprite::Meteor, meteor.body.pos, meteor.scale, false);
    }
    for collectable in &state.collectables {
        canvas.draw_sprite(Sprite::Collectable, collectable.body.pos, 1.0, false);
    }
    canvas.draw_sprite(Sprite::Ground, state.ground.pos, 1.0, false);

    if let Some(label) = seconds_left_label(state) {
        canvas.draw_text(&label, 35, Color::White, at_y(80.0));
    }
    canvas.draw_text(
        &format!(
            "Wave: {}/{}  |  Score: {}",
            state.wave_index + 1,
            state.waves.len(),
            state.score
        ),
        35,
        Color::White,
        at_y(50.0),
    );

    if state.hit_flash {
        canvas.clear(Color::Red);
    }

    let player = &state.player;
    canvas.draw_sprite(
        Sprite::Dino {
            frame: player.animation.frame(),
        },
        player.body.pos,
        1.0,
        // The dino sheet faces left
        player.facing == Facing::Right,
    );
    canvas.draw_sprite(
        Sprite::HealthBar {
            index: state.health_bar_index(),
        },
        HEALTH_BAR_POS,
        1.0,
        false,
    );
}

fn draw_wave_complete<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear(Color::Black);
    canvas.draw_text(
        &format!(
            "Wave {} of {} complete!",
            state.wave_index + 1,
            state.waves.len()
        ),
        50,
        Color::White,
        at_y(150.0),
    );
    canvas.draw_text("Next wave starting in:", 50, Color::White, at_y(200.0));
    canvas.draw_text(
        &next_wave_countdown(state).to_string(),
        150,
        Color::White,
        CENTER,
    );
    canvas.draw_text(
        &format!("+{WAVE_BONUS} pts!"),
        75,
        Color::Yellow,
        at_y(SCREEN_HEIGHT - 200.0),
    );
    canvas.draw_text(
        &format!("Score: {}", state.score + WAVE_BONUS),
        50,
        Color::Yellow,
        at_y(SCREEN_HEIGHT - 150.0),
    );
}

/// Big countdown digits shown within 3 whole seconds of the wave's end
pub fn end_of_wave_countdown(state: &GameState) -> Option<i64> {
    let whole = state.wave_clock.seconds().trunc();
    let diff = (whole - state.current_wave().duration).abs();
    (diff <= 3.0).then_some(diff as i64)
}

/// Seconds until the next wave starts during the inter-wave pause
pub fn next_wave_countdown(state: &GameState) -> i64 {
    let whole = state.wave_clock.seconds().trunc();
    (whole - (state.current_wave().duration + INTER_WAVE_PAUSE)).abs() as i64
}

/// "N seconds left" banner; hidden once the wave is over by a full second.
///
/// Reads "1 second left" only when N is 1. The N == 2 frame says "seconds".
pub fn seconds_left_label(state: &GameState) -> Option<String> {
    let remaining = state.current_wave().duration - state.wave_clock.seconds();
    if remaining.trunc() < 0.0 {
        return None;
    }
    let shown = (remaining + 1.0).trunc() as i64;
    Some(if shown == 1 {
        "1 second left".to_string()
    } else {
        format!("{shown} seconds left")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::DrawList;
    use crate::sim::{Body, Meteor};

    fn running() -> GameState {
        let mut state = GameState::new(1);
        state.reset();
        state
    }

    fn render(state: &GameState) -> DrawList {
        let mut list = DrawList::new();
        render_frame(state, &mut list);
        list
    }

    #[test]
    fn test_idle_screen_prompts_for_start() {
        let state = GameState::new(1);
        let list = render(&state);
        assert_eq!(list.texts(), vec!["Press [RETURN] To Play"]);
        assert_eq!(list.clears(), vec![Color::Black]);
        assert!(list.sprites().is_empty());
    }

    #[test]
    fn test_playfield_draw_order() {
        let mut state = running();
        state.meteors.push(Meteor {
            body: Body::square(100.0, 10.0, 64.0),
            fall_speed: 4,
            scale: 0.5,
        });
        state.wave_clock.set(0.5);
        let list = render(&state);
        assert_eq!(
            list.sprites(),
            vec![
                Sprite::Background,
                Sprite::Meteor,
                Sprite::Ground,
                Sprite::Dino { frame: 0 },
                Sprite::HealthBar { index: 0 },
            ]
        );
        assert!(list.contains_text("30 seconds left"));
        assert!(list.contains_text("Wave: 1/4  |  Score: 0"));
        assert!(!list.contains_text("Press [RETURN]"));
    }

    #[test]
    fn test_hit_flash_clears_red_before_player() {
        let mut state = running();
        state.hit_flash = true;
        let list = render(&state);
        assert_eq!(list.clears(), vec![Color::Black, Color::Red]);
    }

    #[test]
    fn test_seconds_left_label() {
        let mut state = running();
        state.wave_clock.set(0.5);
        assert_eq!(seconds_left_label(&state).as_deref(), Some("30 seconds left"));
        state.wave_clock.set(28.5);
        assert_eq!(seconds_left_label(&state).as_deref(), Some("2 seconds left"));
        state.wave_clock.set(29.5);
        assert_eq!(seconds_left_label(&state).as_deref(), Some("1 second left"));
        state.wave_clock.set(30.5);
        assert_eq!(seconds_left_label(&state).as_deref(), Some("0 seconds left"));
        state.wave_clock.set(31.5);
        assert_eq!(seconds_left_label(&state), None);
    }

    #[test]
    fn test_countdowns() {
        let mut state = running();
        state.wave_clock.set(10.0);
        assert_eq!(end_of_wave_countdown(&state), None);
        state.wave_clock.set(27.2);
        assert_eq!(end_of_wave_countdown(&state), Some(3));
        state.wave_clock.set(29.9);
        assert_eq!(end_of_wave_countdown(&state), Some(1));
        state.wave_clock.set(31.4);
        assert_eq!(next_wave_countdown(&state), 2);
        state.wave_clock.set(32.9);
        assert_eq!(next_wave_countdown(&state), 1);
    }

    #[test]
    fn test_wave_complete_overlay() {
        let mut state = running();
        state.phase = GamePhase::InterWavePause;
        state.score = 40;
        state.wave_clock.set(30.5);
        let list = render(&state);
        assert!(list.contains_text("Wave 1 of 4 complete!"));
        assert!(list.contains_text("Next wave starting in:"));
        assert!(list.contains_text("Score: 140"));
        assert_eq!(list.texts().iter().filter(|t| **t == "3").count(), 1);
    }

    #[test]
    fn test_killing_hit_flashes_before_death_screen() {
        let mut state = running();
        state.phase = GamePhase::Lost;
        state.lives = 0;
        state.score = -10;
        state.hit_flash = true;
        let list = render(&state);
        assert_eq!(list.clears(), vec![Color::Black, Color::Red]);
        assert!(!list.contains_text("YOU DIED"));
        assert!(list.contains_text("Press [RETURN] To Play"));
        assert!(list.sprites().contains(&Sprite::HealthBar { index: 0 }));

        state.hit_flash = false;
        let list = render(&state);
        assert_eq!(list.clears(), vec![Color::Black, Color::DarkRed]);
        assert!(list.contains_text("YOU DIED"));
    }

    #[test]
    fn test_end_screens() {
        let mut state = running();
        state.phase = GamePhase::Won;
        state.score = 415;
        let list = render(&state);
        assert_eq!(list.clears(), vec![Color::Black, Color::DarkGreen]);
        assert!(list.contains_text("YOU SURVIVED"));
        assert!(list.contains_text("Final Score: 415"));
        assert!(list.contains_text("Press [RETURN] To Play"));

        state.phase = GamePhase::Lost;
        state.score = -10;
        let list = render(&state);
        assert_eq!(list.clears(), vec![Color::Black, Color::DarkRed]);
        assert!(list.contains_text("YOU DIED"));
        assert!(list.contains_text("Final Score: -10"));
    }

    #[test]
    fn test_facing_right_mirrors_dino() {
        let mut state = running();
        state.player.facing = Facing::Right;
        let list = render(&state);
        let mirrored = list.frame().iter().any(|c| {
            matches!(
                c,
                crate::platform::DrawCommand::Sprite {
                    sprite: Sprite::Dino { .. },
                    mirrored: true,
                    ..
                }
            )
        });
        assert!(mirrored);
    }
}
