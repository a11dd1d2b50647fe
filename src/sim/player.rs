//! Player controller: walking, gravity, ground contact, jump, animation

use super::state::{Facing, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Move the dino for one tick.
///
/// The horizontal bounds check looks at the position before the step, so the
/// player can end up one step past either screen edge but no further.
pub fn update_player(state: &mut GameState, input: &TickInput, dt: f64) {
    let ground = state.ground;
    let player = &mut state.player;
    let mut is_moving = false;

    if input.right && player.body.pos.x <= SCREEN_WIDTH {
        player.body.pos.x += PLAYER_SPEED;
        is_moving = true;
        player.facing = Facing::Right;
    }
    if input.left && player.body.pos.x >= 0.0 {
        player.body.pos.x -= PLAYER_SPEED;
        is_moving = true;
        player.facing = Facing::Left;
    }

    player.body.vel.y += GRAVITY;
    if player.body.touches(&ground) {
        player.body.vel.y = 0.0;
        player.body.move_to_stop_overlapping(&ground);
        if input.jump {
            player.body.vel.y = JUMP_SPEED;
        }
    } else {
        // Falling or mid-jump always animates
        is_moving = true;
    }

    player.body.move_speed();

    if !is_moving {
        player.animation.idle();
    } else if player.body.touches(&ground) {
        player.animation.walk(dt);
    } else {
        player.animation.jump();
    }
}
