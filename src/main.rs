//! Dino Dodge entry point
//!
//! Runs the game headless: input comes from the autopilot or a fixed set of
//! held keys, frames go to an in-memory draw list, and the run summary is
//! printed as JSON at the end.

use std::error::Error;
use std::ops::ControlFlow;
use std::path::PathBuf;

use dino_dodge::autopilot::Autopilot;
use dino_dodge::consts::TICK_RATE;
use dino_dodge::platform::{DrawList, Key, timer_loop};
use dino_dodge::{Game, Settings};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref())?;
    let mut game = Game::from_settings(&settings)?;
    log::info!("Dino Dodge starting (seed {})", game.state().seed);

    let mut bot = Autopilot::new();
    let held = settings.held_keys()?;
    let mut canvas = DrawList::new();
    let mut ticks = 0u64;

    let mut step = || {
        let mut keys = if settings.autopilot {
            bot.update(game.state()).clone()
        } else {
            held.clone()
        };
        if settings.auto_start && ticks == 0 {
            keys.press(Key::Return);
        }
        game.tick(&keys, &mut canvas);
        ticks += 1;

        if game.is_over() || ticks >= settings.max_ticks {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };

    if settings.realtime {
        timer_loop(TICK_RATE, step);
    } else {
        while step().is_continue() {}
    }

    let summary = game.summary();
    log::info!(
        "Run finished: {:?} on wave {}/{} with score {} after {} ticks",
        summary.phase,
        summary.wave,
        summary.waves,
        summary.score,
        summary.ticks
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
