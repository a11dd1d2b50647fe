//! Per-tick entry point
//!
//! Polls input, steps the simulation, renders and presents the frame.

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::platform::{Canvas, FixedStep, KeyboardSource};
use crate::render::render_frame;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// End-of-run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub phase: GamePhase,
    /// 1-based wave reached
    pub wave: usize,
    pub waves: usize,
    pub score: i64,
    pub lives: u32,
    pub hits: u32,
    pub pickups: u32,
    pub ticks: u64,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: GameState,
    step: FixedStep,
    hits: u32,
    pickups: u32,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            step: FixedStep::new(),
            hits: 0,
            pickups: 0,
        }
    }

    /// Build a game from settings (seed and wave table)
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let seed = settings.resolve_seed();
        let state = GameState::with_waves(seed, settings.wave_table())?;
        Ok(Self::new(state))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one tick: read keys, simulate, draw, present
    pub fn tick<K, C>(&mut self, keys: &K, canvas: &mut C)
    where
        K: KeyboardSource + ?Sized,
        C: Canvas + ?Sized,
    {
        let input = TickInput::poll(keys);
        tick(&mut self.state, &input, SIM_DT);
        self.record_events();
        render_frame(&self.state, canvas);
    }

    /// Feed a variable frame delta; runs however many ticks it covers.
    /// Returns the number of ticks run.
    ///
    /// For windowed frontends driven by vsync rather than `timer_loop`; the
    /// headless binary ticks directly.
    pub fn advance_frame<K, C>(&mut self, frame_dt: f64, keys: &K, canvas: &mut C) -> u32
    where
        K: KeyboardSource + ?Sized,
        C: Canvas + ?Sized,
    {
        let steps = self.step.advance(frame_dt);
        for _ in 0..steps {
            self.tick(keys, canvas);
        }
        steps
    }

    fn record_events(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::Restarted => {
                    self.hits = 0;
                    self.pickups = 0;
                }
                GameEvent::PlayerHit { .. } => self.hits += 1,
                GameEvent::CollectablePicked { .. } => self.pickups += 1,
                _ => {}
            }
        }
    }

    /// Whether the current run has finished
    pub fn is_over(&self) -> bool {
        matches!(self.state.phase, GamePhase::Won | GamePhase::Lost)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            phase: self.state.phase,
            wave: self.state.wave_index + 1,
            waves: self.state.waves.len(),
            score: self.state.score,
            lives: self.state.lives,
            hits: self.hits,
            pickups: self.pickups,
            ticks: self.state.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::Autopilot;
    use crate::consts::*;
    use crate::platform::{DrawList, Key, PressedKeys};

    fn start_keys() -> PressedKeys {
        [Key::Return].into_iter().collect()
    }

    #[test]
    fn test_tick_renders_and_presents() {
        let mut game = Game::new(GameState::new(1));
        let mut canvas = DrawList::new();

        game.tick(&PressedKeys::new(), &mut canvas);
        assert_eq!(canvas.frames(), 1);
        assert!(canvas.contains_text("Press [RETURN] To Play"));

        game.tick(&start_keys(), &mut canvas);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert!(canvas.contains_text("Wave: 1/4"));
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn test_advance_frame_runs_whole_ticks() {
        let mut game = Game::new(GameState::new(2));
        let mut canvas = DrawList::new();
        let keys = start_keys();
        assert_eq!(game.advance_frame(SIM_DT * 3.5, &keys, &mut canvas), 3);
        assert_eq!(canvas.frames(), 3);
        assert_eq!(game.state().time_ticks, 3);
    }

    #[test]
    fn test_summary_counts_hits() {
        let mut game = Game::new(GameState::new(3));
        let mut canvas = DrawList::new();
        game.tick(&start_keys(), &mut canvas);

        let p = game.state.player.body.pos;
        game.state.lives = 2;
        game.state.meteors.push(crate::sim::Meteor {
            body: crate::sim::Body::square(p.x, p.y, 64.0),
            fall_speed: 5,
            scale: 1.0,
        });
        game.tick(&PressedKeys::new(), &mut canvas);

        let summary = game.summary();
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.lives, 1);
        assert_eq!(summary.score, -HIT_PENALTY);
        assert_eq!(summary.wave, 1);
        assert!(canvas.clears().contains(&crate::platform::Color::Red));
    }

    #[test]
    fn test_killing_hit_frame_is_red() {
        let mut game = Game::new(GameState::new(6));
        let mut canvas = DrawList::new();
        game.tick(&start_keys(), &mut canvas);

        let p = game.state.player.body.pos;
        game.state.meteors.push(crate::sim::Meteor {
            body: crate::sim::Body::square(p.x, p.y, 64.0),
            fall_speed: 5,
            scale: 1.0,
        });
        game.tick(&PressedKeys::new(), &mut canvas);
        assert_eq!(game.state().phase, GamePhase::Lost);
        assert!(canvas.clears().contains(&crate::platform::Color::Red));
        assert!(!canvas.contains_text("YOU DIED"));

        game.tick(&PressedKeys::new(), &mut canvas);
        assert!(!canvas.clears().contains(&crate::platform::Color::Red));
        assert!(canvas.contains_text("YOU DIED"));
    }

    #[test]
    fn test_autopilot_run_ends_or_times_out() {
        let mut game = Game::new(GameState::new(4));
        let mut bot = Autopilot::new();
        let mut canvas = DrawList::new();
        for _ in 0..10_000 {
            let keys = bot.update(game.state()).clone();
            game.tick(&keys, &mut canvas);
            if game.is_over() {
                break;
            }
        }
        let summary = game.summary();
        assert!(summary.ticks > 0);
        assert!(game.is_over());
        match summary.phase {
            GamePhase::Won => assert!(summary.score >= 400 - HIT_PENALTY * summary.hits as i64),
            GamePhase::Lost => assert_eq!(summary.lives, 0),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn test_summary_serializes() {
        let game = Game::new(GameState::new(5));
        let json = serde_json::to_string(&game.summary()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
