//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, owned by the game
//! loop and passed by reference into each update step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::clock::{Accumulator, AnimationState};
use super::waves::{WaveConfig, WaveTableError, default_waves, validate_waves};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start key
    #[default]
    Idle,
    /// A wave is running
    Playing,
    /// Wave cleared, counting down to the next one
    InterWavePause,
    /// Final wave survived
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Whether the simulation is live (player moves, clocks run)
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::InterWavePause)
    }
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Restarted,
    PlayerHit { lives: u32 },
    CollectablePicked { lives: u32 },
    WaveCleared { wave: usize },
    WaveStarted { wave: usize },
    Won,
    Lost,
}

/// Which way the dino sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// A falling meteor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub body: Body,
    /// Pixels per tick
    pub fall_speed: u32,
    /// Sprite scale the body was sized with
    pub scale: f32,
}

/// A falling heart pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectable {
    pub body: Body,
}

/// The dino
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position and vertical speed (`body.vel.y`)
    pub body: Body,
    pub facing: Facing,
    pub animation: AnimationState,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Body::square(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SIZE),
            facing: Facing::Left,
            animation: AnimationState::default(),
        }
    }
}

impl Player {
    /// Put the player back at the spawn point
    pub fn respawn(&mut self) {
        self.body.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }

    #[inline]
    pub fn vertical_speed(&self) -> f32 {
        self.body.vel.y
    }
}

/// The ground slab the player walks on
pub fn ground_body() -> Body {
    Body::new(
        Vec2::new(GROUND_X, GROUND_Y),
        Vec2::new(GROUND_WIDTH, GROUND_HEIGHT),
    )
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Wave table (index = wave number)
    pub waves: Vec<WaveConfig>,
    pub phase: GamePhase,
    /// Current wave index (0-based)
    pub wave_index: usize,
    pub lives: u32,
    /// Score; hits can push it below zero
    pub score: i64,
    /// Time into the current wave, including the inter-wave pause
    pub wave_clock: Accumulator,
    pub meteor_spawn_clock: Accumulator,
    pub collectable_spawn_clock: Accumulator,
    pub player: Player,
    pub ground: Body,
    /// Active meteors in spawn order
    pub meteors: Vec<Meteor>,
    /// Active collectables in spawn order
    pub collectables: Vec<Collectable>,
    /// Player was hit this tick (screen flashes red)
    pub hit_flash: bool,
    /// Events from the latest tick
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new idle game with the stock wave table
    pub fn new(seed: u64) -> Self {
        Self::build(seed, default_waves())
    }

    /// Create a new idle game with a custom wave table
    pub fn with_waves(seed: u64, waves: Vec<WaveConfig>) -> Result<Self, WaveTableError> {
        validate_waves(&waves)?;
        Ok(Self::build(seed, waves))
    }

    fn build(seed: u64, waves: Vec<WaveConfig>) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            waves,
            phase: GamePhase::Idle,
            wave_index: 0,
            lives: STARTING_LIVES,
            score: 0,
            wave_clock: Accumulator::new(),
            meteor_spawn_clock: Accumulator::new(),
            collectable_spawn_clock: Accumulator::new(),
            player: Player::default(),
            ground: ground_body(),
            meteors: Vec::new(),
            collectables: Vec::new(),
            hit_flash: false,
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    /// The wave currently being played
    pub fn current_wave(&self) -> &WaveConfig {
        &self.waves[self.wave_index]
    }

    pub fn is_last_wave(&self) -> bool {
        self.wave_index + 1 == self.waves.len()
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Empty the meteor pool and restart its spawn timer
    pub fn clear_meteors(&mut self) {
        self.meteors.clear();
        self.meteor_spawn_clock.reset();
    }

    /// Empty the collectable pool and restart its spawn timer
    pub fn clear_collectables(&mut self) {
        self.collectables.clear();
        self.collectable_spawn_clock.reset();
    }

    pub fn clear_pools(&mut self) {
        self.clear_meteors();
        self.clear_collectables();
    }

    /// Start a fresh run from wave 0.
    ///
    /// The RNG stream and the player's facing carry over from the previous run.
    pub fn reset(&mut self) {
        self.wave_index = 0;
        self.wave_clock.reset();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.clear_pools();
        self.player.respawn();
        self.player.body.vel = Vec2::ZERO;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Health bar sprite for the current lives, clamped to the 9 available states
    pub fn health_bar_index(&self) -> usize {
        self.lives.clamp(1, MAX_LIVES) as usize - 1
    }
}
