//! Dino Dodge - A wave-based meteor dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, wave cycle)
//! - `render`: Turns game state into draw calls for the frame
//! - `platform`: Input polling, draw command sink, fixed-rate scheduling
//! - `game`: Per-tick entry point tying the pieces together
//! - `settings`: Runtime configuration

pub mod autopilot;
pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Seconds advanced by a single tick
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Entities spawn above the visible area
    pub const SPAWN_Y: f32 = -60.0;
    /// Entities are removed once they fall this far below the screen
    pub const DESPAWN_MARGIN: f32 = 200.0;

    /// Entity sizes (full width/height in pixels)
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const METEOR_SIZE: f32 = 64.0;
    pub const COLLECTABLE_SIZE: f32 = 32.0;
    pub const GROUND_WIDTH: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// Ground body center
    pub const GROUND_X: f32 = SCREEN_WIDTH / 2.0;
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 50.0;

    /// Where the player is placed on reset and at the start of each wave
    pub const PLAYER_SPAWN_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = SCREEN_HEIGHT - 150.0;

    /// Meteor scale range (upper bound exclusive)
    pub const METEOR_MIN_SCALE: f32 = 0.4;
    pub const METEOR_MAX_SCALE: f32 = 1.5;
    /// Collectables always fall at this speed (pixels/tick)
    pub const COLLECTABLE_FALL_SPEED: f32 = 4.0;

    /// Player movement
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 1.0;
    pub const JUMP_SPEED: f32 = -10.0;

    /// Walk animation: frames advanced per second, last walk frame, jump frame
    pub const WALK_FRAMES_PER_SEC: f64 = 10.0;
    pub const WALK_FRAME_WRAP: f64 = 3.0;
    pub const JUMP_FRAME: usize = 3;

    /// Lives
    pub const STARTING_LIVES: u32 = 1;
    /// Collectables stop spawning at this many lives; also the health bar range
    pub const MAX_LIVES: u32 = 9;

    /// Scoring
    pub const WAVE_BONUS: i64 = 100;
    pub const PICKUP_BONUS: i64 = 25;
    pub const HIT_PENALTY: i64 = 10;

    /// Rest period between waves (seconds)
    pub const INTER_WAVE_PAUSE: f64 = 3.0;
}
