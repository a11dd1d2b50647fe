//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pools keep spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod collision;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod waves;

pub use body::Body;
pub use clock::{Accumulator, AnimationState};
pub use collision::{resolve_collectable_pickups, resolve_meteor_hits};
pub use player::update_player;
pub use spawner::{spawn_collectable, spawn_meteor, update_spawners};
pub use state::{Collectable, Facing, GameEvent, GamePhase, GameState, Meteor, Player};
pub use tick::{TickInput, advance_pools, cycle_waves, tick};
pub use waves::{WaveConfig, WaveTableError, default_waves, validate_waves};
