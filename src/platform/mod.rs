//! Platform abstraction layer
//!
//! The simulation never talks to a window or keyboard directly. This module
//! holds the seams a frontend plugs into:
//! - Input polling (`is_pressing`)
//! - Frame composition (`clear` / `draw` / `display`)
//! - Fixed-rate scheduling

pub mod canvas;
pub mod input;
pub mod time;

pub use canvas::{Canvas, Color, DrawCommand, DrawList, Sprite};
pub use input::{Key, KeyParseError, KeyboardSource, PressedKeys};
pub use time::{FixedStep, timer_loop};
