//! Frame composition
//!
//! A frame is a sequence of clears, sprite draws and text draws followed by
//! `display()`. Backends implement `Canvas`; `DrawList` records the commands
//! for headless runs and tests.

use glam::Vec2;

/// Named colors used by the game screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Yellow,
    Red,
    DarkGreen,
    DarkRed,
}

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Ground,
    Meteor,
    Collectable,
    /// Dino sheet frame (0..=3)
    Dino { frame: usize },
    /// Health bar sheet row (0..=8)
    HealthBar { index: usize },
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        scale: f32,
        mirrored: bool,
    },
    Text {
        text: String,
        size: u32,
        color: Color,
        pos: Vec2,
    },
    Display,
}

/// Render target for one frame
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, scale: f32, mirrored: bool);
    fn draw_text(&mut self, text: &str, size: u32, color: Color, pos: Vec2);
    fn display(&mut self);
}

/// Records the commands of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last presented frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text strings in the last presented frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.presented
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Sprites in the last presented frame, in draw order
    pub fn sprites(&self) -> Vec<Sprite> {
        self.presented
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    /// Clear colors used in the last presented frame
    pub fn clears(&self) -> Vec<Color> {
        self.presented
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Clear(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, scale: f32, mirrored: bool) {
        self.pending.push(DrawCommand::Sprite {
            sprite,
            pos,
            scale,
            mirrored,
        });
    }

    fn draw_text(&mut self, text: &str, size: u32, color: Color, pos: Vec2) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            size,
            color,
            pos,
        });
    }

    fn display(&mut self) {
        self.pending.push(DrawCommand::Display);
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_presents_pending_commands() {
        let mut list = DrawList::new();
        list.clear(Color::Black);
        list.draw_text("hello", 20, Color::White, Vec2::ZERO);
        assert!(list.frame().is_empty());

        list.display();
        assert_eq!(list.frames(), 1);
        assert_eq!(list.texts(), vec!["hello"]);
        assert_eq!(list.clears(), vec![Color::Black]);
        assert_eq!(list.frame().last(), Some(&DrawCommand::Display));

        list.draw_sprite(Sprite::Ground, Vec2::ZERO, 1.0, false);
        list.display();
        assert_eq!(list.sprites(), vec![Sprite::Ground]);
        assert!(list.texts().is_empty());
    }
}
