//! Keyboard polling
//!
//! Frontends expose which keys are held; `TickInput::poll` turns that into
//! movement intents once per tick.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftArrow,
    RightArrow,
    UpArrow,
    A,
    D,
    W,
    Space,
    Return,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::LeftArrow,
        Key::RightArrow,
        Key::UpArrow,
        Key::A,
        Key::D,
        Key::W,
        Key::Space,
        Key::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::LeftArrow => "left arrow",
            Key::RightArrow => "right arrow",
            Key::UpArrow => "up arrow",
            Key::A => "a",
            Key::D => "d",
            Key::W => "w",
            Key::Space => "space",
            Key::Return => "return",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name: {0:?}")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left arrow" | "left" => Ok(Key::LeftArrow),
            "right arrow" | "right" => Ok(Key::RightArrow),
            "up arrow" | "up" => Ok(Key::UpArrow),
            "a" => Ok(Key::A),
            "d" => Ok(Key::D),
            "w" => Ok(Key::W),
            "space" => Ok(Key::Space),
            "return" | "enter" => Ok(Key::Return),
            other => Err(KeyParseError(other.to_string())),
        }
    }
}

/// Anything that can report held keys
pub trait KeyboardSource {
    fn is_pressing(&self, key: Key) -> bool;
}

/// An in-memory set of held keys (headless runs, bots, tests)
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    held: HashSet<Key>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Parse a comma separated list like `"left arrow, space"`
    pub fn parse_list(list: &str) -> Result<Self, KeyParseError> {
        let mut keys = Self::new();
        for name in list.split(',').filter(|n| !n.trim().is_empty()) {
            keys.press(name.parse()?);
        }
        Ok(keys)
    }
}

impl FromIterator<Key> for PressedKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl KeyboardSource for PressedKeys {
    fn is_pressing(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl TickInput {
    /// Sample the keyboard for this tick
    pub fn poll<K: KeyboardSource + ?Sized>(keys: &K) -> Self {
        Self {
            left: keys.is_pressing(Key::LeftArrow) || keys.is_pressing(Key::A),
            right: keys.is_pressing(Key::RightArrow) || keys.is_pressing(Key::D),
            jump: keys.is_pressing(Key::UpArrow)
                || keys.is_pressing(Key::W)
                || keys.is_pressing(Key::Space),
            restart: keys.is_pressing(Key::Return),
        }
    }
}
