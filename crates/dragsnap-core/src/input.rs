//! Keys, chords and the polled input seam.
//!
//! Input is sampled, never delivered: the engine asks "is this key down
//! right now" once per tick. Keys are configured by name in TOML and
//! parsed into [`Key`] on load.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::Result;

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

/// Pointer buttons that can complete a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Anything whose down/up state can be polled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Modifier(Modifier),
    Mouse(MouseButton),
    /// A named key such as `"S"`, `"Space"` or `"F1"`, stored uppercase.
    /// The platform maps the name to a key code.
    Named(String),
}

impl Key {
    /// Parses a key name. Modifier and mouse names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }
        let key = match name.to_ascii_lowercase().as_str() {
            "alt" => Self::Modifier(Modifier::Alt),
            "shift" => Self::Modifier(Modifier::Shift),
            "ctrl" | "control" => Self::Modifier(Modifier::Ctrl),
            "win" => Self::Modifier(Modifier::Win),
            "lbutton" => Self::Mouse(MouseButton::Left),
            "rbutton" => Self::Mouse(MouseButton::Right),
            "mbutton" => Self::Mouse(MouseButton::Middle),
            _ => Self::Named(name.to_ascii_uppercase()),
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modifier(Modifier::Alt) => f.write_str("alt"),
            Self::Modifier(Modifier::Shift) => f.write_str("shift"),
            Self::Modifier(Modifier::Ctrl) => f.write_str("ctrl"),
            Self::Modifier(Modifier::Win) => f.write_str("win"),
            Self::Mouse(MouseButton::Left) => f.write_str("lbutton"),
            Self::Mouse(MouseButton::Right) => f.write_str("rbutton"),
            Self::Mouse(MouseButton::Middle) => f.write_str("mbutton"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("invalid key name: {value:?}"))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// The three operations a chord can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordKind {
    Move,
    ResizeWidth,
    ResizeBoth,
}

impl ChordKind {
    pub const ALL: [ChordKind; 3] = [Self::Move, Self::ResizeWidth, Self::ResizeBoth];

    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Move)
    }
}

impl fmt::Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Move => "move",
            Self::ResizeWidth => "resize-width",
            Self::ResizeBoth => "resize-both",
        })
    }
}

/// A modifier + pointer-button combination held for a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub modifiers: Vec<Modifier>,
    pub button: MouseButton,
}

impl Chord {
    pub fn new(modifiers: &[Modifier], button: MouseButton) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            button,
        }
    }

    /// Whether `key` is one of the chord's components.
    pub fn contains(&self, key: &Key) -> bool {
        match key {
            Key::Modifier(m) => self.modifiers.contains(m),
            Key::Mouse(button) => *button == self.button,
            Key::Named(_) => false,
        }
    }

    /// Whether every component of the chord is currently down.
    ///
    /// Releasing any single component ends the chord.
    pub fn is_held(&self, input: &(impl Input + ?Sized)) -> bool {
        input.is_down(&Key::Mouse(self.button))
            && self
                .modifiers
                .iter()
                .all(|m| input.is_down(&Key::Modifier(*m)))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", Key::Modifier(*m))?;
        }
        write!(f, "{}", Key::Mouse(self.button))
    }
}

/// Polled pointer and key state.
pub trait Input {
    /// Absolute pointer position in virtual-screen coordinates.
    fn cursor(&self) -> Result<Point>;

    /// Whether `key` is down at the moment of the call.
    fn is_down(&self, key: &Key) -> bool;
}

/// Edge detector for a polled key.
///
/// Reports a press once, on the first poll where the key is down after
/// having been up.
#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    was_down: bool,
}

impl KeyLatch {
    /// A latch that treats the key as already held, so a key down at
    /// creation does not fire until released and pressed again.
    pub fn primed(input: &(impl Input + ?Sized), key: &Key) -> Self {
        Self {
            was_down: input.is_down(key),
        }
    }

    pub fn pressed(&mut self, input: &(impl Input + ?Sized), key: &Key) -> bool {
        let down = input.is_down(key);
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}
