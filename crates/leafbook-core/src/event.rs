#![forbid(unsafe_code)]

//! Raw input events and the navigation commands they normalize into.
//!
//! # Design Notes
//!
//! - Wheel deltas follow the platform convention: positive scrolls down
//!   (toward later pages).
//! - Touch coordinates are in viewport units; only their differences matter.
//! - Keys are identified by logical name, see [`KeyCode::from_key_name`].

/// Canonical input event consumed by the input aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Scroll wheel movement.
    Wheel {
        /// Vertical delta; positive means forward.
        delta_y: f64,
    },

    /// First finger down.
    TouchStart { x: f64, y: f64 },

    /// Last finger up.
    TouchEnd {
        x: f64,
        y: f64,
        /// Viewport size at release, used to pick the swipe axis.
        viewport: Viewport,
    },

    /// A key press.
    Key(KeyCode),

    /// A click on one of the navigation widgets.
    Click(ClickTarget),
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Taller than wide.
    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Keys the book reacts to; everything else is [`KeyCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable key; only space turns the page.
    Char(char),
    /// `ArrowUp`, turns back.
    Up,
    /// `ArrowDown`, turns forward.
    Down,
    /// `ArrowLeft`, turns back.
    Left,
    /// `ArrowRight`, turns forward.
    Right,
    Other,
}

impl KeyCode {
    /// Map a logical key name (`"ArrowRight"`, `" "`, `"a"`, ...) to a code.
    ///
    /// Single-character names become [`KeyCode::Char`]; unknown names map to
    /// [`KeyCode::Other`].
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Clickable navigation widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The "previous" button.
    Prev,
    /// The "next" button.
    Next,
    /// Indicator dot for leaf boundary `index` (position `index * 2`).
    Indicator(usize),
}

/// Normalized navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Next,
    Prev,
    /// Go straight to a position.
    Jump(usize),
}
