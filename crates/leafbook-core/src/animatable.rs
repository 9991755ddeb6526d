#![forbid(unsafe_code)]

//! Animated content carried by a face.
//!
//! Each [`Animatable`] variant carries its own delay and target payload.
//! Delays are stored in milliseconds so layouts serialize naturally; the
//! accessor methods hand out [`Duration`]s.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Visual flavour of a generic enter effect.
///
/// The coordinator treats every kind the same way; the view picks the
/// styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Plain rise-in.
    #[default]
    Base,
    /// Opacity only.
    Fade,
    /// Slide in from the left.
    Left,
    /// Slide in from the right.
    Right,
    /// Overshooting pop.
    Pop,
    /// Scale up from small.
    Scale,
    /// Bouncing entrance.
    Bounce,
    /// Horizontal rule drawing itself.
    Line,
}

/// One piece of content with its own enter animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animatable {
    /// Generic enter effect, active after `delay_ms`.
    Effect {
        #[serde(default)]
        effect: EffectKind,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Text revealed character by character.
    ///
    /// `delay_ms` is the base transition offset of the first character; the
    /// activation itself happens after the fixed split-char delay.
    SplitText {
        text: String,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Progress bar that fills to `width` percent.
    SkillBar {
        #[serde(default)]
        width: Option<f32>,
        #[serde(default)]
        delay_ms: Option<u64>,
    },
    /// Percentage readout that counts up from zero to `target`.
    SkillPercent {
        #[serde(default)]
        target: u32,
        #[serde(default)]
        delay_ms: Option<u64>,
    },
    /// Timeline marker that lights up after `delay_ms`.
    TimelineMarker {
        #[serde(default)]
        delay_ms: u64,
    },
}

impl Animatable {
    /// Generic effect with the given kind and delay.
    #[must_use]
    pub fn effect(effect: EffectKind, delay: Duration) -> Self {
        Self::Effect {
            effect,
            delay_ms: millis(delay),
        }
    }

    /// Split-text element with a base character delay.
    #[must_use]
    pub fn split_text(text: impl Into<String>, delay: Duration) -> Self {
        Self::SplitText {
            text: text.into(),
            delay_ms: millis(delay),
        }
    }

    /// Skill bar filling to `width` percent.
    #[must_use]
    pub fn skill_bar(width: f32, delay: Option<Duration>) -> Self {
        Self::SkillBar {
            width: Some(width),
            delay_ms: delay.map(millis),
        }
    }

    /// Skill percentage counting up to `target`.
    #[must_use]
    pub fn skill_percent(target: u32, delay: Option<Duration>) -> Self {
        Self::SkillPercent {
            target,
            delay_ms: delay.map(millis),
        }
    }

    /// Timeline marker.
    #[must_use]
    pub fn timeline_marker(delay: Duration) -> Self {
        Self::TimelineMarker {
            delay_ms: millis(delay),
        }
    }

    /// Delay before this element becomes active.
    ///
    /// Skill items fall back to `skill_default` when their delay is missing
    /// or zero. Split text ignores its own base delay here and uses
    /// `split_char`, since per-character offsets are applied by the view.
    #[must_use]
    pub fn activation_delay(&self, split_char: Duration, skill_default: Duration) -> Duration {
        match self {
            Self::Effect { delay_ms, .. } | Self::TimelineMarker { delay_ms } => {
                Duration::from_millis(*delay_ms)
            }
            Self::SplitText { .. } => split_char,
            Self::SkillBar { delay_ms, .. } | Self::SkillPercent { delay_ms, .. } => {
                match delay_ms {
                    Some(ms) if *ms > 0 => Duration::from_millis(*ms),
                    _ => skill_default,
                }
            }
        }
    }

    /// Number of characters in a split-text element (grapheme clusters).
    ///
    /// Zero for every other variant.
    #[must_use]
    pub fn char_count(&self) -> usize {
        match self {
            Self::SplitText { text, .. } => text.graphemes(true).count(),
            _ => 0,
        }
    }

    /// Per-character transition offsets of a split-text element.
    ///
    /// Character `i` is offset by `base_delay + i * stagger`. Empty for
    /// every other variant.
    #[must_use]
    pub fn char_delays(&self, stagger: Duration) -> Vec<Duration> {
        match self {
            Self::SplitText { delay_ms, .. } => {
                let base = Duration::from_millis(*delay_ms);
                (0..self.char_count())
                    .map(|i| base + stagger.saturating_mul(i as u32))
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
