#![forbid(unsafe_code)]

//! The rendering contract.
//!
//! The navigation runtime never touches a rendering environment directly.
//! It reports state changes through a [`View`]; an implementation may drive
//! a DOM, a terminal, or simply record calls for tests. Every method is a
//! best-effort notification and cannot fail.

use std::time::Duration;

use crate::book::AnimatableRef;

/// Receiver of every visual state change.
pub trait View {
    /// A leaf turned (`true`) or turned back (`false`).
    fn set_leaf_flipped(&mut self, leaf: usize, flipped: bool);

    /// Transition offsets for each character of a split-text element,
    /// published once at setup. The view applies them when the element
    /// becomes active.
    fn set_char_delays(&mut self, target: AnimatableRef, delays: &[Duration]);

    /// An animatable entered (`true`) or returned to baseline (`false`).
    fn set_active(&mut self, target: AnimatableRef, active: bool);

    /// A skill bar's fill width, in percent.
    fn set_fill(&mut self, target: AnimatableRef, percent: f32);

    /// A skill counter's text, e.g. `"42%"`.
    fn set_counter_text(&mut self, target: AnimatableRef, text: &str);

    /// Highlight the indicator at `index` (`position / 2`).
    fn set_indicator(&mut self, index: usize);

    /// Enable or disable the previous/next controls.
    fn set_nav_enabled(&mut self, prev: bool, next: bool);

    /// Hide the onboarding hint. Called at most once per session.
    fn hide_hint(&mut self);
}
