#![forbid(unsafe_code)]

//! A [`View`] that records every call, for tests and headless hosts.

use std::collections::BTreeMap;
use std::time::Duration;

use leafbook_core::book::AnimatableRef;
use leafbook_core::view::View;

/// One recorded view notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    LeafFlipped { leaf: usize, flipped: bool },
    CharDelays { target: AnimatableRef, delays: Vec<Duration> },
    Active { target: AnimatableRef, active: bool },
    Fill { target: AnimatableRef, percent: f32 },
    CounterText { target: AnimatableRef, text: String },
    Indicator(usize),
    NavEnabled { prev: bool, next: bool },
    HintHidden,
}

/// Records calls in order and keeps the latest rendered state.
#[derive(Debug, Default)]
pub struct RecordingView {
    calls: Vec<ViewCall>,
    flipped: BTreeMap<usize, bool>,
    char_delays: BTreeMap<AnimatableRef, Vec<Duration>>,
    active: BTreeMap<AnimatableRef, bool>,
    fills: BTreeMap<AnimatableRef, f32>,
    texts: BTreeMap<AnimatableRef, String>,
    indicator: Option<usize>,
    nav: Option<(bool, bool)>,
    hint_hidden: bool,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call since construction or the last [`clear_calls`](Self::clear_calls).
    #[must_use]
    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    /// Forget recorded calls; rendered state is kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Leaf flips in call order.
    #[must_use]
    pub fn flips(&self) -> Vec<(usize, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::LeafFlipped { leaf, flipped } => Some((*leaf, *flipped)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_flipped(&self, leaf: usize) -> bool {
        self.flipped.get(&leaf).copied().unwrap_or(false)
    }

    /// Offsets last published for a split-text element.
    #[must_use]
    pub fn char_delays(&self, target: AnimatableRef) -> Option<&[Duration]> {
        self.char_delays.get(&target).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_active(&self, target: AnimatableRef) -> bool {
        self.active.get(&target).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn fill(&self, target: AnimatableRef) -> Option<f32> {
        self.fills.get(&target).copied()
    }

    #[must_use]
    pub fn counter_text(&self, target: AnimatableRef) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    /// Numeric values written to a counter, in call order.
    #[must_use]
    pub fn counter_values(&self, target: AnimatableRef) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::CounterText { target: t, text } if *t == target => {
                    text.trim_end_matches('%').parse().ok()
                }
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn indicator(&self) -> Option<usize> {
        self.indicator
    }

    /// Latest `(prev, next)` enablement.
    #[must_use]
    pub fn nav_enabled(&self) -> Option<(bool, bool)> {
        self.nav
    }

    #[must_use]
    pub fn hint_hidden(&self) -> bool {
        self.hint_hidden
    }
}

impl View for RecordingView {
    fn set_leaf_flipped(&mut self, leaf: usize, flipped: bool) {
        self.flipped.insert(leaf, flipped);
        self.calls.push(ViewCall::LeafFlipped { leaf, flipped });
    }

    fn set_char_delays(&mut self, target: AnimatableRef, delays: &[Duration]) {
        self.char_delays.insert(target, delays.to_vec());
        self.calls.push(ViewCall::CharDelays {
            target,
            delays: delays.to_vec(),
        });
    }

    fn set_active(&mut self, target: AnimatableRef, active: bool) {
        self.active.insert(target, active);
        self.calls.push(ViewCall::Active { target, active });
    }

    fn set_fill(&mut self, target: AnimatableRef, percent: f32) {
        self.fills.insert(target, percent);
        self.calls.push(ViewCall::Fill { target, percent });
    }

    fn set_counter_text(&mut self, target: AnimatableRef, text: &str) {
        self.texts.insert(target, text.to_owned());
        self.calls.push(ViewCall::CounterText {
            target,
            text: text.to_owned(),
        });
    }

    fn set_indicator(&mut self, index: usize) {
        self.indicator = Some(index);
        self.calls.push(ViewCall::Indicator(index));
    }

    fn set_nav_enabled(&mut self, prev: bool, next: bool) {
        self.nav = Some((prev, next));
        self.calls.push(ViewCall::NavEnabled { prev, next });
    }

    fn hide_hint(&mut self) {
        self.hint_hidden = true;
        self.calls.push(ViewCall::HintHidden);
    }
}
