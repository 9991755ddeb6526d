#![forbid(unsafe_code)]

//! Counter animator: eased numeric count-up sampled once per frame.
//!
//! A [`CountUp`] is a plain value describing one run. The coordinator
//! schedules a frame task per rendering frame; each frame samples the run
//! at its own timestamp and reschedules until the run reports completion.
//! Runs hold no cancellation handle of their own: they are stopped by
//! cancelling the token of the face they paint.

use std::time::Duration;

use leafbook_core::easing::{counter_value, percent_text};
use web_time::Instant;

/// One sampled frame of a counter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSample {
    pub value: u32,
    /// `true` once elapsed time reached the run duration.
    pub done: bool,
}

impl CounterSample {
    /// Display text, e.g. `"42%"`.
    #[must_use]
    pub fn text(&self) -> String {
        percent_text(self.value)
    }
}

/// A count from `from` to `to` over `duration`, starting at `started`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    from: u32,
    to: u32,
    duration: Duration,
    started: Instant,
}

impl CountUp {
    #[must_use]
    pub fn new(from: u32, to: u32, duration: Duration, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started,
        }
    }

    #[must_use]
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Progress fraction at `at`, clamped to `[0.0, 1.0]`.
    ///
    /// A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, at: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = at.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Sample the run at `at`.
    #[must_use]
    pub fn sample(&self, at: Instant) -> CounterSample {
        let p = self.progress(at);
        CounterSample {
            value: counter_value(self.from, self.to, p),
            done: p >= 1.0,
        }
    }
}
