#![forbid(unsafe_code)]

//! Input aggregation: wheel, touch, keyboard, and clicks into commands.
//!
//! [`InputAggregator`] is a small stateful recognizer. It keeps a wheel
//! accumulator and the last touch-start point, and turns raw
//! [`InputEvent`]s into at most one [`Command`] each.
//!
//! # Rules
//!
//! - **Wheel**: discarded entirely while busy. Otherwise the delta is
//!   accumulated; once `|acc| >= wheel_threshold` a `Next` (positive) or
//!   `Prev` (negative) fires and the accumulator resets to zero.
//! - **Touch**: the start point is always recorded. On release (ignored
//!   while busy) the swipe `start - end` is measured on the vertical axis
//!   in portrait viewports and the horizontal axis otherwise; it must
//!   exceed `swipe_threshold`. A positive swipe means `Next`.
//! - **Keys**: ignored while busy. Right, Down, and Space mean `Next`;
//!   Left and Up mean `Prev`.
//! - **Clicks**: previous/next buttons map to `Prev`/`Next`; indicator `i`
//!   maps to `Jump(i * 2)`. Clicks are not filtered here; the controller's
//!   own guard applies.

use leafbook_core::config::InputConfig;
use leafbook_core::event::{ClickTarget, Command, InputEvent, KeyCode};
use leafbook_core::view::View;
use web_time::Instant;

use crate::controller::NavigationController;

/// What the aggregator made of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// Command derived from the event, if any.
    pub command: Option<Command>,
    /// Whether the command started a transition.
    pub navigated: bool,
    /// Whether the host should suppress the platform's default action.
    pub prevent_default: bool,
}

impl InputResponse {
    fn ignored() -> Self {
        Self::default()
    }

    fn suppressed(command: Option<Command>) -> Self {
        Self {
            command,
            navigated: false,
            prevent_default: true,
        }
    }

    fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            navigated: false,
            prevent_default: false,
        }
    }
}

/// Stateful normalizer of raw input.
#[derive(Debug, Clone)]
pub struct InputAggregator {
    config: InputConfig,
    wheel_accumulator: f64,
    touch_start: Option<(f64, f64)>,
}

impl InputAggregator {
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            wheel_accumulator: 0.0,
            touch_start: None,
        }
    }

    /// Current accumulated wheel delta.
    #[must_use]
    pub fn wheel_accumulator(&self) -> f64 {
        self.wheel_accumulator
    }

    /// Interpret `event` and dispatch the resulting command to `nav`.
    pub fn handle<V: View>(
        &mut self,
        event: &InputEvent,
        nav: &mut NavigationController<V>,
        now: Instant,
    ) -> InputResponse {
        let mut response = self.interpret(event, nav.is_busy());
        if let Some(command) = response.command {
            response.navigated = nav.dispatch(command, now);
        }
        response
    }

    /// Interpret `event` without dispatching.
    ///
    /// `busy` is the controller's transition flag at the time of the event.
    pub fn interpret(&mut self, event: &InputEvent, busy: bool) -> InputResponse {
        match *event {
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y, busy),
            InputEvent::TouchStart { x, y } => {
                self.touch_start = Some((x, y));
                InputResponse::ignored()
            }
            InputEvent::TouchEnd { x, y, viewport } => {
                if busy {
                    return InputResponse::ignored();
                }
                let Some((start_x, start_y)) = self.touch_start else {
                    return InputResponse::ignored();
                };
                let swipe = if viewport.is_portrait() {
                    start_y - y
                } else {
                    start_x - x
                };
                if swipe.abs() > self.config.swipe_threshold {
                    let command = if swipe > 0.0 {
                        Command::Next
                    } else {
                        Command::Prev
                    };
                    tracing::trace!(target: "leafbook.input", swipe, ?command, "swipe");
                    InputResponse::command(command)
                } else {
                    InputResponse::ignored()
                }
            }
            InputEvent::Key(code) => {
                if busy {
                    return InputResponse::ignored();
                }
                match code {
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                        InputResponse::suppressed(Some(Command::Next))
                    }
                    KeyCode::Left | KeyCode::Up => InputResponse::suppressed(Some(Command::Prev)),
                    _ => InputResponse::ignored(),
                }
            }
            InputEvent::Click(target) => match target {
                ClickTarget::Prev => InputResponse::command(Command::Prev),
                ClickTarget::Next => InputResponse::command(Command::Next),
                ClickTarget::Indicator(index) => match index.checked_mul(2) {
                    Some(position) => InputResponse::command(Command::Jump(position)),
                    None => InputResponse::ignored(),
                },
            },
        }
    }

    fn on_wheel(&mut self, delta_y: f64, busy: bool) -> InputResponse {
        if busy || !delta_y.is_finite() {
            tracing::trace!(target: "leafbook.input", delta_y, busy, "wheel discarded");
            return InputResponse::suppressed(None);
        }
        self.wheel_accumulator += delta_y;
        if self.wheel_accumulator.abs() < self.config.wheel_threshold {
            return InputResponse::suppressed(None);
        }
        let command = if self.wheel_accumulator > 0.0 {
            Command::Next
        } else {
            Command::Prev
        };
        self.wheel_accumulator = 0.0;
        InputResponse::suppressed(Some(command))
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
