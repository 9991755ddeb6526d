#![forbid(unsafe_code)]

//! Session facade for a host event loop.
//!
//! [`FlipBook`] bundles a [`NavigationController`] with an
//! [`InputAggregator`]. A host feeds it raw input, calls
//! [`tick`](FlipBook::tick) on every timer or frame wakeup, and may sleep
//! until [`next_deadline`](FlipBook::next_deadline).
//!
//! Construction rejects a layout without leaves and any config that
//! [`BookConfig::validate`] reports problems for.
//!
//! ```
//! use leafbook_core::{BookConfig, BookLayout, InputEvent, KeyCode};
//! use leafbook_runtime::{FlipBook, RecordingView};
//! use web_time::{Duration, Instant};
//!
//! let mut book = FlipBook::new(&BookLayout::blank(4), BookConfig::default(), RecordingView::new())
//!     .expect("valid book");
//! let t0 = Instant::now();
//! book.start(t0);
//! book.handle_input(&InputEvent::Key(KeyCode::Right), t0);
//! book.tick(t0 + Duration::from_secs(1));
//! assert_eq!(book.controller().position(), 2);
//! ```

use leafbook_core::book::Book;
use leafbook_core::config::{BookConfig, ConfigError};
use leafbook_core::event::InputEvent;
use leafbook_core::layout::{BookLayout, LayoutError};
use leafbook_core::view::View;
use thiserror::Error;
use web_time::Instant;

use crate::controller::NavigationController;
use crate::input::{InputAggregator, InputResponse};

/// Why a session could not be built.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// A running book session.
#[derive(Debug)]
pub struct FlipBook<V: View> {
    controller: NavigationController<V>,
    input: InputAggregator,
}

impl<V: View> FlipBook<V> {
    /// Build a session from structural data.
    pub fn new(layout: &BookLayout, config: BookConfig, view: V) -> Result<Self, SessionError> {
        layout.validate()?;
        let problems = config.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Validation(problems).into());
        }
        let input = InputAggregator::new(config.input.clone());
        let controller = NavigationController::new(Book::from_layout(layout), config, view);
        tracing::info!(
            target: "leafbook.nav",
            leaves = layout.leaf_count(),
            "book session created"
        );
        Ok(Self { controller, input })
    }

    /// Schedule the intro reveal.
    pub fn start(&mut self, now: Instant) {
        self.controller.start(now);
    }

    /// Feed one raw input event.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> InputResponse {
        self.input.handle(event, &mut self.controller, now)
    }

    /// Run all work due at or before `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.controller.tick(now)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    #[must_use]
    pub fn controller(&self) -> &NavigationController<V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavigationController<V> {
        &mut self.controller
    }

    #[must_use]
    pub fn input(&self) -> &InputAggregator {
        &self.input
    }
}
