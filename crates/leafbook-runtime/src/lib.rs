#![forbid(unsafe_code)]

//! Leafbook Runtime
//!
//! This crate schedules and coordinates everything that happens over time
//! in a page-flip book: transitions, content reveals, and counters.
//!
//! # Key Components
//!
//! - [`NavigationController`] - the single-flight transition state machine
//! - [`AnimationCoordinator`] - per-face enter/exit of animated content
//! - [`CountUp`] - eased percentage counter sampled per frame
//! - [`InputAggregator`] - wheel, touch, key, and click normalization
//! - [`TimerQueue`] - deadline-ordered, cancellable task queue
//! - [`FlipBook`] - session facade for a host event loop
//!
//! # How it fits in the system
//! The host owns the clock and the rendering surface. It passes `now` into
//! every call, implements [`View`](leafbook_core::View), and calls
//! [`FlipBook::tick`] whenever a deadline passes. Nothing here blocks,
//! sleeps, or spawns threads.

pub mod cancellation;
pub mod controller;
pub mod coordinator;
pub mod counter;
pub mod input;
#[cfg(feature = "subscriber")]
pub mod logging;
pub mod scheduler;
pub mod session;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use cancellation::{CancellationSource, CancellationToken};
pub use controller::{NavigationController, Task};
pub use coordinator::{AnimationCoordinator, AnimationTask};
pub use counter::{CountUp, CounterSample};
pub use input::{InputAggregator, InputResponse};
pub use scheduler::TimerQueue;
pub use session::{FlipBook, SessionError};
#[cfg(any(test, feature = "test-helpers"))]
pub use testing::{RecordingView, ViewCall};
