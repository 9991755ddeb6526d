#![forbid(unsafe_code)]

//! Navigation controller: the book's state machine.
//!
//! # State Machine
//!
//! ```text
//!            navigate(target)                 settle delay
//!   Idle ───────────────────────▶ Transitioning ─────────────▶ Idle
//!  busy=false   (guards pass)       busy=true     (activate)  busy=false
//! ```
//!
//! A transition deactivates the faces visible at the old position, flips
//! the leaves between old and new position one at a time, publishes the
//! new position to the view, and after the settle delay activates the
//! faces visible at the new position.
//!
//! # Invariants
//!
//! 1. At most one transition is in flight; requests while busy are
//!    dropped, never queued.
//! 2. `position` is always even and within `[0, page_count]`.
//! 3. Flips always start from a settled position, so flipped leaves stay a
//!    prefix: forward flips ascend, backward flips descend.
//! 4. A rejected `navigate` mutates nothing and schedules nothing.

use leafbook_core::book::Book;
use leafbook_core::config::BookConfig;
use leafbook_core::event::Command;
use leafbook_core::view::View;
use web_time::Instant;

use crate::cancellation::{CancellationSource, CancellationToken};
use crate::coordinator::{AnimationCoordinator, AnimationTask};
use crate::scheduler::TimerQueue;

/// Work scheduled by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// End of a transition: animate the new faces in and clear `busy`.
    Settle,
    /// First reveal of the faces shown at startup.
    Intro,
    Animation(AnimationTask),
}

impl From<AnimationTask> for Task {
    fn from(task: AnimationTask) -> Self {
        Self::Animation(task)
    }
}

/// Owns the book and drives every transition.
#[derive(Debug)]
pub struct NavigationController<V: View> {
    book: Book,
    config: BookConfig,
    view: V,
    queue: TimerQueue<Task>,
    coordinator: AnimationCoordinator,
    intro: Option<CancellationSource>,
    hint_visible: bool,
}

impl<V: View> NavigationController<V> {
    /// Take ownership of a closed book.
    ///
    /// Split-text offsets are published, every face is reset to baseline,
    /// and the indicator and nav controls are published for position 0.
    pub fn new(book: Book, config: BookConfig, mut view: V) -> Self {
        let mut coordinator = AnimationCoordinator::new(config.timing.clone());
        for face in book.all_faces() {
            coordinator.prepare(face, &mut view);
            coordinator.deactivate(face, &mut view);
        }
        let mut controller = Self {
            book,
            config,
            view,
            queue: TimerQueue::new(),
            coordinator,
            intro: None,
            hint_visible: true,
        };
        controller.publish_position();
        controller
    }

    /// Schedule the intro reveal of the faces visible right now.
    ///
    /// The intro does not mark the book busy. A navigation before it fires
    /// supersedes it.
    pub fn start(&mut self, now: Instant) {
        if let Some(previous) = self.intro.take() {
            previous.cancel();
        }
        let source = CancellationSource::new();
        self.queue.schedule(
            now + self.config.timing.intro_delay(),
            source.token(),
            Task::Intro,
        );
        self.intro = Some(source);
    }

    /// Transition to `target`.
    ///
    /// Returns `false` without touching anything if the book is busy, the
    /// target is odd or past the last page, or it equals the current
    /// position.
    pub fn navigate(&mut self, target: usize, now: Instant) -> bool {
        let position = self.book.position();
        if self.book.is_busy() {
            tracing::trace!(target: "leafbook.nav", requested = target, "navigation dropped: busy");
            return false;
        }
        if !self.book.is_valid_position(target) || target == position {
            tracing::trace!(
                target: "leafbook.nav",
                requested = target,
                position,
                "navigation rejected"
            );
            return false;
        }

        self.book.set_busy(true);
        if let Some(intro) = self.intro.take() {
            intro.cancel();
        }

        for face in self.book.visible_faces() {
            self.coordinator.deactivate(face, &mut self.view);
        }

        let from = position / 2;
        let to = target / 2;
        if target > position {
            for leaf in from..to {
                self.flip(leaf, true);
            }
        } else {
            for leaf in (to..from).rev() {
                self.flip(leaf, false);
            }
        }

        self.book.set_position(target);
        self.publish_position();
        if self.hint_visible {
            self.hint_visible = false;
            self.view.hide_hint();
        }

        self.queue.schedule(
            now + self.config.timing.settle_delay(),
            CancellationToken::never(),
            Task::Settle,
        );
        tracing::debug!(target: "leafbook.nav", from = position, to = target, "transition started");
        true
    }

    /// Turn one leaf forward; no-op on the last page.
    pub fn next(&mut self, now: Instant) -> bool {
        let pages = self.book.page_count();
        let stepped = (self.book.position() + 2).min(pages);
        let aligned = (stepped.div_ceil(2) * 2).min(pages);
        self.navigate(aligned, now)
    }

    /// Turn one leaf back; no-op on the first page.
    pub fn prev(&mut self, now: Instant) -> bool {
        let stepped = self.book.position().saturating_sub(2);
        let aligned = stepped / 2 * 2;
        self.navigate(aligned, now)
    }

    /// Apply a normalized command.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Next => self.next(now),
            Command::Prev => self.prev(now),
            Command::Jump(target) => self.navigate(target, now),
        }
    }

    /// Run every task due at or before `now`, in deadline order.
    ///
    /// Returns the number of tasks run.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut ran = 0;
        while let Some((at, task)) = self.queue.pop_due(now) {
            ran += 1;
            match task {
                Task::Settle => self.settle(at),
                Task::Intro => {
                    self.intro = None;
                    self.activate_visible(at);
                    tracing::debug!(target: "leafbook.nav", "intro revealed");
                }
                Task::Animation(task) => {
                    self.coordinator
                        .fire(task, at, &mut self.view, &mut self.queue);
                }
            }
        }
        ran
    }

    /// Earliest pending deadline, for hosts that sleep between ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_deadline()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.book.position()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.book.page_count()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.book.is_busy()
    }

    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    #[must_use]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn flip(&mut self, leaf: usize, flipped: bool) {
        if self.book.set_flipped(leaf, flipped) {
            self.view.set_leaf_flipped(leaf, flipped);
        }
    }

    fn settle(&mut self, at: Instant) {
        self.activate_visible(at);
        self.book.set_busy(false);
        tracing::debug!(target: "leafbook.nav", position = self.book.position(), "transition settled");
    }

    fn activate_visible(&mut self, at: Instant) {
        for face in self.book.visible_faces() {
            self.coordinator.activate(face, at, &mut self.queue);
        }
    }

    fn publish_position(&mut self) {
        let position = self.book.position();
        self.view.set_indicator(position / 2);
        self.view
            .set_nav_enabled(position > 0, position < self.book.page_count());
    }
}
