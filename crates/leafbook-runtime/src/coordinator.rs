#![forbid(unsafe_code)]

//! Animation coordinator: per-face enter and exit of animated content.
//!
//! [`AnimationCoordinator::activate`] schedules every animatable on a face
//! after its own delay; [`AnimationCoordinator::deactivate`] synchronously
//! returns the face to baseline (inactive, empty fills, `"0%"` counters).
//!
//! # Invariants
//!
//! 1. Each face has at most one live cancellation source. Activating or
//!    deactivating a face cancels whatever that face still had pending,
//!    including counter frames, so stale work never repaints a face.
//! 2. Deactivation is idempotent and safe on a face never activated.
//! 3. Absent content is skipped, never an error: a skill bar without a
//!    target width schedules nothing.
//! 4. Counter frames are at least [`MIN_FRAME_INTERVAL`] apart, so a
//!    running counter always yields back to `tick`.

use std::collections::HashMap;
use std::time::Duration;

use leafbook_core::animatable::Animatable;
use leafbook_core::book::{AnimatableRef, Face, FaceId};
use leafbook_core::config::TimingConfig;
use leafbook_core::easing::percent_text;
use leafbook_core::view::View;
use web_time::Instant;

use crate::cancellation::{CancellationSource, CancellationToken};
use crate::counter::CountUp;
use crate::scheduler::TimerQueue;

/// Floor applied to the configured counter frame interval.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Timed animation work owned by the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationTask {
    /// Mark an effect, split-text, or timeline element active.
    Reveal(AnimatableRef),
    /// Fill a skill bar to `percent`.
    Fill { target: AnimatableRef, percent: f32 },
    /// Begin counting a skill percentage up to `to`.
    StartCounter { target: AnimatableRef, to: u32 },
    /// One rendering frame of a running counter.
    CounterFrame { target: AnimatableRef, run: CountUp },
}

impl AnimationTask {
    #[must_use]
    pub fn target(&self) -> AnimatableRef {
        match self {
            Self::Reveal(target)
            | Self::Fill { target, .. }
            | Self::StartCounter { target, .. }
            | Self::CounterFrame { target, .. } => *target,
        }
    }
}

/// Activates and deactivates face content.
#[derive(Debug)]
pub struct AnimationCoordinator {
    timing: TimingConfig,
    sources: HashMap<FaceId, CancellationSource>,
}

impl AnimationCoordinator {
    #[must_use]
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            sources: HashMap::new(),
        }
    }

    /// `true` while the face has an activation in effect.
    #[must_use]
    pub fn is_active(&self, face: FaceId) -> bool {
        self.sources.contains_key(&face)
    }

    /// Publish the per-character transition offsets of every split-text
    /// element on `face`. Done once, when the book is set up.
    pub fn prepare(&self, face: &Face, view: &mut impl View) {
        let stagger = self.timing.split_char_stagger();
        for (target, animatable) in face.iter_refs() {
            if let Animatable::SplitText { .. } = animatable {
                view.set_char_delays(target, &animatable.char_delays(stagger));
            }
        }
    }

    /// Schedule every animatable of `face` relative to `now`.
    ///
    /// Anything still pending from an earlier activation of the same face
    /// is cancelled first.
    pub fn activate<T>(&mut self, face: &Face, now: Instant, queue: &mut TimerQueue<T>)
    where
        T: From<AnimationTask>,
    {
        let token = self.renew(face.id());
        let split_char = self.timing.split_char_delay();
        let skill_default = self.timing.default_skill_delay();
        let mut scheduled = 0usize;

        for (target, animatable) in face.iter_refs() {
            let task = match animatable {
                Animatable::Effect { .. }
                | Animatable::SplitText { .. }
                | Animatable::TimelineMarker { .. } => AnimationTask::Reveal(target),
                Animatable::SkillBar {
                    width: Some(percent),
                    ..
                } => AnimationTask::Fill {
                    target,
                    percent: *percent,
                },
                Animatable::SkillBar { width: None, .. } => continue,
                Animatable::SkillPercent { target: to, .. } => {
                    AnimationTask::StartCounter { target, to: *to }
                }
            };
            let at = now + animatable.activation_delay(split_char, skill_default);
            queue.schedule(at, token.clone(), task.into());
            scheduled += 1;
        }

        tracing::debug!(
            target: "leafbook.anim",
            face = ?face.id(),
            scheduled,
            "face activated"
        );
    }

    /// Return every animatable of `face` to baseline immediately.
    pub fn deactivate(&mut self, face: &Face, view: &mut impl View) {
        if let Some(source) = self.sources.remove(&face.id()) {
            source.cancel();
        }
        for (target, animatable) in face.iter_refs() {
            match animatable {
                Animatable::Effect { .. }
                | Animatable::SplitText { .. }
                | Animatable::TimelineMarker { .. } => view.set_active(target, false),
                Animatable::SkillBar { .. } => view.set_fill(target, 0.0),
                Animatable::SkillPercent { .. } => view.set_counter_text(target, &percent_text(0)),
            }
        }
        tracing::debug!(target: "leafbook.anim", face = ?face.id(), "face deactivated");
    }

    /// Run a task that came due at `at`.
    pub fn fire<T>(
        &mut self,
        task: AnimationTask,
        at: Instant,
        view: &mut impl View,
        queue: &mut TimerQueue<T>,
    ) where
        T: From<AnimationTask>,
    {
        match task {
            AnimationTask::Reveal(target) => view.set_active(target, true),
            AnimationTask::Fill { target, percent } => view.set_fill(target, percent),
            AnimationTask::StartCounter { target, to } => {
                let run = CountUp::new(0, to, self.timing.counter_duration(), at);
                self.schedule_frame(target, run, at, queue);
            }
            AnimationTask::CounterFrame { target, run } => {
                let sample = run.sample(at);
                view.set_counter_text(target, &sample.text());
                tracing::trace!(
                    target: "leafbook.anim",
                    animatable = ?target,
                    value = sample.value,
                    done = sample.done,
                    "counter frame"
                );
                if !sample.done {
                    self.schedule_frame(target, run, at, queue);
                }
            }
        }
    }

    fn schedule_frame<T>(
        &self,
        target: AnimatableRef,
        run: CountUp,
        at: Instant,
        queue: &mut TimerQueue<T>,
    ) where
        T: From<AnimationTask>,
    {
        // Only live tasks reach `fire`, so the face still owns a source here.
        let Some(token) = self.token(target.face) else {
            return;
        };
        queue.schedule(
            at + self.timing.frame_interval().max(MIN_FRAME_INTERVAL),
            token,
            AnimationTask::CounterFrame { target, run }.into(),
        );
    }

    fn token(&self, face: FaceId) -> Option<CancellationToken> {
        self.sources.get(&face).map(CancellationSource::token)
    }

    fn renew(&mut self, face: FaceId) -> CancellationToken {
        let source = CancellationSource::new();
        let token = source.token();
        if let Some(previous) = self.sources.insert(face, source) {
            previous.cancel();
        }
        token
    }
}
