#![forbid(unsafe_code)]

//! Single-threaded timer queue.
//!
//! The book runs on one logical thread: nothing here sleeps or spawns. The
//! host advances time by draining due entries with [`TimerQueue::pop_due`]
//! and can sleep until [`TimerQueue::next_deadline`].
//!
//! # Invariants
//!
//! 1. Entries come due in deadline order; equal deadlines keep scheduling
//!    order.
//! 2. An entry whose token was cancelled is never returned.
//! 3. `pop_due(now)` never returns an entry with a deadline after `now`.

use std::collections::BTreeMap;

use web_time::Instant;

use crate::cancellation::CancellationToken;

#[derive(Debug)]
struct Scheduled<T> {
    token: CancellationToken,
    task: T,
}

/// Deadline-ordered queue of cancellable tasks.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(Instant, u64), Scheduled<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to come due at `at`.
    pub fn schedule(&mut self, at: Instant, token: CancellationToken, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((at, seq), Scheduled { token, task });
    }

    /// Remove and return the earliest live entry due at or before `now`.
    ///
    /// Cancelled entries met on the way are discarded.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        loop {
            let entry = self.entries.first_entry()?;
            let (at, _) = *entry.key();
            if entry.get().token.is_cancelled() {
                entry.remove();
                continue;
            }
            if at > now {
                return None;
            }
            let scheduled = entry.remove();
            return Some((at, scheduled.task));
        }
    }

    /// Earliest deadline among live entries.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .find(|(_, s)| !s.token.is_cancelled())
            .map(|((at, _), _)| *at)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|s| !s.token.is_cancelled())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::CancellationSource;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_deadline_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0 + ms(30), CancellationToken::never(), "c");
        q.schedule(t0 + ms(10), CancellationToken::never(), "a");
        q.schedule(t0 + ms(20), CancellationToken::never(), "b");
        let order: Vec<&str> = std::iter::from_fn(|| q.pop_due(t0 + ms(100)).map(|(_, t)| t)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        for n in 0..5 {
            q.schedule(t0, CancellationToken::never(), n);
        }
        let order: Vec<i32> = std::iter::from_fn(|| q.pop_due(t0).map(|(_, t)| t)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn future_entries_are_not_due() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0 + ms(50), CancellationToken::never(), ());
        assert!(q.pop_due(t0 + ms(49)).is_none());
        assert_eq!(q.next_deadline(), Some(t0 + ms(50)));
        assert!(q.pop_due(t0 + ms(50)).is_some());
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let t0 = Instant::now();
        let source = CancellationSource::new();
        let mut q = TimerQueue::new();
        q.schedule(t0 + ms(5), source.token(), "dropped");
        q.schedule(t0 + ms(10), CancellationToken::never(), "kept");
        assert_eq!(q.len(), 2);
        source.cancel();
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(t0 + ms(10)));
        assert_eq!(q.pop_due(t0 + ms(20)).map(|(_, t)| t), Some("kept"));
        assert!(q.pop_due(t0 + ms(20)).is_none());
    }
}
