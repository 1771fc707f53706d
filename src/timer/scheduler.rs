//! Virtual-time scheduler with cancellable one-shot and repeating timers.
//!
//! The host drives time forward; the scheduler never reads a wall clock.
//! Due timers are handed out one at a time, earliest first (ties broken by
//! creation order), so a handler can cancel or schedule timers before the
//! next one fires.
//!
//! ```
//! use std::time::Duration;
//! use scramble_recall::timer::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let tick = scheduler.schedule_every(Duration::from_secs(2), "tick");
//! scheduler.schedule_once(Duration::from_secs(3), "once");
//!
//! let horizon = Duration::from_secs(4);
//! let mut fired = Vec::new();
//! while let Some(f) = scheduler.pop_due(horizon) {
//!     fired.push(f.task);
//! }
//! assert_eq!(fired, vec!["tick", "once", "tick"]);
//!
//! assert!(scheduler.cancel(tick));
//! assert_eq!(scheduler.pending_count(), 0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Firing pattern of a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recurrence {
    /// Fires once, then is removed.
    Once,
    /// Fires every period until cancelled.
    Every(Duration),
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    /// `None` once the due time is past the end of representable time.
    due: Option<Duration>,
    recurrence: Recurrence,
    task: T,
}

/// A timer that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub at: Duration,
    pub task: T,
}

/// Cooperative timer queue over a virtual clock.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `task` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TimerId {
        self.push(self.now.checked_add(delay), Recurrence::Once, task)
    }

    /// Fire `task` every `period`, first at `now + period`.
    ///
    /// A timer whose due time overflows `Duration` stays pending but never fires.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn schedule_every(&mut self, period: Duration, task: T) -> TimerId {
        assert!(!period.is_zero(), "repeating timer period must be non-zero");
        self.push(self.now.checked_add(period), Recurrence::Every(period), task)
    }

    fn push(&mut self, due: Option<Duration>, recurrence: Recurrence, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, recurrence, task });
        id
    }

    /// Cancel a timer. Returns false if it already fired (once) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    /// Due time of the earliest timer that can still fire.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.earliest().and_then(|i| self.entries[i].due)
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.due.map(|due| (i, due, e.id)))
            .min_by_key(|&(_, due, id)| (due, id))
            .map(|(i, _, _)| i)
    }

    /// Pop the earliest timer due at or before `horizon`, moving the clock to
    /// its due time. Repeating timers are rescheduled one period later.
    pub fn pop_due(&mut self, horizon: Duration) -> Option<Fired<T>> {
        let index = self.earliest()?;
        let at = self.entries[index].due?;
        if at > horizon {
            return None;
        }

        self.now = self.now.max(at);

        let fired = match self.entries[index].recurrence {
            Recurrence::Once => {
                let entry = self.entries.swap_remove(index);
                Fired { id: entry.id, at, task: entry.task }
            }
            Recurrence::Every(period) => {
                let entry = &mut self.entries[index];
                entry.due = at.checked_add(period);
                Fired { id: entry.id, at, task: entry.task.clone() }
            }
        };
        Some(fired)
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// Call after draining `pop_due(time)`; never moves the clock backwards.
    pub fn settle_at(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, horizon: Duration) -> Vec<(Duration, &'static str)> {
        let mut out = Vec::new();
        while let Some(f) = scheduler.pop_due(horizon) {
            out.push((f.at, f.task));
        }
        scheduler.settle_at(horizon);
        out
    }

    #[test]
    fn test_once_fires_once() {
        let mut s = Scheduler::new();
        let id = s.schedule_once(secs(3), "a");

        assert!(drain(&mut s, secs(2)).is_empty());
        assert_eq!(s.now(), secs(2));
        assert!(s.is_pending(id));

        assert_eq!(drain(&mut s, secs(3)), vec![(secs(3), "a")]);
        assert!(!s.is_pending(id));
        assert!(drain(&mut s, secs(100)).is_empty());
    }

    #[test]
    fn test_every_repeats_at_period() {
        let mut s = Scheduler::new();
        s.schedule_every(secs(2), "t");

        let fired = drain(&mut s, secs(7));
        assert_eq!(fired, vec![(secs(2), "t"), (secs(4), "t"), (secs(6), "t")]);
        assert_eq!(s.next_due(), Some(secs(8)));
    }

    #[test]
    fn test_ties_fire_in_creation_order() {
        let mut s = Scheduler::new();
        s.schedule_once(secs(1), "first");
        s.schedule_once(secs(1), "second");

        let fired: Vec<_> = drain(&mut s, secs(1)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec!["first", "second"]);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let id = s.schedule_every(secs(1), "t");

        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert!(drain(&mut s, secs(10)).is_empty());
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut s = Scheduler::new();
        s.settle_at(secs(5));
        s.schedule_once(secs(2), "a");

        assert_eq!(s.next_due(), Some(secs(7)));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.settle_at(secs(5));
        s.settle_at(secs(3));
        assert_eq!(s.now(), secs(5));
    }

    #[test]
    fn test_overflowing_due_time_never_fires() {
        let mut s = Scheduler::new();
        s.settle_at(Duration::MAX);
        let once = s.schedule_once(secs(1), "once");
        let every = s.schedule_every(secs(1), "every");

        assert_eq!(s.next_due(), None);
        assert!(drain(&mut s, Duration::MAX).is_empty());
        assert!(s.is_pending(once));
        assert!(s.cancel(every));
    }

    #[test]
    fn test_repeating_stops_at_end_of_time() {
        let mut s = Scheduler::new();
        s.settle_at(Duration::MAX - secs(3));
        s.schedule_every(secs(2), "t");

        let fired = drain(&mut s, Duration::MAX);
        assert_eq!(fired, vec![(Duration::MAX - secs(1), "t")]);
        assert_eq!(s.next_due(), None);
        assert_eq!(s.pending_count(), 1);
    }

    #[test]
    #[should_panic(expected = "repeating timer period must be non-zero")]
    fn test_zero_period_panics() {
        let mut s = Scheduler::new();
        s.schedule_every(Duration::ZERO, "t");
    }
}
