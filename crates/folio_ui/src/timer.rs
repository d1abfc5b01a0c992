//! Host-driven time.
//!
//! Nothing here reads the OS clock. The host sets or advances a
//! [`DeterministicClock`] and the page pops whatever [`TimerQueue`] tasks
//! have come due.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Clock whose time only moves when the host says so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Creates a clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Jumps to `now`. Time never goes backwards; earlier values are ignored.
    pub fn set(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Moves time forward by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.now = self.now.saturating_add(delta);
    }
}

/// Cancels a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Tasks ordered by due time; equal due times fire in scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    /// (due, sequence) → payload.
    tasks: BTreeMap<(Duration, u64), T>,
    /// sequence → due, for cancellation.
    due_by_handle: HashMap<u64, Duration>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            due_by_handle: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Schedules `task` at absolute time `due`.
    pub fn schedule_at(&mut self, due: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert((due, seq), task);
        self.due_by_handle.insert(seq, due);
        TimerHandle(seq)
    }

    /// Schedules `task` `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TimerHandle {
        self.schedule_at(now.saturating_add(delay), task)
    }

    /// Cancels a task. Returns it if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let due = self.due_by_handle.remove(&handle.0)?;
        let task = self.tasks.remove(&(due, handle.0));
        if task.is_some() {
            tracing::debug!(handle = handle.0, "timer cancelled");
        }
        task
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        let (&(due, seq), _) = self.tasks.first_key_value()?;
        if due > now {
            return None;
        }
        self.due_by_handle.remove(&seq);
        self.tasks.remove(&(due, seq)).map(|task| (due, task))
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.keys().next().map(|&(due, _)| due)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.due_by_handle.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = DeterministicClock::new();
        clock.set(ms(100));
        clock.set(ms(50));
        assert_eq!(clock.now(), ms(100));

        clock.advance(ms(16));
        assert_eq!(clock.now(), ms(116));
    }

    #[test]
    fn test_pop_due_in_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_at(ms(300), "c");
        queue.schedule_at(ms(100), "a");
        queue.schedule_at(ms(200), "b");

        assert_eq!(queue.pop_due(ms(50)), None);
        assert_eq!(queue.pop_due(ms(250)), Some((ms(100), "a")));
        assert_eq!(queue.pop_due(ms(250)), Some((ms(200), "b")));
        assert_eq!(queue.pop_due(ms(250)), None);
        assert_eq!(queue.next_due(), Some(ms(300)));
    }

    #[test]
    fn test_ties_fire_fifo() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(0), ms(10), 1);
        queue.schedule(ms(0), ms(10), 2);
        queue.schedule(ms(0), ms(10), 3);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(10)))
            .map(|(_, t)| t)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule_at(ms(10), "keep");
        let drop = queue.schedule_at(ms(10), "drop");

        assert_eq!(queue.cancel(drop), Some("drop"));
        assert_eq!(queue.cancel(drop), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(ms(10)), Some((ms(10), "keep")));
        assert_eq!(queue.cancel(keep), None);
        assert!(queue.is_empty());
    }
}
