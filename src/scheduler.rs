//! One-shot timer scheduling
//!
//! The picker never owns a clock. It asks a [`Scheduler`] for a one-shot
//! timer on every keystroke and gets back an opaque [`TimerHandle`]; the host
//! later reports the handle as fired and the picker decides whether it is
//! still the pending one.
//!
//! [`TimerQueue`] is the cooperative implementation used by the terminal
//! runner and the tests. Its clock only moves when the caller advances it,
//! so tests can replay exact keystroke timings with synthetic instants.

use std::time::{Duration, Instant};

/// Opaque handle identifying one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Source of one-shot timers
pub trait Scheduler {
    /// Schedule a timer that becomes due after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer; a cancelled timer is never reported as due
    ///
    /// Cancelling an unknown or already fired handle does nothing.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Deadline-ordered timer queue over a caller-advanced clock
#[derive(Debug)]
pub struct TimerQueue {
    now: Instant,
    next_id: u64,
    /// Pending timers, kept sorted by deadline then handle
    pending: Vec<(Instant, TimerHandle)>,
}

impl TimerQueue {
    /// Create an empty queue whose clock starts at `now`
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current time as seen by the queue
    #[must_use]
    pub const fn now(&self) -> Instant {
        self.now
    }

    /// Advance the clock and return the timers that became due
    ///
    /// Due timers are returned in deadline order and forgotten. Passing an
    /// instant earlier than the current clock leaves the clock unchanged.
    pub fn advance_to(&mut self, now: Instant) -> Vec<TimerHandle> {
        if now > self.now {
            self.now = now;
        }

        let due = self
            .pending
            .partition_point(|&(deadline, _)| deadline <= self.now);

        self.pending
            .drain(..due)
            .map(|(_, handle)| handle)
            .collect()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|&(deadline, _)| deadline)
    }

    /// Time left until the earliest pending deadline (zero if overdue)
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(self.now))
    }

    /// Whether `handle` is still waiting to fire
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|&(_, h)| h == handle)
    }

    /// Number of pending timers
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let deadline = self.now + delay;
        let pos = self.pending.partition_point(|&entry| entry <= (deadline, handle));
        self.pending.insert(pos, (deadline, handle));

        tracing::trace!(?handle, ?delay, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.pending.len();
        self.pending.retain(|&(_, h)| h != handle);
        if self.pending.len() != before {
            tracing::trace!(?handle, "timer cancelled");
        }
    }
}
