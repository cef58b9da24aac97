//! Cooperative scheduled-task list.
//!
//! Tasks are scheduled at offsets from an origin instant and handed back by
//! [`Timeline::drain_due`] once the host's clock passes their due time. There
//! are no threads or real timers involved: the owner polls the timeline from
//! its event loop, and anything still pending when the owner goes away is
//! cancelled with it.

use std::time::{Duration, Instant};

/// Handle returned by [`Timeline::schedule`], used to cancel a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// Ordered list of pending tasks keyed by due offset.
#[derive(Debug)]
pub struct Timeline<T> {
    origin: Instant,
    next_id: u64,
    /// Kept sorted by due time, insertion order on ties
    pending: Vec<Scheduled<T>>,
}

impl<T> Timeline<T> {
    /// Create an empty timeline whose offsets are measured from `origin`.
    pub fn new(origin: Instant) -> Self {
        Self {
            origin,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `task` to become due `due` after the origin.
    pub fn schedule(&mut self, due: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        // Insert after every entry due at or before `due` so ties keep
        // insertion order.
        let pos = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(pos, Scheduled { handle, due, task });
        handle
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.iter().position(|s| s.handle == handle) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending task, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    /// Remove and return every task due at `now`, in due order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let elapsed = now.saturating_duration_since(self.origin);
        let split = self.pending.partition_point(|s| s.due <= elapsed);
        self.pending.drain(..split).map(|s| s.task).collect()
    }

    /// Due offset of the next pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|s| s.due)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
