//! Boot sequence animator.
//!
//! Plays a fixed script of log lines with a random per-line delay, then
//! settles and reports that the terminal is ready for input. All timing goes
//! through a [`Timeline`] owned by the sequencer, so tearing the sequencer
//! down cancels every line that has not been shown yet.

use std::time::{Duration, Instant};

use rand::Rng;

use super::timeline::{TaskHandle, Timeline};

/// Log lines shown while the terminal boots.
pub const DEFAULT_BOOT_SCRIPT: &[&str] = &[
    "Initializing PortfolioOS Kernel v2.5.0...",
    "Loading modules: React, GSAP, Three.js...",
    "Verifying user identity... SUCCESS",
    "Mounting filesystem /dev/portfolio...",
    "Starting GUI services... OK",
    "Connecting to host... ESTABLISHED",
    "Type 'help' for available commands.",
];

/// One materialized line of the boot log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLine {
    pub text: String,
}

impl BootLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Delay parameters for the boot animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTiming {
    /// Lower bound (inclusive) of the per-line delay
    pub min_delay: Duration,
    /// Upper bound (exclusive) of the per-line delay
    pub max_delay: Duration,
    /// Pause between the last line and the ready transition
    pub settle: Duration,
}

impl Default for BootTiming {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(400),
            settle: Duration::from_millis(500),
        }
    }
}

impl BootTiming {
    /// Zero delays: every line and the ready transition are due immediately.
    pub const fn instant() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }

    /// Draw one per-line delay uniformly from `[min_delay, max_delay)`.
    ///
    /// A degenerate range (max <= min) always yields `min_delay`.
    pub fn sample_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.max_delay <= self.min_delay {
            return self.min_delay;
        }
        rng.gen_range(self.min_delay..self.max_delay)
    }
}

/// Something the boot timeline produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootEvent {
    /// Append this line to the boot log
    Line(BootLine),
    /// Boot finished and settled; accept input from now on
    Ready,
}

/// Lifecycle of a [`BootSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    /// Never activated
    #[default]
    Uninitialized,
    /// Lines scheduled, some still pending
    Running,
    /// Ready event delivered
    Finished,
    /// Torn down before finishing
    Cancelled,
}

/// Schedules the boot script once and feeds due events to its owner.
#[derive(Debug)]
pub struct BootSequencer {
    script: Vec<String>,
    timing: BootTiming,
    phase: BootPhase,
    timeline: Option<Timeline<BootEvent>>,
    handles: Vec<TaskHandle>,
}

impl BootSequencer {
    pub fn new(script: Vec<String>, timing: BootTiming) -> Self {
        Self {
            script,
            timing,
            phase: BootPhase::Uninitialized,
            timeline: None,
            handles: Vec::new(),
        }
    }

    /// Sequencer for [`DEFAULT_BOOT_SCRIPT`].
    pub fn with_default_script(timing: BootTiming) -> Self {
        Self::new(
            DEFAULT_BOOT_SCRIPT.iter().map(|s| s.to_string()).collect(),
            timing,
        )
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Schedule the whole script starting at `now`.
    ///
    /// Line `i` becomes due at the sum of the delays of lines `0..=i`; the
    /// ready event follows the last line after the settle delay. Only the
    /// first call does anything; later calls return false.
    pub fn activate<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        if self.phase != BootPhase::Uninitialized {
            tracing::debug!(phase = ?self.phase, "boot sequence already activated");
            return false;
        }

        let mut timeline = Timeline::new(now);
        let mut due = Duration::ZERO;
        for text in &self.script {
            due = due.saturating_add(self.timing.sample_delay(rng));
            let handle = timeline.schedule(due, BootEvent::Line(BootLine::new(text.clone())));
            self.handles.push(handle);
        }
        let ready_at = due.saturating_add(self.timing.settle);
        let handle = timeline.schedule(ready_at, BootEvent::Ready);
        self.handles.push(handle);

        tracing::info!(
            lines = self.script.len(),
            ready_after_ms = ready_at.as_millis() as u64,
            "boot sequence scheduled"
        );

        self.timeline = Some(timeline);
        self.phase = BootPhase::Running;
        true
    }

    /// Collect every event due at `now`, in script order.
    pub fn poll(&mut self, now: Instant) -> Vec<BootEvent> {
        let Some(timeline) = self.timeline.as_mut() else {
            return Vec::new();
        };

        let events = timeline.drain_due(now);
        if events.iter().any(|e| matches!(e, BootEvent::Ready)) {
            self.phase = BootPhase::Finished;
            self.handles.clear();
            self.timeline = None;
        }
        events
    }

    /// Offset from activation at which the next event is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.as_ref().and_then(|t| t.next_due())
    }

    /// Cancel everything still pending. Returns the number of cancelled tasks.
    pub fn teardown(&mut self) -> usize {
        let Some(mut timeline) = self.timeline.take() else {
            return 0;
        };

        let cancelled = self
            .handles
            .drain(..)
            .filter(|handle| timeline.cancel(*handle))
            .count();
        if self.phase == BootPhase::Running {
            self.phase = BootPhase::Cancelled;
        }
        tracing::debug!(cancelled, "boot sequence torn down");
        cancelled
    }
}

impl Drop for BootSequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}
