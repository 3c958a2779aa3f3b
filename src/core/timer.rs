//! Study timer state machine.
//!
//! A wall-clock-based two-state machine (`Idle` / `Running`) with no
//! internal thread: elapsed time is computed lazily from the instant the
//! current running interval began. Every transition has an `*_at` variant
//! taking an explicit `Instant` so behavior is testable without sleeping;
//! the plain methods delegate with `Instant::now()`.

use crate::errors::{AppError, AppResult};
use crate::utils::time::format_hms;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct StudyTimer {
    /// Accumulated elapsed time from completed running intervals.
    elapsed: Duration,
    /// Instant the current running interval began; `None` when idle.
    started: Option<Instant>,
}

impl Default for StudyTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyTimer {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            started: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Start a running interval. Only valid while idle.
    pub fn start(&mut self) -> AppResult<()> {
        self.start_at(Instant::now())
    }

    pub fn start_at(&mut self, now: Instant) -> AppResult<()> {
        if self.started.is_some() {
            return Err(AppError::Timer("Timer is already running".to_string()));
        }
        self.started = Some(now);
        Ok(())
    }

    /// Stop the running interval, folding its length into the accumulated
    /// total. Returns `true` if a transition happened; stopping an idle
    /// timer is a no-op (so a doubled stop never double-counts).
    pub fn stop(&mut self) -> bool {
        self.stop_at(Instant::now())
    }

    pub fn stop_at(&mut self, now: Instant) -> bool {
        match self.started.take() {
            Some(started) => {
                self.elapsed += now.saturating_duration_since(started);
                true
            }
            None => false,
        }
    }

    /// Total tracked time, including the live delta while running.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self.elapsed + now.saturating_duration_since(started),
            None => self.elapsed,
        }
    }

    /// Take the accumulated total, leaving the timer at zero. The caller
    /// finalizes a session with the returned duration; clearing here is
    /// what closes the session boundary, whatever the save outcome.
    pub fn take_elapsed(&mut self) -> Duration {
        std::mem::take(&mut self.elapsed)
    }

    /// Drop all state: idle, zero elapsed, nothing accumulated.
    pub fn clear(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = None;
    }

    /// Display value, zero-padded `HH:MM:SS` (hours unbounded).
    pub fn display(&self) -> String {
        self.display_at(Instant::now())
    }

    pub fn display_at(&self, now: Instant) -> String {
        format_hms(self.elapsed_at(now).as_secs() as i64)
    }
}
