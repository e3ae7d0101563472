//! Per-step countdown.
//!
//! Like the rest of the core this is a plain state machine without
//! threads: the owner calls `tick()` once per second while the countdown
//! runs. See [`super::StepTimer`] for the scheduled variant.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running -> (Stopped | Finished)
//! any -> reset -> Stopped (initial value)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::routine::Step;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    step_id: String,
    initial_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    pub fn new(step_id: impl Into<String>, secs: u32) -> Self {
        Self {
            step_id: step_id.into(),
            initial_secs: secs,
            remaining_secs: secs,
            running: false,
        }
    }

    /// Countdown for `step`, or `None` when the step hosts no timer.
    pub fn for_step(step: &Step) -> Option<Self> {
        step.timer_seconds().map(|secs| Self::new(step.id.clone(), secs))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn step_id(&self) -> &str {
        &self.step_id
    }

    pub fn initial_secs(&self) -> u32 {
        self.initial_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_mmss(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            step_id: self.step_id.clone(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            step_id: self.step_id.clone(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and rewind to the initial value, whatever the current state.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_secs = self.initial_secs;
        Event::TimerReset {
            step_id: self.step_id.clone(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance one second. Returns `Some(Event::TimerCompleted)` on the
    /// tick that reaches zero; ticks while stopped do nothing.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs == 0 {
            self.running = false;
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return None;
        }
        self.running = false;
        Some(Event::TimerCompleted {
            step_id: self.step_id.clone(),
            at: Utc::now(),
        })
    }
}

/// Format seconds as zero-padded `MM:SS`. Minutes do not roll over into hours.
pub fn format_mmss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
