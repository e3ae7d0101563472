use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routine::{Phase, RoutineOptions};

/// Every state change of a session or a step timer produces an Event.
/// The front end renders from them; they serialize as tagged JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Intro confirmed, morning sequence built.
    RoutineStarted {
        options: RoutineOptions,
        step_count: usize,
        at: DateTime<Utc>,
    },
    StepAdvanced {
        phase: Phase,
        step_index: usize,
        step_id: String,
        at: DateTime<Utc>,
    },
    StepWentBack {
        phase: Phase,
        step_index: usize,
        step_id: String,
        at: DateTime<Utc>,
    },
    /// Last step of a phase passed; the next phase starts at index 0.
    PhaseChanged {
        from: Phase,
        to: Phase,
        step_count: usize,
        at: DateTime<Utc>,
    },
    RoutineCompleted {
        at: DateTime<Utc>,
    },
    RoutineRestarted {
        at: DateTime<Utc>,
    },
    /// An option changed while a phase was active.
    StepsRebuilt {
        phase: Phase,
        step_count: usize,
        step_index: usize,
        at: DateTime<Utc>,
    },
    TimerStarted {
        step_id: String,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        step_id: String,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        step_id: String,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero.
    TimerCompleted {
        step_id: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        step_index: usize,
        step_count: usize,
        step_id: Option<String>,
        at: DateTime<Utc>,
    },
}
