//! Routine session state machine.
//!
//! A session walks the day's routine one step at a time:
//!
//! ```text
//! Intro -> Morning -> Evening -> Done
//!   ^__________ restart ___________|
//! ```
//!
//! The step sequence of the active phase is always derived from the
//! current options through the catalog, so changing an option while a
//! phase is active rebuilds the sequence in place.
//!
//! ## Usage
//!
//! ```
//! use skincare_flow_core::{GoingOut, RoutineOptions, RoutineSession, Phase};
//!
//! let mut session = RoutineSession::new(RoutineOptions::default());
//! assert!(session.start().is_none()); // going-out not answered yet
//! session.set_going_out(GoingOut::No);
//! session.start();
//! assert_eq!(session.phase(), Phase::Morning);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::events::Event;
use crate::routine::{build_steps, GoingOut, Phase, RoutineOptions, Step};

/// Label of the forward control on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextControl {
    Next,
    /// Last step of the evening.
    Finish,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineSession {
    phase: Phase,
    options: RoutineOptions,
    steps: Vec<Step>,
    /// Always `< steps.len()` while the phase has steps.
    index: usize,
}

impl RoutineSession {
    /// New session in the intro phase with `options` pre-selected.
    pub fn new(options: RoutineOptions) -> Self {
        Self {
            phase: Phase::Intro,
            options: RoutineOptions {
                used_spf_today: false,
                ..options
            },
            steps: Vec::new(),
            index: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> &RoutineOptions {
        &self.options
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.index)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        !self.steps.is_empty() && self.index + 1 == self.steps.len()
    }

    /// The back control is hidden on the first step of a phase.
    pub fn can_go_back(&self) -> bool {
        self.current_step().is_some() && self.index > 0
    }

    /// The start control stays disabled until going-out is answered.
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Intro && self.options.going_out.is_known()
    }

    /// Forward control for the current step; `None` when no step renders.
    pub fn next_control(&self) -> Option<NextControl> {
        self.current_step()?;
        if self.phase == Phase::Evening && self.is_last() {
            Some(NextControl::Finish)
        } else {
            Some(NextControl::Next)
        }
    }

    /// One-based position and length of the active sequence.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_step()?;
        Some((self.index + 1, self.steps.len()))
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            step_index: self.index,
            step_count: self.steps.len(),
            step_id: self.current_step().map(|s| s.id.clone()),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Leave the intro and begin the morning routine.
    ///
    /// Returns `None` without changing anything while going-out is unknown
    /// or the session is not in the intro.
    pub fn start(&mut self) -> Option<Event> {
        if !self.can_start() {
            debug!(phase = %self.phase, going_out = ?self.options.going_out, "start rejected");
            return None;
        }
        self.options.used_spf_today = self.options.going_out.as_bool().unwrap_or(false);
        self.enter_phase(Phase::Morning);
        info!(
            step_count = self.steps.len(),
            used_spf_today = self.options.used_spf_today,
            "morning routine started"
        );
        Some(Event::RoutineStarted {
            options: self.options,
            step_count: self.steps.len(),
            at: Utc::now(),
        })
    }

    /// Move to the next step, or on the last step into the next phase.
    pub fn advance(&mut self) -> Option<Event> {
        if self.current_step().is_none() {
            return None;
        }
        if !self.is_last() {
            self.index += 1;
            debug!(phase = %self.phase, index = self.index, "advanced");
            return Some(self.step_event(true));
        }

        let from = self.phase;
        let to = from.next();
        self.enter_phase(to);
        if to == Phase::Done {
            info!("routine completed");
            return Some(Event::RoutineCompleted { at: Utc::now() });
        }
        debug!(%from, %to, step_count = self.steps.len(), "phase changed");
        Some(Event::PhaseChanged {
            from,
            to,
            step_count: self.steps.len(),
            at: Utc::now(),
        })
    }

    /// Move to the previous step. No-op on the first step.
    pub fn back(&mut self) -> Option<Event> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        debug!(phase = %self.phase, index = self.index, "went back");
        Some(self.step_event(false))
    }

    /// Return to the intro, discarding the sequence and derived options.
    ///
    /// The user's selections stay as they were so the intro shows them.
    pub fn restart(&mut self) -> Event {
        self.options.used_spf_today = false;
        self.enter_phase(Phase::Intro);
        debug!("session restarted");
        Event::RoutineRestarted { at: Utc::now() }
    }

    pub fn set_going_out(&mut self, going_out: GoingOut) -> Option<Event> {
        self.update_options(|o| o.going_out = going_out)
    }

    pub fn set_saturday(&mut self, saturday: bool) -> Option<Event> {
        self.update_options(|o| o.saturday = saturday)
    }

    pub fn set_do_bha_tonight(&mut self, do_bha_tonight: bool) -> Option<Event> {
        self.update_options(|o| o.do_bha_tonight = do_bha_tonight)
    }

    pub fn set_minoxidil_twice(&mut self, minoxidil_twice: bool) -> Option<Event> {
        self.update_options(|o| o.minoxidil_twice = minoxidil_twice)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Apply an option change; returns `StepsRebuilt` when an active
    /// sequence had to be recomputed.
    fn update_options(&mut self, change: impl FnOnce(&mut RoutineOptions)) -> Option<Event> {
        let before = self.options;
        change(&mut self.options);
        if self.options == before || !self.phase.has_steps() {
            return None;
        }
        self.steps = build_steps(self.phase, &self.options);
        self.index = self.index.min(self.steps.len().saturating_sub(1));
        debug!(
            phase = %self.phase,
            step_count = self.steps.len(),
            index = self.index,
            "steps rebuilt after option change"
        );
        Some(Event::StepsRebuilt {
            phase: self.phase,
            step_count: self.steps.len(),
            step_index: self.index,
            at: Utc::now(),
        })
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.steps = build_steps(phase, &self.options);
        self.index = 0;
    }

    fn step_event(&self, forward: bool) -> Event {
        let step_id = self
            .current_step()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        if forward {
            Event::StepAdvanced {
                phase: self.phase,
                step_index: self.index,
                step_id,
                at: Utc::now(),
            }
        } else {
            Event::StepWentBack {
                phase: self.phase,
                step_index: self.index,
                step_id,
                at: Utc::now(),
            }
        }
    }
}

impl Default for RoutineSession {
    fn default() -> Self {
        Self::new(RoutineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(going_out: GoingOut) -> RoutineSession {
        let mut session = RoutineSession::default();
        session.set_going_out(going_out);
        assert!(session.start().is_some());
        session
    }

    #[test]
    fn start_requires_going_out() {
        let mut session = RoutineSession::default();
        assert!(!session.can_start());
        assert!(session.start().is_none());
        assert_eq!(session.phase(), Phase::Intro);
        assert!(session.steps().is_empty());

        session.set_going_out(GoingOut::Yes);
        assert!(session.can_start());
        assert!(matches!(session.start(), Some(Event::RoutineStarted { step_count: 10, .. })));
        assert_eq!(session.phase(), Phase::Morning);
        assert_eq!(session.index(), 0);
        assert!(session.options().used_spf_today);
    }

    #[test]
    fn start_outside_intro_is_rejected() {
        let mut session = started(GoingOut::No);
        session.advance();
        assert!(session.start().is_none());
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn back_is_a_noop_on_first_step() {
        let mut session = started(GoingOut::No);
        assert!(!session.can_go_back());
        assert!(session.back().is_none());
        assert_eq!(session.index(), 0);

        session.advance();
        assert!(session.can_go_back());
        assert!(matches!(session.back(), Some(Event::StepWentBack { step_index: 0, .. })));
    }

    #[test]
    fn advance_past_last_morning_step_enters_evening() {
        let mut session = started(GoingOut::Yes);
        for _ in 0..9 {
            session.advance();
        }
        assert!(session.is_last());
        assert_eq!(session.current_step().unwrap().id, "minoxidil");
        assert_eq!(session.next_control(), Some(NextControl::Next));

        match session.advance() {
            Some(Event::PhaseChanged { from, to, step_count, .. }) => {
                assert_eq!(from, Phase::Morning);
                assert_eq!(to, Phase::Evening);
                // double cleanse, eye, serum, cream, wait, minoxidil
                assert_eq!(step_count, 6);
            }
            other => panic!("Expected PhaseChanged, got {other:?}"),
        }
        assert_eq!(session.index(), 0);
        assert_eq!(session.current_step().unwrap().title, "Double Cleansing");
    }

    #[test]
    fn evening_finish_completes_routine() {
        let mut session = started(GoingOut::No);
        session.set_minoxidil_twice(false);
        while session.phase() == Phase::Morning {
            session.advance();
        }
        assert_eq!(session.steps().len(), 4);
        for _ in 0..3 {
            session.advance();
        }
        assert_eq!(session.next_control(), Some(NextControl::Finish));
        assert!(matches!(session.advance(), Some(Event::RoutineCompleted { .. })));
        assert_eq!(session.phase(), Phase::Done);
        assert!(session.current_step().is_none());
        assert!(session.next_control().is_none());
        assert!(session.advance().is_none());
        assert!(session.back().is_none());
    }

    #[test]
    fn restart_discards_sequence_but_keeps_selections() {
        let mut session = started(GoingOut::Yes);
        session.set_saturday(true);
        session.advance();
        session.restart();

        assert_eq!(session.phase(), Phase::Intro);
        assert!(session.steps().is_empty());
        assert_eq!(session.index(), 0);
        assert!(!session.options().used_spf_today);
        assert_eq!(session.options().going_out, GoingOut::Yes);
        assert!(session.options().saturday);
    }

    #[test]
    fn option_change_rebuilds_active_phase() {
        let mut session = started(GoingOut::No);
        assert_eq!(session.steps().len(), 7);

        match session.set_saturday(true) {
            Some(Event::StepsRebuilt { step_count, .. }) => assert_eq!(step_count, 12),
            other => panic!("Expected StepsRebuilt, got {other:?}"),
        }
        // Unchanged value does not rebuild.
        assert!(session.set_saturday(true).is_none());
    }

    #[test]
    fn rebuild_clamps_index_into_shorter_sequence() {
        let mut session = started(GoingOut::Yes);
        session.set_saturday(true);
        for _ in 0..14 {
            session.advance();
        }
        assert_eq!(session.index(), 14);

        session.set_saturday(false);
        session.set_going_out(GoingOut::No);
        assert_eq!(session.steps().len(), 7);
        assert_eq!(session.index(), 6);
        assert!(session.current_step().is_some());
    }

    #[test]
    fn option_change_in_intro_builds_nothing() {
        let mut session = RoutineSession::default();
        assert!(session.set_do_bha_tonight(true).is_none());
        assert!(session.steps().is_empty());
    }

    #[test]
    fn used_spf_is_captured_at_start() {
        let mut session = started(GoingOut::Yes);
        session.set_going_out(GoingOut::No);
        assert!(session.options().used_spf_today);
        while session.phase() == Phase::Morning {
            session.advance();
        }
        assert_eq!(session.current_step().unwrap().title, "Double Cleansing");
    }

    #[test]
    fn snapshot_reflects_position() {
        let mut session = started(GoingOut::No);
        session.advance();
        match session.snapshot() {
            Event::StateSnapshot { phase, step_index, step_count, step_id, .. } => {
                assert_eq!(phase, Phase::Morning);
                assert_eq!(step_index, 1);
                assert_eq!(step_count, 7);
                assert_eq!(step_id.as_deref(), Some("cleanser"));
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
        assert_eq!(session.progress(), Some((2, 7)));
    }
}
