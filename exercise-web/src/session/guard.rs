//! Transition guard - debounces exercise changes
//!
//! Two paths:
//! - fast: switch to a new stable exercise once the dwell time since the
//!   previous switch has passed
//! - slow: after a long stretch with no detection at all, give up and
//!   reset the session

use crate::classifier::ExerciseLabel;
use crate::config::EngineConfig;

/// What the session should do with this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuardDecision {
    /// Keep the committed exercise
    Hold,
    /// Switch to this exercise, resetting counters
    Commit(ExerciseLabel),
    /// Nothing detected for too long, clear everything
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionGuard {
    /// Time of the last committed change (or session start)
    last_transition_ms: f64,
    /// Time of the last frame with a non-`None` raw label.
    /// Unset after a reset so the slow path fires once per absence.
    last_detection_ms: Option<f64>,
}

impl TransitionGuard {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_transition_ms: now_ms,
            last_detection_ms: None,
        }
    }

    pub fn last_transition_ms(&self) -> f64 {
        self.last_transition_ms
    }

    pub fn last_detection_ms(&self) -> Option<f64> {
        self.last_detection_ms
    }

    /// Decide on one frame given its raw and stable labels
    pub fn evaluate(
        &mut self,
        committed: ExerciseLabel,
        raw: ExerciseLabel,
        stable: ExerciseLabel,
        now_ms: f64,
        config: &EngineConfig,
    ) -> GuardDecision {
        if !raw.is_none() {
            self.last_detection_ms = Some(now_ms);
        }

        if stable.is_none() {
            return match self.last_detection_ms {
                Some(seen) if now_ms - seen >= config.reset_timeout_ms => {
                    self.last_detection_ms = None;
                    self.last_transition_ms = now_ms;
                    GuardDecision::Reset
                }
                _ => GuardDecision::Hold,
            };
        }

        if stable != committed && now_ms - self.last_transition_ms >= config.min_dwell_ms {
            self.last_transition_ms = now_ms;
            return GuardDecision::Commit(stable);
        }

        GuardDecision::Hold
    }
}
