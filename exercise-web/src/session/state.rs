//! Session state and per-frame output
//!
//! `SessionState` is the only long-lived mutable data in the engine. It is
//! owned by the caller and changed only by `Engine::update`.

use serde::Serialize;

use super::feedback::Cue;
use super::guard::TransitionGuard;
use super::reps::{RepMachine, RepPhase};
use crate::classifier::{ExerciseLabel, LabelHistory, Stabilizer};
use crate::config::EngineConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub(super) stabilizer: Stabilizer,
    pub(super) guard: TransitionGuard,
    pub(super) machine: RepMachine,
    pub(super) rep_count: u32,
    pub(super) hold_seconds: u32,
}

impl SessionState {
    /// Fresh session starting at `now_ms`
    pub fn new(config: &EngineConfig, now_ms: f64) -> Self {
        Self {
            stabilizer: Stabilizer::new(config.history_len),
            guard: TransitionGuard::new(now_ms),
            machine: RepMachine::Idle,
            rep_count: 0,
            hold_seconds: 0,
        }
    }

    /// Committed (debounced) exercise
    pub fn committed(&self) -> ExerciseLabel {
        self.machine.label()
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Whole seconds of plank hold, 0 for other exercises
    pub fn hold_seconds(&self) -> u32 {
        self.hold_seconds
    }

    pub fn phase(&self) -> Option<RepPhase> {
        self.machine.phase()
    }

    pub fn plank_start_ms(&self) -> Option<f64> {
        self.machine.plank_start_ms()
    }

    pub fn last_transition_ms(&self) -> f64 {
        self.guard.last_transition_ms()
    }

    pub fn history(&self) -> &LabelHistory {
        self.stabilizer.history()
    }

    /// Switch exercise: machine, counter and timer change together
    pub(super) fn commit(&mut self, label: ExerciseLabel, now_ms: f64) {
        self.machine = RepMachine::start(label, now_ms);
        self.rep_count = 0;
        self.hold_seconds = 0;
    }

    /// Drop everything learned since the last detection
    pub(super) fn clear(&mut self) {
        self.stabilizer.clear();
        self.machine = RepMachine::Idle;
        self.rep_count = 0;
        self.hold_seconds = 0;
    }
}

/// Everything the presentation layer reads after one update
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameOutput {
    pub committed_exercise: ExerciseLabel,
    pub rep_count: u32,
    /// Plank hold in whole seconds, 0 for other exercises
    pub hold_seconds: u32,
    /// Mean landmark visibility, [0, 1]
    pub confidence: f32,
    pub feedback: String,
    #[serde(skip)]
    pub cue: Cue,

    // Debug data
    pub raw_label: ExerciseLabel,
    pub stable_label: ExerciseLabel,
    pub phase: Option<RepPhase>,
    pub person_detected: bool,
    pub timestamp_ms: f64,
}

impl FrameOutput {
    /// Output shown before the first frame or right after a reset
    pub fn idle(cue: Cue, timestamp_ms: f64) -> Self {
        Self {
            committed_exercise: ExerciseLabel::None,
            rep_count: 0,
            hold_seconds: 0,
            confidence: 0.0,
            feedback: cue.to_string(),
            cue,
            raw_label: ExerciseLabel::None,
            stable_label: ExerciseLabel::None,
            phase: None,
            person_detected: false,
            timestamp_ms,
        }
    }

    /// Confidence rounded to a whole percentage
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = SessionState::new(&EngineConfig::default(), 250.0);
        assert_eq!(state.committed(), ExerciseLabel::None);
        assert_eq!(state.rep_count(), 0);
        assert_eq!(state.plank_start_ms(), None);
        assert_eq!(state.last_transition_ms(), 250.0);
        assert_eq!(state.history().capacity(), 10);
    }

    #[test]
    fn test_commit_resets_counter_and_timer() {
        let mut state = SessionState::new(&EngineConfig::default(), 0.0);
        state.commit(ExerciseLabel::Plank, 3_000.0);
        state.hold_seconds = 4;
        assert_eq!(state.plank_start_ms(), Some(3_000.0));

        state.commit(ExerciseLabel::Squat, 9_000.0);
        assert_eq!(state.plank_start_ms(), None);
        assert_eq!(state.hold_seconds(), 0);
        assert_eq!(state.phase(), Some(RepPhase::Up));
    }

    #[test]
    fn test_confidence_percent() {
        let mut output = FrameOutput::idle(Cue::StartExercise, 0.0);
        output.confidence = 0.876;
        assert_eq!(output.confidence_percent(), 88);
        assert_eq!(output.feedback, Cue::StartExercise.to_string());
    }
}
