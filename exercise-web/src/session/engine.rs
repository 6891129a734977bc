//! Per-frame reducer - wires extraction, classification, smoothing,
//! debouncing, rep counting and feedback together
//!
//! `Engine` holds only the validated configuration. All mutable data lives
//! in the caller's `SessionState`, which makes every frame a plain
//! `(state, snapshot, now) -> (state', output)` step.

use tracing::{debug, info};

use super::feedback::{coach, Cue};
use super::guard::GuardDecision;
use super::state::{FrameOutput, SessionState};
use super::still::{analyze_still, StillAnalysis};
use crate::classifier::{classify, extract_features};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::pose::PoseSnapshot;

#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Build an engine, rejecting invalid thresholds
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fresh session state starting at `now_ms`
    pub fn start(&self, now_ms: f64) -> SessionState {
        SessionState::new(&self.config, now_ms)
    }

    /// Consume one snapshot and return the next state with its output
    pub fn update(
        &self,
        mut state: SessionState,
        snapshot: &PoseSnapshot,
        now_ms: f64,
    ) -> (SessionState, FrameOutput) {
        let output = self.update_in_place(&mut state, snapshot, now_ms);
        (state, output)
    }

    /// Same as `update`, mutating the state where it lives
    pub fn update_in_place(
        &self,
        state: &mut SessionState,
        snapshot: &PoseSnapshot,
        now_ms: f64,
    ) -> FrameOutput {
        let config = &self.config;

        // 1. Features (nothing if no person or pose too faint)
        let confidence = snapshot.confidence();
        let person_detected = !snapshot.is_empty() && confidence >= config.min_pose_confidence;
        let features = if person_detected {
            extract_features(snapshot, config.visibility_floor)
        } else {
            None
        };

        // 2. Raw label -> stable label
        let raw_label = classify(features.as_ref(), config);
        let stable_label = state.stabilizer.push(raw_label);

        // 3. Debounced exercise change
        let committed = state.committed();
        match state
            .guard
            .evaluate(committed, raw_label, stable_label, now_ms, config)
        {
            GuardDecision::Commit(label) => {
                info!(
                    from = committed.as_str(),
                    to = label.as_str(),
                    at_ms = now_ms,
                    "exercise committed"
                );
                state.commit(label, now_ms);
            }
            GuardDecision::Reset => {
                info!(
                    at_ms = now_ms,
                    reps = state.rep_count,
                    "no exercise detected within reset timeout, session cleared"
                );
                state.clear();
            }
            GuardDecision::Hold => {}
        }

        // 4. Rep machine of the committed exercise
        // The plank timer only advances on frames where the pose is readable
        if let Some(f) = &features {
            if state.machine.step(f, config) {
                state.rep_count += 1;
                debug!(
                    exercise = state.committed().as_str(),
                    reps = state.rep_count,
                    "rep completed"
                );
            }
            if state.committed().is_timed() {
                state.hold_seconds = state.hold_seconds.max(state.machine.hold_seconds(now_ms));
            }
        }
        if !state.committed().is_timed() {
            state.hold_seconds = 0;
        }

        // 5. Feedback
        let cue = if person_detected {
            coach(&state.machine, features.as_ref(), state.hold_seconds, config)
        } else {
            Cue::NoPerson
        };

        FrameOutput {
            committed_exercise: state.committed(),
            rep_count: state.rep_count,
            hold_seconds: state.hold_seconds,
            confidence,
            feedback: cue.to_string(),
            cue,
            raw_label,
            stable_label,
            phase: state.phase(),
            person_detected,
            timestamp_ms: now_ms,
        }
    }

    /// Classify a single still image, no temporal smoothing
    pub fn analyze_still(&self, snapshot: &PoseSnapshot) -> StillAnalysis {
        analyze_still(snapshot, &self.config)
    }
}

/// Engine plus the state of one running session
///
/// Starting the camera creates one, the reset button calls `reset`,
/// stopping the camera drops it.
#[derive(Clone, Debug)]
pub struct Session {
    engine: Engine,
    state: SessionState,
    output: FrameOutput,
}

impl Session {
    pub fn start(config: EngineConfig, now_ms: f64) -> Result<Self> {
        let engine = Engine::new(config)?;
        let state = engine.start(now_ms);
        info!(at_ms = now_ms, "session started");
        Ok(Self {
            engine,
            state,
            output: FrameOutput::idle(Cue::StartExercise, now_ms),
        })
    }

    /// Feed one snapshot, timestamped by the snapshot itself
    pub fn push(&mut self, snapshot: &PoseSnapshot) -> &FrameOutput {
        self.push_at(snapshot, snapshot.timestamp_ms())
    }

    /// Feed one snapshot at an explicit time
    pub fn push_at(&mut self, snapshot: &PoseSnapshot, now_ms: f64) -> &FrameOutput {
        self.output = self.engine.update_in_place(&mut self.state, snapshot, now_ms);
        &self.output
    }

    /// Explicit reset: zero everything and restart the dwell clock
    pub fn reset(&mut self, now_ms: f64) -> &FrameOutput {
        self.state = self.engine.start(now_ms);
        self.output = FrameOutput::idle(Cue::CountersReset, now_ms);
        info!(at_ms = now_ms, "session reset");
        &self.output
    }

    pub fn output(&self) -> &FrameOutput {
        &self.output
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
