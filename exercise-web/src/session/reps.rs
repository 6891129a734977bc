//! Repetition state machines, one per exercise
//!
//! Each counted exercise is a two-phase cycle with separate "bent" and
//! "straight" thresholds. A rep is counted only when the cycle returns to
//! its starting phase, so noise near a single threshold cannot add reps.

use serde::Serialize;

use crate::classifier::{ExerciseLabel, FeatureSet};
use crate::config::EngineConfig;

/// Phase of the active rep cycle
///
/// Squat and push-up use `Up`/`Down`; lunge uses `Standing`/`Lunging`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    Up,
    Down,
    Standing,
    Lunging,
}

impl RepPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepPhase::Up => "up",
            RepPhase::Down => "down",
            RepPhase::Standing => "standing",
            RepPhase::Lunging => "lunging",
        }
    }
}

/// State machine of the committed exercise
///
/// Only the committed exercise has a variant here, so switching exercises
/// replaces the whole value and nothing from the previous one survives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RepMachine {
    #[default]
    Idle,
    Squat(RepPhase),
    Lunge(RepPhase),
    Pushup(RepPhase),
    Plank {
        start_ms: f64,
    },
}

impl RepMachine {
    /// Fresh machine for a newly committed exercise
    pub fn start(label: ExerciseLabel, now_ms: f64) -> Self {
        match label {
            ExerciseLabel::None => RepMachine::Idle,
            ExerciseLabel::Squat => RepMachine::Squat(RepPhase::Up),
            ExerciseLabel::Lunge => RepMachine::Lunge(RepPhase::Standing),
            ExerciseLabel::Pushup => RepMachine::Pushup(RepPhase::Up),
            ExerciseLabel::Plank => RepMachine::Plank { start_ms: now_ms },
        }
    }

    pub fn label(&self) -> ExerciseLabel {
        match self {
            RepMachine::Idle => ExerciseLabel::None,
            RepMachine::Squat(_) => ExerciseLabel::Squat,
            RepMachine::Lunge(_) => ExerciseLabel::Lunge,
            RepMachine::Pushup(_) => ExerciseLabel::Pushup,
            RepMachine::Plank { .. } => ExerciseLabel::Plank,
        }
    }

    pub fn phase(&self) -> Option<RepPhase> {
        match self {
            RepMachine::Squat(p) | RepMachine::Lunge(p) | RepMachine::Pushup(p) => Some(*p),
            RepMachine::Idle | RepMachine::Plank { .. } => None,
        }
    }

    /// Plank hold start, unset for every other exercise
    pub fn plank_start_ms(&self) -> Option<f64> {
        match self {
            RepMachine::Plank { start_ms } => Some(*start_ms),
            _ => None,
        }
    }

    /// Whole seconds held since the plank started
    pub fn hold_seconds(&self, now_ms: f64) -> u32 {
        match self.plank_start_ms() {
            Some(start) if now_ms > start => ((now_ms - start) / 1000.0).floor() as u32,
            _ => 0,
        }
    }

    /// Advance one frame. Returns true when a rep completes.
    pub fn step(&mut self, f: &FeatureSet, config: &EngineConfig) -> bool {
        match self {
            RepMachine::Squat(phase) => {
                let t = &config.squat;
                bend_cycle(phase, (f.left_knee, f.right_knee), t.down_knee, t.up_knee)
            }
            RepMachine::Pushup(phase) => {
                let t = &config.pushup;
                bend_cycle(phase, (f.left_elbow, f.right_elbow), t.down_elbow, t.up_elbow)
            }
            RepMachine::Lunge(phase) => {
                let t = &config.lunge;
                match *phase {
                    RepPhase::Standing if f.knee_diff > t.lunging_knee_diff => {
                        *phase = RepPhase::Lunging;
                        false
                    }
                    RepPhase::Lunging if f.knee_diff < t.standing_knee_diff => {
                        *phase = RepPhase::Standing;
                        true
                    }
                    _ => false,
                }
            }
            RepMachine::Idle | RepMachine::Plank { .. } => false,
        }
    }
}

/// Up -> Down when either joint bends below `down`,
/// Down -> Up (one rep) when both straighten above `up`
fn bend_cycle(phase: &mut RepPhase, (left, right): (f32, f32), down: f32, up: f32) -> bool {
    match *phase {
        RepPhase::Up if left < down || right < down => {
            *phase = RepPhase::Down;
            false
        }
        RepPhase::Down if left > up && right > up => {
            *phase = RepPhase::Up;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knees(left: f32, right: f32) -> FeatureSet {
        FeatureSet {
            left_knee: left,
            right_knee: right,
            avg_knee: (left + right) / 2.0,
            knee_diff: (left - right).abs(),
            // Straight arms so the elbow-driven cycle stays Up
            left_elbow: 180.0,
            right_elbow: 180.0,
            avg_elbow: 180.0,
            ..FeatureSet::default()
        }
    }

    fn elbows(angle: f32) -> FeatureSet {
        FeatureSet {
            left_elbow: angle,
            right_elbow: angle,
            avg_elbow: angle,
            ..FeatureSet::default()
        }
    }

    fn run(machine: &mut RepMachine, frames: &[FeatureSet], config: &EngineConfig) -> u32 {
        frames.iter().filter(|f| machine.step(f, config)).count() as u32
    }

    #[test]
    fn test_squat_full_cycle_counts_once() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Squat, 0.0);
        let frames = [knees(170.0, 170.0), knees(120.0, 120.0), knees(85.0, 85.0)];
        assert_eq!(run(&mut machine, &frames, &config), 0);
        assert_eq!(machine.phase(), Some(RepPhase::Down));

        let frames = [knees(130.0, 130.0), knees(165.0, 155.0), knees(170.0, 170.0)];
        assert_eq!(run(&mut machine, &frames, &config), 1);
        assert_eq!(machine.phase(), Some(RepPhase::Up));
    }

    #[test]
    fn test_squat_one_knee_enough_to_go_down() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Squat, 0.0);
        machine.step(&knees(88.0, 120.0), &config);
        assert_eq!(machine.phase(), Some(RepPhase::Down));
    }

    #[test]
    fn test_oscillating_between_bands_never_counts() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Squat, 0.0);
        let frames: Vec<FeatureSet> = (0..40)
            .map(|i| if i % 2 == 0 { knees(95.0, 95.0) } else { knees(155.0, 155.0) })
            .collect();
        assert_eq!(run(&mut machine, &frames, &config), 0);
        assert_eq!(machine.phase(), Some(RepPhase::Up));
    }

    #[test]
    fn test_noise_around_one_threshold_never_counts() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Squat, 0.0);
        let frames: Vec<FeatureSet> = (0..40)
            .map(|i| if i % 2 == 0 { knees(89.0, 89.0) } else { knees(91.0, 91.0) })
            .collect();
        assert_eq!(run(&mut machine, &frames, &config), 0);
    }

    #[test]
    fn test_pushup_cycle_uses_elbows() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Pushup, 0.0);
        // Knees are irrelevant for push-ups
        assert!(!machine.step(&knees(60.0, 60.0), &config));
        assert_eq!(machine.phase(), Some(RepPhase::Up));

        let frames = [elbows(160.0), elbows(65.0), elbows(120.0), elbows(155.0)];
        assert_eq!(run(&mut machine, &frames, &config), 1);

        let frames = [elbows(75.0), elbows(145.0), elbows(75.0), elbows(145.0)];
        assert_eq!(run(&mut machine, &frames, &config), 0);
    }

    #[test]
    fn test_lunge_cycle() {
        let config = EngineConfig::default();
        let mut machine = RepMachine::start(ExerciseLabel::Lunge, 0.0);
        assert_eq!(machine.phase(), Some(RepPhase::Standing));

        let frames = [knees(170.0, 165.0), knees(100.0, 170.0), knees(150.0, 168.0)];
        assert_eq!(run(&mut machine, &frames, &config), 1);

        // Difference stays between 30 and 60
        let frames = [knees(125.0, 170.0), knees(135.0, 170.0), knees(125.0, 170.0)];
        assert_eq!(run(&mut machine, &frames, &config), 0);
        assert_eq!(machine.phase(), Some(RepPhase::Standing));
    }

    #[test]
    fn test_plank_timer() {
        let machine = RepMachine::start(ExerciseLabel::Plank, 1_000.0);
        assert_eq!(machine.plank_start_ms(), Some(1_000.0));
        assert_eq!(machine.phase(), None);
        assert_eq!(machine.hold_seconds(1_000.0), 0);
        assert_eq!(machine.hold_seconds(1_999.0), 0);
        assert_eq!(machine.hold_seconds(2_000.0), 1);
        assert_eq!(machine.hold_seconds(8_500.0), 7);
        // Clock going backwards never yields a negative hold
        assert_eq!(machine.hold_seconds(500.0), 0);
    }

    #[test]
    fn test_non_plank_has_no_timer() {
        let machine = RepMachine::start(ExerciseLabel::Squat, 1_000.0);
        assert_eq!(machine.plank_start_ms(), None);
        assert_eq!(machine.hold_seconds(50_000.0), 0);
        assert_eq!(RepMachine::start(ExerciseLabel::None, 0.0), RepMachine::Idle);
    }

    #[test]
    fn test_machine_label_matches_start() {
        for label in [
            ExerciseLabel::None,
            ExerciseLabel::Squat,
            ExerciseLabel::Lunge,
            ExerciseLabel::Plank,
            ExerciseLabel::Pushup,
        ] {
            assert_eq!(RepMachine::start(label, 0.0).label(), label);
        }
    }
}
