//! Single-frame exercise classification with threshold rules
//!
//! Stateless: the same features always give the same label. Rules are
//! checked in a fixed order, strictest pattern first, and the first match
//! wins.

use super::features::FeatureSet;
use super::label::ExerciseLabel;
use crate::config::EngineConfig;

type Rule = fn(&FeatureSet, &EngineConfig) -> bool;

/// Rules in precedence order
const RULES: [(ExerciseLabel, Rule); 4] = [
    (ExerciseLabel::Plank, is_plank),
    (ExerciseLabel::Lunge, is_lunge),
    (ExerciseLabel::Squat, is_squat),
    (ExerciseLabel::Pushup, is_pushup),
];

/// Classify one frame. Missing features classify as `None`.
pub fn classify(features: Option<&FeatureSet>, config: &EngineConfig) -> ExerciseLabel {
    let Some(f) = features else {
        return ExerciseLabel::None;
    };
    RULES
        .iter()
        .find(|(_, rule)| rule(f, config))
        .map_or(ExerciseLabel::None, |(label, _)| *label)
}

/// Straight horizontal body resting on the forearms
fn is_plank(f: &FeatureSet, config: &EngineConfig) -> bool {
    let t = &config.plank;
    f.avg_body_line > t.min_body_angle
        && f.avg_knee > t.min_avg_knee
        && f.knee_diff < t.max_knee_diff
        && f.hip_height_diff < t.max_hip_height_diff
        && f.shoulder_height_diff < t.max_shoulder_height_diff
        && f.torso_verticality < t.max_torso_verticality
        && f.forearm_verticality < t.max_forearm_verticality
}

/// One knee bent, the other near straight
fn is_lunge(f: &FeatureSet, config: &EngineConfig) -> bool {
    let t = &config.lunge;
    f.knee_diff > t.min_knee_diff
        && f.min_knee() < t.max_bent_knee
        && f.max_knee() > t.min_straight_knee
}

/// Both knees bent together
fn is_squat(f: &FeatureSet, config: &EngineConfig) -> bool {
    let t = &config.squat;
    f.avg_knee < t.max_avg_knee
        && f.knee_diff < t.max_knee_diff
        && (t.min_body_angle..=t.max_body_angle).contains(&f.avg_body_line)
}

/// Horizontal straight body supported on planted hands
fn is_pushup(f: &FeatureSet, config: &EngineConfig) -> bool {
    let t = &config.pushup;
    f.torso_verticality < t.max_torso_verticality
        && f.forearm_verticality >= t.min_forearm_verticality
        && f.avg_body_line > t.min_body_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::extract_features;
    use crate::pose::{fixtures, PoseSnapshot};

    fn label_of(snapshot: &PoseSnapshot, config: &EngineConfig) -> ExerciseLabel {
        let features = extract_features(snapshot, config.visibility_floor);
        classify(features.as_ref(), config)
    }

    #[test]
    fn test_standing_is_none() {
        // Standing satisfies every plank angle, only the horizontal gate rejects it
        let config = EngineConfig::default();
        assert_eq!(label_of(&fixtures::standing(0.0), &config), ExerciseLabel::None);
    }

    #[test]
    fn test_squat_detected() {
        let config = EngineConfig::default();
        assert_eq!(label_of(&fixtures::squat(85.0, 0.0), &config), ExerciseLabel::Squat);
        assert_eq!(label_of(&fixtures::squat(120.0, 0.0), &config), ExerciseLabel::Squat);
        assert_eq!(label_of(&fixtures::squat(140.0, 0.0), &config), ExerciseLabel::None);
    }

    #[test]
    fn test_lunge_detected() {
        let config = EngineConfig::default();
        assert_eq!(label_of(&fixtures::lunge(90.0, 170.0, 0.0), &config), ExerciseLabel::Lunge);
        assert_eq!(label_of(&fixtures::lunge(170.0, 95.0, 0.0), &config), ExerciseLabel::Lunge);
        // Back leg too bent
        assert_eq!(label_of(&fixtures::lunge(60.0, 130.0, 0.0), &config), ExerciseLabel::None);
    }

    #[test]
    fn test_plank_detected() {
        let config = EngineConfig::default();
        assert_eq!(label_of(&fixtures::forearm_plank(0.0, 0.0), &config), ExerciseLabel::Plank);
    }

    #[test]
    fn test_plank_with_bent_knees_rejected() {
        let config = EngineConfig::default();
        assert_ne!(label_of(&fixtures::forearm_plank(0.1, 0.0), &config), ExerciseLabel::Plank);
    }

    #[test]
    fn test_pushup_detected_in_both_phases() {
        let config = EngineConfig::default();
        assert_eq!(label_of(&fixtures::pushup(165.0, 0.0), &config), ExerciseLabel::Pushup);
        assert_eq!(label_of(&fixtures::pushup(65.0, 0.0), &config), ExerciseLabel::Pushup);
    }

    #[test]
    fn test_insufficient_data_is_none() {
        let config = EngineConfig::default();
        assert_eq!(classify(None, &config), ExerciseLabel::None);
        assert_eq!(label_of(&fixtures::faint(0.0), &config), ExerciseLabel::None);
        assert_eq!(label_of(&PoseSnapshot::empty(0.0), &config), ExerciseLabel::None);
    }

    #[test]
    fn test_lunge_precedes_squat() {
        // Relax the squat symmetry gate so both rules match
        let mut config = EngineConfig::default();
        config.squat.max_knee_diff = 90.0;
        let snapshot = fixtures::lunge(80.0, 160.0, 0.0);
        let features = extract_features(&snapshot, 0.3).unwrap();
        assert!(is_squat(&features, &config));
        assert!(is_lunge(&features, &config));
        assert_eq!(classify(Some(&features), &config), ExerciseLabel::Lunge);
    }

    #[test]
    fn test_plank_precedes_pushup() {
        let mut config = EngineConfig::default();
        config.pushup.min_forearm_verticality = 0.0;
        let features = extract_features(&fixtures::forearm_plank(0.0, 0.0), 0.3).unwrap();
        assert!(is_pushup(&features, &config));
        assert_eq!(classify(Some(&features), &config), ExerciseLabel::Plank);
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let config = EngineConfig::default();
        let features = extract_features(&fixtures::squat(100.0, 0.0), 0.3).unwrap();
        let first = classify(Some(&features), &config);
        for _ in 0..10 {
            assert_eq!(classify(Some(&features), &config), first);
        }
    }
}
