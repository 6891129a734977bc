//! One-shot classification of a still image (uploaded photo)
//!
//! A photo has no history, so the raw label is reported directly: no
//! smoothing, no dwell, no counting.

use serde::Serialize;

use crate::classifier::{classify, extract_features, ExerciseLabel};
use crate::config::EngineConfig;
use crate::pose::PoseSnapshot;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StillAnalysis {
    pub label: ExerciseLabel,
    pub display_name: &'static str,
    pub confidence: f32,
    pub person_detected: bool,
    pub message: String,
}

pub fn analyze_still(snapshot: &PoseSnapshot, config: &EngineConfig) -> StillAnalysis {
    let confidence = snapshot.confidence();
    let person_detected = !snapshot.is_empty() && confidence >= config.min_pose_confidence;
    if !person_detected {
        return StillAnalysis {
            label: ExerciseLabel::None,
            display_name: ExerciseLabel::None.display_name(),
            confidence: 0.0,
            person_detected,
            message: "Could not find a pose in the photo".to_string(),
        };
    }

    let features = extract_features(snapshot, config.visibility_floor);
    let label = classify(features.as_ref(), config);
    let message = if label.is_none() {
        "Could not determine the exercise in the photo".to_string()
    } else {
        format!("Detected in photo: {}", label.display_name())
    };

    StillAnalysis {
        label,
        display_name: label.display_name(),
        confidence,
        person_detected,
        message,
    }
}
