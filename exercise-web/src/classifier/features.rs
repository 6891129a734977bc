//! Feature extraction for exercise classification
//!
//! Turns one pose snapshot into the named scalars every later stage reads.

use nalgebra::Point2;

use crate::geometry::{joint_angle, verticality};
use crate::pose::{Joint, PoseSnapshot};

/// Scalar features of one snapshot
///
/// Angles in degrees (180° = straight), heights in normalized frame units,
/// verticality ratios in [0, 1] (1 = vertical segment).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureSet {
    pub left_knee: f32,
    pub right_knee: f32,
    pub avg_knee: f32,
    pub knee_diff: f32,

    /// Shoulder-hip-ankle line
    pub left_body_line: f32,
    pub right_body_line: f32,
    pub avg_body_line: f32,
    pub body_line_diff: f32,

    pub left_elbow: f32,
    pub right_elbow: f32,
    pub avg_elbow: f32,
    pub elbow_diff: f32,

    /// |left_hip.y - right_hip.y|
    pub hip_height_diff: f32,
    /// |left_shoulder.y - right_shoulder.y|
    pub shoulder_height_diff: f32,

    /// Mid-shoulder to mid-hip
    pub torso_verticality: f32,
    /// Mid-hip to mid-ankle
    pub leg_verticality: f32,
    /// Mean of both elbow-to-wrist segments
    pub forearm_verticality: f32,
}

impl FeatureSet {
    pub fn min_knee(&self) -> f32 {
        self.left_knee.min(self.right_knee)
    }

    pub fn max_knee(&self) -> f32 {
        self.left_knee.max(self.right_knee)
    }
}

fn midpoint(a: Point2<f32>, b: Point2<f32>) -> Point2<f32> {
    nalgebra::center(&a, &b)
}

/// Extract features, or `None` when a required joint is missing or
/// below `visibility_floor`
pub fn extract_features(snapshot: &PoseSnapshot, visibility_floor: f32) -> Option<FeatureSet> {
    let mut points = [Point2::origin(); Joint::REQUIRED.len()];
    for (slot, joint) in Joint::REQUIRED.iter().enumerate() {
        match snapshot.visible(*joint, visibility_floor) {
            Some(lm) => points[slot] = lm.point(),
            None => {
                tracing::trace!(joint = joint.as_str(), "insufficient landmark visibility");
                return None;
            }
        }
    }
    #[rustfmt::skip]
    let [
        l_shoulder, r_shoulder, l_elbow, r_elbow, l_wrist, r_wrist,
        l_hip, r_hip, l_knee, r_knee, l_ankle, r_ankle,
    ] = points;

    // Knee angle: hip-knee-ankle (90° = deep bend, 180° = straight leg)
    let left_knee = joint_angle(l_hip, l_knee, l_ankle);
    let right_knee = joint_angle(r_hip, r_knee, r_ankle);

    // Body line: shoulder-hip-ankle
    let left_body_line = joint_angle(l_shoulder, l_hip, l_ankle);
    let right_body_line = joint_angle(r_shoulder, r_hip, r_ankle);

    // Elbow angle: shoulder-elbow-wrist
    let left_elbow = joint_angle(l_shoulder, l_elbow, l_wrist);
    let right_elbow = joint_angle(r_shoulder, r_elbow, r_wrist);

    let mid_shoulder = midpoint(l_shoulder, r_shoulder);
    let mid_hip = midpoint(l_hip, r_hip);
    let mid_ankle = midpoint(l_ankle, r_ankle);

    Some(FeatureSet {
        left_knee,
        right_knee,
        avg_knee: (left_knee + right_knee) / 2.0,
        knee_diff: (left_knee - right_knee).abs(),
        left_body_line,
        right_body_line,
        avg_body_line: (left_body_line + right_body_line) / 2.0,
        body_line_diff: (left_body_line - right_body_line).abs(),
        left_elbow,
        right_elbow,
        avg_elbow: (left_elbow + right_elbow) / 2.0,
        elbow_diff: (left_elbow - right_elbow).abs(),
        hip_height_diff: (l_hip.y - r_hip.y).abs(),
        shoulder_height_diff: (l_shoulder.y - r_shoulder.y).abs(),
        torso_verticality: verticality(mid_shoulder, mid_hip),
        leg_verticality: verticality(mid_hip, mid_ankle),
        forearm_verticality: (verticality(l_elbow, l_wrist) + verticality(r_elbow, r_wrist)) / 2.0,
    })
}
