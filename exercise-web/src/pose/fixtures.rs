//! Synthetic skeletons for tests
//!
//! Side-view poses where left and right limbs overlap, built so a chosen
//! joint angle comes out exactly.

use super::landmark::{Joint, Landmark};
use super::snapshot::PoseSnapshot;

const VIS: f32 = 0.9;

fn lm(x: f32, y: f32) -> Landmark {
    Landmark::new(x, y, VIS)
}

/// Point at `dist` from `origin`, `angle_deg` away from straight down
fn ray_from_down(origin: (f32, f32), angle_deg: f32, dist: f32) -> (f32, f32) {
    let a = angle_deg.to_radians();
    (origin.0 + dist * a.sin(), origin.1 + dist * a.cos())
}

/// Point at `dist` from `origin`, `angle_deg` away from straight up
fn ray_from_up(origin: (f32, f32), angle_deg: f32, dist: f32) -> (f32, f32) {
    let a = angle_deg.to_radians();
    (origin.0 + dist * a.sin(), origin.1 - dist * a.cos())
}

fn mirrored(parts: [(Joint, Joint, (f32, f32)); 6], t: f64) -> PoseSnapshot {
    let mut joints = vec![(Joint::Nose, lm(0.5, 0.2))];
    for (left, right, (x, y)) in parts {
        joints.push((left, lm(x, y)));
        joints.push((right, lm(x, y)));
    }
    PoseSnapshot::from_joints(&joints, t)
}

/// Upright body with both knees at the given angle
pub fn squat(knee_deg: f32, t: f64) -> PoseSnapshot {
    lunge(knee_deg, knee_deg, t)
}

/// Upright body with independent knee angles
pub fn lunge(left_knee_deg: f32, right_knee_deg: f32, t: f64) -> PoseSnapshot {
    let hip = (0.5, 0.5);
    let knee = (0.5, 0.7);
    let left_ankle = ray_from_up(knee, left_knee_deg, 0.2);
    let right_ankle = ray_from_up(knee, right_knee_deg, 0.2);
    let joints = vec![
        (Joint::Nose, lm(0.5, 0.2)),
        (Joint::LeftShoulder, lm(0.5, 0.3)),
        (Joint::RightShoulder, lm(0.5, 0.3)),
        (Joint::LeftElbow, lm(0.5, 0.4)),
        (Joint::RightElbow, lm(0.5, 0.4)),
        (Joint::LeftWrist, lm(0.52, 0.5)),
        (Joint::RightWrist, lm(0.52, 0.5)),
        (Joint::LeftHip, lm(hip.0, hip.1)),
        (Joint::RightHip, lm(hip.0, hip.1)),
        (Joint::LeftKnee, lm(knee.0, knee.1)),
        (Joint::RightKnee, lm(knee.0, knee.1)),
        (Joint::LeftAnkle, lm(left_ankle.0, left_ankle.1)),
        (Joint::RightAnkle, lm(right_ankle.0, right_ankle.1)),
    ];
    PoseSnapshot::from_joints(&joints, t)
}

/// Standing upright, legs straight
pub fn standing(t: f64) -> PoseSnapshot {
    squat(175.0, t)
}

/// Horizontal forearm plank; `knee_drop` lowers the knees to bend the legs
pub fn forearm_plank(knee_drop: f32, t: f64) -> PoseSnapshot {
    mirrored(
        [
            (Joint::LeftShoulder, Joint::RightShoulder, (0.3, 0.55)),
            (Joint::LeftElbow, Joint::RightElbow, (0.3, 0.65)),
            (Joint::LeftWrist, Joint::RightWrist, (0.42, 0.65)),
            (Joint::LeftHip, Joint::RightHip, (0.55, 0.55)),
            (Joint::LeftKnee, Joint::RightKnee, (0.7, 0.55 + knee_drop)),
            (Joint::LeftAnkle, Joint::RightAnkle, (0.85, 0.55)),
        ],
        t,
    )
}

/// Push-up position with both elbows at the given angle, hands under shoulders
pub fn pushup(elbow_deg: f32, t: f64) -> PoseSnapshot {
    let elbow = (0.2, 0.5);
    let wrist = (0.2, 0.7);
    let shoulder = ray_from_down(elbow, elbow_deg, 0.15);
    mirrored(
        [
            (Joint::LeftShoulder, Joint::RightShoulder, shoulder),
            (Joint::LeftElbow, Joint::RightElbow, elbow),
            (Joint::LeftWrist, Joint::RightWrist, wrist),
            (Joint::LeftHip, Joint::RightHip, (shoulder.0 + 0.25, shoulder.1)),
            (Joint::LeftKnee, Joint::RightKnee, (shoulder.0 + 0.4, shoulder.1)),
            (Joint::LeftAnkle, Joint::RightAnkle, (shoulder.0 + 0.55, shoulder.1)),
        ],
        t,
    )
}

/// Full skeleton present but every joint below any sensible floor
pub fn faint(t: f64) -> PoseSnapshot {
    let joints: Vec<(Joint, Landmark)> = Joint::ALL
        .iter()
        .map(|&j| (j, Landmark::new(0.5, 0.5, 0.1)))
        .collect();
    PoseSnapshot::from_joints(&joints, t)
}
