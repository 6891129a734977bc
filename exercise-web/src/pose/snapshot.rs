//! One detected pose at one instant

use super::landmark::{Joint, KeypointLayout, Landmark, JOINT_COUNT};
use crate::error::{EngineError, Result};

/// Floats per keypoint in the flat provider array: x, y, visibility
pub const VALUES_PER_POINT: usize = 3;

/// Landmarks of the first detected person plus capture time
///
/// Only the 13 named joints are kept; provider-specific extras (face, hands,
/// feet) are dropped at construction. An empty snapshot means no person was
/// detected in the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseSnapshot {
    joints: Option<[Landmark; JOINT_COUNT]>,
    timestamp_ms: f64,
}

impl PoseSnapshot {
    /// Snapshot with no detected person
    pub fn empty(timestamp_ms: f64) -> Self {
        Self {
            joints: None,
            timestamp_ms,
        }
    }

    /// Build from provider landmarks in the given layout
    pub fn from_landmarks(
        layout: KeypointLayout,
        landmarks: &[Landmark],
        timestamp_ms: f64,
    ) -> Result<Self> {
        if landmarks.is_empty() {
            return Ok(Self::empty(timestamp_ms));
        }
        if landmarks.len() != layout.point_count() {
            return Err(EngineError::invalid_landmark_data(
                landmarks.len() * VALUES_PER_POINT,
                "0, 51 or 99",
            ));
        }

        let mut joints = [Landmark::default(); JOINT_COUNT];
        for joint in Joint::ALL {
            joints[joint.slot()] = landmarks[layout.index_of(joint)];
        }
        Ok(Self {
            joints: Some(joints),
            timestamp_ms,
        })
    }

    /// Build from a flat `[x, y, visibility] × N` array
    ///
    /// The layout is inferred from N (33 = MediaPipe, 17 = PoseNet);
    /// an empty array is a frame without a person.
    pub fn from_flat(data: &[f32], timestamp_ms: f64) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::empty(timestamp_ms));
        }
        if data.len() % VALUES_PER_POINT != 0 {
            return Err(EngineError::invalid_landmark_data(data.len(), "0, 51 or 99"));
        }
        let layout = KeypointLayout::from_point_count(data.len() / VALUES_PER_POINT)
            .ok_or_else(|| EngineError::invalid_landmark_data(data.len(), "0, 51 or 99"))?;

        let landmarks: Vec<Landmark> = data
            .chunks_exact(VALUES_PER_POINT)
            .map(|p| Landmark::new(p[0], p[1], p[2]))
            .collect();
        Self::from_landmarks(layout, &landmarks, timestamp_ms)
    }

    /// Build directly from named joints; joints not listed get zero visibility
    pub fn from_joints(joints: &[(Joint, Landmark)], timestamp_ms: f64) -> Self {
        if joints.is_empty() {
            return Self::empty(timestamp_ms);
        }
        let mut slots = [Landmark::default(); JOINT_COUNT];
        for (joint, landmark) in joints {
            slots[joint.slot()] = *landmark;
        }
        Self {
            joints: Some(slots),
            timestamp_ms,
        }
    }

    pub fn timestamp_ms(&self) -> f64 {
        self.timestamp_ms
    }

    /// True when the provider found no person
    pub fn is_empty(&self) -> bool {
        self.joints.is_none()
    }

    pub fn get(&self, joint: Joint) -> Option<&Landmark> {
        self.joints.as_ref().map(|j| &j[joint.slot()])
    }

    /// Landmark only if it clears the visibility floor
    pub fn visible(&self, joint: Joint, floor: f32) -> Option<&Landmark> {
        self.get(joint).filter(|lm| lm.is_visible(floor))
    }

    /// Mean visibility of the named joints, 0 for an empty snapshot
    pub fn confidence(&self) -> f32 {
        match &self.joints {
            Some(joints) => {
                let sum: f32 = joints.iter().map(|lm| lm.visibility.clamp(0.0, 1.0)).sum();
                sum / JOINT_COUNT as f32
            }
            None => 0.0,
        }
    }
}
