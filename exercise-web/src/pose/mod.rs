//! Pose module - landmark model fed in by the pose provider
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use landmark::{
    Joint, KeypointLayout, Landmark,
    JOINT_COUNT, MEDIAPIPE_POINT_COUNT, POSENET_POINT_COUNT,
};
pub use snapshot::{PoseSnapshot, VALUES_PER_POINT};
