//! Landmark types and keypoint layouts
//!
//! Pose providers number their keypoints differently. The engine only
//! consumes 13 named joints, resolved through a `KeypointLayout`.

use nalgebra::Point2;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const MEDIAPIPE_POINT_COUNT: usize = 33;

#[rustfmt::skip]
const MEDIAPIPE_INDICES: [usize; JOINT_COUNT] = [
    0,  // nose
    11, 12, // shoulders
    13, 14, // elbows
    15, 16, // wrists
    23, 24, // hips
    25, 26, // knees
    27, 28, // ankles
];

// ============================================================================
// LANDMARK INDICES (PoseNet - 17 total)
// ============================================================================

pub const POSENET_POINT_COUNT: usize = 17;

#[rustfmt::skip]
const POSENET_INDICES: [usize; JOINT_COUNT] = [
    0,  // nose
    5, 6,   // shoulders
    7, 8,   // elbows
    9, 10,  // wrists
    11, 12, // hips
    13, 14, // knees
    15, 16, // ankles
];

/// Number of named joints the engine understands
pub const JOINT_COUNT: usize = 13;

/// Named body joints used by feature extraction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints, in slot order
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Nose,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Joints that must be visible before any features are computed
    pub const REQUIRED: [Joint; 12] = [
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Position of this joint in `Joint::ALL`
    pub const fn slot(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }
}

/// Keypoint numbering used by the pose provider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypointLayout {
    /// MediaPipe Pose / BlazePose, 33 points
    MediaPipe,
    /// TensorFlow.js PoseNet, 17 points
    PoseNet,
}

impl KeypointLayout {
    pub const fn point_count(self) -> usize {
        match self {
            KeypointLayout::MediaPipe => MEDIAPIPE_POINT_COUNT,
            KeypointLayout::PoseNet => POSENET_POINT_COUNT,
        }
    }

    /// Provider index of a named joint
    pub const fn index_of(self, joint: Joint) -> usize {
        match self {
            KeypointLayout::MediaPipe => MEDIAPIPE_INDICES[joint.slot()],
            KeypointLayout::PoseNet => POSENET_INDICES[joint.slot()],
        }
    }

    /// Infer the layout from the number of keypoints delivered
    pub fn from_point_count(count: usize) -> Option<Self> {
        match count {
            MEDIAPIPE_POINT_COUNT => Some(KeypointLayout::MediaPipe),
            POSENET_POINT_COUNT => Some(KeypointLayout::PoseNet),
            _ => None,
        }
    }
}

/// A single 2D landmark (normalized coordinates) with detection confidence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized, grows downward
    pub visibility: f32, // 0-1
}

impl Landmark {
    pub const fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    pub fn point(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    pub fn is_visible(&self, floor: f32) -> bool {
        self.visibility >= floor
    }
}
