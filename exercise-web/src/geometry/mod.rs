//! Geometry module - joint angles and segment orientation
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{joint_angle, verticality, STRAIGHT_ANGLE};
