//! Joint angle calculation using atan2 bearings
//!
//! Calculates the angle at a middle joint from the two rays leaving it,
//! e.g. knee→hip (thigh) and knee→ankle (shin).

use nalgebra::{Point2, Vector2};

/// Below this ray length two points count as coincident
const DEGENERATE_EPSILON: f32 = 0.0001;

/// Angle returned for degenerate input (treated as a straight joint)
pub const STRAIGHT_ANGLE: f32 = 180.0;

/// Calculate the angle at `b` in degrees
///
/// Bearing of `b→c` minus bearing of `b→a`, folded into [0, 180]:
/// - 90° = right angle (deep squat, bent elbow)
/// - 180° = fully straight limb
///
/// Coincident points return 180° so bend thresholds never fire on them.
pub fn joint_angle(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    let ba: Vector2<f32> = a - b;
    let bc: Vector2<f32> = c - b;
    let ac: Vector2<f32> = c - a;

    // Handle degenerate case
    if ba.norm() < DEGENERATE_EPSILON
        || bc.norm() < DEGENERATE_EPSILON
        || ac.norm() < DEGENERATE_EPSILON
    {
        return STRAIGHT_ANGLE;
    }

    let radians = bc.y.atan2(bc.x) - ba.y.atan2(ba.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        (360.0 - degrees).clamp(0.0, 180.0)
    } else {
        degrees
    }
}

/// How vertical the segment `a→b` is: |Δy| / length
///
/// 1 = vertical (standing torso), 0 = horizontal (plank torso).
/// A zero-length segment returns 0.
pub fn verticality(a: Point2<f32>, b: Point2<f32>) -> f32 {
    let d: Vector2<f32> = b - a;
    let len = d.norm();
    if len < DEGENERATE_EPSILON {
        return 0.0;
    }
    (d.y.abs() / len).min(1.0)
}
