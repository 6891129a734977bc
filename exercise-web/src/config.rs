//! Engine configuration - every tunable threshold in one place
//!
//! Angles are in degrees, heights and ratios in normalized frame units,
//! durations in milliseconds. `validate()` runs in every constructor that
//! accepts a config, so a bad threshold set is rejected before the first
//! frame instead of misbehaving mid-session.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Plank detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlankThresholds {
    /// Shoulder-hip-ankle line must be straighter than this
    pub min_body_angle: f32,
    /// Legs extended
    pub min_avg_knee: f32,
    /// Left/right knee symmetry
    pub max_knee_diff: f32,
    /// Left/right hip height difference
    pub max_hip_height_diff: f32,
    /// Left/right shoulder height difference
    pub max_shoulder_height_diff: f32,
    /// Torso must be close to horizontal
    pub max_torso_verticality: f32,
    /// Forearms resting on the floor
    pub max_forearm_verticality: f32,
}

impl Default for PlankThresholds {
    fn default() -> Self {
        Self {
            min_body_angle: 160.0,
            min_avg_knee: 150.0,
            max_knee_diff: 20.0,
            max_hip_height_diff: 0.1,
            max_shoulder_height_diff: 0.1,
            max_torso_verticality: 0.5,
            max_forearm_verticality: 0.5,
        }
    }
}

/// Lunge detection and rep thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungeThresholds {
    /// Knee asymmetry needed to classify a lunge
    pub min_knee_diff: f32,
    /// Front knee must be bent below this
    pub max_bent_knee: f32,
    /// Back knee must stay above this
    pub min_straight_knee: f32,
    /// Standing -> Lunging when knee difference exceeds this
    pub lunging_knee_diff: f32,
    /// Lunging -> Standing (one rep) when knee difference falls below this
    pub standing_knee_diff: f32,
}

impl Default for LungeThresholds {
    fn default() -> Self {
        Self {
            min_knee_diff: 40.0,
            max_bent_knee: 120.0,
            min_straight_knee: 145.0,
            lunging_knee_diff: 60.0,
            standing_knee_diff: 30.0,
        }
    }
}

/// Squat detection and rep thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatThresholds {
    /// Average knee angle must be below this
    pub max_avg_knee: f32,
    /// Both knees bend together
    pub max_knee_diff: f32,
    /// Body line range from crouched...
    pub min_body_angle: f32,
    /// ...to upright
    pub max_body_angle: f32,
    /// Up -> Down when either knee drops below this
    pub down_knee: f32,
    /// Down -> Up (one rep) when both knees exceed this
    pub up_knee: f32,
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self {
            max_avg_knee: 130.0,
            max_knee_diff: 30.0,
            min_body_angle: 40.0,
            max_body_angle: 180.0,
            down_knee: 90.0,
            up_knee: 160.0,
        }
    }
}

/// Push-up detection and rep thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupThresholds {
    /// Torso must be close to horizontal
    pub max_torso_verticality: f32,
    /// Hands planted under the shoulders
    pub min_forearm_verticality: f32,
    /// Body held roughly straight
    pub min_body_angle: f32,
    /// Up -> Down when either elbow drops below this
    pub down_elbow: f32,
    /// Down -> Up (one rep) when both elbows exceed this
    pub up_elbow: f32,
}

impl Default for PushupThresholds {
    fn default() -> Self {
        Self {
            max_torso_verticality: 0.5,
            min_forearm_verticality: 0.5,
            min_body_angle: 150.0,
            down_elbow: 70.0,
            up_elbow: 150.0,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Landmarks below this visibility count as missing. Default: 0.3
    pub visibility_floor: f32,

    /// Mean visibility below this is treated as "no person". Default: 0.2
    pub min_pose_confidence: f32,

    /// Raw labels kept for the majority vote. Default: 10
    pub history_len: usize,

    /// Minimum time between committed exercise changes. Default: 2000 ms
    pub min_dwell_ms: f64,

    /// Absence of any detection after which the session resets. Default: 2000 ms
    pub reset_timeout_ms: f64,

    pub plank: PlankThresholds,
    pub lunge: LungeThresholds,
    pub squat: SquatThresholds,
    pub pushup: PushupThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visibility_floor: 0.3,
            min_pose_confidence: 0.2,
            history_len: 10,
            min_dwell_ms: 2000.0,
            reset_timeout_ms: 2000.0,
            plank: PlankThresholds::default(),
            lunge: LungeThresholds::default(),
            squat: SquatThresholds::default(),
            pushup: PushupThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the stabilizer window length.
    #[must_use]
    pub const fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// Set the minimum dwell between exercise changes.
    #[must_use]
    pub const fn with_min_dwell_ms(mut self, ms: f64) -> Self {
        self.min_dwell_ms = ms;
        self
    }

    /// Set the no-detection reset timeout.
    #[must_use]
    pub const fn with_reset_timeout_ms(mut self, ms: f64) -> Self {
        self.reset_timeout_ms = ms;
        self
    }

    /// Set the landmark visibility floor.
    #[must_use]
    pub const fn with_visibility_floor(mut self, floor: f32) -> Self {
        self.visibility_floor = floor;
        self
    }

    /// Reject out-of-range or contradictory thresholds
    pub fn validate(&self) -> Result<()> {
        unit("visibility_floor", self.visibility_floor)?;
        unit("min_pose_confidence", self.min_pose_confidence)?;
        if self.history_len == 0 {
            return Err(EngineError::invalid_config("history_len must be at least 1"));
        }
        duration("min_dwell_ms", self.min_dwell_ms)?;
        duration("reset_timeout_ms", self.reset_timeout_ms)?;

        let p = &self.plank;
        degrees("plank.min_body_angle", p.min_body_angle)?;
        degrees("plank.min_avg_knee", p.min_avg_knee)?;
        degrees("plank.max_knee_diff", p.max_knee_diff)?;
        unit("plank.max_hip_height_diff", p.max_hip_height_diff)?;
        unit("plank.max_shoulder_height_diff", p.max_shoulder_height_diff)?;
        unit("plank.max_torso_verticality", p.max_torso_verticality)?;
        unit("plank.max_forearm_verticality", p.max_forearm_verticality)?;

        let l = &self.lunge;
        degrees("lunge.min_knee_diff", l.min_knee_diff)?;
        degrees("lunge.max_bent_knee", l.max_bent_knee)?;
        degrees("lunge.min_straight_knee", l.min_straight_knee)?;
        degrees("lunge.lunging_knee_diff", l.lunging_knee_diff)?;
        degrees("lunge.standing_knee_diff", l.standing_knee_diff)?;
        ordered(
            "lunge.max_bent_knee",
            l.max_bent_knee,
            "lunge.min_straight_knee",
            l.min_straight_knee,
        )?;
        ordered(
            "lunge.standing_knee_diff",
            l.standing_knee_diff,
            "lunge.lunging_knee_diff",
            l.lunging_knee_diff,
        )?;

        let s = &self.squat;
        degrees("squat.max_avg_knee", s.max_avg_knee)?;
        degrees("squat.max_knee_diff", s.max_knee_diff)?;
        degrees("squat.min_body_angle", s.min_body_angle)?;
        degrees("squat.max_body_angle", s.max_body_angle)?;
        degrees("squat.down_knee", s.down_knee)?;
        degrees("squat.up_knee", s.up_knee)?;
        ordered(
            "squat.min_body_angle",
            s.min_body_angle,
            "squat.max_body_angle",
            s.max_body_angle,
        )?;
        ordered("squat.down_knee", s.down_knee, "squat.up_knee", s.up_knee)?;

        let u = &self.pushup;
        unit("pushup.max_torso_verticality", u.max_torso_verticality)?;
        unit("pushup.min_forearm_verticality", u.min_forearm_verticality)?;
        degrees("pushup.min_body_angle", u.min_body_angle)?;
        degrees("pushup.down_elbow", u.down_elbow)?;
        degrees("pushup.up_elbow", u.up_elbow)?;
        ordered("pushup.down_elbow", u.down_elbow, "pushup.up_elbow", u.up_elbow)?;

        Ok(())
    }
}

fn degrees(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::invalid_config(format!(
            "{name} must be within [0, 180] degrees, got {value}"
        )))
    }
}

fn unit(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::invalid_config(format!("{name} must be within [0, 1], got {value}")))
    }
}

fn duration(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid_config(format!(
            "{name} must be a non-negative duration, got {value}"
        )))
    }
}

/// Hysteresis bands must not overlap: `low` strictly below `high`
fn ordered(low_name: &str, low: f32, high_name: &str, high: f32) -> Result<()> {
    if low < high {
        Ok(())
    } else {
        Err(EngineError::invalid_config(format!(
            "{low_name} ({low}) must be below {high_name} ({high})"
        )))
    }
}
