//! Exercise labels shared by every stage of the pipeline

use serde::{Deserialize, Serialize};

/// Exercise label names (order matches `ExerciseLabel::from_index`)
pub const EXERCISE_LABELS: [&str; 5] = ["none", "squat", "lunge", "plank", "pushup"];

/// Exercise label enum for type-safe handling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLabel {
    #[default]
    None,
    Squat,
    Lunge,
    Plank,
    Pushup,
}

impl ExerciseLabel {
    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => ExerciseLabel::Squat,
            2 => ExerciseLabel::Lunge,
            3 => ExerciseLabel::Plank,
            4 => ExerciseLabel::Pushup,
            _ => ExerciseLabel::None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ExerciseLabel::None => 0,
            ExerciseLabel::Squat => 1,
            ExerciseLabel::Lunge => 2,
            ExerciseLabel::Plank => 3,
            ExerciseLabel::Pushup => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        EXERCISE_LABELS[self.index()]
    }

    /// Name shown to the user
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseLabel::None => "Exercise not detected",
            ExerciseLabel::Squat => "Squats",
            ExerciseLabel::Lunge => "Lunges",
            ExerciseLabel::Plank => "Plank",
            ExerciseLabel::Pushup => "Push-ups",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExerciseLabel::None => "❓",
            ExerciseLabel::Squat => "🏋️",
            ExerciseLabel::Lunge => "🦵",
            ExerciseLabel::Plank => "🧍",
            ExerciseLabel::Pushup => "💪",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ExerciseLabel::None
    }

    /// Plank is timed, everything else is counted
    pub fn is_timed(&self) -> bool {
        *self == ExerciseLabel::Plank
    }
}
