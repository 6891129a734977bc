//! Classifier module - per-frame exercise labels and their smoothing
//!
//! Features -> threshold rules -> rolling majority vote.

mod buffer;
mod features;
mod label;
mod rules;
mod stabilizer;

pub use buffer::{LabelHistory, DEFAULT_HISTORY_LEN};
pub use features::{extract_features, FeatureSet};
pub use label::{ExerciseLabel, EXERCISE_LABELS};
pub use rules::classify;
pub use stabilizer::Stabilizer;
