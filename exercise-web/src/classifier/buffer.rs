//! Rolling label buffer for temporal smoothing
//!
//! Stores the last N raw labels, overwriting the oldest.

use super::label::ExerciseLabel;

/// Default number of frames in the smoothing window
pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Ring buffer of raw labels in insertion order
#[derive(Clone, Debug, PartialEq)]
pub struct LabelHistory {
    /// Circular buffer data
    data: Vec<ExerciseLabel>,

    /// Current write position (points to next slot to write)
    write_index: usize,

    /// Whether buffer has been filled at least once
    filled: bool,
}

impl LabelHistory {
    /// `capacity` is clamped to at least one slot
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![ExerciseLabel::None; capacity.max(1)],
            write_index: 0,
            filled: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Push a new label into the buffer
    pub fn push(&mut self, label: ExerciseLabel) {
        self.data[self.write_index] = label;
        self.write_index = (self.write_index + 1) % self.data.len();

        // Mark as filled when we wrap around
        if self.write_index == 0 {
            self.filled = true;
        }
    }

    pub fn len(&self) -> usize {
        if self.filled {
            self.data.len()
        } else {
            self.write_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = ExerciseLabel> + '_ {
        let start = if self.filled { self.write_index } else { 0 };
        let cap = self.data.len();
        (0..self.len()).map(move |i| self.data[(start + i) % cap])
    }

    /// Clear the buffer (used on reset)
    pub fn clear(&mut self) {
        self.data.fill(ExerciseLabel::None);
        self.write_index = 0;
        self.filled = false;
    }
}

impl Default for LabelHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}
