//! Majority-vote smoothing of raw labels
//!
//! Single frames flicker between labels at threshold edges. The stable
//! label is the most frequent non-`None` label in the recent window, so a
//! few dropped or misread frames do not change it.

use super::buffer::LabelHistory;
use super::label::ExerciseLabel;

/// Slot count per label, indexed by `ExerciseLabel::index`
const LABEL_SLOTS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stabilizer {
    history: LabelHistory,
}

impl Stabilizer {
    pub fn new(window: usize) -> Self {
        Self {
            history: LabelHistory::new(window),
        }
    }

    /// Record a raw label and return the new stable label
    pub fn push(&mut self, raw: ExerciseLabel) -> ExerciseLabel {
        self.history.push(raw);
        self.stable_label()
    }

    /// Most frequent non-`None` label in the window
    ///
    /// Ties go to the label that appears first in the window (oldest
    /// first). An all-`None` or empty window is `None`.
    pub fn stable_label(&self) -> ExerciseLabel {
        let mut counts = [0usize; LABEL_SLOTS];
        let mut first_seen = [usize::MAX; LABEL_SLOTS];

        for (pos, label) in self.history.iter().enumerate() {
            if label.is_none() {
                continue;
            }
            let slot = label.index();
            counts[slot] += 1;
            if first_seen[slot] == usize::MAX {
                first_seen[slot] = pos;
            }
        }

        (1..LABEL_SLOTS)
            .filter(|&slot| counts[slot] > 0)
            .max_by(|&a, &b| {
                counts[a]
                    .cmp(&counts[b])
                    // Earlier first appearance ranks higher
                    .then(first_seen[b].cmp(&first_seen[a]))
            })
            .map_or(ExerciseLabel::None, ExerciseLabel::from_index)
    }

    pub fn history(&self) -> &LabelHistory {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
