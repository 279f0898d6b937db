//! Progress computation.
//!
//! One rounding authority for the whole engine: the visible progress bar and
//! the numeric label both derive from [`percentage`], so the two can never
//! disagree by a rounding step.

use serde::{Deserialize, Serialize};

/// Completion percentage in `[0, 100]`.
///
/// Rounds to the nearest integer, ties up. A total of zero yields 0 rather
/// than a division error.
///
/// # Example
///
/// ```
/// use ticklist::checklist::percentage;
///
/// assert_eq!(percentage(0, 0), 0);
/// assert_eq!(percentage(1, 3), 33);
/// assert_eq!(percentage(1, 8), 13);
/// assert_eq!(percentage(5, 5), 100);
/// ```
#[must_use]
pub fn percentage(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Clamp so arbitrary (checked, total) pairs stay within [0, 100]
    let ratio = checked.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// Snapshot of checklist completion for UI binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Checked items present in the current section data
    pub checked: usize,
    /// Total items across all sections
    pub total: usize,
    /// Rounded completion percentage
    pub percent: u8,
}

impl Progress {
    /// Build a snapshot from raw counts.
    #[must_use]
    pub fn new(checked: usize, total: usize) -> Self {
        Self {
            checked,
            total,
            percent: percentage(checked, total),
        }
    }

    /// Whether every item is checked.
    ///
    /// An empty checklist is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked >= self.total
    }
}
