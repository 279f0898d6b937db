//! Checklist state store.
//!
//! One [`Checklist`] instance owns the section data it was mounted with and
//! the set of checked item keys. The UI binds each checkbox to
//! [`Checklist::is_checked`] and mutates state only through
//! [`Checklist::toggle`]; progress and Markdown export are pure read-side
//! views over the same pair.
//!
//! ```text
//! Checklist
//!   ├── sections: Vec<ChecklistSection>   (immutable after construction)
//!   └── checked: HashSet<ItemKey>         (the sole mutable state)
//! ```
//!
//! # Data drift
//!
//! Toggling a key whose item does not exist in the current section data is
//! accepted and stored, but such stale keys are excluded from
//! [`Checklist::checked_count`], [`Checklist::progress`], and the Markdown
//! export. A checklist whose underlying content is edited between renders
//! degrades gracefully instead of crashing an in-progress session; stale
//! keys disappear for good when the page remounts with fresh section data.

mod markdown;
mod progress;

pub use progress::{percentage, Progress};

use std::collections::HashSet;

use crate::error::{Result, TicklistError};
use crate::key::ItemKey;
use crate::model::ChecklistSection;

/// Interactive state for one mounted checklist.
///
/// Created when a guide page mounts the engine with its section data and
/// discarded when the page unmounts - there is no cross-session persistence.
///
/// # Example
///
/// ```
/// use ticklist::{Checklist, ChecklistItem, ChecklistSection};
///
/// let sections = vec![ChecklistSection::new("s1", "Setup", "🔧")
///     .with_item(ChecklistItem::new("Install the CLI"))
///     .with_item(ChecklistItem::new("Authenticate"))];
///
/// let mut checklist = Checklist::new(sections).unwrap();
/// checklist.toggle("s1", 0);
///
/// assert!(checklist.is_checked("s1", 0));
/// assert_eq!(checklist.checked_count(), 1);
/// assert_eq!(checklist.percentage(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Checklist {
    /// Section data supplied by the caller, never mutated by the engine
    sections: Vec<ChecklistSection>,
    /// Keys currently marked checked
    checked: HashSet<ItemKey>,
}

impl Checklist {
    /// Create a checklist over the given sections with nothing checked.
    ///
    /// # Errors
    ///
    /// Returns [`TicklistError::DuplicateSection`] if two sections share an
    /// id. Duplicate ids would make item keys collide across sections, so
    /// this is rejected at construction rather than detected as corrupted
    /// progress later.
    pub fn new(sections: Vec<ChecklistSection>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for section in &sections {
                if !seen.insert(section.id.as_str()) {
                    return Err(TicklistError::duplicate_section(&section.id));
                }
            }
        }

        Ok(Self {
            sections,
            checked: HashSet::new(),
        })
    }

    /// Create a checklist from a JSON array of sections.
    ///
    /// Guide checklists are declarative content; this accepts them in the
    /// same shape the model types serialize to.
    ///
    /// # Errors
    ///
    /// Returns a JSON error for malformed input, or
    /// [`TicklistError::DuplicateSection`] on the same contract violation as
    /// [`Checklist::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use ticklist::Checklist;
    ///
    /// let checklist = Checklist::from_json(
    ///     r#"[{"id": "s1", "name": "Setup", "icon": "🔧",
    ///          "items": [{"label": "Install the CLI"}]}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(checklist.total_count(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let sections: Vec<ChecklistSection> = serde_json::from_str(json)?;
        Self::new(sections)
    }

    /// Get the section data this checklist was mounted with.
    #[must_use]
    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Flip the checked state of the item at (section id, index).
    ///
    /// Toggling twice returns the store to its prior state.
    pub fn toggle(&mut self, section_id: &str, index: usize) {
        self.toggle_key(ItemKey::new(section_id, index));
    }

    /// Flip the checked state of the item addressed by `key`.
    ///
    /// Keys with no matching item are accepted and stored (data-drift
    /// tolerance) but never counted or rendered; see the module docs.
    pub fn toggle_key(&mut self, key: ItemKey) {
        if self.checked.remove(&key) {
            tracing::trace!("Item {} unchecked", key);
        } else {
            tracing::trace!("Item {} checked", key);
            self.checked.insert(key);
        }
    }

    /// Clear every checked item in one atomic transition.
    ///
    /// Backs the "deselect all" affordance. This is a single set clear, not
    /// a sequence of toggles, so no intermediate state is ever observable.
    pub fn reset(&mut self) {
        tracing::debug!("Checklist reset, {} keys cleared", self.checked.len());
        self.checked.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether the item at (section id, index) is checked.
    #[must_use]
    pub fn is_checked(&self, section_id: &str, index: usize) -> bool {
        self.is_checked_key(&ItemKey::new(section_id, index))
    }

    /// Check whether the item addressed by `key` is checked.
    #[must_use]
    pub fn is_checked_key(&self, key: &ItemKey) -> bool {
        self.checked.contains(key)
    }

    /// Number of checked items that exist in the current section data.
    ///
    /// Stale keys left over from removed items are not counted, so this is
    /// always at most [`Checklist::total_count`].
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked
            .iter()
            .filter(|key| self.contains_item(key))
            .count()
    }

    /// Total number of items across all sections, computed fresh from the
    /// section data on every call.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Completion percentage in `[0, 100]`, rounded to the nearest integer
    /// with ties rounding up.
    ///
    /// The progress bar and the numeric label must both come from here so
    /// the two can never disagree.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        percentage(self.checked_count(), self.total_count())
    }

    /// Snapshot of checked count, total count, and percentage for UI binding.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.checked_count(), self.total_count())
    }

    /// Whether an item for `key` exists in the current section data.
    fn contains_item(&self, key: &ItemKey) -> bool {
        self.sections
            .iter()
            .any(|s| s.id == key.section() && key.index() < s.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChecklistItem;

    fn setup_sections() -> Vec<ChecklistSection> {
        vec![
            ChecklistSection::new("auth", "Authentication", "🔐")
                .with_item(ChecklistItem::new("Enable MFA"))
                .with_item(ChecklistItem::new("Rotate keys")),
            ChecklistSection::new("deploy", "Deployment", "🚀")
                .with_item(ChecklistItem::new("Tag the release"))
                .with_item(ChecklistItem::new("Watch the canary"))
                .with_item(ChecklistItem::new("Announce")),
        ]
    }

    // ========================================================================
    // Construction Tests
    // ========================================================================

    #[test]
    fn test_new_starts_empty() {
        let checklist = Checklist::new(setup_sections()).unwrap();
        assert_eq!(checklist.checked_count(), 0);
        assert_eq!(checklist.total_count(), 5);
        assert_eq!(checklist.percentage(), 0);
    }

    #[test]
    fn test_new_rejects_duplicate_section_ids() {
        let sections = vec![
            ChecklistSection::new("s1", "First", "📋"),
            ChecklistSection::new("s1", "Second", "📋"),
        ];
        let result = Checklist::new(sections);
        assert!(matches!(
            result,
            Err(TicklistError::DuplicateSection { id }) if id == "s1"
        ));
    }

    #[test]
    fn test_new_accepts_empty_sections() {
        let checklist = Checklist::new(Vec::new()).unwrap();
        assert_eq!(checklist.total_count(), 0);
        assert_eq!(checklist.percentage(), 0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "s1", "name": "Setup", "icon": "🔧",
             "items": [{"label": "A"}, {"label": "B"}]}
        ]"#;
        let checklist = Checklist::from_json(json).unwrap();
        assert_eq!(checklist.total_count(), 2);
        assert_eq!(checklist.sections()[0].name, "Setup");
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Checklist::from_json("[{");
        assert!(matches!(result, Err(TicklistError::Json(_))));
    }

    #[test]
    fn test_from_json_duplicate_ids() {
        let json = r#"[
            {"id": "s1", "name": "A", "icon": "x", "items": []},
            {"id": "s1", "name": "B", "icon": "x", "items": []}
        ]"#;
        let result = Checklist::from_json(json);
        assert!(matches!(
            result,
            Err(TicklistError::DuplicateSection { .. })
        ));
    }

    // ========================================================================
    // Toggle Tests
    // ========================================================================

    #[test]
    fn test_toggle_checks_and_unchecks() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();

        checklist.toggle("auth", 0);
        assert!(checklist.is_checked("auth", 0));
        assert!(!checklist.is_checked("auth", 1));

        checklist.toggle("auth", 0);
        assert!(!checklist.is_checked("auth", 0));
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("auth", 1);
        checklist.toggle("deploy", 2);
        let before = checklist.checked_count();

        checklist.toggle("deploy", 0);
        checklist.toggle("deploy", 0);

        assert_eq!(checklist.checked_count(), before);
        assert!(checklist.is_checked("auth", 1));
        assert!(checklist.is_checked("deploy", 2));
        assert!(!checklist.is_checked("deploy", 0));
    }

    #[test]
    fn test_toggle_same_index_different_sections() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("auth", 0);

        // Index 0 of the other section is a different key
        assert!(!checklist.is_checked("deploy", 0));
        assert_eq!(checklist.checked_count(), 1);
    }

    #[test]
    fn test_toggle_key_matches_positional_toggle() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle_key(ItemKey::new("deploy", 1));
        assert!(checklist.is_checked("deploy", 1));
    }

    // ========================================================================
    // Stale Key Tests
    // ========================================================================

    #[test]
    fn test_stale_keys_stored_but_not_counted() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();

        checklist.toggle("ghost", 0); // no such section
        checklist.toggle("auth", 99); // index past the end

        assert!(checklist.is_checked("ghost", 0));
        assert!(checklist.is_checked("auth", 99));
        assert_eq!(checklist.checked_count(), 0);
        assert_eq!(checklist.percentage(), 0);
    }

    #[test]
    fn test_stale_keys_mix_with_valid_keys() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();

        checklist.toggle("auth", 0);
        checklist.toggle("ghost", 3);

        assert_eq!(checklist.checked_count(), 1);
        assert_eq!(checklist.total_count(), 5);
        assert_eq!(checklist.percentage(), 20);
    }

    #[test]
    fn test_stale_key_toggle_still_self_inverse() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("ghost", 0);
        checklist.toggle("ghost", 0);
        assert!(!checklist.is_checked("ghost", 0));
    }

    // ========================================================================
    // Count and Reset Tests
    // ========================================================================

    #[test]
    fn test_counts_across_sections() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("auth", 0);
        checklist.toggle("deploy", 1);

        assert_eq!(checklist.checked_count(), 2);
        assert_eq!(checklist.total_count(), 5);
        assert_eq!(checklist.percentage(), 40);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("auth", 0);
        checklist.toggle("auth", 1);
        checklist.toggle("deploy", 0);
        checklist.toggle("ghost", 0);

        checklist.reset();

        assert_eq!(checklist.checked_count(), 0);
        assert_eq!(checklist.percentage(), 0);
        assert!(!checklist.is_checked("auth", 0));
        assert!(!checklist.is_checked("ghost", 0));
    }

    #[test]
    fn test_progress_snapshot_agrees_with_percentage() {
        let mut checklist = Checklist::new(setup_sections()).unwrap();
        checklist.toggle("deploy", 0);

        let progress = checklist.progress();
        assert_eq!(progress.checked, 1);
        assert_eq!(progress.total, 5);
        assert_eq!(progress.percent, checklist.percentage());
    }
}
