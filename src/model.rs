//! Value types for checklist definitions.
//!
//! Sections and items are declarative guide content: the caller supplies
//! them once when the checklist is mounted, and the engine never mutates
//! them. All interactive state lives in [`crate::checklist::Checklist`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Checklist Item
// ============================================================================

/// One line of a checklist, as authored in guide content.
///
/// The label may contain a small set of inline HTML constructs (bold and
/// emphasis tags, anchors, named entities); see [`crate::label`] for the two
/// projections consumers use.
///
/// # Example
///
/// ```
/// use ticklist::ChecklistItem;
///
/// let item = ChecklistItem::new("Rotate <b>all</b> signing keys")
///     .with_description("Quarterly, or after any suspected leak");
/// assert!(item.description.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Authored label, possibly containing inline markup
    pub label: String,
    /// Optional longer explanation shown alongside the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChecklistItem {
    /// Create an item with no description.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// Checklist Section
// ============================================================================

/// An ordered group of checklist items under one heading.
///
/// The `id` must be unique within a checklist instance - it is half of every
/// [`crate::key::ItemKey`] - and item order is significant and stable for the
/// lifetime of the definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// Stable identifier, unique within the checklist
    pub id: String,
    /// Human-readable section name
    pub name: String,
    /// Decorative icon (emoji or icon name) rendered before the name
    pub icon: String,
    /// Ordered items in this section
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    /// Create an empty section.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            items: Vec::new(),
        }
    }

    /// Replace the section's items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<ChecklistItem>) -> Self {
        self.items = items;
        self
    }

    /// Append a single item.
    #[must_use]
    pub fn with_item(mut self, item: ChecklistItem) -> Self {
        self.items.push(item);
        self
    }

    /// Number of items in this section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the section has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
