//! Test fixtures for checklist definitions.
//!
//! Pre-built section data shaped like real guide content, including labels
//! that exercise the markup subset the normalizer handles.

use crate::model::{ChecklistItem, ChecklistSection};

/// A single-section checklist with three plain items.
#[must_use]
pub fn flat_sections() -> Vec<ChecklistSection> {
    vec![ChecklistSection::new("basics", "Basics", "📋")
        .with_item(ChecklistItem::new("Read the overview"))
        .with_item(ChecklistItem::new("Run the quickstart"))
        .with_item(ChecklistItem::new("Join the forum"))]
}

/// A two-section checklist with markup-bearing labels and descriptions.
#[must_use]
pub fn guide_sections() -> Vec<ChecklistSection> {
    vec![
        ChecklistSection::new("auth", "Authentication", "🔐")
            .with_item(
                ChecklistItem::new("Enable <b>MFA</b> everywhere")
                    .with_description("Admins first, then all accounts"),
            )
            .with_item(ChecklistItem::new("Rotate signing keys")),
        ChecklistSection::new("deploy", "Deployment", "🚀")
            .with_item(ChecklistItem::new("Tag &amp; sign the release"))
            .with_item(ChecklistItem::new(
                r#"Review the <a href="/guides/canary">canary guide</a>"#,
            ))
            .with_item(ChecklistItem::new("Announce in #releases")),
    ]
}
