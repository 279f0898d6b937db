//! ticklist - checklist engine for interactive guides
//!
//! Tracks which items in a nested, sectioned checklist are checked, computes
//! completion progress, and serializes the current state to Markdown with
//! GitHub-style checkboxes. Rendering, routing, and content data are caller
//! concerns; this crate owns only the state model and its read-side views.
//!
//! # Architecture
//!
//! - [`checklist`] - the state store plus progress and Markdown views
//! - [`error`] - custom error types and handling
//! - [`export`] - clipboard boundary and copy feedback state
//! - [`key`] - stable item addressing
//! - [`label`] - rich and plain projections of authored labels
//! - [`model`] - section and item value types
//! - [`testing`] - the clipboard trait, mock, and fixtures
//!
//! # Example
//!
//! ```
//! use ticklist::{Checklist, ChecklistItem, ChecklistSection};
//!
//! let sections = vec![ChecklistSection::new("s1", "Basics", "📋")
//!     .with_item(ChecklistItem::new("A"))
//!     .with_item(ChecklistItem::new("B"))
//!     .with_item(ChecklistItem::new("C"))];
//!
//! let mut checklist = Checklist::new(sections).unwrap();
//! checklist.toggle("s1", 1);
//!
//! assert_eq!(checklist.checked_count(), 1);
//! assert_eq!(checklist.percentage(), 33);
//! assert!(checklist.to_markdown("T").contains("- [x] B"));
//! ```

pub mod checklist;
pub mod error;
pub mod export;
pub mod key;
pub mod label;
pub mod model;
pub mod testing;

// Re-export commonly used types
pub use error::{Result, TicklistError};

// Re-export the store and its views
pub use checklist::{percentage, Checklist, Progress};

// Re-export addressing and model types
pub use key::ItemKey;
pub use model::{ChecklistItem, ChecklistSection};

// Re-export label projections
pub use label::{parse_label, plain_text, LabelNode};

// Re-export the export boundary
pub use export::{copy_to_clipboard, CopyState};

// Re-export clipboard abstraction and mock for convenience
pub use testing::{Clipboard, MockClipboard};
