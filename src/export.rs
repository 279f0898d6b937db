//! Export boundary: serialized checklist to host clipboard.
//!
//! Serialization itself is pure ([`crate::checklist::Checklist::to_markdown`]);
//! this module owns the one collaborator call that can fail. Feedback is a
//! returned [`CopyState`] the UI observes and times out itself - the engine
//! holds no reference to the host environment and never mutates anything on
//! the copy path, so a failing or slow clipboard cannot block further
//! toggles.

use serde::{Deserialize, Serialize};

use crate::checklist::Checklist;
use crate::testing::Clipboard;

/// Transient feedback state for the copy affordance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyState {
    /// Nothing copied recently; the button shows its resting label
    #[default]
    Idle,
    /// The document reached the clipboard; the UI shows confirmation until
    /// its own timeout returns it to `Idle`
    Copied,
}

impl CopyState {
    /// Check whether the last copy attempt succeeded.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Serialize the checklist and hand the document to the clipboard.
///
/// Returns [`CopyState::Copied`] on success. A collaborator failure is
/// logged and reported as [`CopyState::Idle`]; it is never an error the
/// engine surfaces to the user.
///
/// # Example
///
/// ```
/// use ticklist::{copy_to_clipboard, Checklist, ChecklistItem, ChecklistSection, MockClipboard};
///
/// let sections = vec![ChecklistSection::new("s1", "Setup", "🔧")
///     .with_item(ChecklistItem::new("Install the CLI"))];
/// let checklist = Checklist::new(sections).unwrap();
///
/// let mut clipboard = MockClipboard::new();
/// let state = copy_to_clipboard(&checklist, "Setup", &mut clipboard);
///
/// assert!(state.is_copied());
/// assert!(clipboard.last_write().unwrap().starts_with("# Setup"));
/// ```
pub fn copy_to_clipboard(
    checklist: &Checklist,
    title: &str,
    clipboard: &mut impl Clipboard,
) -> CopyState {
    let document = checklist.to_markdown(title);
    match clipboard.write_text(&document) {
        Ok(()) => CopyState::Copied,
        Err(err) => {
            tracing::warn!("Clipboard write failed: {}", err);
            CopyState::Idle
        }
    }
}
