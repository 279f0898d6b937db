//! Trait definitions for testable abstractions.
//!
//! The clipboard is the engine's only external dependency. Abstracting it
//! keeps the export path testable without a real host environment and keeps
//! host references (DOM, window handles) out of the engine entirely.

use crate::error::Result;

/// Abstraction for the host environment's clipboard.
///
/// The engine only ever hands a finished string to this collaborator. The
/// write may fail or be slow; neither outcome is allowed to block further
/// toggles or mutate checklist state, which
/// [`crate::export::copy_to_clipboard`] guarantees by serializing first and
/// reporting the outcome as a [`crate::export::CopyState`].
///
/// # Example
///
/// ```rust,ignore
/// use ticklist::Clipboard;
///
/// fn share(clipboard: &mut impl Clipboard, doc: &str) -> bool {
///     clipboard.write_text(doc).is_ok()
/// }
/// ```
pub trait Clipboard {
    /// Write text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the host denies or fails the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}
