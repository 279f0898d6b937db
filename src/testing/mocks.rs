//! Mock implementations of testing traits.
//!
//! Controllable test doubles for the clipboard collaborator, enabling
//! deterministic tests of the export path.

use super::traits::Clipboard;
use crate::error::{Result, TicklistError};

/// Mock clipboard that records writes and can be made to fail.
///
/// # Example
///
/// ```
/// use ticklist::{Clipboard, MockClipboard};
///
/// let mut clipboard = MockClipboard::new();
/// clipboard.write_text("# Checklist").unwrap();
/// assert_eq!(clipboard.last_write(), Some("# Checklist"));
///
/// let mut denied = MockClipboard::new().with_failure("permission denied");
/// assert!(denied.write_text("# Checklist").is_err());
/// assert_eq!(denied.last_write(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    failure: Option<String>,
}

impl MockClipboard {
    /// Create a mock that accepts every write.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail with the given message.
    #[must_use]
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// The most recent successful write, if any.
    #[must_use]
    pub fn last_write(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Number of successful writes recorded.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl Clipboard for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(ref message) = self.failure {
            return Err(TicklistError::clipboard(message.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_writes() {
        let mut clipboard = MockClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();

        assert_eq!(clipboard.write_count(), 2);
        assert_eq!(clipboard.last_write(), Some("two"));
    }

    #[test]
    fn test_mock_failure_injection() {
        let mut clipboard = MockClipboard::new().with_failure("denied");
        let result = clipboard.write_text("doc");

        assert!(matches!(result, Err(TicklistError::Clipboard { .. })));
        assert_eq!(clipboard.write_count(), 0);
    }
}
