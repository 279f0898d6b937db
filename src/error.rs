//! Custom error types for the checklist engine.
//!
//! The engine recognizes only programmer-contract violations (duplicate
//! section ids at construction, malformed key tokens) and collaborator
//! failures at the clipboard boundary. Data drift - checked keys whose items
//! no longer exist - is deliberately not an error; it is tolerated and
//! filtered out of counts instead.

use thiserror::Error;

/// Main error type for checklist operations
#[derive(Error, Debug)]
pub enum TicklistError {
    /// Two sections in one checklist definition share an id
    #[error("Duplicate section id: {id}")]
    DuplicateSection { id: String },

    /// An item key token could not be parsed back into (section, index)
    #[error("Invalid item key token: {token}")]
    InvalidKey { token: String },

    /// The host clipboard collaborator rejected a write
    #[error("Clipboard write failed: {message}")]
    Clipboard { message: String },

    /// JSON error wrapper for definition loading
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TicklistError {
    /// Create a duplicate-section error
    pub fn duplicate_section(id: impl Into<String>) -> Self {
        Self::DuplicateSection { id: id.into() }
    }

    /// Create an invalid-key error
    pub fn invalid_key(token: impl Into<String>) -> Self {
        Self::InvalidKey {
            token: token.into(),
        }
    }

    /// Create a clipboard error
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Check if this error is a construction-time contract violation.
    ///
    /// Contract violations indicate a bug in the caller's checklist
    /// definition and should fail fast rather than be retried.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSection { .. } | Self::InvalidKey { .. }
        )
    }
}

/// Type alias for checklist results
pub type Result<T> = std::result::Result<T, TicklistError>;
