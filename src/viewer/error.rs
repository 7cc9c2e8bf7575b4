//! Error types for the to-do registry.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while working with viewer to-dos.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// A required viewer capability is missing or of the wrong kind
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// No to-do with this id
    #[error("No to-do found with id {0}")]
    NotFound(Uuid),

    /// The operation is reserved but has no implementation yet
    #[error("Unsupported operation: {0} is not implemented")]
    Unimplemented(&'static str),
}

impl ViewerError {
    /// Create a precondition error with a message.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }
}
