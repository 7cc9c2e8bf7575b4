//! Error types for record store operations.

use thiserror::Error;

use crate::model::ValidationError;

/// Errors that can occur while creating, selecting or importing records.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A project with this name is already stored
    #[error("A project with name \"{name}\" already exists")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// A team with this name is already stored (only with the unique team-name policy)
    #[error("A team with the name \"{name}\" already exists")]
    DuplicateTeamName {
        /// The conflicting name
        name: String,
    },

    /// Lookup by id or name found nothing
    #[error("No {kind} found for {key}")]
    NotFound {
        /// Record kind ("project" or "team")
        kind: &'static str,
        /// The id or name that was looked up
        key: String,
    },

    /// A field of the submitted record is invalid
    #[error("Invalid {field}: {reason}")]
    InvalidRecord {
        /// Name of the offending field
        field: &'static str,
        /// Description of the problem
        reason: String,
    },

    /// The snapshot document is not valid JSON or has the wrong shape
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a not-found error for a project.
    pub fn project_not_found(key: impl ToString) -> Self {
        Self::NotFound {
            kind: "project",
            key: key.to_string(),
        }
    }

    /// Create a not-found error for a team.
    pub fn team_not_found(key: impl ToString) -> Self {
        Self::NotFound {
            kind: "team",
            key: key.to_string(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRecord {
            field: err.field,
            reason: err.reason,
        }
    }
}
