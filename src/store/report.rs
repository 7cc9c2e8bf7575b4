//! Outcome of a best-effort snapshot import.

use std::fmt;

use crate::store::error::StoreError;

/// Kind of record an import issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Project,
    Team,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Project => f.write_str("project"),
            RecordKind::Team => f.write_str("team"),
        }
    }
}

/// Options for import operations.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Whether to import the projects array.
    pub projects: bool,

    /// Whether to import the teams array.
    pub teams: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            projects: true,
            teams: true,
        }
    }
}

impl ImportOptions {
    /// Create new import options with defaults (everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Import projects.
    pub fn projects(mut self, include: bool) -> Self {
        self.projects = include;
        self
    }

    /// Import teams.
    pub fn teams(mut self, include: bool) -> Self {
        self.teams = include;
        self
    }
}

/// A record that was rejected during import.
#[derive(Debug)]
pub struct ImportFailure {
    /// Which array the record came from.
    pub record: RecordKind,

    /// Position of the record in its array.
    pub index: usize,

    /// Name given in the record (may be empty).
    pub name: String,

    /// Why it was rejected.
    pub error: StoreError,
}

impl fmt::Display for ImportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} '{}': {}",
            self.record, self.index, self.name, self.error
        )
    }
}

/// A record that was imported with a caveat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    /// Which array the record came from.
    pub record: RecordKind,

    /// Position of the record in its array.
    pub index: usize,

    /// Human-readable message.
    pub message: String,
}

/// Result of an import operation.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Number of projects created.
    pub projects_imported: usize,

    /// Number of teams created.
    pub teams_imported: usize,

    /// Records that were rejected, in document order.
    pub failures: Vec<ImportFailure>,

    /// Records that were imported with a caveat.
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records created.
    pub fn imported(&self) -> usize {
        self.projects_imported + self.teams_imported
    }

    /// Check if any record was rejected.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Check if any record was imported with a caveat.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Messages for every rejected record, ready to show to the user.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}
