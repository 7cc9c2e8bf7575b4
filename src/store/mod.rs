//! Project and team storage with JSON snapshot export/import.
//!
//! ## Usage
//!
//! ```rust
//! use bimtrack::model::{ProjectData, ProjectStatus, TeamData, TeamRole};
//! use bimtrack::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store
//!     .create_project(ProjectData::new("Tower A").with_status(ProjectStatus::Active))
//!     .unwrap();
//! store
//!     .create_team(TeamData::new("Acme Steel", TeamRole::Structural))
//!     .unwrap();
//!
//! let json = store.export_json().unwrap();
//!
//! let mut restored = RecordStore::new();
//! let report = restored.import_snapshot(&json).unwrap();
//! assert_eq!(report.imported(), 2);
//! ```

mod error;
mod records;
mod report;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use records::{DetailsListener, RecordStore, TeamNamePolicy};
pub use report::{ImportFailure, ImportOptions, ImportReport, ImportWarning, RecordKind};
pub use snapshot::{ProjectEntry, SnapshotDocument, TeamEntry};
