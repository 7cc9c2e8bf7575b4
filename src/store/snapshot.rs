//! Snapshot document for export/import.
//!
//! The document is the whole store as two arrays, with the field names the
//! project and team forms use:
//!
//! ```json
//! {
//!   "projects": [
//!     {
//!       "projectName": "Tower A",
//!       "projectDescription": "",
//!       "projectStatus": "Active",
//!       "projectCost": "1500000",
//!       "projectType": "Residential",
//!       "projectAddress": "",
//!       "projectFinishDate": "2025-06-30",
//!       "projectProgress": "40"
//!     }
//!   ],
//!   "teams": [
//!     {
//!       "teamName": "Acme Steel",
//!       "teamRole": "Structural",
//!       "teamDescription": "",
//!       "contactName": "Ana",
//!       "contactPhone": "555-0101",
//!       "teamProject": "Tower A"
//!     }
//!   ]
//! }
//! ```
//!
//! Import decodes each array element on its own, so one bad record fails
//! alone instead of rejecting the whole document. Entries keep every field as
//! text; dates written by browsers as full timestamps and progress written as
//! a number are both accepted.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::{Project, ProjectData, ProjectRef, Team, TeamData, validate};
use crate::store::error::StoreError;

/// The whole store as written to and read from a snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Projects in insertion order.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    /// Teams in insertion order.
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

impl SnapshotDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of records in the document.
    pub fn record_count(&self) -> usize {
        self.projects.len() + self.teams.len()
    }
}

/// A project as stored in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_cost: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_address: String,
    /// ISO 8601 date, empty when unset
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_finish_date: String,
    /// Percentage as text
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_progress: String,
}

impl ProjectEntry {
    /// Create from a stored project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            project_name: project.name.clone(),
            project_description: project.description.clone(),
            project_status: project.status.name().to_string(),
            project_cost: project.cost.clone(),
            project_type: project.project_type.name().to_string(),
            project_address: project.address.clone(),
            project_finish_date: project
                .finish_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            project_progress: project.progress.to_string(),
        }
    }

    /// Convert to creation data, validating every typed field.
    pub fn to_data(&self) -> Result<ProjectData, StoreError> {
        Ok(ProjectData {
            name: self.project_name.clone(),
            description: self.project_description.clone(),
            status: self.project_status.parse()?,
            cost: self.project_cost.clone(),
            project_type: self.project_type.parse()?,
            address: self.project_address.clone(),
            finish_date: validate::parse_finish_date(
                "projectFinishDate",
                &self.project_finish_date,
            )?,
            progress: validate::parse_progress("projectProgress", &self.project_progress)?,
        })
    }
}

/// A team as stored in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_phone: String,
    /// Name of the owning project.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_string"
    )]
    pub team_project: Option<String>,
}

impl TeamEntry {
    /// Create from a stored team and the resolved name of its project.
    pub fn from_team(team: &Team, project_name: Option<&str>) -> Self {
        Self {
            team_name: team.name.clone(),
            team_role: team.role.name().to_string(),
            team_description: team.description.clone(),
            contact_name: team.contact_name.clone(),
            contact_phone: team.contact_phone.clone(),
            team_project: project_name.map(str::to_string),
        }
    }

    /// Convert to creation data. The project reference stays a name.
    pub fn to_data(&self) -> Result<TeamData, StoreError> {
        Ok(TeamData {
            name: self.team_name.clone(),
            role: self.team_role.parse()?,
            description: self.team_description.clone(),
            contact_name: self.contact_name.clone(),
            contact_phone: self.contact_phone.clone(),
            project: self
                .team_project
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| ProjectRef::Name(name.to_string())),
        })
    }
}

/// A snapshot parsed only down to its two arrays.
///
/// A document whose `projects` or `teams` is not an array still fails as a
/// whole; the elements themselves are decoded later, one at a time.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSnapshot {
    #[serde(default)]
    projects: Option<Vec<Value>>,
    #[serde(default)]
    teams: Option<Vec<Value>>,
}

impl RawSnapshot {
    pub(crate) fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn into_entries(
        self,
    ) -> (Vec<DecodedEntry<ProjectEntry>>, Vec<DecodedEntry<TeamEntry>>) {
        let projects = self
            .projects
            .unwrap_or_default()
            .into_iter()
            .map(|value| DecodedEntry::decode(value, "projectName"))
            .collect();
        let teams = self
            .teams
            .unwrap_or_default()
            .into_iter()
            .map(|value| DecodedEntry::decode(value, "teamName"))
            .collect();
        (projects, teams)
    }
}

/// One array element after decoding, with the name it carries for reporting.
#[derive(Debug)]
pub(crate) struct DecodedEntry<T> {
    pub name: String,
    pub entry: Result<T, StoreError>,
}

impl<T: DeserializeOwned> DecodedEntry<T> {
    fn decode(value: Value, name_field: &str) -> Self {
        let name = match value.get(name_field) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        };
        Self {
            name,
            entry: serde_json::from_value(value).map_err(StoreError::from),
        }
    }
}

impl<T> DecodedEntry<T> {
    pub(crate) fn parsed(name: String, entry: T) -> Self {
        Self {
            name,
            entry: Ok(entry),
        }
    }
}

/// Like `lenient_string`, with empty text meaning no value.
fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = lenient_string(deserializer)?;
    Ok(Some(text).filter(|text| !text.is_empty()))
}

/// Accept a string, a number or null where text is expected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}
