//! Team records.
//!
//! A team is linked to at most one project. The link holds the project's
//! generated id, so renaming a project never orphans its teams.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{self, ValidationError};

/// Discipline a team covers on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TeamRole {
    #[default]
    #[serde(rename = "BIM Manager")]
    BimManager,
    Structural,
    #[serde(rename = "MEP")]
    Mep,
    Architect,
    Contractor,
}

impl TeamRole {
    /// Get the display name for this role (also its wire name).
    pub fn name(&self) -> &'static str {
        match self {
            TeamRole::BimManager => "BIM Manager",
            TeamRole::Structural => "Structural",
            TeamRole::Mep => "MEP",
            TeamRole::Architect => "Architect",
            TeamRole::Contractor => "Contractor",
        }
    }

    /// Material icon shown on the team card.
    pub fn icon(&self) -> &'static str {
        match self {
            TeamRole::BimManager => "computer",
            TeamRole::Structural => "foundation",
            TeamRole::Mep => "plumbing",
            TeamRole::Architect => "architecture",
            TeamRole::Contractor => "construction",
        }
    }

    /// Get all roles in form order.
    pub fn all() -> &'static [TeamRole] {
        &[
            TeamRole::BimManager,
            TeamRole::Structural,
            TeamRole::Mep,
            TeamRole::Architect,
            TeamRole::Contractor,
        ]
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TeamRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.name() == s.trim())
            .ok_or_else(|| ValidationError::new("teamRole", format!("unknown role '{}'", s)))
    }
}

/// How team data names the project it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    /// By generated id
    Id(Uuid),
    /// By project name, as written in snapshot files
    Name(String),
}

/// Everything needed to create a team, as submitted by the team form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamData {
    pub name: String,
    pub role: TeamRole,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    /// Owning project. `None` lets the store pick the current project.
    pub project: Option<ProjectRef>,
}

impl TeamData {
    /// Create team data with a name and role.
    pub fn new(name: impl Into<String>, role: TeamRole) -> Self {
        Self {
            name: name.into(),
            role,
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the contact person.
    pub fn with_contact(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact_name = name.into();
        self.contact_phone = phone.into();
        self
    }

    /// Link to a project.
    pub fn with_project(mut self, project: ProjectRef) -> Self {
        self.project = Some(project);
        self
    }

    /// Validate the fields, returning the name normalized for storage.
    pub fn validate(&self) -> Result<String, ValidationError> {
        validate::require_name("teamName", &self.name)
    }
}

/// A stored team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    pub name: String,
    pub role: TeamRole,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    /// Id of the owning project, if any
    pub project_id: Option<Uuid>,
}

impl Team {
    /// Build a team from validated data, assigning a fresh id.
    ///
    /// The project link is resolved by the caller and passed in as an id.
    pub fn new(data: TeamData, project_id: Option<Uuid>) -> Result<Self, ValidationError> {
        let name = data.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            role: data.role,
            description: data.description,
            contact_name: data.contact_name,
            contact_phone: data.contact_phone,
            project_id,
        })
    }

    /// Generated identifier, fixed for the lifetime of the record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether this team belongs to the given project.
    pub fn belongs_to(&self, project_id: Uuid) -> bool {
        self.project_id == Some(project_id)
    }
}
