//! Project records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate::{self, ValidationError};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Under way
    Active,
    /// Completed
    Finished,
}

impl ProjectStatus {
    /// Get the display name for this status.
    pub fn name(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Active => "Active",
            ProjectStatus::Finished => "Finished",
        }
    }

    /// Get all statuses in form order.
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Pending,
            ProjectStatus::Active,
            ProjectStatus::Finished,
        ]
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.name() == s.trim())
            .ok_or_else(|| {
                ValidationError::new("projectStatus", format!("unknown status '{}'", s))
            })
    }
}

/// Building category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    Institutional,
    #[serde(rename = "Mixed-use")]
    MixedUse,
    Industrial,
    #[serde(rename = "Heavy civil")]
    HeavyCivil,
}

impl ProjectType {
    /// Get the display name for this type (also its wire name).
    pub fn name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Institutional => "Institutional",
            ProjectType::MixedUse => "Mixed-use",
            ProjectType::Industrial => "Industrial",
            ProjectType::HeavyCivil => "Heavy civil",
        }
    }

    /// Material icon shown on the project card.
    pub fn icon(&self) -> &'static str {
        match self {
            ProjectType::Residential => "home",
            ProjectType::Commercial => "corporate_fare",
            ProjectType::Institutional => "school",
            ProjectType::MixedUse => "emoji_transportation",
            ProjectType::Industrial => "factory",
            ProjectType::HeavyCivil => "stadium",
        }
    }

    /// Get all project types in form order.
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::Residential,
            ProjectType::Commercial,
            ProjectType::Institutional,
            ProjectType::MixedUse,
            ProjectType::Industrial,
            ProjectType::HeavyCivil,
        ]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| ValidationError::new("projectType", format!("unknown type '{}'", s)))
    }
}

/// Everything needed to create a project, as submitted by the project form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectData {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Cost as entered (decimal text, may be empty)
    pub cost: String,
    pub project_type: ProjectType,
    pub address: String,
    pub finish_date: Option<NaiveDate>,
    /// Progress in percent (0-100)
    pub progress: u8,
}

impl ProjectData {
    /// Create project data with a name and defaults for everything else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the project type.
    pub fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cost.
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = cost.into();
        self
    }

    /// Set the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the finish date.
    pub fn with_finish_date(mut self, date: NaiveDate) -> Self {
        self.finish_date = Some(date);
        self
    }

    /// Set the progress percentage.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Validate the fields, returning the name normalized for storage.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let name = validate::require_name("projectName", &self.name)?;
        validate::check_cost("projectCost", &self.cost)?;
        validate::check_progress("projectProgress", self.progress)?;
        Ok(name)
    }
}

/// A stored project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub cost: String,
    pub project_type: ProjectType,
    pub address: String,
    pub finish_date: Option<NaiveDate>,
    pub progress: u8,
}

impl Project {
    /// Build a project from validated data, assigning a fresh id.
    pub fn new(data: ProjectData) -> Result<Self, ValidationError> {
        let name = data.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: data.description,
            status: data.status,
            cost: data.cost.trim().to_string(),
            project_type: data.project_type,
            address: data.address,
            finish_date: data.finish_date,
            progress: data.progress,
        })
    }

    /// Generated identifier, fixed for the lifetime of the record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Copy the tracked fields back out as creation data.
    pub fn to_data(&self) -> ProjectData {
        ProjectData {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            cost: self.cost.clone(),
            project_type: self.project_type,
            address: self.address.clone(),
            finish_date: self.finish_date,
            progress: self.progress,
        }
    }
}
