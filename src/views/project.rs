//! Project card and details panel.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::team::TeamCard;
use crate::model::{Project, Team};

/// Human form used for finish dates, e.g. `Wed May 01 2024`.
const FINISH_DATE_FORMAT: &str = "%a %b %d %Y";

/// Format a finish date for display. Unset dates render as an empty string.
pub fn format_finish_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(FINISH_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Entry in the project list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: Uuid,
    /// Material icon name for the project type
    pub icon: &'static str,
    pub name: String,
}

impl ProjectCard {
    pub fn new(project: &Project) -> Self {
        Self {
            id: project.id(),
            icon: project.project_type.icon(),
            name: project.name.clone(),
        }
    }
}

/// Details panel of the selected project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub name: String,
    pub description: String,
    pub status: String,
    /// Cost prefixed with `$`
    pub cost: String,
    pub project_type: String,
    pub address: String,
    pub finish_date: String,
    /// Progress as `"<n>%"`, also used as the progress bar width
    pub progress: String,
    pub teams: Vec<TeamCard>,
}

impl ProjectDetails {
    /// Build the panel for a project and the teams linked to it.
    pub fn new(project: &Project, teams: &[&Team]) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status.to_string(),
            cost: format!("${}", project.cost),
            project_type: project.project_type.to_string(),
            address: project.address.clone(),
            finish_date: format_finish_date(project.finish_date),
            progress: format!("{}%", project.progress),
            teams: teams.iter().map(|team| TeamCard::new(team)).collect(),
        }
    }
}
