//! To-do bookmarks on the 3D viewer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scene::{CameraPose, Selection};
use super::validate::ValidationError;

/// Urgency of a to-do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToDoPriority {
    Low,
    /// Shown as "Normal" in the create form.
    #[default]
    #[serde(alias = "Normal")]
    Medium,
    High,
}

impl ToDoPriority {
    /// Get the display name for this priority.
    pub fn name(&self) -> &'static str {
        match self {
            ToDoPriority::Low => "Low",
            ToDoPriority::Medium => "Medium",
            ToDoPriority::High => "High",
        }
    }

    /// Key used in the highlight style id for this priority.
    pub fn style_key(&self) -> &'static str {
        match self {
            ToDoPriority::Low => "Low",
            ToDoPriority::Medium => "Normal",
            ToDoPriority::High => "High",
        }
    }

    /// Get all priorities from least to most urgent.
    pub fn all() -> &'static [ToDoPriority] {
        &[ToDoPriority::Low, ToDoPriority::Medium, ToDoPriority::High]
    }
}

impl fmt::Display for ToDoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToDoPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(ToDoPriority::Low),
            "Medium" | "Normal" => Ok(ToDoPriority::Medium),
            "High" => Ok(ToDoPriority::High),
            other => Err(ValidationError::new(
                "priority",
                format!("unknown priority '{}'", other),
            )),
        }
    }
}

/// A saved viewpoint with a note.
///
/// Camera pose and selection are copies taken when the to-do was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDo {
    id: Uuid,
    pub description: String,
    pub priority: ToDoPriority,
    pub created_at: DateTime<Utc>,
    camera: CameraPose,
    selection: Selection,
}

impl ToDo {
    /// Create a to-do stamped with the current time.
    pub fn new(
        description: impl Into<String>,
        priority: ToDoPriority,
        camera: CameraPose,
        selection: Selection,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            priority,
            created_at: Utc::now(),
            camera,
            selection,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Camera pose captured at creation.
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// Elements selected at creation.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
