//! Data models for the tracker: projects, teams and viewer to-dos.

mod project;
mod scene;
mod team;
mod todo;
pub mod validate;

pub use project::{Project, ProjectData, ProjectStatus, ProjectType};
pub use scene::{CameraPose, ElementIndex, ModelId, Selection, Vec3};
pub use team::{ProjectRef, Team, TeamData, TeamRole};
pub use todo::{ToDo, ToDoPriority};
pub use validate::ValidationError;
