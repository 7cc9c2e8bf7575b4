//! View models for the project dashboard and the viewer side panel.
//!
//! Each view is plain data derived from the records; rendering them is up
//! to the host page:
//! - project: project card and details panel
//! - team: team card and the team info popup
//! - todo: to-do card in the viewer side panel

mod project;
mod team;
mod todo;

pub use project::{ProjectCard, ProjectDetails, format_finish_date};
pub use team::{InfoLine, TeamCard, team_info_lines};
pub use todo::ToDoCard;
