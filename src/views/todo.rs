//! To-do card in the viewer side panel.

use serde::Serialize;
use uuid::Uuid;

use crate::color_utils::css_hex;
use crate::model::ToDo;
use crate::viewer::styles::priority_color;

const CREATED_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToDoCard {
    pub id: Uuid,
    pub description: String,
    /// Creation date, e.g. `Wed May 01 2024`
    pub date: String,
    pub priority: &'static str,
    /// Badge color matching the priority highlight (`#rrggbb`)
    pub color: String,
}

impl ToDoCard {
    pub fn new(todo: &ToDo) -> Self {
        Self {
            id: todo.id(),
            description: todo.description.clone(),
            date: todo.created_at.format(CREATED_FORMAT).to_string(),
            priority: todo.priority.name(),
            color: css_hex(priority_color(todo.priority)),
        }
    }
}
