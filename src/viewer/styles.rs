//! Highlight style ids and colors used by the to-do registry.

use crate::color_utils::rgb_from_hex;
use crate::model::ToDoPriority;

/// Identifier of the to-do tool; prefixes its highlight style ids.
pub const TODO_TOOL_ID: &str = "be178b9a-0ee1-4d3d-b83a-49d4c5f3e34b";

/// Style the viewer uses for the user's own selection.
pub const SELECT_STYLE: &str = "select";

/// Style id that colors the elements of to-dos with this priority.
pub fn priority_style_id(priority: ToDoPriority) -> String {
    format!("{}-priority-{}", TODO_TOOL_ID, priority.style_key())
}

/// Fill color for a priority.
pub fn priority_color(priority: ToDoPriority) -> [u8; 3] {
    match priority {
        ToDoPriority::Low => rgb_from_hex(0x59bc59),
        ToDoPriority::Medium => rgb_from_hex(0x597cff),
        ToDoPriority::High => rgb_from_hex(0xff7676),
    }
}
