//! To-do bookmarks on top of the 3D BIM viewer.
//!
//! The viewer itself is an external engine. This module talks to it through
//! two narrow service traits ([`CameraService`] and [`HighlightService`])
//! injected at construction, which keeps the registry testable without a
//! rendering backend.

mod error;
mod registry;
mod services;
pub mod styles;

pub use error::ViewerError;
pub use registry::{ColorizeMode, RegistryOptions, ToDoRegistry};
pub use services::{CameraService, HighlightService, ViewerHandles};
