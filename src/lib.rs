//! bimtrack - project and team records for a BIM viewer
//!
//! - [`model`]: projects, teams, to-dos and viewer value types
//! - [`store`]: the record store with JSON snapshot import and export
//! - [`viewer`]: to-do bookmarks driven through camera and highlight services
//! - [`views`]: view models for cards and detail panels
//! - [`config`]: persisted user preferences

mod color_utils;
pub mod config;
pub mod model;
pub mod store;
pub mod viewer;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod wasm_file;

#[cfg(target_arch = "wasm32")]
mod wasm_viewer;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
