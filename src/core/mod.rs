//! Core module for catalog data, planning, and narration

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod narrate;
pub mod planner;
pub mod service;

/// Returns the current version of the `CourseAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
