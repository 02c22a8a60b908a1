//! Data models for the course catalog and college curricula

pub mod career;
pub mod catalog;
pub mod college;
pub mod course;

pub use career::CareerPath;
pub use catalog::{Catalog, CurriculumMap};
pub use college::College;
pub use course::{Course, Level};
