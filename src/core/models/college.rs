//! College model

use serde::{Deserialize, Serialize};

/// Represents a college and the courses it offers
///
/// Offered courses are stored as catalog identifiers; the referential
/// invariant (every offered identifier resolves in the catalog) is checked
/// at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    /// College display name (e.g., "State University")
    pub name: String,

    /// Course identifiers offered by this college
    #[serde(default)]
    pub courses: Vec<String>,
}

impl College {
    /// Create a new college with no offerings
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
        }
    }

    /// Add an offered course by identifier
    pub fn add_course(&mut self, course_id: String) {
        if !self.courses.contains(&course_id) {
            self.courses.push(course_id);
        }
    }

    /// Check whether a course is offered here
    #[must_use]
    pub fn offers(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Number of offered courses
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}
