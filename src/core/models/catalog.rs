//! Catalog and curriculum map aggregates

use super::{College, Course};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The course catalog: all known courses, indexed by identifier
///
/// Built once at startup from the catalog document and treated as immutable
/// afterwards. Components receive it by reference; there is no process-wide
/// singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Courses indexed by identifier (e.g., "CS201")
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: HashMap::new(),
        }
    }

    /// Add a course under the given identifier
    ///
    /// # Returns
    /// `true` if the course was added, `false` if the identifier was already taken
    pub fn add_course(&mut self, id: String, course: Course) -> bool {
        if self.courses.contains_key(&id) {
            return false;
        }
        self.courses.insert(id, course);
        true
    }

    /// Get a course by identifier
    #[must_use]
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Check whether a course identifier exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// All course identifiers, sorted for deterministic iteration
    #[must_use]
    pub fn course_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.courses.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Validate that every prerequisite reference resolves to a catalog course
    ///
    /// # Errors
    /// Returns `Err` with one message per dangling prerequisite reference
    pub fn validate_prerequisites(&self) -> Result<(), Vec<String>> {
        let mut invalid = Vec::new();

        for id in self.course_ids() {
            if let Some(course) = self.courses.get(&id) {
                for prereq in &course.prerequisites {
                    if !self.courses.contains_key(prereq) {
                        invalid.push(format!("Course '{id}': prerequisite '{prereq}' not found"));
                    }
                }
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }
}

/// College identifier → offered courses, for every known college
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumMap {
    /// Colleges indexed by identifier (e.g., "state-university")
    colleges: HashMap<String, College>,
}

impl CurriculumMap {
    /// Create an empty curriculum map
    #[must_use]
    pub fn new() -> Self {
        Self {
            colleges: HashMap::new(),
        }
    }

    /// Add a college under the given identifier
    ///
    /// # Returns
    /// `true` if the college was added, `false` if the identifier was already taken
    pub fn add_college(&mut self, id: String, college: College) -> bool {
        if self.colleges.contains_key(&id) {
            return false;
        }
        self.colleges.insert(id, college);
        true
    }

    /// Get a college by identifier
    #[must_use]
    pub fn get_college(&self, id: &str) -> Option<&College> {
        self.colleges.get(id)
    }

    /// All college identifiers, sorted for deterministic iteration
    #[must_use]
    pub fn college_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.colleges.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of colleges in the map
    #[must_use]
    pub fn college_count(&self) -> usize {
        self.colleges.len()
    }

    /// Validate that every offered course exists in the catalog
    ///
    /// # Errors
    /// Returns `Err` with one message per dangling course reference
    pub fn validate_offerings(&self, catalog: &Catalog) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();

        for id in self.college_ids() {
            if let Some(college) = self.colleges.get(&id) {
                for course_id in &college.courses {
                    if !catalog.contains(course_id) {
                        missing.push(format!(
                            "College '{id}': offered course '{course_id}' not in catalog"
                        ));
                    }
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}
