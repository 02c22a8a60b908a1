//! Course model

use super::CareerPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic level of a course, ordered freshman through senior.
///
/// The derived `Ord` follows declaration order, so `Freshman < Sophomore <
/// Junior < Senior`. The lowercase names match the catalog JSON wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// First-year courses
    Freshman,
    /// Second-year courses
    Sophomore,
    /// Third-year courses
    Junior,
    /// Fourth-year courses
    Senior,
}

impl Level {
    /// Numeric rank used as a sort key (freshman first)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Freshman => 1,
            Self::Sophomore => 2,
            Self::Junior => 3,
            Self::Senior => 4,
        }
    }

    /// Lowercase label as it appears in catalog data
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Freshman => "freshman",
            Self::Sophomore => "sophomore",
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a course in the catalog
///
/// Courses are keyed by identifier in the [`Catalog`](super::Catalog) map and
/// are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Display name (e.g., "Data Structures")
    pub name: String,

    /// Short course description
    #[serde(default)]
    pub description: String,

    /// Academic level bucket
    pub level: Level,

    /// Credit count (positive)
    pub credits: u32,

    /// Prerequisite course identifiers (possibly empty; all must be
    /// completed before the course is eligible)
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Interest tags (e.g., "ai", "systems", "advanced")
    #[serde(default)]
    pub tags: Vec<String>,

    /// Career-path slugs this course is relevant to (e.g., "data-scientist")
    #[serde(default)]
    pub careers: Vec<String>,
}

impl Course {
    /// Create a new course with no prerequisites, tags, or career relevance
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `level` - Academic level
    /// * `credits` - Credit count
    #[must_use]
    pub const fn new(name: String, level: Level, credits: u32) -> Self {
        Self {
            name,
            description: String::new(),
            level,
            credits,
            prerequisites: Vec::new(),
            tags: Vec::new(),
            careers: Vec::new(),
        }
    }

    /// Add a prerequisite by course identifier
    pub fn add_prerequisite(&mut self, prereq_id: String) {
        if !self.prerequisites.contains(&prereq_id) {
            self.prerequisites.push(prereq_id);
        }
    }

    /// Add an interest tag
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Add a career-path slug
    pub fn add_career(&mut self, career_slug: String) {
        if !self.careers.contains(&career_slug) {
            self.careers.push(career_slug);
        }
    }

    /// Check whether the course carries a given interest tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Check whether the course is tagged for the given career path
    #[must_use]
    pub fn tagged_for(&self, career: CareerPath) -> bool {
        self.careers
            .iter()
            .any(|c| c.eq_ignore_ascii_case(career.slug()))
    }

    /// Check whether the course carries the "advanced" tag
    ///
    /// Used by the heuristic workload narrator to weight difficulty.
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        self.has_tag("advanced")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Data Structures".to_string(), Level::Sophomore, 4);

        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.level, Level::Sophomore);
        assert_eq!(course.credits, 4);
        assert!(course.prerequisites.is_empty());
        assert!(course.tags.is_empty());
        assert!(course.careers.is_empty());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Freshman < Level::Sophomore);
        assert!(Level::Sophomore < Level::Junior);
        assert!(Level::Junior < Level::Senior);
        assert_eq!(Level::Freshman.rank(), 1);
        assert_eq!(Level::Senior.rank(), 4);
    }

    #[test]
    fn test_level_serde_lowercase() {
        let level: Level = serde_json::from_str("\"junior\"").unwrap();
        assert_eq!(level, Level::Junior);
        assert_eq!(serde_json::to_string(&Level::Freshman).unwrap(), "\"freshman\"");
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = Course::new("Algorithms".to_string(), Level::Junior, 4);

        course.add_prerequisite("CS201".to_string());
        assert_eq!(course.prerequisites.len(), 1);
        assert_eq!(course.prerequisites[0], "CS201");

        // Adding duplicate should not duplicate
        course.add_prerequisite("CS201".to_string());
        assert_eq!(course.prerequisites.len(), 1);
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let mut course = Course::new("Machine Learning".to_string(), Level::Senior, 3);
        course.add_tag("AI".to_string());

        assert!(course.has_tag("ai"));
        assert!(course.has_tag("AI"));
        assert!(!course.has_tag("security"));
    }

    #[test]
    fn test_tagged_for_career() {
        let mut course = Course::new("Computer Security".to_string(), Level::Senior, 3);
        course.add_career("security-engineer".to_string());

        assert!(course.tagged_for(CareerPath::SecurityEngineer));
        assert!(!course.tagged_for(CareerPath::DataScientist));
    }

    #[test]
    fn test_is_advanced() {
        let mut course = Course::new("Operating Systems".to_string(), Level::Junior, 4);
        assert!(!course.is_advanced());

        course.add_tag("advanced".to_string());
        assert!(course.is_advanced());
    }
}
