//! Schedule builder for distributing courses across semesters
//!
//! The builder walks semester by semester: it resolves eligibility against a
//! running completed set, ranks the eligible pool, and greedily fills the
//! semester until the credit cap or course cap is hit. There is no
//! backtracking; a semester that cannot reach the minimum credit band is
//! flagged as under-filled and the walk continues.

use crate::core::models::{Catalog, CareerPath};
use crate::core::planner::{eligible, rank};
use serde::Serialize;
use std::collections::HashSet;

/// Number of semesters in a standard 4-year plan
pub const DEFAULT_SEMESTERS: usize = 8;

/// Default minimum credits for a full-time semester
pub const DEFAULT_MIN_CREDITS: u32 = 12;

/// Default maximum credits per semester
pub const DEFAULT_MAX_CREDITS: u32 = 18;

/// Default maximum course count per semester
pub const DEFAULT_MAX_COURSES: usize = 6;

/// Configuration for the schedule builder
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Minimum credits below which a semester is flagged under-filled
    pub min_credits: u32,
    /// Maximum credits per semester (hard limit)
    pub max_credits: u32,
    /// Maximum number of courses per semester
    pub max_courses: usize,
    /// Number of semesters to plan
    pub semesters: usize,
}

impl BuilderConfig {
    /// Create the standard 4-year semester configuration
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            min_credits: DEFAULT_MIN_CREDITS,
            max_credits: DEFAULT_MAX_CREDITS,
            max_courses: DEFAULT_MAX_COURSES,
            semesters: DEFAULT_SEMESTERS,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single semester in the schedule with its assigned courses
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSlot {
    /// Semester number (1-indexed)
    pub semester: usize,
    /// Academic year (1-4 for a standard plan)
    pub year: usize,
    /// Term label within the year
    pub term: &'static str,
    /// Course identifiers assigned to this semester
    pub courses: Vec<String>,
    /// Total credits for this semester
    pub total_credits: u32,
    /// Whether the semester fell below the minimum credit band
    pub under_filled: bool,
}

impl ScheduleSlot {
    /// Create a new empty slot for the given semester number
    #[must_use]
    pub const fn new(semester: usize) -> Self {
        Self {
            semester,
            year: (semester - 1) / 2 + 1,
            term: if (semester - 1) % 2 == 0 {
                "Fall"
            } else {
                "Spring"
            },
            courses: Vec::new(),
            total_credits: 0,
            under_filled: false,
        }
    }

    /// Add a course to the slot
    pub fn add_course(&mut self, course_id: String, credits: u32) {
        self.courses.push(course_id);
        self.total_credits += credits;
    }
}

/// Schedule builder that fills semesters from the ranked eligible pool
pub struct ScheduleBuilder<'a> {
    catalog: &'a Catalog,
    config: BuilderConfig,
}

impl<'a> ScheduleBuilder<'a> {
    /// Create a new schedule builder
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: BuilderConfig) -> Self {
        Self { catalog, config }
    }

    /// Build a semester-by-semester schedule
    ///
    /// # Arguments
    /// * `offered` - Course identifiers offered by the college
    /// * `career` - Selected career path, if any
    /// * `interests` - Free-text interest string
    /// * `completed` - Courses already completed before semester 1
    ///
    /// # Returns
    /// Exactly `config.semesters` slots. Every scheduled course appears once,
    /// after all of its prerequisites. Semesters below the minimum credit
    /// band are flagged, never rejected.
    #[must_use]
    pub fn build(
        &self,
        offered: &[String],
        career: Option<CareerPath>,
        interests: &str,
        completed: &HashSet<String>,
    ) -> Vec<ScheduleSlot> {
        let mut done = completed.clone();
        let mut slots = Vec::with_capacity(self.config.semesters);

        for semester in 1..=self.config.semesters {
            let pool = eligible(self.catalog, offered, &done);
            let ranked = rank(self.catalog, &pool, career, interests);

            let mut slot = ScheduleSlot::new(semester);
            for rec in ranked {
                if slot.courses.len() >= self.config.max_courses {
                    break;
                }

                let Some(course) = self.catalog.get_course(&rec.course) else {
                    continue;
                };
                if slot.total_credits + course.credits > self.config.max_credits {
                    break;
                }

                slot.add_course(rec.course, course.credits);
            }

            slot.under_filled = slot.total_credits < self.config.min_credits;

            for id in &slot.courses {
                done.insert(id.clone());
            }
            slots.push(slot);
        }

        slots
    }
}
