//! Prerequisite eligibility resolution

use crate::core::models::Catalog;
use std::collections::HashSet;

/// Compute the courses a student can take next
///
/// A course is eligible iff it is offered by the college, not already
/// completed, and every prerequisite is in the completed set. Prerequisites
/// are all-or-nothing: a partially satisfied prerequisite list never
/// qualifies, and OR-groups are not supported.
///
/// # Arguments
/// * `catalog` - The course catalog
/// * `offered` - Course identifiers offered by the selected college
/// * `completed` - Identifiers of completed courses
///
/// # Returns
/// Eligible course identifiers, sorted for deterministic output
#[must_use]
pub fn eligible(catalog: &Catalog, offered: &[String], completed: &HashSet<String>) -> Vec<String> {
    let mut out: Vec<String> = offered
        .iter()
        .filter(|id| {
            if completed.contains(id.as_str()) {
                return false;
            }
            catalog
                .get_course(id)
                .is_some_and(|c| c.prerequisites.iter().all(|p| completed.contains(p)))
        })
        .cloned()
        .collect();

    out.sort();
    out.dedup();
    out
}
