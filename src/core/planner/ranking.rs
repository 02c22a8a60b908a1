//! Recommendation ranking and elective suggestion
//!
//! Ranking is deterministic: the same inputs always produce the same order.
//! Primary key is academic level ascending (core courses surface before
//! advanced ones), then career-path relevance, then interest-keyword matches,
//! with the course identifier as the final tiebreak.

use crate::core::models::{Catalog, CareerPath, Course};
use serde::Serialize;

/// A ranked course suggestion
///
/// Derived view over the catalog; recomputed on every request, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Course identifier
    pub course: String,
    /// Why this course was suggested
    pub reason: String,
    /// Relevance score (career and interest weight combined)
    pub score: u32,
}

/// Weight applied to a career-path tag match in the relevance score
const CAREER_WEIGHT: u32 = 100;

/// Weight applied to each interest-keyword match in the relevance score
const INTEREST_WEIGHT: u32 = 10;

/// Split a free-text interest string into lowercase keywords
///
/// Keywords are comma-separated; blank entries are dropped.
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Describe how a course matches each interest keyword
///
/// A keyword matches on tag equality first, then on a name substring, then on
/// a description substring (all case-insensitive). Returns one description
/// per matched keyword.
fn keyword_matches(course: &Course, keywords: &[String]) -> Vec<String> {
    let name = course.name.to_lowercase();
    let description = course.description.to_lowercase();

    let mut matches = Vec::new();
    for keyword in keywords {
        if course.has_tag(keyword) {
            matches.push(format!("matches '{keyword}' tag"));
        } else if name.contains(keyword.as_str()) {
            matches.push(format!("course name contains '{keyword}'"));
        } else if description.contains(keyword.as_str()) {
            matches.push(format!("description contains '{keyword}'"));
        }
    }
    matches
}

/// Rank eligible courses for the student
///
/// # Arguments
/// * `catalog` - The course catalog
/// * `eligible_ids` - Output of the eligibility resolver
/// * `career` - Selected career path, if any
/// * `interests` - Free-text interest string (comma-separated keywords)
///
/// # Returns
/// Recommendations ordered by level ascending, career relevance, interest
/// matches, then course identifier
#[must_use]
pub fn rank(
    catalog: &Catalog,
    eligible_ids: &[String],
    career: Option<CareerPath>,
    interests: &str,
) -> Vec<Recommendation> {
    let keywords = parse_interests(interests);

    let mut entries: Vec<(u8, bool, Vec<String>, &str, &Course)> = eligible_ids
        .iter()
        .filter_map(|id| catalog.get_course(id).map(|c| (id.as_str(), c)))
        .map(|(id, course)| {
            let career_hit = career.is_some_and(|c| course.tagged_for(c));
            let matches = keyword_matches(course, &keywords);
            (course.level.rank(), career_hit, matches, id, course)
        })
        .collect();

    entries.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| b.2.len().cmp(&a.2.len()))
            .then_with(|| a.3.cmp(b.3))
    });

    entries
        .into_iter()
        .map(|(_, career_hit, matches, id, course)| {
            let mut reason = format!("{} level", course.level);
            if career_hit {
                if let Some(c) = career {
                    reason.push_str(&format!(", {c} track"));
                }
            }
            for m in &matches {
                reason.push_str(", ");
                reason.push_str(m);
            }

            let score = u32::from(career_hit) * CAREER_WEIGHT
                + u32::try_from(matches.len()).unwrap_or(u32::MAX) * INTEREST_WEIGHT;

            Recommendation {
                course: id.to_string(),
                reason,
                score,
            }
        })
        .collect()
}

/// Suggest electives matching the student's interests
///
/// Score is the number of interest keywords found in the course's tags, name,
/// or description. Courses with no matches are excluded; the result is
/// ordered by score descending, then level ascending, then identifier.
///
/// # Arguments
/// * `catalog` - The course catalog
/// * `pool` - Candidate course identifiers (typically the college's offerings)
/// * `interests` - Free-text interest string
#[must_use]
pub fn suggest_electives(catalog: &Catalog, pool: &[String], interests: &str) -> Vec<Recommendation> {
    let keywords = parse_interests(interests);
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<(u32, u8, &str, Vec<String>)> = pool
        .iter()
        .filter_map(|id| catalog.get_course(id).map(|c| (id.as_str(), c)))
        .filter_map(|(id, course)| {
            let matches = keyword_matches(course, &keywords);
            if matches.is_empty() {
                return None;
            }
            let score = u32::try_from(matches.len()).unwrap_or(u32::MAX);
            Some((score, course.level.rank(), id, matches))
        })
        .collect();

    entries.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(b.2))
    });

    entries
        .into_iter()
        .map(|(score, _, id, matches)| Recommendation {
            course: id.to_string(),
            reason: matches.join("; "),
            score,
        })
        .collect()
}
