//! Prompt construction for the generative narrator

use super::AdviceContext;
use crate::core::models::Catalog;
use crate::core::planner::ScheduleSlot;
use std::fmt::Write;

/// One line per course: identifier, level, name, description
fn course_lines(catalog: &Catalog, slot: &ScheduleSlot) -> String {
    let mut lines = String::new();
    for id in &slot.courses {
        if let Some(course) = catalog.get_course(id) {
            let _ = writeln!(
                lines,
                "- {id} ({}): {}. {}",
                course.level, course.name, course.description
            );
        }
    }
    lines
}

/// Prompt asking for a strict-JSON workload analysis of one semester
pub(crate) fn workload_prompt(catalog: &Catalog, slot: &ScheduleSlot) -> String {
    format!(
        "Analyze the workload of this semester course schedule and reply with a brief, \
actionable analysis.\n\n\
Courses:\n{}\
Total credits: {}\n\n\
Reply with ONLY a JSON object containing these exact keys: \
difficulty_rating (integer 1-10), weekly_hours (string), \
tips (array of 1 to 3 short strings), balance (string).",
        course_lines(catalog, slot),
        slot.total_credits
    )
}

/// Prompt asking for short advisor guidance on one semester
pub(crate) fn advice_prompt(
    catalog: &Catalog,
    slot: &ScheduleSlot,
    ctx: &AdviceContext<'_>,
) -> String {
    let career = ctx
        .career
        .map_or_else(|| "Undecided".to_string(), |c| c.to_string());
    let interests = if ctx.interests.trim().is_empty() {
        "None specified"
    } else {
        ctx.interests
    };
    let completed = if ctx.completed.is_empty() {
        "None yet".to_string()
    } else {
        ctx.completed.join(", ")
    };

    format!(
        "As an academic advisor, give brief, actionable guidance for this student.\n\n\
Career goal: {career}\n\
Interests: {interests}\n\
Completed courses: {completed}\n\
Remaining semesters: {}\n\n\
Current semester courses:\n{}\n\
Give 2-3 specific recommendations to strengthen their preparation. \
Keep it under 100 words.",
        ctx.remaining_semesters,
        course_lines(catalog, slot)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Level};

    fn fixtures() -> (Catalog, ScheduleSlot) {
        let mut catalog = Catalog::new();
        let mut course = Course::new("Data Structures".to_string(), Level::Sophomore, 4);
        course.description = "Lists, trees, and hash tables".to_string();
        catalog.add_course("CS201".to_string(), course);

        let mut slot = ScheduleSlot::new(2);
        slot.add_course("CS201".to_string(), 4);
        (catalog, slot)
    }

    #[test]
    fn test_workload_prompt_contents() {
        let (catalog, slot) = fixtures();
        let prompt = workload_prompt(&catalog, &slot);

        assert!(prompt.contains("CS201 (sophomore): Data Structures. Lists, trees, and hash tables"));
        assert!(prompt.contains("Total credits: 4"));
        assert!(prompt.contains("difficulty_rating"));
        assert!(prompt.contains("JSON"));
    }

    #[test]
    fn test_advice_prompt_defaults() {
        let (catalog, slot) = fixtures();
        let ctx = AdviceContext {
            career: None,
            interests: "  ",
            completed: &[],
            remaining_semesters: 6,
        };

        let prompt = advice_prompt(&catalog, &slot, &ctx);
        assert!(prompt.contains("Career goal: Undecided"));
        assert!(prompt.contains("Interests: None specified"));
        assert!(prompt.contains("Completed courses: None yet"));
        assert!(prompt.contains("Remaining semesters: 6"));
    }

    #[test]
    fn test_advice_prompt_with_context() {
        let (catalog, slot) = fixtures();
        let completed = vec!["CS101".to_string()];
        let ctx = AdviceContext {
            career: Some(crate::core::models::CareerPath::DataScientist),
            interests: "ai, statistics",
            completed: &completed,
            remaining_semesters: 3,
        };

        let prompt = advice_prompt(&catalog, &slot, &ctx);
        assert!(prompt.contains("Career goal: Data Scientist"));
        assert!(prompt.contains("Completed courses: CS101"));
    }
}
