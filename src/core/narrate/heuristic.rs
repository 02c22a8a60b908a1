//! Rule-based workload narration
//!
//! Used when no generation credential is configured and as the fallback when
//! the external service fails.

use super::{NarrationSource, Narrator, WorkloadSummary};
use crate::core::models::{Catalog, Course};
use crate::core::planner::ScheduleSlot;

/// Default study-hours multiplier per credit
pub const DEFAULT_HOURS_PER_CREDIT: u32 = 3;

/// Canned study tips keyed by course tag
const TIP_TABLE: &[(&str, &str)] = &[
    (
        "programming",
        "Block out regular lab time; programming assignments take longer than they look.",
    ),
    (
        "math",
        "Work practice problems every week instead of cramming before exams.",
    ),
    (
        "ai",
        "Brush up on linear algebra and probability early; later units build on them.",
    ),
    (
        "data",
        "Set up your analysis environment in week one so assignments start smoothly.",
    ),
    (
        "systems",
        "Start the long-running labs early and read the project specs twice.",
    ),
    (
        "security",
        "Keep a lab notebook; writeups are graded on process as much as results.",
    ),
    (
        "web",
        "Commit small and often; demo-day regressions usually come from big merges.",
    ),
    (
        "theory",
        "Form a proof study group; explaining arguments aloud exposes the gaps.",
    ),
];

/// Tip used when no tag in the semester matches the table
const GENERIC_TIP: &str = "Start assignments early and keep a consistent study schedule.";

/// Credit total at and above which the load remark calls a semester heavy
const HEAVY_CREDITS: u32 = 16;

/// Static, rule-based workload narrator
#[derive(Debug, Clone)]
pub struct HeuristicNarrator {
    hours_per_credit: u32,
}

impl HeuristicNarrator {
    /// Create a narrator with a custom hours-per-credit multiplier
    #[must_use]
    pub const fn new(hours_per_credit: u32) -> Self {
        Self { hours_per_credit }
    }

    /// Difficulty from the credit total and the count of advanced courses
    fn difficulty(credits: u32, advanced: usize) -> u8 {
        if credits == 0 {
            return 1;
        }
        let base: u8 = if credits >= 15 {
            7
        } else if credits >= 12 {
            5
        } else {
            4
        };
        let bump = u8::try_from(advanced).unwrap_or(u8::MAX);
        base.saturating_add(bump).clamp(1, 10)
    }

    /// Select up to three tips from the tag table for the semester's courses
    fn tips(courses: &[&Course]) -> Vec<String> {
        let mut tips: Vec<String> = TIP_TABLE
            .iter()
            .filter(|(tag, _)| courses.iter().any(|c| c.has_tag(tag)))
            .map(|(_, tip)| (*tip).to_string())
            .take(3)
            .collect();

        if tips.is_empty() {
            tips.push(GENERIC_TIP.to_string());
        }
        tips
    }

    /// Remark on where the semester sits relative to a full-time load
    fn balance(slot: &ScheduleSlot) -> String {
        if slot.courses.is_empty() {
            return "No courses scheduled this semester.".to_string();
        }
        if slot.under_filled {
            return format!(
                "Light load at {} credits; there is room for an additional elective.",
                slot.total_credits
            );
        }
        if slot.total_credits >= HEAVY_CREDITS {
            return format!(
                "Heavy load at {} credits; avoid stacking major outside commitments.",
                slot.total_credits
            );
        }
        format!("Balanced load at {} credits.", slot.total_credits)
    }
}

impl Default for HeuristicNarrator {
    fn default() -> Self {
        Self::new(DEFAULT_HOURS_PER_CREDIT)
    }
}

impl Narrator for HeuristicNarrator {
    fn narrate(&self, catalog: &Catalog, slot: &ScheduleSlot) -> WorkloadSummary {
        let courses: Vec<&Course> = slot
            .courses
            .iter()
            .filter_map(|id| catalog.get_course(id))
            .collect();
        let advanced = courses.iter().filter(|c| c.is_advanced()).count();

        WorkloadSummary {
            difficulty: Self::difficulty(slot.total_credits, advanced),
            weekly_hours: format!(
                "about {} hours",
                slot.total_credits * self.hours_per_credit
            ),
            tips: Self::tips(&courses),
            balance: Self::balance(slot),
            source: NarrationSource::Heuristic,
        }
    }
}
