//! Workload narration for generated schedules
//!
//! Narration is a capability point with two implementations: a generative
//! narrator backed by an external text-generation service, and a heuristic
//! narrator with static rules. The implementation is selected once at
//! startup from configuration; consumers hold a `dyn Narrator` and never
//! branch on the mode.

pub mod generative;
pub mod heuristic;
mod prompts;

pub use generative::GenerativeNarrator;
pub use heuristic::HeuristicNarrator;

use crate::core::config::NarratorConfig;
use crate::core::models::{Catalog, CareerPath};
use crate::core::planner::ScheduleSlot;
use log::{info, warn};
use serde::Serialize;

/// How a workload summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationSource {
    /// Produced by the external text-generation service
    Generative,
    /// Produced by the static heuristic rules
    Heuristic,
}

/// Per-semester workload commentary
///
/// Both narrator modes populate the same fields, so downstream rendering is
/// mode-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadSummary {
    /// Difficulty rating, 1 (light) through 10 (brutal)
    pub difficulty: u8,
    /// Estimated weekly study hours
    pub weekly_hours: String,
    /// One to three study tips
    pub tips: Vec<String>,
    /// Remark on how balanced the semester load is
    pub balance: String,
    /// Which narrator produced this summary
    pub source: NarrationSource,
}

/// Student context for per-semester advisor guidance
#[derive(Debug, Clone, Copy)]
pub struct AdviceContext<'a> {
    /// Selected career path, if any
    pub career: Option<CareerPath>,
    /// Free-text interest string
    pub interests: &'a str,
    /// Courses completed before semester 1
    pub completed: &'a [String],
    /// Semesters left after the current one
    pub remaining_semesters: usize,
}

/// Produces workload commentary for schedule slots
pub trait Narrator {
    /// Narrate a single semester slot
    ///
    /// Never fails: implementations that depend on an external service fall
    /// back to heuristic output internally.
    fn narrate(&self, catalog: &Catalog, slot: &ScheduleSlot) -> WorkloadSummary;

    /// Optional advisor guidance for the slot
    ///
    /// Heuristic narrators return `None`.
    fn advice(
        &self,
        _catalog: &Catalog,
        _slot: &ScheduleSlot,
        _ctx: &AdviceContext<'_>,
    ) -> Option<String> {
        None
    }
}

/// Select the narrator implementation from configuration
///
/// Generative narration requires a credential; its absence is a mode switch
/// to the heuristic narrator, never an error.
#[must_use]
pub fn select_narrator(config: &NarratorConfig) -> Box<dyn Narrator> {
    match config.resolved_api_key() {
        Some(api_key) => match GenerativeNarrator::new(api_key, config) {
            Ok(narrator) => {
                info!("workload narration: generative ({})", config.model);
                Box::new(narrator)
            }
            Err(e) => {
                warn!("failed to initialize generative narrator: {e}; using heuristic rules");
                Box::new(HeuristicNarrator::default())
            }
        },
        None => {
            info!("no generation credential configured; using heuristic narration");
            Box::new(HeuristicNarrator::default())
        }
    }
}
