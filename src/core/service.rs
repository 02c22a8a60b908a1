//! Typed request/response contract for advisor operations
//!
//! This is the surface a presentation layer talks to. The CLI consumes it
//! directly; the response types serialize to JSON so another front end could
//! expose the same operations without touching the core.

use crate::core::error::{DataError, RequestError};
use crate::core::loader;
use crate::core::models::{Catalog, CareerPath, College, Course, CurriculumMap};
use crate::core::narrate::{AdviceContext, Narrator, WorkloadSummary};
use crate::core::planner::{eligible, rank, suggest_electives, BuilderConfig, Recommendation, ScheduleBuilder, ScheduleSlot};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum number of elective suggestions returned per request
const ELECTIVE_LIMIT: usize = 5;

/// Immutable data context shared by all advisor operations
///
/// Built once at startup from the two data documents and passed by reference
/// into every operation.
#[derive(Debug, Clone)]
pub struct AdvisorContext {
    /// The course catalog
    pub catalog: Catalog,
    /// College identifier → offered courses
    pub curriculum: CurriculumMap,
}

impl AdvisorContext {
    /// Build a context from already-loaded data
    #[must_use]
    pub const fn new(catalog: Catalog, curriculum: CurriculumMap) -> Self {
        Self { catalog, curriculum }
    }

    /// Load and validate both data documents
    ///
    /// # Errors
    /// Returns a [`DataError`] on any read, parse, or reference failure.
    /// This is startup-fatal: callers must not continue on error.
    pub fn load<P: AsRef<Path>>(catalog_path: P, curriculum_path: P) -> Result<Self, DataError> {
        let catalog = loader::load_catalog(catalog_path)?;
        let curriculum = loader::load_curriculum(curriculum_path, &catalog)?;

        info!(
            "data loaded: {} courses, {} colleges",
            catalog.course_count(),
            curriculum.college_count()
        );

        Ok(Self::new(catalog, curriculum))
    }
}

/// Common request payload for recommendations and schedules
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    /// Selected college identifier
    pub college: String,
    /// Completed course identifiers
    #[serde(default)]
    pub completed: Vec<String>,
    /// Selected career path, if any
    #[serde(default)]
    pub career: Option<CareerPath>,
    /// Free-text interest string (comma-separated keywords)
    #[serde(default)]
    pub interests: String,
}

/// One college in the listing
#[derive(Debug, Clone, Serialize)]
pub struct CollegeSummary {
    /// College identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Number of offered courses
    pub course_count: usize,
}

/// One career path in the listing
#[derive(Debug, Clone, Serialize)]
pub struct CareerSummary {
    /// Stable slug used in requests and catalog data
    pub slug: &'static str,
    /// Human-readable track name
    pub name: &'static str,
}

/// Detail view of a single course
#[derive(Debug, Clone, Serialize)]
pub struct CourseInfo {
    /// Course identifier
    pub id: String,
    /// Full course record
    #[serde(flatten)]
    pub course: Course,
}

/// Response for the recommendation operation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    /// College display name
    pub college: String,
    /// Eligible courses, ranked
    pub next_courses: Vec<Recommendation>,
    /// Interest-matched electives offered by the college (top five)
    pub electives: Vec<Recommendation>,
}

/// One schedule slot with its narration attached
#[derive(Debug, Clone, Serialize)]
pub struct NarratedSlot {
    /// The semester slot
    #[serde(flatten)]
    pub slot: ScheduleSlot,
    /// Workload commentary (identical shape in both narrator modes)
    pub workload: WorkloadSummary,
    /// Optional advisor guidance (generative mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

/// Response for the schedule operation
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// College display name
    pub college: String,
    /// Selected career track name, if any
    pub career: Option<&'static str>,
    /// The narrated semesters, in order
    pub semesters: Vec<NarratedSlot>,
}

/// List all colleges with their offered-course counts
#[must_use]
pub fn list_colleges(ctx: &AdvisorContext) -> Vec<CollegeSummary> {
    ctx.curriculum
        .college_ids()
        .into_iter()
        .filter_map(|id| {
            ctx.curriculum.get_college(&id).map(|college| CollegeSummary {
                name: college.name.clone(),
                course_count: college.course_count(),
                id,
            })
        })
        .collect()
}

/// List the supported career paths
#[must_use]
pub fn list_careers() -> Vec<CareerSummary> {
    CareerPath::ALL
        .into_iter()
        .map(|career| CareerSummary {
            slug: career.slug(),
            name: career.display_name(),
        })
        .collect()
}

/// Look up a single course by identifier
///
/// # Errors
/// Returns [`RequestError::UnknownCourse`] if the identifier is not in the catalog
pub fn course_info(ctx: &AdvisorContext, id: &str) -> Result<CourseInfo, RequestError> {
    ctx.catalog
        .get_course(id)
        .map(|course| CourseInfo {
            id: id.to_string(),
            course: course.clone(),
        })
        .ok_or_else(|| RequestError::UnknownCourse(id.to_string()))
}

/// Validate the request against the loaded data
///
/// Checks the college identifier and every completed-course identifier.
fn resolve_request<'a>(
    ctx: &'a AdvisorContext,
    req: &PlanRequest,
) -> Result<(&'a College, HashSet<String>), RequestError> {
    let college = ctx
        .curriculum
        .get_college(&req.college)
        .ok_or_else(|| RequestError::UnknownCollege(req.college.clone()))?;

    let mut completed = HashSet::new();
    for id in &req.completed {
        if !ctx.catalog.contains(id) {
            return Err(RequestError::UnknownCourse(id.clone()));
        }
        completed.insert(id.clone());
    }

    Ok((college, completed))
}

/// Produce ranked next-course recommendations and elective suggestions
///
/// # Errors
/// Returns a [`RequestError`] for unknown college or course identifiers
pub fn recommend(ctx: &AdvisorContext, req: &PlanRequest) -> Result<RecommendResponse, RequestError> {
    let (college, completed) = resolve_request(ctx, req)?;

    let pool = eligible(&ctx.catalog, &college.courses, &completed);
    let next_courses = rank(&ctx.catalog, &pool, req.career, &req.interests);

    let mut electives = suggest_electives(&ctx.catalog, &college.courses, &req.interests);
    electives.retain(|e| !completed.contains(&e.course));
    electives.truncate(ELECTIVE_LIMIT);

    Ok(RecommendResponse {
        college: college.name.clone(),
        next_courses,
        electives,
    })
}

/// Build a narrated multi-semester schedule
///
/// The schedule seeds its running completed set from the request, so already
/// completed courses are never rescheduled. Narration always succeeds; the
/// generative narrator degrades to heuristic output internally.
///
/// # Errors
/// Returns a [`RequestError`] for unknown college or course identifiers
pub fn plan_schedule(
    ctx: &AdvisorContext,
    req: &PlanRequest,
    narrator: &dyn Narrator,
    builder_config: BuilderConfig,
) -> Result<ScheduleResponse, RequestError> {
    let (college, completed) = resolve_request(ctx, req)?;
    let total_semesters = builder_config.semesters;

    let builder = ScheduleBuilder::new(&ctx.catalog, builder_config);
    let slots = builder.build(&college.courses, req.career, &req.interests, &completed);

    let semesters = slots
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| {
            let workload = narrator.narrate(&ctx.catalog, &slot);
            let advice = if slot.courses.is_empty() {
                None
            } else {
                narrator.advice(
                    &ctx.catalog,
                    &slot,
                    &AdviceContext {
                        career: req.career,
                        interests: &req.interests,
                        completed: &req.completed,
                        remaining_semesters: total_semesters.saturating_sub(idx + 1),
                    },
                )
            };

            NarratedSlot {
                slot,
                workload,
                advice,
            }
        })
        .collect();

    Ok(ScheduleResponse {
        college: college.name.clone(),
        career: req.career.map(CareerPath::display_name),
        semesters,
    })
}
