//! Schedule command handler

use super::load_context;
use course_advisor::config::{Config, ScheduleConfig};
use course_advisor::models::CareerPath;
use course_advisor::narrate::select_narrator;
use course_advisor::planner::BuilderConfig;
use course_advisor::service::{self, PlanRequest, ScheduleResponse};
use log::info;

/// Run the schedule command
///
/// # Arguments
/// * `config` - Loaded configuration (with CLI overrides applied)
/// * `college` - College identifier
/// * `completed` - Completed course identifiers
/// * `career` - Career path to bias ranking toward
/// * `interests` - Free-text interest string
/// * `json` - Emit JSON instead of formatted text
/// * `verbose` - Show study tips under each semester
pub fn run(
    config: &Config,
    college: &str,
    completed: Vec<String>,
    career: Option<CareerPath>,
    interests: &str,
    json: bool,
    verbose: bool,
) {
    let ctx = load_context(config);
    let narrator = select_narrator(&config.narrator);

    let request = PlanRequest {
        college: college.to_string(),
        completed,
        career,
        interests: interests.to_string(),
    };

    let builder_config = builder_config_from(&config.schedule);
    let response = match service::plan_schedule(&ctx, &request, narrator.as_ref(), builder_config) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    info!("schedule: {} semesters planned for '{college}'", response.semesters.len());

    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("✗ Failed to serialize response: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_response(&ctx, &response, verbose);
}

/// Build the schedule configuration, falling back to standard values for
/// anything unset (zero) in the config file
fn builder_config_from(schedule: &ScheduleConfig) -> BuilderConfig {
    let mut builder_config = BuilderConfig::standard();
    if schedule.min_credits > 0 {
        builder_config.min_credits = schedule.min_credits;
    }
    if schedule.max_credits > 0 {
        builder_config.max_credits = schedule.max_credits;
    }
    if schedule.max_courses > 0 {
        builder_config.max_courses = schedule.max_courses;
    }
    builder_config
}

fn print_response(
    ctx: &course_advisor::service::AdvisorContext,
    response: &ScheduleResponse,
    verbose: bool,
) {
    match response.career {
        Some(career) => println!("\n✓ 4-year schedule for {} ({career} track)", response.college),
        None => println!("\n✓ 4-year schedule for {}", response.college),
    }

    for narrated in &response.semesters {
        let slot = &narrated.slot;
        println!(
            "\nSemester {} ({} of Year {}) - {} credits{}",
            slot.semester,
            slot.term,
            slot.year,
            slot.total_credits,
            if slot.under_filled { " (under-filled)" } else { "" }
        );

        if slot.courses.is_empty() {
            println!("  (no eligible courses remain)");
        }
        for id in &slot.courses {
            let course = ctx.catalog.get_course(id);
            let name = course.map_or("", |c| c.name.as_str());
            let credits = course.map_or(0, |c| c.credits);
            println!("  {id:<10} {name} ({credits} cr)");
        }

        let workload = &narrated.workload;
        println!(
            "  Workload: difficulty {}/10, {} weekly",
            workload.difficulty, workload.weekly_hours
        );
        println!("  Balance:  {}", workload.balance);
        if verbose {
            for tip in &workload.tips {
                println!("  Tip:      {tip}");
            }
        }
        if let Some(advice) = &narrated.advice {
            println!("  Advice:   {advice}");
        }
    }
}
