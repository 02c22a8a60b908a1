//! Recommend command handler

use super::load_context;
use course_advisor::config::Config;
use course_advisor::models::CareerPath;
use course_advisor::service::{self, PlanRequest, RecommendResponse};
use log::info;

/// Run the recommend command
///
/// # Arguments
/// * `config` - Loaded configuration (with CLI overrides applied)
/// * `college` - College identifier
/// * `completed` - Completed course identifiers
/// * `career` - Career path to bias ranking toward
/// * `interests` - Free-text interest string
/// * `json` - Emit JSON instead of formatted text
/// * `verbose` - Show detail lines for each recommendation
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

    let request = PlanRequest {
        college: college.to_string(),
        completed,
        career,
        interests: interests.to_string(),
    };

    let response = match service::recommend(&ctx, &request) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    info!(
        "recommend: {} next courses, {} electives for '{college}'",
        response.next_courses.len(),
        response.electives.len()
    );

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

fn print_response(
    ctx: &course_advisor::service::AdvisorContext,
    response: &RecommendResponse,
    verbose: bool,
) {
    println!("\n✓ Recommendations for {}", response.college);

    if response.next_courses.is_empty() {
        println!("\nNo eligible courses remain. Nice work.");
    } else {
        println!("\n=== Next courses ===\n");
        for rec in &response.next_courses {
            let name = ctx
                .catalog
                .get_course(&rec.course)
                .map_or("", |c| c.name.as_str());
            println!("  {:<10} {name}", rec.course);
            if verbose {
                println!("             {}", rec.reason);
            }
        }
    }

    if !response.electives.is_empty() {
        println!("\n=== Electives matching your interests ===\n");
        for rec in &response.electives {
            let name = ctx
                .catalog
                .get_course(&rec.course)
                .map_or("", |c| c.name.as_str());
            println!("  {:<10} {name} ({})", rec.course, rec.reason);
        }
    }
}
