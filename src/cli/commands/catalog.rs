//! Catalog listing command handlers: colleges, careers, course detail

use super::load_context;
use course_advisor::config::Config;
use course_advisor::service;

/// List colleges with their offered-course counts
pub fn run_colleges(config: &Config) {
    let ctx = load_context(config);
    let colleges = service::list_colleges(&ctx);

    if colleges.is_empty() {
        println!("No colleges found in the curriculum data.");
        return;
    }

    println!("\n=== Colleges ===\n");
    for college in colleges {
        println!(
            "  {:<24} {} ({} courses)",
            college.id, college.name, college.course_count
        );
    }
}

/// List the supported career paths
pub fn run_careers() {
    println!("\n=== Career paths ===\n");
    for career in service::list_careers() {
        println!("  {:<24} {}", career.slug, career.name);
    }
}

/// Show details for a single course
pub fn run_course(config: &Config, id: &str) {
    let ctx = load_context(config);

    match service::course_info(&ctx, id) {
        Ok(info) => {
            let course = &info.course;
            println!("\n{} - {}", info.id, course.name);
            println!("  Level:         {}", course.level);
            println!("  Credits:       {}", course.credits);
            if !course.description.is_empty() {
                println!("  Description:   {}", course.description);
            }
            if course.prerequisites.is_empty() {
                println!("  Prerequisites: none");
            } else {
                println!("  Prerequisites: {}", course.prerequisites.join(", "));
            }
            if !course.tags.is_empty() {
                println!("  Tags:          {}", course.tags.join(", "));
            }
            if !course.careers.is_empty() {
                println!("  Careers:       {}", course.careers.join(", "));
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
