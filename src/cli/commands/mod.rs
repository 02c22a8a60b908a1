//! CLI command handlers

pub mod catalog;
pub mod config;
pub mod recommend;
pub mod schedule;

use course_advisor::config::Config;
use course_advisor::service::AdvisorContext;
use log::error;

/// Load the advisor data context, exiting on failure
///
/// Data loading failure is startup-fatal per the service contract, so this
/// prints the error and terminates rather than returning a partial context.
pub(crate) fn load_context(config: &Config) -> AdvisorContext {
    match AdvisorContext::load(&config.paths.catalog, &config.paths.curriculum) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("advisor data load failed: {e}");
            eprintln!("✗ Failed to load advisor data: {e}");
            std::process::exit(1);
        }
    }
}
