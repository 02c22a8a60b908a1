//! Command-line interface entry point for `CourseAdvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_advisor::config::Config;
use log::LevelFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: CLI flag overrides config; fallback warn.
    // RUST_LOG still wins when set, via parse_default_env.
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::new()
        .filter_level(effective_level)
        .parse_default_env()
        .init();

    let verbose = args.verbose || config.logging.verbose;

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Colleges => commands::catalog::run_colleges(&config),
        Command::Careers => commands::catalog::run_careers(),
        Command::Course { id } => commands::catalog::run_course(&config, &id),
        Command::Recommend {
            college,
            completed,
            career,
            interests,
            json,
        } => commands::recommend::run(
            &config,
            &college,
            completed,
            career.map(std::convert::Into::into),
            &interests,
            json,
            verbose,
        ),
        Command::Schedule {
            college,
            completed,
            career,
            interests,
            json,
        } => commands::schedule::run(
            &config,
            &college,
            completed,
            career.map(std::convert::Into::into),
            &interests,
            json,
            verbose,
        ),
    }
}

fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        _ => None,
    }
}
