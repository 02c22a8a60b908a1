//! CLI argument definitions for `CourseAdvisor`

use clap::{Parser, Subcommand, ValueEnum};
use course_advisor::config::ConfigOverrides;
use course_advisor::models::CareerPath;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to a
/// `log::LevelFilter` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Career path CLI argument (kebab-case values, e.g. `data-scientist`)
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CareerArg {
    /// Software engineering track
    SoftwareEngineer,
    /// Data science track
    DataScientist,
    /// AI research track
    AiResearcher,
    /// Security engineering track
    SecurityEngineer,
    /// Systems engineering track
    SystemsEngineer,
    /// Full-stack development track
    FullStackDeveloper,
}

impl From<CareerArg> for CareerPath {
    fn from(arg: CareerArg) -> Self {
        match arg {
            CareerArg::SoftwareEngineer => Self::SoftwareEngineer,
            CareerArg::DataScientist => Self::DataScientist,
            CareerArg::AiResearcher => Self::AiResearcher,
            CareerArg::SecurityEngineer => Self::SecurityEngineer,
            CareerArg::SystemsEngineer => Self::SystemsEngineer,
            CareerArg::FullStackDeveloper => Self::FullStackDeveloper,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `model`, `catalog`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List colleges and their offered-course counts.
    Colleges,
    /// List supported career paths.
    Careers,
    /// Show details for a single course.
    Course {
        /// Course identifier (e.g., `CS201`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Recommend next courses and electives for a student.
    Recommend {
        /// College identifier (see `colleges`)
        #[arg(short, long, value_name = "ID")]
        college: String,

        /// Completed course identifiers, comma-separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        completed: Vec<String>,

        /// Career path to bias ranking toward
        #[arg(long, value_enum)]
        career: Option<CareerArg>,

        /// Free-text interests, comma-separated (e.g., "ai, security")
        #[arg(long, value_name = "TEXT", default_value = "")]
        interests: String,

        /// Emit the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a narrated 4-year schedule for a student.
    Schedule {
        /// College identifier (see `colleges`)
        #[arg(short, long, value_name = "ID")]
        college: String,

        /// Completed course identifiers, comma-separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        completed: Vec<String>,

        /// Career path to bias ranking toward
        #[arg(long, value_enum)]
        career: Option<CareerArg>,

        /// Free-text interests, comma-separated (e.g., "ai, security")
        #[arg(long, value_name = "TEXT", default_value = "")]
        interests: String,

        /// Emit the response as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseadvisor",
    about = "CourseAdvisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Override the text-generation API key for this run
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the course catalog document path
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override the college curriculum document path
    #[arg(long, value_name = "FILE")]
    pub curriculum: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Non-`None` values replace loaded config values for this run only; the
    /// persistent configuration file is never modified.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            verbose: if self.verbose { Some(true) } else { None },
            api_key: self.api_key.clone(),
            catalog: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            curriculum: self
                .curriculum
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_filter() {
        assert_eq!(LevelFilter::from(LogLevelArg::Error), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevelArg::Debug), LevelFilter::Debug);
    }

    #[test]
    fn test_career_arg_conversion() {
        assert_eq!(
            CareerPath::from(CareerArg::DataScientist),
            CareerPath::DataScientist
        );
        assert_eq!(
            CareerPath::from(CareerArg::FullStackDeveloper),
            CareerPath::FullStackDeveloper
        );
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli {
            log_level: None,
            verbose: false,
            api_key: None,
            catalog: None,
            curriculum: None,
            command: Command::Careers,
        };

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.api_key.is_none());
        assert!(overrides.catalog.is_none());
        assert!(overrides.curriculum.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            log_level: Some(LogLevelArg::Debug),
            verbose: true,
            api_key: Some("test-key".to_string()),
            catalog: Some(PathBuf::from("/data/courses.json")),
            curriculum: None,
            command: Command::Careers,
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.api_key, Some("test-key".to_string()));
        assert_eq!(overrides.catalog, Some("/data/courses.json".to_string()));
        assert!(overrides.curriculum.is_none());
    }
}
