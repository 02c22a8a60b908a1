//! Configuration module for `CourseAdvisor`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Environment variable holding the text-generation credential.
/// Takes precedence over the config file value.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Text-generation service configuration
///
/// The credential is optional everywhere: its absence switches narration to
/// the heuristic mode, it never produces an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarratorConfig {
    /// API key for the text-generation service (overridden by `GEMINI_API_KEY`)
    #[serde(default)]
    pub api_key: String,
    /// Model name to request
    #[serde(default)]
    pub model: String,
    /// Service base endpoint
    #[serde(default)]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: u64,
}

impl NarratorConfig {
    /// Resolve the effective credential: environment first, then config file
    ///
    /// # Returns
    /// `Some(key)` when a non-empty credential is available, `None` otherwise
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_key(std::env::var(API_KEY_ENV).ok().as_deref(), &self.api_key)
    }
}

/// Credential resolution, separated from the environment for testing
fn resolve_key(env_value: Option<&str>, configured: &str) -> Option<String> {
    if let Some(key) = env_value {
        if !key.trim().is_empty() {
            return Some(key.trim().to_string());
        }
    }
    if configured.trim().is_empty() {
        None
    } else {
        Some(configured.trim().to_string())
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to the course catalog JSON document
    #[serde(default)]
    pub catalog: String,
    /// Path to the college curriculum JSON document
    #[serde(default)]
    pub curriculum: String,
}

/// Schedule builder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum credits per semester before flagging it under-filled
    #[serde(default)]
    pub min_credits: u32,
    /// Maximum credits per semester
    #[serde(default)]
    pub max_credits: u32,
    /// Maximum courses per semester
    #[serde(default)]
    pub max_courses: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Text-generation settings
    #[serde(default)]
    pub narrator: NarratorConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Schedule builder settings
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override text-generation API key
    pub api_key: Option<String>,
    /// Override catalog document path
    pub catalog: Option<String>,
    /// Override curriculum document path
    pub curriculum: Option<String>,
}

impl Config {
    /// Get the `$COURSE_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseadvisor`
    /// - macOS: `~/Library/Application Support/courseadvisor`
    /// - Windows: `%APPDATA%\courseadvisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseadvisor")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_ADVISOR` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$COURSE_ADVISOR") {
            let advisor_dir = Self::get_advisor_dir();
            value.replace("$COURSE_ADVISOR", advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Empty strings and zero numeric values count as missing. Used on load
    /// so that upgrades pick up newly added config fields while preserving
    /// user settings.
    ///
    /// # Returns
    /// `true` if any fields were filled in
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }

        if self.narrator.model.is_empty() && !defaults.narrator.model.is_empty() {
            self.narrator.model.clone_from(&defaults.narrator.model);
            changed = true;
        }
        if self.narrator.endpoint.is_empty() && !defaults.narrator.endpoint.is_empty() {
            self.narrator
                .endpoint
                .clone_from(&defaults.narrator.endpoint);
            changed = true;
        }
        if self.narrator.timeout_secs == 0 && defaults.narrator.timeout_secs != 0 {
            self.narrator.timeout_secs = defaults.narrator.timeout_secs;
            changed = true;
        }

        if self.paths.catalog.is_empty() && !defaults.paths.catalog.is_empty() {
            self.paths.catalog.clone_from(&defaults.paths.catalog);
            changed = true;
        }
        if self.paths.curriculum.is_empty() && !defaults.paths.curriculum.is_empty() {
            self.paths.curriculum.clone_from(&defaults.paths.curriculum);
            changed = true;
        }

        if self.schedule.min_credits == 0 && defaults.schedule.min_credits != 0 {
            self.schedule.min_credits = defaults.schedule.min_credits;
            changed = true;
        }
        if self.schedule.max_credits == 0 && defaults.schedule.max_credits != 0 {
            self.schedule.max_credits = defaults.schedule.max_credits;
            changed = true;
        }
        if self.schedule.max_courses == 0 && defaults.schedule.max_courses != 0 {
            self.schedule.max_courses = defaults.schedule.max_courses;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the persistent file is
    /// not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(api_key) = &overrides.api_key {
            self.narrator.api_key.clone_from(api_key);
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(curriculum) = &overrides.curriculum {
            self.paths.curriculum.clone_from(curriculum);
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in path values
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.curriculum = Self::expand_variables(&config.paths.curriculum);

        Ok(config)
    }

    /// Initialize config from compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed. This cannot
    /// happen in practice since the defaults ship with the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save config to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "api_key" | "api-key" => Some(self.narrator.api_key.clone()),
            "model" => Some(self.narrator.model.clone()),
            "endpoint" => Some(self.narrator.endpoint.clone()),
            "timeout" => Some(self.narrator.timeout_secs.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "curriculum" => Some(self.paths.curriculum.clone()),
            "min_credits" | "min-credits" => Some(self.schedule.min_credits.to_string()),
            "max_credits" | "max-credits" => Some(self.schedule.max_credits.to_string()),
            "max_courses" | "max-courses" => Some(self.schedule.max_courses.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "api_key" | "api-key" => self.narrator.api_key = value.to_string(),
            "model" => self.narrator.model = value.to_string(),
            "endpoint" => self.narrator.endpoint = value.to_string(),
            "timeout" => {
                self.narrator.timeout_secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid number for 'timeout': '{value}'"))?;
            }
            "catalog" => self.paths.catalog = value.to_string(),
            "curriculum" => self.paths.curriculum = value.to_string(),
            "min_credits" | "min-credits" => {
                self.schedule.min_credits = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'min_credits': '{value}'"))?;
            }
            "max_credits" | "max-credits" => {
                self.schedule.max_credits = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'max_credits': '{value}'"))?;
            }
            "max_courses" | "max-courses" => {
                self.schedule.max_courses = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid number for 'max_courses': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "api_key" | "api-key" => self.narrator.api_key.clone_from(&defaults.narrator.api_key),
            "model" => self.narrator.model.clone_from(&defaults.narrator.model),
            "endpoint" => self
                .narrator
                .endpoint
                .clone_from(&defaults.narrator.endpoint),
            "timeout" => self.narrator.timeout_secs = defaults.narrator.timeout_secs,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "curriculum" => self
                .paths
                .curriculum
                .clone_from(&defaults.paths.curriculum),
            "min_credits" | "min-credits" => {
                self.schedule.min_credits = defaults.schedule.min_credits;
            }
            "max_credits" | "max-credits" => {
                self.schedule.max_credits = defaults.schedule.max_credits;
            }
            "max_courses" | "max-courses" => {
                self.schedule.max_courses = defaults.schedule.max_courses;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[narrator]")?;
        let key_display = if self.narrator.api_key.is_empty() {
            "(not set)"
        } else {
            "(set)"
        };
        writeln!(f, "  api_key = {key_display}")?;
        writeln!(f, "  model = \"{}\"", self.narrator.model)?;
        writeln!(f, "  endpoint = \"{}\"", self.narrator.endpoint)?;
        writeln!(f, "  timeout_secs = {}", self.narrator.timeout_secs)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  curriculum = \"{}\"", self.paths.curriculum)?;

        writeln!(f, "\n[schedule]")?;
        writeln!(f, "  min_credits = {}", self.schedule.min_credits)?;
        writeln!(f, "  max_credits = {}", self.schedule.max_credits)?;
        writeln!(f, "  max_courses = {}", self.schedule.max_courses)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults() {
        let config = Config::from_defaults();

        assert!(!config.logging.level.is_empty());
        assert!(config.narrator.api_key.is_empty());
        assert_eq!(config.narrator.model, "gemini-1.5-flash");
        assert!(config.narrator.timeout_secs > 0);
        assert_eq!(config.schedule.min_credits, 12);
        assert_eq!(config.schedule.max_credits, 18);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(
            r#"
[logging]
level = "debug"
"#,
        )
        .expect("partial TOML should parse");

        assert_eq!(config.logging.level, "debug");
        // Missing sections fall back to serde defaults
        assert!(config.narrator.model.is_empty());
        assert_eq!(config.schedule.max_credits, 0);
    }

    #[test]
    fn test_merge_defaults_fills_missing() {
        let mut config = Config::from_toml("[logging]\nlevel = \"debug\"\n").unwrap();
        let defaults = Config::from_defaults();

        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.logging.level, "debug"); // user value preserved
        assert_eq!(config.narrator.model, defaults.narrator.model);
        assert_eq!(config.schedule.max_credits, defaults.schedule.max_credits);

        // A second merge changes nothing
        assert!(!config.merge_defaults(&defaults));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::from_defaults();
        let overrides = ConfigOverrides {
            level: Some("debug".to_string()),
            api_key: Some("test-key".to_string()),
            catalog: Some("/tmp/courses.json".to_string()),
            ..Default::default()
        };

        config.apply_overrides(&overrides);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.narrator.api_key, "test-key");
        assert_eq!(config.paths.catalog, "/tmp/courses.json");
        // Untouched fields keep their defaults
        assert_eq!(config.paths.curriculum, Config::from_defaults().paths.curriculum);
    }

    #[test]
    fn test_get_set_unset() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();

        config.set("model", "gemini-2.0-flash").unwrap();
        assert_eq!(config.get("model"), Some("gemini-2.0-flash".to_string()));

        config.unset("model", &defaults).unwrap();
        assert_eq!(config.get("model"), Some(defaults.narrator.model.clone()));

        assert!(config.set("unknown_key", "x").is_err());
        assert!(config.get("unknown_key").is_none());
        assert!(config.set("timeout", "not-a-number").is_err());
    }

    #[test]
    fn test_resolve_key_precedence() {
        // Environment wins over the configured value
        assert_eq!(
            resolve_key(Some("env-key"), "file-key"),
            Some("env-key".to_string())
        );
        // Blank environment falls through to the file
        assert_eq!(
            resolve_key(Some("  "), "file-key"),
            Some("file-key".to_string())
        );
        assert_eq!(resolve_key(None, "file-key"), Some("file-key".to_string()));
        // Neither set: heuristic mode
        assert_eq!(resolve_key(None, ""), None);
        assert_eq!(resolve_key(Some(""), "  "), None);
    }
}
