//! Configuration module for the calculator

use crate::core::catalog::CatalogSource;
use crate::core::models::{Grade, PostGrad};
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$COOKED";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Degree catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a `degrees.json` file; empty uses the embedded catalog
    #[serde(default)]
    pub path: String,
}

/// Share configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Canonical URL appended to shared results
    #[serde(default)]
    pub url: String,
    /// Title used for shares
    #[serde(default)]
    pub title: String,
}

/// Presentation settings for the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Pause with a "Running simulation..." line before showing a result
    #[serde(default)]
    pub dramatic_delay: bool,
    /// Minimum pause in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_delay_ms: Option<u64>,
    /// Random extra pause of up to this many milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter_ms: Option<u64>,
    /// Grade preselected when none is given
    #[serde(default)]
    pub default_grade: String,
    /// Postgraduate level preselected when none is given
    #[serde(default)]
    pub default_postgrad: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Share settings
    #[serde(default)]
    pub share: ShareConfig,
    /// Presentation settings
    #[serde(default)]
    pub presentation: PresentationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog path
    pub catalog_path: Option<String>,
    /// Override share URL
    pub share_url: Option<String>,
    /// Override dramatic delay flag
    pub dramatic_delay: Option<bool>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not
fn fill_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

/// Copy `default` into `field` when `field` is unset
fn fill_none<T: Copy>(field: &mut Option<T>, default: Option<T>) -> bool {
    if field.is_none() && default.is_some() {
        *field = default;
        true
    } else {
        false
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_millis(key: &str, value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("Invalid millisecond value for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$COOKED` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/cooked`
    /// - macOS: `~/Library/Application Support/cooked`
    /// - Windows: `%APPDATA%\cooked`
    #[must_use]
    pub fn get_cooked_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cooked")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and set in `defaults` are filled, so
    /// upgrading picks up new settings without touching the user's values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let results = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.catalog.path, &defaults.catalog.path),
            fill_empty(&mut self.share.url, &defaults.share.url),
            fill_empty(&mut self.share.title, &defaults.share.title),
            fill_none(
                &mut self.presentation.min_delay_ms,
                defaults.presentation.min_delay_ms,
            ),
            fill_none(
                &mut self.presentation.jitter_ms,
                defaults.presentation.jitter_ms,
            ),
            fill_empty(
                &mut self.presentation.default_grade,
                &defaults.presentation.default_grade,
            ),
            fill_empty(
                &mut self.presentation.default_postgrad,
                &defaults.presentation.default_postgrad,
            ),
        ];
        results.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(path) = &overrides.catalog_path {
            self.catalog.path.clone_from(path);
        }
        if let Some(url) = &overrides.share_url {
            self.share.url.clone_from(url);
        }
        if let Some(dramatic) = overrides.dramatic_delay {
            self.presentation.dramatic_delay = dramatic;
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_cooked_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COOKED` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let cooked_dir = Self::get_cooked_dir();
            value.replace(DIR_VARIABLE, cooked_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$COOKED` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.path = Self::expand_variables(&config.catalog.path);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults if not found
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`
    ///
    /// - If the file exists: loads it, merges missing fields from defaults and saves the result
    /// - If it doesn't exist (first run): writes the defaults there
    /// - If it can't be read or parsed: warns and returns the defaults
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Err(e) = defaults.save_to(config_file) {
                warn!("Could not write default config to {}: {e}", config_file.display());
            }
            return defaults;
        }

        let parsed = fs::read_to_string(config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    if let Err(e) = config.save_to(config_file) {
                        warn!("Could not update config {}: {e}", config_file.display());
                    }
                }
                config
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `url`, `title`,
    /// `dramatic_delay`, `min_delay_ms`, `jitter_ms`, `default_grade`,
    /// `default_postgrad`. Dashed spellings are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "catalog" => self.catalog.path.clone(),
            "url" => self.share.url.clone(),
            "title" => self.share.title.clone(),
            "dramatic_delay" | "dramatic-delay" => self.presentation.dramatic_delay.to_string(),
            "min_delay_ms" | "min-delay-ms" => self
                .presentation
                .min_delay_ms
                .map_or_else(String::new, |ms| ms.to_string()),
            "jitter_ms" | "jitter-ms" => self
                .presentation
                .jitter_ms
                .map_or_else(String::new, |ms| ms.to_string()),
            "default_grade" | "default-grade" => self.presentation.default_grade.clone(),
            "default_postgrad" | "default-postgrad" => self.presentation.default_postgrad.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Booleans must be `true`/`false`, delays whole milliseconds, and the
    /// default grade and postgraduate level must be recognized labels.
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value.parse::<crate::logger::Level>()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "catalog" => self.catalog.path = value.to_string(),
            "url" => self.share.url = value.to_string(),
            "title" => self.share.title = value.to_string(),
            "dramatic_delay" | "dramatic-delay" => {
                self.presentation.dramatic_delay = parse_bool(key, value)?;
            }
            "min_delay_ms" | "min-delay-ms" => {
                self.presentation.min_delay_ms = Some(parse_millis(key, value)?);
            }
            "jitter_ms" | "jitter-ms" => {
                self.presentation.jitter_ms = Some(parse_millis(key, value)?);
            }
            "default_grade" | "default-grade" => {
                self.presentation.default_grade = value.parse::<Grade>()?.label().to_string();
            }
            "default_postgrad" | "default-postgrad" => {
                self.presentation.default_postgrad =
                    value.parse::<PostGrad>()?.label().to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let presentation = &defaults.presentation;
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.catalog.path.clone_from(&defaults.catalog.path),
            "url" => self.share.url.clone_from(&defaults.share.url),
            "title" => self.share.title.clone_from(&defaults.share.title),
            "dramatic_delay" | "dramatic-delay" => {
                self.presentation.dramatic_delay = presentation.dramatic_delay;
            }
            "min_delay_ms" | "min-delay-ms" => {
                self.presentation.min_delay_ms = presentation.min_delay_ms;
            }
            "jitter_ms" | "jitter-ms" => self.presentation.jitter_ms = presentation.jitter_ms,
            "default_grade" | "default-grade" => self
                .presentation
                .default_grade
                .clone_from(&presentation.default_grade),
            "default_postgrad" | "default-postgrad" => self
                .presentation
                .default_postgrad
                .clone_from(&presentation.default_postgrad),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file; the next load recreates it from defaults
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Catalog source for the configured path
    #[must_use]
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_config_path(&self.catalog.path)
    }

    /// Configured default grade, falling back to 2:1 when the label is not recognized
    #[must_use]
    pub fn default_grade(&self) -> Grade {
        let label = &self.presentation.default_grade;
        if label.is_empty() {
            return Grade::default();
        }
        label.parse().unwrap_or_else(|e| {
            warn!("{e}; using {}", Grade::default());
            Grade::default()
        })
    }

    /// Configured default postgraduate level, falling back to None when not recognized
    #[must_use]
    pub fn default_post_grad(&self) -> PostGrad {
        self.presentation
            .default_postgrad
            .parse()
            .unwrap_or_else(|e| {
                warn!("{e}; using {}", PostGrad::default());
                PostGrad::default()
            })
    }

    /// Length of the dramatic pause, or `None` when disabled.
    ///
    /// `jitter_sample` picks the random part in `0..=jitter_ms`.
    #[must_use]
    pub fn dramatic_delay(&self, jitter_sample: impl FnOnce(u64) -> u64) -> Option<Duration> {
        if !self.presentation.dramatic_delay {
            return None;
        }
        let min = self.presentation.min_delay_ms.unwrap_or(0);
        let jitter = self.presentation.jitter_ms.unwrap_or(0);
        let extra = if jitter == 0 { 0 } else { jitter_sample(jitter).min(jitter) };
        Some(Duration::from_millis(min.saturating_add(extra)))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  path = \"{}\"", self.catalog.path)?;

        writeln!(f, "\n[share]")?;
        writeln!(f, "  url = \"{}\"", self.share.url)?;
        writeln!(f, "  title = \"{}\"", self.share.title)?;

        let p = &self.presentation;
        writeln!(f, "\n[presentation]")?;
        writeln!(f, "  dramatic_delay = {}", p.dramatic_delay)?;
        writeln!(f, "  min_delay_ms = {}", p.min_delay_ms.unwrap_or(0))?;
        writeln!(f, "  jitter_ms = {}", p.jitter_ms.unwrap_or(0))?;
        writeln!(f, "  default_grade = \"{}\"", p.default_grade)?;
        writeln!(f, "  default_postgrad = \"{}\"", p.default_postgrad)?;

        Ok(())
    }
}
