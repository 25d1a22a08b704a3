//! CLI argument definitions for `cooked`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cooked_calculator::config::ConfigOverrides;
use cooked_calculator::logger::Level;
use cooked_calculator::models::{Grade, PostGrad};
use cooked_calculator::report::ReportFormat;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
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

impl From<LogLevelArg> for Level {
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
        write!(f, "{}", Level::from(*self))
    }
}

/// Grade argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum GradeArg {
    /// First Class
    #[value(alias = "1st")]
    First,
    /// Upper Second (2:1)
    #[value(name = "2-1", alias = "2:1", alias = "upper-second")]
    UpperSecond,
    /// Lower Second (2:2)
    #[value(name = "2-2", alias = "2:2", alias = "lower-second")]
    LowerSecond,
    /// Third Class
    #[value(alias = "3rd")]
    Third,
}

impl From<GradeArg> for Grade {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::First => Self::First,
            GradeArg::UpperSecond => Self::UpperSecond,
            GradeArg::LowerSecond => Self::LowerSecond,
            GradeArg::Third => Self::Third,
        }
    }
}

/// Postgraduate level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum PostGradArg {
    /// No postgraduate study
    None,
    /// Masters degree
    #[value(alias = "msc", alias = "ma")]
    Masters,
    /// Doctorate
    #[value(alias = "doctorate")]
    Phd,
}

impl From<PostGradArg> for PostGrad {
    fn from(arg: PostGradArg) -> Self {
        match arg {
            PostGradArg::None => Self::None,
            PostGradArg::Masters => Self::Masters,
            PostGradArg::Phd => Self::PhD,
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
        /// Optional configuration key to display (e.g., `level`, `catalog`, `url`)
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
    /// Score a degree.
    ///
    /// Looks up SUBJECT in the catalog (case-insensitive, unique prefixes allowed)
    /// and prints how cooked it is.
    Score {
        /// Degree subject, e.g. "Computer Science"
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Grade achieved (defaults to config `default_grade`)
        #[arg(short, long, value_enum)]
        grade: Option<GradeArg>,

        /// Postgraduate qualification (defaults to config `default_postgrad`)
        #[arg(short, long, value_enum)]
        postgrad: Option<PostGradArg>,

        /// Output format: text, markdown (md), html or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ReportFormat,

        /// Write the result card to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the share text after the result
        #[arg(long)]
        share: bool,

        /// Copy the share text into this file (implies --share)
        #[arg(long, value_name = "PATH")]
        share_file: Option<PathBuf>,

        /// Show every term of the calculation
        #[arg(long)]
        breakdown: bool,

        /// Skip the dramatic pause for this run
        #[arg(long)]
        no_delay: bool,
    },
    /// List the degree subjects in the catalog.
    List,
    /// Pick a degree, grade and postgraduate level from menus.
    Interactive,
}

#[derive(Parser, Debug)]
#[command(
    name = "cooked",
    about = "The Cooked Calculator: will AI take your job? Probably.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read degrees from this JSON file for this run
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Share URL for this run
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "PATH")]
    pub config_catalog: Option<PathBuf>,

    /// Override config share URL
    #[arg(long = "config-share-url", value_name = "URL")]
    pub config_share_url: Option<String>,

    /// Override config dramatic delay flag (true/false)
    #[arg(long = "config-dramatic-delay", value_parser = BoolishValueParser::new())]
    pub config_dramatic_delay: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_path: self
                .catalog
                .as_ref()
                .or(self.config_catalog.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            share_url: self
                .url
                .clone()
                .or_else(|| self.config_share_url.clone()),
            dramatic_delay: self.config_dramatic_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            catalog: None,
            url: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_catalog: None,
            config_share_url: None,
            config_dramatic_delay: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::List).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog_path.is_none());
        assert!(overrides.share_url.is_none());
        assert!(overrides.dramatic_delay.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare(Command::List);
        cli.catalog = Some(PathBuf::from("/short/degrees.json"));
        cli.config_catalog = Some(PathBuf::from("/long/degrees.json"));
        cli.url = Some("https://short/".to_string());
        cli.config_share_url = Some("https://long/".to_string());

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.catalog_path.as_deref(), Some("/short/degrees.json"));
        assert_eq!(overrides.share_url.as_deref(), Some("https://short/"));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare(Command::List);
        cli.config_catalog = Some(PathBuf::from("/long/degrees.json"));
        cli.config_dramatic_delay = Some(false);
        cli.config_level = Some(LogLevelArg::Info);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.catalog_path.as_deref(), Some("/long/degrees.json"));
        assert_eq!(overrides.dramatic_delay, Some(false));
        assert_eq!(overrides.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "cooked", "score", "Law", "--grade", "2:2", "--postgrad", "msc", "-f", "md",
        ])
        .unwrap();

        match cli.command {
            Command::Score {
                subject,
                grade,
                postgrad,
                format,
                ..
            } => {
                assert_eq!(subject, "Law");
                assert_eq!(grade.map(Grade::from), Some(Grade::LowerSecond));
                assert_eq!(postgrad.map(PostGrad::from), Some(PostGrad::Masters));
                assert_eq!(format, ReportFormat::Markdown);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_grade_arg_names() {
        assert_eq!(
            GradeArg::from_str("2-1", true).map(Grade::from),
            Ok(Grade::UpperSecond)
        );
        assert_eq!(
            GradeArg::from_str("first", true).map(Grade::from),
            Ok(Grade::First)
        );
        assert_eq!(
            PostGradArg::from_str("PhD", true).map(PostGrad::from),
            Ok(PostGrad::PhD)
        );
    }
}
