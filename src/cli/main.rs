//! Command-line interface entry point for `cooked`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::io::IsTerminal;
use cooked_calculator::catalog::Catalog;
use cooked_calculator::config::Config;
use cooked_calculator::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use cooked_calculator::{debug, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!("Running with level {level} (verbose={verbose})");

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::List => {
            let catalog = Catalog::load_or_empty(&config.catalog_source());
            commands::list::run(&catalog);
        }
        Command::Score {
            subject,
            grade,
            postgrad,
            format,
            output,
            share,
            share_file,
            breakdown,
            no_delay,
        } => {
            let catalog = Catalog::load_or_empty(&config.catalog_source());
            let request = commands::score::ScoreRequest {
                subject,
                grade: grade.map_or_else(|| config.default_grade(), Into::into),
                post_grad: postgrad.map_or_else(|| config.default_post_grad(), Into::into),
                format,
                output,
                share: share || share_file.is_some(),
                share_file,
                breakdown: breakdown || verbose,
                dramatic: !no_delay,
                color: std::io::stdout().is_terminal(),
            };
            if !commands::score::run(&catalog, &request, &config) {
                std::process::exit(1);
            }
        }
        Command::Interactive => {
            let catalog = Catalog::load_or_empty(&config.catalog_source());
            commands::interactive::run(&catalog, &config);
        }
    }
}
