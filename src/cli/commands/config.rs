//! Config command handler
//!
//! `set` and `unset` report the value that was actually stored (grade and
//! postgrad labels are normalized) and what the change does for later runs.

use super::interactive::confirm;
use crate::args::ConfigSubcommand;
use cooked_calculator::catalog::CatalogSource;
use cooked_calculator::config::Config;
use cooked_calculator::info;
use std::io::{self, Write};
use std::process;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let changed = match subcommand {
        None => show(config, None, &mut out),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref(), &mut out),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value, &mut out),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key, &mut out),
        Some(ConfigSubcommand::Reset) => {
            reset(&mut out);
            return;
        }
    };

    match changed {
        Ok(false) => {}
        Ok(true) => {
            if let Err(e) = config.save() {
                eprintln!("✗ Failed to save config: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            process::exit(1);
        }
    }
}

/// Print one value, or the whole config when `key` is `None`
fn show(config: &Config, key: Option<&str>, out: &mut dyn Write) -> Result<bool, String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            let _ = writeln!(out, "{value}");
        }
        None => {
            let _ = write!(out, "\n=== Configuration ===\n\n{config}");
        }
    }
    Ok(false)
}

/// Set `key` and report the stored value; returns `Ok(true)` when the config changed
fn set(config: &mut Config, key: &str, value: &str, out: &mut dyn Write) -> Result<bool, String> {
    config.set(key, value)?;
    info!("Config updated: {key}");
    report_change(config, key, "Set", out);
    Ok(true)
}

/// Restore `key` from the defaults
fn unset(
    config: &mut Config,
    defaults: &Config,
    key: &str,
    out: &mut dyn Write,
) -> Result<bool, String> {
    config.unset(key, defaults)?;
    info!("Config reset: {key}");
    report_change(config, key, "Reset", out);
    Ok(true)
}

fn report_change(config: &Config, key: &str, verb: &str, out: &mut dyn Write) {
    let stored = config.get(key).unwrap_or_default();
    let _ = writeln!(out, "✓ {verb} {key} = {stored}");
    if let Some(effect) = effect_of(config, key) {
        let _ = writeln!(out, "  {effect}");
    }
}

/// What a changed key means for the next `cooked` command
fn effect_of(config: &Config, key: &str) -> Option<String> {
    let effect = match key.replace('-', "_").as_str() {
        "level" | "file" | "verbose" => {
            "Logging changes apply from the next command.".to_string()
        }
        "catalog" => match config.catalog_source() {
            CatalogSource::Embedded => {
                "The next command uses the built-in degree list.".to_string()
            }
            CatalogSource::File(path) if !path.exists() => format!(
                "{} does not exist yet; the next command will have no degrees to pick.",
                path.display()
            ),
            CatalogSource::File(path) => {
                format!("The next command reads degrees from {}.", path.display())
            }
        },
        "url" | "title" => "Used in the share text of the next result.".to_string(),
        "dramatic_delay" | "min_delay_ms" | "jitter_ms" => {
            let p = &config.presentation;
            if p.dramatic_delay {
                let min = p.min_delay_ms.unwrap_or(0);
                let max = min.saturating_add(p.jitter_ms.unwrap_or(0));
                format!("Results will pause for {min}-{max}ms.")
            } else {
                "Results will show without a pause.".to_string()
            }
        }
        "default_grade" => format!(
            "`cooked score` without --grade now assumes {}.",
            config.default_grade().display_name()
        ),
        "default_postgrad" => format!(
            "`cooked score` without --postgrad now assumes {}.",
            config.default_post_grad()
        ),
        _ => return None,
    };
    Some(effect)
}

/// Delete the config file after confirmation
fn reset(out: &mut dyn Write) {
    if !Config::get_config_file_path().exists() {
        let _ = writeln!(out, "✓ Config is already at defaults");
        return;
    }

    let stdin = io::stdin();
    let confirmed = confirm(
        "Are you sure you want to reset config to defaults?",
        &mut stdin.lock(),
        out,
    )
    .unwrap_or(false);

    if !confirmed {
        let _ = writeln!(out, "✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        process::exit(1);
    }
    let _ = writeln!(out, "✓ Config reset to defaults");
}
