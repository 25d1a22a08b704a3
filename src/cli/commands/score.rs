//! Score command handler

use cooked_calculator::catalog::Catalog;
use cooked_calculator::config::Config;
use cooked_calculator::models::{Grade, PostGrad};
use cooked_calculator::report::{renderer_for, ReportFormat, ScoreResult};
use cooked_calculator::score::ScoreBreakdown;
use cooked_calculator::share::{
    share_with_fallback, ClipboardFile, PrintShare, ShareError, ShareMessage, ShareOutcome,
    ShareTarget,
};
use cooked_calculator::{debug, error, info, warn};
use rand::Rng;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

/// Everything the score command needs from the command line
#[derive(Debug, Clone)]
pub struct ScoreRequest {
    /// Subject as typed by the user
    pub subject: String,
    pub grade: Grade,
    pub post_grad: PostGrad,
    pub format: ReportFormat,
    /// Write the card here instead of stdout
    pub output: Option<PathBuf>,
    /// Emit the share text after the card
    pub share: bool,
    /// Clipboard stand-in file for the share text
    pub share_file: Option<PathBuf>,
    /// Print the intermediate terms
    pub breakdown: bool,
    /// Honour the configured dramatic pause
    pub dramatic: bool,
    /// ANSI colour for the text card
    pub color: bool,
}

/// Share target that prints the share block to a borrowed writer
struct WriterShare<'a> {
    out: RefCell<&'a mut dyn Write>,
}

impl ShareTarget for WriterShare<'_> {
    fn share(&self, message: &ShareMessage) -> Result<ShareOutcome, ShareError> {
        let mut out = self.out.borrow_mut();
        PrintShare::write_to(&mut **out, message)?;
        Ok(ShareOutcome::Shared)
    }
}

/// Run the score command
///
/// Returns `false` when the subject is unknown or the card could not be written.
pub fn run(catalog: &Catalog, request: &ScoreRequest, config: &Config) -> bool {
    let degree = catalog.find_fuzzy(&request.subject);
    if degree.is_none() {
        if catalog.is_empty() {
            error!("No degrees available, cannot score '{}'", request.subject);
        } else {
            warn!(
                "Unknown subject '{}'. Run `cooked list` to see available degrees.",
                request.subject
            );
        }
    }

    let result = ScoreResult::compute(degree, request.grade, request.post_grad, &config.share.url);
    debug!(
        "Scored {:?} ({}, {}): {:.4}",
        result.subject,
        result.grade,
        result.post_grad,
        result.score()
    );

    if result.has_degree() && request.dramatic {
        dramatic_pause(config);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let presented = present(
        &result,
        request,
        config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    presented && degree.is_some()
}

/// Render, and optionally break down and share, a computed result
///
/// The card goes to `out`. When a non-text card is printed to `out`, the
/// breakdown and share block go to `diag` so the card stays machine-readable.
/// A JSON card already carries the breakdown, so none is printed for it.
///
/// Returns `false` if writing the card failed.
pub fn present(
    result: &ScoreResult,
    request: &ScoreRequest,
    config: &Config,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> bool {
    let renderer = renderer_for(request.format, request.color);

    if let Some(path) = &request.output {
        if let Err(e) = renderer.write_to(result, path) {
            let _ = writeln!(diag, "✗ {e}");
            return false;
        }
        let _ = writeln!(out, "✓ Result written to: {}", path.display());
    } else {
        let written = renderer
            .render(result)
            .map_err(|e| e.to_string())
            .and_then(|card| out.write_all(card.as_bytes()).map_err(|e| e.to_string()));
        if let Err(e) = written {
            let _ = writeln!(diag, "✗ {e}");
            return false;
        }
    }

    if !result.has_degree() {
        return true;
    }

    let extras: &mut dyn Write =
        if request.output.is_none() && request.format != ReportFormat::Text {
            diag
        } else {
            out
        };

    if request.breakdown && request.format != ReportFormat::Json {
        let _ = write_breakdown(extras, &result.breakdown);
    }

    if request.share {
        share(result, request.share_file.as_ref(), config, extras);
    }

    true
}

/// Sleep for the configured pause, announcing it on stderr
pub fn dramatic_pause(config: &Config) {
    let Some(delay) = config.dramatic_delay(|max| rand::thread_rng().gen_range(0..=max)) else {
        return;
    };

    eprintln!("Running simulation...");
    debug!("Dramatic pause of {}ms", delay.as_millis());
    thread::sleep(delay);
}

fn share(
    result: &ScoreResult,
    share_file: Option<&PathBuf>,
    config: &Config,
    out: &mut dyn Write,
) {
    let mut message = result.share.clone();
    if !config.share.title.is_empty() {
        message = message.with_title(config.share.title.clone());
    }

    let printer = WriterShare {
        out: RefCell::new(out),
    };
    let outcome = match share_file {
        Some(path) => share_with_fallback(&ClipboardFile::new(path), &printer, &message),
        None => printer.share(&message),
    };

    match outcome {
        Ok(ShareOutcome::Copied(path)) => {
            info!("Share text copied to {}", path.display());
            let mut out = printer.out.borrow_mut();
            let _ = writeln!(out, "✓ Result copied to: {}", path.display());
        }
        Ok(ShareOutcome::Shared) => {}
        Err(e) => eprintln!("✗ {e}"),
    }
}

/// Write every term of the calculation
fn write_breakdown(out: &mut dyn Write, breakdown: &ScoreBreakdown) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "BREAKDOWN")?;
    writeln!(out, "  AI exposure      {:+.4}", breakdown.exposure_term)?;
    writeln!(out, "  Unemployment     {:+.4}", breakdown.employment_term)?;
    writeln!(out, "  Saturation       {:+.4}", breakdown.saturation_term)?;
    writeln!(out, "  Post-grad        {:+.4}", breakdown.postgrad_adjustment)?;
    writeln!(out, "  Salary buffer    {:+.4}", breakdown.salary_adjustment)?;
    writeln!(out, "  Grade multiplier x{:.2}", breakdown.grade_multiplier)?;
    writeln!(out, "  Unclamped        {:.4}", breakdown.unclamped())?;
    writeln!(out, "  Score            {:.4}", breakdown.score)
}
