//! Result cards
//!
//! A [`ScoreResult`] holds everything the presentation layer shows after a
//! selection: the score, its tier, the pivot suggestion and the share text.
//! Renderers in [`formats`] turn it into text, Markdown, HTML or JSON.

pub mod formats;

use crate::core::models::{DegreeRecord, Grade, PostGrad};
use crate::core::score::{self, ScoreBreakdown};
use crate::core::share::ShareMessage;
use crate::core::tier::{self, Tier};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub use formats::{HtmlRenderer, JsonRenderer, MarkdownRenderer, ReportFormat, TextRenderer};

/// Prompt shown in place of a card when no degree is selected
pub const NO_DEGREE_PLACEHOLDER: &str = "Select your degree...";

/// A computed result ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Chosen subject, `None` when nothing is selected
    pub subject: Option<String>,
    /// Chosen grade
    pub grade: Grade,
    /// Chosen postgraduate level
    pub post_grad: PostGrad,
    /// Every term of the evaluation
    pub breakdown: ScoreBreakdown,
    /// Score as a whole percentage
    pub percentage: u8,
    /// Tier for `percentage`
    pub tier: Tier,
    /// Suggested career pivot, if the degree has one
    pub pivot: Option<String>,
    /// Share message for this result
    pub share: ShareMessage,
}

impl ScoreResult {
    /// Evaluate and classify a selection
    ///
    /// # Arguments
    /// * `degree` - Selected degree, or `None`
    /// * `grade` - Selected grade
    /// * `post_grad` - Selected postgraduate level
    /// * `share_url` - Canonical URL placed in the share message
    #[must_use]
    pub fn compute(
        degree: Option<&DegreeRecord>,
        grade: Grade,
        post_grad: PostGrad,
        share_url: &str,
    ) -> Self {
        let breakdown = score::breakdown(degree, grade, post_grad);
        let percentage = score::to_percentage(breakdown.score);
        let tier = tier::classify(percentage);

        Self {
            subject: degree.map(|d| d.subject.clone()),
            grade,
            post_grad,
            breakdown,
            percentage,
            tier,
            pivot: degree.and_then(DegreeRecord::pivot).map(str::to_string),
            share: ShareMessage::compose(percentage, tier, share_url),
        }
    }

    /// Raw score in `[0, 1]`
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.breakdown.score
    }

    /// Whether a degree was selected
    #[must_use]
    pub const fn has_degree(&self) -> bool {
        self.subject.is_some()
    }
}

/// Errors raised while rendering or writing a result card
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the card failed
    #[error("Failed to write result: {0}")]
    Io(#[from] io::Error),
    /// JSON serialization failed
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for result card renderers
pub trait ResultRenderer {
    /// Render the card as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, result: &ScoreResult) -> Result<String, ReportError>;

    /// Render the card and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn write_to(&self, result: &ScoreResult, output_path: &Path) -> Result<(), ReportError> {
        let content = self.render(result)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Renderer for a format
#[must_use]
pub fn renderer_for(format: ReportFormat, color: bool) -> Box<dyn ResultRenderer> {
    match format {
        ReportFormat::Text => Box::new(TextRenderer::new().with_color(color)),
        ReportFormat::Markdown => Box::new(MarkdownRenderer::new()),
        ReportFormat::Html => Box::new(HtmlRenderer::new()),
        ReportFormat::Json => Box::new(JsonRenderer::new()),
    }
}
