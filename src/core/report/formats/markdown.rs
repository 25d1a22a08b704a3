//! Markdown result card
//!
//! Renders well in GitHub, GitLab and most chat tools that accept Markdown.

use crate::core::report::formats::{fill_template, TextRenderer};
use crate::core::report::{ReportError, ResultRenderer, ScoreResult, NO_DEGREE_PLACEHOLDER};

/// Embedded Markdown card template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/card.md");

/// Markdown result card renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn pivot_section(result: &ScoreResult) -> String {
        result
            .pivot
            .as_deref()
            .map_or_else(String::new, |pivot| {
                format!("\n### Recommended Pivot\n\n{pivot}\n")
            })
    }

    /// Render the card using template substitution
    fn render_template(result: &ScoreResult, subject: &str) -> String {
        let percentage = result.percentage.to_string();
        let bar = TextRenderer::bar(result.percentage);
        let pivot_section = Self::pivot_section(result);

        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("subject", subject),
                ("grade", result.grade.display_name()),
                ("post_grad", result.post_grad.label()),
                ("percentage", percentage.as_str()),
                ("tier", result.tier.name()),
                ("bar", bar.as_str()),
                ("tier_text", result.tier.description()),
                ("pivot_section", pivot_section.as_str()),
                ("share_text", result.share.text.as_str()),
                ("share_url", result.share.url.as_str()),
            ],
        )
    }
}

impl ResultRenderer for MarkdownRenderer {
    fn render(&self, result: &ScoreResult) -> Result<String, ReportError> {
        Ok(result.subject.as_deref().map_or_else(
            || format!("_{NO_DEGREE_PLACEHOLDER}_\n"),
            |subject| Self::render_template(result, subject),
        ))
    }
}
