//! HTML result card
//!
//! The generated page is self-contained with embedded CSS.

use crate::core::report::formats::fill_template;
use crate::core::report::{ReportError, ResultRenderer, ScoreResult, NO_DEGREE_PLACEHOLDER};

/// Embedded HTML card template
const HTML_TEMPLATE: &str = include_str!("../templates/card.html");

/// HTML result card renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text for use in element content and quoted attributes
    #[must_use]
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn pivot_section(result: &ScoreResult) -> String {
        result.pivot.as_deref().map_or_else(String::new, |pivot| {
            format!(
                "<div class=\"pivot\"><span>Recommended Pivot</span>{}</div>",
                Self::escape(pivot)
            )
        })
    }

    /// Render the card using template substitution
    fn render_template(result: &ScoreResult, subject: &str) -> String {
        let title = Self::escape(&result.share.title);
        let subject = Self::escape(subject);
        let grade = Self::escape(result.grade.display_name());
        let percentage = result.percentage.to_string();
        let tier_text = Self::escape(result.tier.description());
        let pivot_section = Self::pivot_section(result);
        let share_text = Self::escape(&result.share.text);
        let share_url = Self::escape(&result.share.url);

        fill_template(
            HTML_TEMPLATE,
            &[
                ("title", title.as_str()),
                ("subject", subject.as_str()),
                ("grade", grade.as_str()),
                ("post_grad", result.post_grad.label()),
                ("percentage", percentage.as_str()),
                ("tier", result.tier.name()),
                ("accent", result.tier.accent().css()),
                ("tier_text", tier_text.as_str()),
                ("pivot_section", pivot_section.as_str()),
                ("share_text", share_text.as_str()),
                ("share_url", share_url.as_str()),
            ],
        )
    }
}

impl ResultRenderer for HtmlRenderer {
    fn render(&self, result: &ScoreResult) -> Result<String, ReportError> {
        Ok(result.subject.as_deref().map_or_else(
            || format!("<p>{NO_DEGREE_PLACEHOLDER}</p>\n"),
            |subject| Self::render_template(result, subject),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DegreeRecord, Grade, PostGrad};
    use crate::core::tier::Tier;

    #[test]
    fn test_escape() {
        assert_eq!(
            HtmlRenderer::escape("<b>\"R&D\"</b> it's"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_render_html_card() {
        let degree = DegreeRecord::new("Marketing", 0.88, 0.78, 23.0, 0.8)
            .with_pivot("Brand <partnerships> & events");
        let result = ScoreResult::compute(Some(&degree), Grade::First, PostGrad::PhD, "https://c/");
        let html = HtmlRenderer::new().render(&result).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<div class=\"score\">{}%</div>", result.percentage)));
        assert!(html.contains(result.tier.accent().css()));
        assert!(html.contains("Brand &lt;partnerships&gt; &amp; events"));
        assert!(html.contains("href=\"https://c/\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_pivot_is_not_expanded() {
        let degree =
            DegreeRecord::new("Law", 0.72, 0.83, 29.0, 0.68).with_pivot("Teach {{subject}} online");
        let result = ScoreResult::compute(Some(&degree), Grade::UpperSecond, PostGrad::None, "");
        let html = HtmlRenderer::new().render(&result).unwrap();

        assert!(html.contains("Teach {{subject}} online"));
    }

    #[test]
    fn test_accent_follows_tier() {
        let degree = DegreeRecord::new("Nursing", 0.12, 0.96, 28.0, 0.25);
        let result = ScoreResult::compute(Some(&degree), Grade::UpperSecond, PostGrad::None, "");
        assert_eq!(result.tier, Tier::Raw);

        let html = HtmlRenderer::new().render(&result).unwrap();
        assert!(html.contains("color: #22c55e"));
    }
}
