//! Terminal text renderer

use crate::core::report::{ReportError, ResultRenderer, ScoreResult, NO_DEGREE_PLACEHOLDER};
use std::fmt::Write;

/// Cells in the progress bar
const BAR_WIDTH: usize = 20;

const RESET: &str = "\x1b[0m";

/// Renders a result card for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    /// Create a renderer without ANSI colour
    #[must_use]
    pub const fn new() -> Self {
        Self { color: false }
    }

    /// Enable or disable ANSI colour for the tier name and bar
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, result: &ScoreResult, text: &str) -> String {
        if self.color {
            format!("{}{text}{RESET}", result.tier.accent().ansi())
        } else {
            text.to_string()
        }
    }

    /// Progress bar for a percentage, e.g. `[#####---------------]`
    #[must_use]
    pub fn bar(percentage: u8) -> String {
        let filled = (usize::from(percentage.min(100)) * BAR_WIDTH + 50) / 100;
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        )
    }
}

impl ResultRenderer for TextRenderer {
    fn render(&self, result: &ScoreResult) -> Result<String, ReportError> {
        let Some(subject) = result.subject.as_deref() else {
            return Ok(format!("{NO_DEGREE_PLACEHOLDER}\n"));
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{subject} | {} | Post-Grad: {}",
            result.grade.display_name(),
            result.post_grad
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "COOKED SCORE");
        let _ = writeln!(out, "  {}%", result.percentage);
        let _ = writeln!(out, "  {}", self.paint(result, result.tier.name()));
        let _ = writeln!(
            out,
            "  {}",
            self.paint(result, &Self::bar(result.percentage))
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "  \"{}\"", result.tier.description());

        if let Some(pivot) = result.pivot.as_deref() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  RECOMMENDED PIVOT");
            let _ = writeln!(out, "  {pivot}");
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DegreeRecord, Grade, PostGrad};

    #[test]
    fn test_bar_widths() {
        assert_eq!(TextRenderer::bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(TextRenderer::bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(TextRenderer::bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(TextRenderer::bar(7).matches('#').count(), 1);
    }

    #[test]
    fn test_render_card() {
        let degree = DegreeRecord::new("Dentistry", 0.1, 0.98, 38.0, 0.2);
        let result = ScoreResult::compute(Some(&degree), Grade::First, PostGrad::None, "u");
        let out = TextRenderer::new().render(&result).unwrap();

        assert!(out.starts_with("Dentistry | First Class | Post-Grad: None"));
        assert!(out.contains("  1%\n"));
        assert!(out.contains("Raw"));
        assert!(out.contains("\"Still raw. You're safe... for now.\""));
        assert!(!out.contains("RECOMMENDED PIVOT"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_pivot_and_color() {
        let degree = DegreeRecord::new("Fine Art", 0.8, 0.6, 18.0, 0.75).with_pivot("Conservation");
        let result = ScoreResult::compute(Some(&degree), Grade::UpperSecond, PostGrad::None, "u");
        let out = TextRenderer::new().with_color(true).render(&result).unwrap();

        assert!(out.contains("RECOMMENDED PIVOT\n  Conservation"));
        assert!(out.contains("\x1b[31mBurnt\x1b[0m"));
    }

    #[test]
    fn test_render_placeholder() {
        let result = ScoreResult::compute(None, Grade::UpperSecond, PostGrad::None, "u");
        let out = TextRenderer::new().render(&result).unwrap();
        assert_eq!(out, "Select your degree...\n");
    }
}
