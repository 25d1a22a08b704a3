//! Result card formats
//!
//! Provides renderers for terminal text, Markdown, HTML and JSON.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use std::fmt;
use std::str::FromStr;

/// Supported result card formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain terminal text with a progress bar
    #[default]
    Text,
    /// Markdown card
    Markdown,
    /// Self-contained HTML card
    Html,
    /// JSON document
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Substitute `{{name}}` placeholders in a single pass.
///
/// Inserted values are never rescanned, so text from the catalog can contain
/// `{{...}}` safely. Unknown placeholders are left as they are.
pub(crate) fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aliases() {
        assert_eq!("TXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for format in [
            ReportFormat::Text,
            ReportFormat::Markdown,
            ReportFormat::Html,
            ReportFormat::Json,
        ] {
            assert_eq!(format.to_string().parse::<ReportFormat>(), Ok(format));
        }
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "{{a}} and {{b}} {{missing}} {{open",
            &[("a", "{{b}}"), ("b", "two")],
        );
        assert_eq!(filled, "{{b}} and two {{missing}} {{open");
    }
}
