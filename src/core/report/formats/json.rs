//! JSON result renderer

use crate::core::report::{ReportError, ResultRenderer, ScoreResult};
use serde_json::json;

/// Renders a result as a pretty-printed JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ResultRenderer for JsonRenderer {
    fn render(&self, result: &ScoreResult) -> Result<String, ReportError> {
        let doc = json!({
            "subject": result.subject,
            "grade": result.grade,
            "postGrad": result.post_grad,
            "score": result.score(),
            "percentage": result.percentage,
            "tier": result.tier,
            "tierText": result.tier.description(),
            "careerPivot": result.pivot,
            "breakdown": result.breakdown,
            "share": result.share,
        });
        let mut rendered = serde_json::to_string_pretty(&doc)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
