//! Degree record model

use serde::{Deserialize, Serialize};

/// One subject entry from the degree catalog.
///
/// Field names follow the camelCase shape of `degrees.json`. Bounded fields
/// (`ai_exposure`, `employment_rate`, `saturation`) are expected in `[0, 1]`;
/// the producer of the catalog is responsible for that, nothing here clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeRecord {
    /// Subject name, unique within a catalog (e.g., "Computer Science")
    pub subject: String,

    /// Estimated automation exposure
    pub ai_exposure: f64,

    /// Fraction of graduates employed after graduation
    pub employment_rate: f64,

    /// Typical starting salary in thousands
    pub starting_salary: f64,

    /// Market saturation for the field
    pub saturation: f64,

    /// Suggested alternative career; empty or absent when there is none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_pivot: Option<String>,

    /// Legacy risk figure from older catalogs. Accepted but never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<f64>,
}

impl DegreeRecord {
    /// Create a new degree record without a pivot or legacy risk
    ///
    /// # Arguments
    /// * `subject` - Subject name
    /// * `ai_exposure` - Automation exposure in `[0, 1]`
    /// * `employment_rate` - Employment rate in `[0, 1]`
    /// * `starting_salary` - Starting salary in thousands
    /// * `saturation` - Market saturation in `[0, 1]`
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        ai_exposure: f64,
        employment_rate: f64,
        starting_salary: f64,
        saturation: f64,
    ) -> Self {
        Self {
            subject: subject.into(),
            ai_exposure,
            employment_rate,
            starting_salary,
            saturation,
            career_pivot: None,
            risk: None,
        }
    }

    /// Attach a suggested career pivot
    #[must_use]
    pub fn with_pivot(mut self, pivot: impl Into<String>) -> Self {
        self.career_pivot = Some(pivot.into());
        self
    }

    /// Attach a legacy risk value
    #[must_use]
    pub const fn with_legacy_risk(mut self, risk: f64) -> Self {
        self.risk = Some(risk);
        self
    }

    /// The career pivot, if one is set and non-blank
    #[must_use]
    pub fn pivot(&self) -> Option<&str> {
        self.career_pivot
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_from_catalog_json() {
        let json = r#"{
            "subject": "Law",
            "aiExposure": 0.72,
            "employmentRate": 0.83,
            "startingSalary": 29,
            "saturation": 0.68,
            "careerPivot": "Courtroom advocacy"
        }"#;

        let degree: DegreeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(degree.subject, "Law");
        assert!((degree.ai_exposure - 0.72).abs() < f64::EPSILON);
        assert!((degree.starting_salary - 29.0).abs() < f64::EPSILON);
        assert_eq!(degree.pivot(), Some("Courtroom advocacy"));
        assert_eq!(degree.risk, None);
    }

    #[test]
    fn test_legacy_risk_is_accepted() {
        let json = r#"{
            "subject": "Translation",
            "aiExposure": 0.97,
            "employmentRate": 0.58,
            "startingSalary": 19,
            "saturation": 0.6,
            "risk": 0.95
        }"#;

        let degree: DegreeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(degree.risk, Some(0.95));
        assert_eq!(degree.pivot(), None);
    }

    #[test]
    fn test_blank_pivot_is_none() {
        let degree = DegreeRecord::new("Medicine", 0.2, 0.99, 34.0, 0.15).with_pivot("  ");
        assert_eq!(degree.pivot(), None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{ "subject": "History", "aiExposure": 0.55 }"#;
        assert!(serde_json::from_str::<DegreeRecord>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let degree = DegreeRecord::new("History", 0.55, 0.72, 22.0, 0.6);
        let json = serde_json::to_string(&degree).unwrap();

        assert!(json.contains("\"aiExposure\""));
        assert!(json.contains("\"employmentRate\""));
        assert!(!json.contains("careerPivot"));
        assert!(!json.contains("risk"));
    }
}
