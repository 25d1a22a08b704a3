//! Grade, postgraduate level and the current form selection

use crate::core::catalog::Catalog;
use crate::core::models::DegreeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Undergraduate degree classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// First Class
    First,
    /// Upper Second (2:1)
    #[default]
    #[serde(rename = "2:1")]
    UpperSecond,
    /// Lower Second (2:2)
    #[serde(rename = "2:2")]
    LowerSecond,
    /// Third Class
    Third,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Self; 4] = [
        Self::First,
        Self::UpperSecond,
        Self::LowerSecond,
        Self::Third,
    ];

    /// Short label used as the lookup value ("First", "2:1", "2:2", "Third")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::UpperSecond => "2:1",
            Self::LowerSecond => "2:2",
            Self::Third => "Third",
        }
    }

    /// Long label shown in selection menus
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::First => "First Class",
            Self::UpperSecond => "2:1 (Upper Second)",
            Self::LowerSecond => "2:2 (Lower Second)",
            Self::Third => "Third Class",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1st" | "first class" => Ok(Self::First),
            "2:1" | "2-1" | "21" | "upper-second" | "upper second" => Ok(Self::UpperSecond),
            "2:2" | "2-2" | "22" | "lower-second" | "lower second" => Ok(Self::LowerSecond),
            "third" | "3rd" | "third class" => Ok(Self::Third),
            _ => Err(format!("Unknown grade: '{s}' (expected First, 2:1, 2:2 or Third)")),
        }
    }
}

/// Postgraduate qualification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostGrad {
    /// No postgraduate study
    #[default]
    None,
    /// Masters degree
    Masters,
    /// Doctorate
    PhD,
}

impl PostGrad {
    /// All postgraduate levels in menu order
    pub const ALL: [Self; 3] = [Self::None, Self::Masters, Self::PhD];

    /// Label used as the lookup and display value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Masters => "Masters",
            Self::PhD => "PhD",
        }
    }
}

impl fmt::Display for PostGrad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostGrad {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "masters" | "master" | "msc" | "ma" => Ok(Self::Masters),
            "phd" | "doctorate" => Ok(Self::PhD),
            _ => Err(format!(
                "Unknown postgraduate level: '{s}' (expected None, Masters or PhD)"
            )),
        }
    }
}

/// The current form state: chosen subject (if any), grade and postgraduate level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen subject key; `None` until the user picks a degree
    pub subject: Option<String>,
    /// Chosen grade
    pub grade: Grade,
    /// Chosen postgraduate level
    pub post_grad: PostGrad,
}

impl Selection {
    /// Create a selection with a subject already chosen
    #[must_use]
    pub fn new(subject: impl Into<String>, grade: Grade, post_grad: PostGrad) -> Self {
        Self {
            subject: Some(subject.into()),
            grade,
            post_grad,
        }
    }

    /// Look up the chosen degree in `catalog`.
    ///
    /// Returns `None` when no subject is chosen or the subject is not in the catalog.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a DegreeRecord> {
        self.subject.as_deref().and_then(|s| catalog.find(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.subject, None);
        assert_eq!(selection.grade, Grade::UpperSecond);
        assert_eq!(selection.post_grad, PostGrad::None);
    }

    #[test]
    fn test_grade_labels_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(grade.label().parse::<Grade>(), Ok(grade));
        }
        assert_eq!("upper-second".parse::<Grade>(), Ok(Grade::UpperSecond));
        assert_eq!("2-2".parse::<Grade>(), Ok(Grade::LowerSecond));
        assert!("Fourth".parse::<Grade>().is_err());
    }

    #[test]
    fn test_post_grad_parsing() {
        assert_eq!("PHD".parse::<PostGrad>(), Ok(PostGrad::PhD));
        assert_eq!("msc".parse::<PostGrad>(), Ok(PostGrad::Masters));
        assert_eq!("none".parse::<PostGrad>(), Ok(PostGrad::None));
        assert!("Postdoc".parse::<PostGrad>().is_err());
    }

    #[test]
    fn test_grade_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Grade::UpperSecond).unwrap(), "\"2:1\"");
        assert_eq!(serde_json::to_string(&Grade::First).unwrap(), "\"First\"");
        assert_eq!(serde_json::to_string(&PostGrad::PhD).unwrap(), "\"PhD\"");
    }

    #[test]
    fn test_resolve_unknown_subject() {
        let catalog = Catalog::new(vec![DegreeRecord::new("Law", 0.72, 0.83, 29.0, 0.68)]);

        let known = Selection::new("Law", Grade::First, PostGrad::None);
        let unknown = Selection::new("Alchemy", Grade::First, PostGrad::None);

        assert!(known.resolve(&catalog).is_some());
        assert!(unknown.resolve(&catalog).is_none());
        assert!(Selection::default().resolve(&catalog).is_none());
    }
}
