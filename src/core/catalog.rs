//! Degree catalog loading and lookup
//!
//! The catalog is read once at startup from a JSON array of degree records,
//! either the copy compiled into the binary or a file named in the config.
//! A catalog that cannot be read leaves the calculator with nothing to select
//! rather than aborting.

use crate::core::models::DegreeRecord;
use crate::{debug, error, info, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog shipped with the crate
const EMBEDDED_CATALOG: &str = include_str!("../assets/degrees.json");

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The `degrees.json` compiled into the binary
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Choose a source from a configured path; empty means the embedded catalog
    #[must_use]
    pub fn from_config_path(path: &str) -> Self {
        if path.trim().is_empty() {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The content is not a JSON array of degree records
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable list of degree records, keyed by subject
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    degrees: Vec<DegreeRecord>,
}

impl Catalog {
    /// Build a catalog from records.
    ///
    /// Later records whose subject repeats an earlier one are dropped with a warning.
    #[must_use]
    pub fn new(degrees: Vec<DegreeRecord>) -> Self {
        let mut seen = HashSet::new();
        let degrees = degrees
            .into_iter()
            .filter(|d| {
                let fresh = seen.insert(d.subject.clone());
                if !fresh {
                    warn!("Duplicate catalog subject '{}' ignored", d.subject);
                }
                fresh
            })
            .collect();
        Self { degrees }
    }

    /// An empty catalog; nothing can be selected
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            degrees: Vec::new(),
        }
    }

    /// Parse a catalog from a JSON array
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` if the JSON is malformed or a record is missing fields
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let degrees: Vec<DegreeRecord> = serde_json::from_str(json)?;
        Ok(Self::new(degrees))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read, or
    /// `CatalogError::Parse` if its content is not a valid catalog
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` if the embedded data is malformed
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load from `source`, falling back to an empty catalog on any failure.
    ///
    /// Failures are logged at error level; the caller always gets a usable catalog.
    #[must_use]
    pub fn load_or_empty(source: &CatalogSource) -> Self {
        let result = match source {
            CatalogSource::Embedded => Self::embedded(),
            CatalogSource::File(path) => Self::load(path),
        };

        match result {
            Ok(catalog) => {
                info!("Loaded {} degrees from {source}", catalog.len());
                catalog
            }
            Err(e) => {
                error!("Failed to load degrees: {e}");
                Self::empty()
            }
        }
    }

    /// Exact lookup by subject
    #[must_use]
    pub fn find(&self, subject: &str) -> Option<&DegreeRecord> {
        self.degrees.iter().find(|d| d.subject == subject)
    }

    /// Lenient lookup: exact match, then case-insensitive match, then a
    /// case-insensitive prefix that matches exactly one subject.
    #[must_use]
    pub fn find_fuzzy(&self, query: &str) -> Option<&DegreeRecord> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Some(exact) = self.find(query) {
            return Some(exact);
        }

        let lowered = query.to_lowercase();
        if let Some(found) = self
            .degrees
            .iter()
            .find(|d| d.subject.to_lowercase() == lowered)
        {
            return Some(found);
        }

        let mut prefixed = self
            .degrees
            .iter()
            .filter(|d| d.subject.to_lowercase().starts_with(&lowered));
        match (prefixed.next(), prefixed.next()) {
            (Some(only), None) => Some(only),
            (Some(_), Some(_)) => {
                debug!("Subject query '{query}' is ambiguous");
                None
            }
            _ => None,
        }
    }

    /// Subjects in catalog order
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.degrees.iter().map(|d| d.subject.as_str())
    }

    /// Iterate over all records
    pub fn iter(&self) -> std::slice::Iter<'_, DegreeRecord> {
        self.degrees.iter()
    }

    /// Number of degrees
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Whether the catalog has no degrees
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DegreeRecord;
    type IntoIter = std::slice::Iter<'a, DegreeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            DegreeRecord::new("Computer Science", 0.8, 0.86, 32.0, 0.75),
            DegreeRecord::new("Creative Writing", 0.9, 0.62, 19.0, 0.8),
            DegreeRecord::new("Law", 0.72, 0.83, 29.0, 0.68),
        ])
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("Computer Science").is_some());
    }

    #[test]
    fn test_embedded_subjects_are_unique() {
        let degrees: Vec<DegreeRecord> = serde_json::from_str(EMBEDDED_CATALOG).unwrap();
        let unique: HashSet<_> = degrees.iter().map(|d| d.subject.as_str()).collect();
        assert_eq!(unique.len(), degrees.len());
    }

    #[test]
    fn test_duplicate_subject_keeps_first() {
        let catalog = Catalog::new(vec![
            DegreeRecord::new("Law", 0.72, 0.83, 29.0, 0.68),
            DegreeRecord::new("Law", 0.1, 0.1, 10.0, 0.1),
        ]);

        assert_eq!(catalog.len(), 1);
        let law = catalog.find("Law").unwrap();
        assert!((law.ai_exposure - 0.72).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = sample();
        assert!(catalog.find("law").is_none());
        assert!(catalog.find("Law").is_some());
    }

    #[test]
    fn test_find_fuzzy() {
        let catalog = sample();

        assert_eq!(catalog.find_fuzzy("law").unwrap().subject, "Law");
        assert_eq!(catalog.find_fuzzy("comp").unwrap().subject, "Computer Science");
        // "c" matches two subjects
        assert!(catalog.find_fuzzy("c").is_none());
        assert!(catalog.find_fuzzy("   ").is_none());
        assert!(catalog.find_fuzzy("Alchemy").is_none());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{ not an array").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let path = std::env::temp_dir().join("cooked-no-such-dir").join("degrees.json");
        let err = Catalog::load(&path).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_source_from_config_path() {
        assert_eq!(CatalogSource::from_config_path(""), CatalogSource::Embedded);
        assert_eq!(
            CatalogSource::from_config_path("data/degrees.json"),
            CatalogSource::File(PathBuf::from("data/degrees.json"))
        );
    }

    #[test]
    fn test_subjects_in_order() {
        let catalog = sample();
        let subjects: Vec<&str> = catalog.subjects().collect();
        assert_eq!(subjects, vec!["Computer Science", "Creative Writing", "Law"]);
    }
}
