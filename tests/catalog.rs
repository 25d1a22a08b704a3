//! Integration tests for catalog loading

use cooked_calculator::catalog::{Catalog, CatalogError, CatalogSource};
use cooked_calculator::models::{Grade, PostGrad, Selection};
use cooked_calculator::report::{renderer_for, ReportFormat, ScoreResult};
use std::fs;
use tempfile::TempDir;

#[test]
fn embedded_catalog_loads() {
    let catalog = Catalog::embedded().expect("embedded catalog should parse");
    assert!(catalog.len() >= 20);
    assert!(catalog.find("Computer Science").is_some());
}

#[test]
fn catalog_file_with_legacy_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("degrees.json");
    fs::write(
        &path,
        r#"[
            {"subject": "History", "aiExposure": 0.6, "employmentRate": 0.8,
             "startingSalary": 23, "saturation": 0.7, "careerPivot": "Archivist", "risk": 0.4},
            {"subject": "Nursing", "aiExposure": 0.15, "employmentRate": 0.97,
             "startingSalary": 28, "saturation": 0.3}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::load_or_empty(&CatalogSource::File(path));

    assert_eq!(catalog.subjects().collect::<Vec<_>>(), ["History", "Nursing"]);
    let history = catalog.find("History").unwrap();
    assert_eq!(history.risk, Some(0.4));
    assert_eq!(history.pivot(), Some("Archivist"));
    assert_eq!(catalog.find("Nursing").unwrap().pivot(), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("degrees.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Catalog::load(&path).unwrap_err(),
        CatalogError::Parse(_)
    ));
}

#[test]
fn load_failure_leaves_nothing_selected() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load_or_empty(&CatalogSource::File(dir.path().join("gone.json")));
    assert!(catalog.is_empty());

    let selection = Selection::new("Law", Grade::Third, PostGrad::PhD);
    let degree = selection.resolve(&catalog);
    assert!(degree.is_none());

    let result = ScoreResult::compute(degree, selection.grade, selection.post_grad, "");
    assert_eq!(result.score(), 0.0);
    assert_eq!(result.percentage, 0);

    let card = renderer_for(ReportFormat::Text, false).render(&result).unwrap();
    assert_eq!(card, "Select your degree...\n");
}
