use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use coursedag::config::{CatalogFile, GeneratorSection, load_and_validate, validate_catalog};
use coursedag::errors::CatalogError;

type TestResult = Result<(), Box<dyn Error>>;

fn catalog(courses: &[&str], prereqs: &[(&str, &[&str])]) -> CatalogFile {
    let mut prerequisites = BTreeMap::new();
    for (course, deps) in prereqs {
        prerequisites.insert(
            course.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
        );
    }

    let mut interests = BTreeMap::new();
    interests.insert("General".to_string(), Vec::new());

    CatalogFile {
        courses: courses.iter().map(|c| c.to_string()).collect(),
        prerequisites,
        interests,
        generator: GeneratorSection {
            min_completed: 1,
            max_completed: courses.len().max(1),
            terms: 8,
        },
    }
}

#[test]
fn valid_catalog_passes_validation() -> TestResult {
    let cfg = catalog(
        &["Intro to CS", "Data Structures"],
        &[("Data Structures", &["Intro to CS"])],
    );
    validate_catalog(&cfg)?;
    Ok(())
}

#[test]
fn unknown_prerequisite_fails_validation() {
    let cfg = catalog(
        &["Intro to CS", "Data Structures"],
        &[("Data Structures", &["Calculus"])],
    );

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownPrerequisite { ref course, ref prerequisite }
            if course == "Data Structures" && prerequisite == "Calculus"
    ));
}

#[test]
fn prerequisites_for_unknown_course_fail_validation() {
    let cfg = catalog(&["Intro to CS"], &[("Calculus", &["Intro to CS"])]);

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCourse(ref c) if c == "Calculus"));
}

#[test]
fn self_prerequisite_fails_validation() {
    let cfg = catalog(&["Intro to CS"], &[("Intro to CS", &["Intro to CS"])]);

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(err, CatalogError::SelfPrerequisite(_)));
}

#[test]
fn prerequisite_cycle_fails_validation() {
    let cfg = catalog(
        &["A", "B", "C"],
        &[("A", &["C"]), ("B", &["A"]), ("C", &["B"])],
    );

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(err, CatalogError::PrerequisiteCycle(_)));
}

#[test]
fn themed_course_outside_catalog_fails_validation() {
    let mut cfg = catalog(&["Intro to CS"], &[]);
    cfg.interests
        .insert("AI".to_string(), vec!["Machine Learning".to_string()]);

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownThemedCourse { ref interest, ref course }
            if interest == "AI" && course == "Machine Learning"
    ));
}

#[test]
fn generator_bounds_exceeding_catalog_fail_validation() {
    let mut cfg = catalog(&["Intro to CS", "Data Structures"], &[]);
    cfg.generator.max_completed = 3;

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::CourseCountExceedsCatalog { requested: 3, available: 2 }
    ));
}

#[test]
fn inverted_generator_bounds_fail_validation() {
    let mut cfg = catalog(&["A", "B", "C"], &[]);
    cfg.generator.min_completed = 3;
    cfg.generator.max_completed = 2;

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCompletedRange { .. }));
}

#[test]
fn empty_interest_vocabulary_fails_validation() {
    let mut cfg = catalog(&["A"], &[]);
    cfg.interests.clear();

    let err = validate_catalog(&cfg).unwrap_err();
    assert!(matches!(err, CatalogError::NoInterests));
}

#[test]
fn mini_catalog_toml_loads_and_validates() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("tests/fixtures/mini-catalog.toml"))?;

    assert_eq!(cfg.courses.len(), 4);
    assert_eq!(cfg.prerequisites_of("Algorithms"), ["Data Structures"]);
    assert_eq!(cfg.generator.max_completed, 3);
    assert_eq!(cfg.interest_vocabulary(), ["Data Science", "Theory"]);
    Ok(())
}

#[test]
fn builtin_catalog_is_valid() -> TestResult {
    let cfg = coursedag::config::builtin_catalog()?;

    assert_eq!(cfg.courses.len(), 15);
    assert_eq!(cfg.prerequisites_of("Data Structures"), ["Intro to CS"]);
    assert_eq!(
        cfg.prerequisites_of("Data Mining"),
        ["Databases", "AI Basics"]
    );
    assert_eq!(cfg.interest_vocabulary().len(), 3);
    Ok(())
}
