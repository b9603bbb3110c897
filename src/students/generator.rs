// src/students/generator.rs

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

use crate::config::model::CatalogFile;
use crate::errors::CatalogError;
use crate::students::model::{Grade, Student};

/// First-name pool for synthetic student names.
const FIRST_NAMES: [&str; 20] = [
    "Alice", "Ben", "Carla", "David", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas",
    "Kavya", "Liam", "Mina", "Noah", "Olga", "Pavel", "Quinn", "Rosa", "Sam", "Tara",
];

/// Last-name pool for synthetic student names.
const LAST_NAMES: [&str; 20] = [
    "Almeida", "Becker", "Chen", "Dimitrov", "Eriksen", "Fischer", "Garcia", "Haddad",
    "Ivanova", "Johnson", "Kim", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quispe", "Rossi", "Singh", "Tanaka",
];

/// Generate one synthetic student from the catalog.
///
/// Samples a distinct set of completed courses (size uniform in
/// `[min_completed, max_completed]`), grades each uniformly, derives the GPA
/// from the grades, and picks one interest and a term.
///
/// Fails fast if the catalog cannot satisfy the generator bounds; the count
/// is never silently clamped.
pub fn generate_student<R: Rng>(
    id: u32,
    cfg: &CatalogFile,
    rng: &mut R,
) -> Result<Student, CatalogError> {
    let bounds = &cfg.generator;
    if bounds.max_completed > cfg.courses.len() {
        return Err(CatalogError::CourseCountExceedsCatalog {
            requested: bounds.max_completed,
            available: cfg.courses.len(),
        });
    }
    let interests = cfg.interest_vocabulary();
    if interests.is_empty() {
        return Err(CatalogError::NoInterests);
    }

    let num_courses = rng.random_range(bounds.min_completed..=bounds.max_completed);
    let completed_courses: BTreeSet<String> = cfg
        .courses
        .choose_multiple(rng, num_courses)
        .cloned()
        .collect();

    let grades: BTreeMap<String, Grade> = completed_courses
        .iter()
        .map(|course| {
            let grade = *Grade::ALL.choose(rng).unwrap_or(&Grade::F);
            (course.clone(), grade)
        })
        .collect();

    let gpa = mean_gpa(&grades);
    let interest = interests.choose(rng).unwrap_or(&interests[0]).to_string();
    let term = rng.random_range(1..=bounds.terms);

    Ok(Student {
        id,
        name: generate_name(rng),
        completed_courses,
        grades,
        gpa,
        interests: vec![interest],
        term,
    })
}

/// Generate a population of `count` students with ids `0..count`.
pub fn generate_students<R: Rng>(
    count: u32,
    cfg: &CatalogFile,
    rng: &mut R,
) -> Result<Vec<Student>, CatalogError> {
    let mut students = Vec::with_capacity(count as usize);
    for id in 0..count {
        students.push(generate_student(id, cfg, rng)?);
    }
    debug!(count, "generated student population");
    Ok(students)
}

/// Mean grade-point value over all graded courses, rounded to 2 decimals.
fn mean_gpa(grades: &BTreeMap<String, Grade>) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let total: f64 = grades.values().map(|g| g.points()).sum();
    let mean = total / grades.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// Sample a synthetic "First Last" name.
fn generate_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).unwrap_or(&FIRST_NAMES[0]);
    let last = LAST_NAMES.choose(rng).unwrap_or(&LAST_NAMES[0]);
    format!("{first} {last}")
}
