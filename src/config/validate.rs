// src/config/validate.rs

use std::collections::BTreeSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::CatalogFile;
use crate::errors::CatalogError;

/// Run semantic validation against a loaded catalog.
///
/// This checks:
/// - there is at least one course, with no duplicate names
/// - every prerequisite entry refers to known courses
/// - no course is its own prerequisite
/// - the prerequisite graph has no cycles
/// - every themed course belongs to the catalog
/// - generator bounds are satisfiable without clamping
pub fn validate_catalog(cfg: &CatalogFile) -> Result<(), CatalogError> {
    ensure_has_courses(cfg)?;
    validate_prerequisites(cfg)?;
    validate_dag(cfg)?;
    validate_interests(cfg)?;
    validate_generator(cfg)?;
    Ok(())
}

fn ensure_has_courses(cfg: &CatalogFile) -> Result<(), CatalogError> {
    if cfg.courses.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut seen = BTreeSet::new();
    for course in cfg.courses.iter() {
        if !seen.insert(course.as_str()) {
            return Err(CatalogError::DuplicateCourse(course.clone()));
        }
    }
    Ok(())
}

fn validate_prerequisites(cfg: &CatalogFile) -> Result<(), CatalogError> {
    for (course, prereqs) in cfg.prerequisites.iter() {
        if !cfg.has_course(course) {
            return Err(CatalogError::UnknownCourse(course.clone()));
        }
        for prereq in prereqs.iter() {
            if !cfg.has_course(prereq) {
                return Err(CatalogError::UnknownPrerequisite {
                    course: course.clone(),
                    prerequisite: prereq.clone(),
                });
            }
            if prereq == course {
                return Err(CatalogError::SelfPrerequisite(course.clone()));
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &CatalogFile) -> Result<(), CatalogError> {
    // Build a petgraph graph from the courses and their prerequisites.
    //
    // Edge direction: prerequisite -> course
    // For:
    //   [prerequisites]
    //   "Data Structures" = ["Intro to CS"]
    // we add edge "Intro to CS" -> "Data Structures".
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for course in cfg.courses.iter() {
        graph.add_node(course.as_str());
    }

    for (course, prereqs) in cfg.prerequisites.iter() {
        for prereq in prereqs.iter() {
            graph.add_edge(prereq.as_str(), course.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(CatalogError::PrerequisiteCycle(
            cycle.node_id().to_string(),
        )),
    }
}

fn validate_interests(cfg: &CatalogFile) -> Result<(), CatalogError> {
    if cfg.interests.is_empty() {
        return Err(CatalogError::NoInterests);
    }

    for (interest, courses) in cfg.interests.iter() {
        for course in courses.iter() {
            if !cfg.has_course(course) {
                return Err(CatalogError::UnknownThemedCourse {
                    interest: interest.clone(),
                    course: course.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_generator(cfg: &CatalogFile) -> Result<(), CatalogError> {
    let g = &cfg.generator;

    if g.min_completed == 0 || g.min_completed > g.max_completed {
        return Err(CatalogError::InvalidCompletedRange {
            min: g.min_completed,
            max: g.max_completed,
        });
    }
    if g.max_completed > cfg.courses.len() {
        return Err(CatalogError::CourseCountExceedsCatalog {
            requested: g.max_completed,
            available: cfg.courses.len(),
        });
    }
    if g.terms == 0 {
        return Err(CatalogError::NoTerms);
    }
    Ok(())
}
