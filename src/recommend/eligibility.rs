// src/recommend/eligibility.rs

use crate::dag::CourseGraph;
use crate::students::model::Student;

/// Courses the student may take next, in catalog order.
///
/// A course is eligible if it is not already passed and every direct
/// prerequisite has been passed. "Passed" means completed with a non-F
/// grade, so a failed course stays un-passed and can show up as eligible
/// again (a retake). A course with no prerequisites is always eligible
/// unless already passed.
pub fn eligible_courses<'a>(student: &Student, graph: &'a CourseGraph) -> Vec<&'a str> {
    let passed = student.passed_courses();

    graph
        .courses()
        .filter(|course| {
            if passed.contains(course) {
                return false;
            }
            graph
                .prerequisites_of(course)
                .iter()
                .all(|prereq| passed.contains(prereq.as_str()))
        })
        .collect()
}

/// Whether a single course is eligible for the student.
pub fn is_eligible(student: &Student, graph: &CourseGraph, course: &str) -> bool {
    let passed = student.passed_courses();
    !passed.contains(course)
        && graph
            .prerequisites_of(course)
            .iter()
            .all(|prereq| passed.contains(prereq.as_str()))
}
