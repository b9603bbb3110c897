// src/recommend/ranker.rs

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;
use tracing::trace;

use crate::config::model::CatalogFile;
use crate::dag::CourseGraph;
use crate::recommend::eligibility::eligible_courses;
use crate::students::model::Student;

/// A ranked, bounded course recommendation for one student.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub student_id: u32,
    pub name: String,
    pub interest: String,
    pub recommended_courses: Vec<String>,
}

/// Recommend up to `max_load` courses for a student.
///
/// Eligible courses are stable-sorted so that courses themed for the
/// student's interest come first; relative catalog order is preserved
/// inside each partition. The list is then truncated to a count drawn
/// from `rng` between 3 and `max_load` (or fewer if not enough courses
/// are eligible). Because the rng is passed in explicitly, runs are
/// reproducible under a fixed seed.
pub fn recommend_courses<R: Rng>(
    student: &Student,
    graph: &CourseGraph,
    cfg: &CatalogFile,
    max_load: usize,
    rng: &mut R,
) -> Recommendation {
    let interest = student.primary_interest();
    let themed: BTreeSet<&str> = cfg
        .themed_courses(interest)
        .iter()
        .map(|s| s.as_str())
        .collect();

    let mut eligible = eligible_courses(student, graph);
    // Stable sort: themed courses first, catalog order within each group.
    eligible.sort_by_key(|course| !themed.contains(course));

    let take = truncation_count(eligible.len(), max_load, rng);
    trace!(
        student_id = student.id,
        eligible = eligible.len(),
        take,
        "ranked eligible courses"
    );
    eligible.truncate(take);

    Recommendation {
        student_id: student.id,
        name: student.name.clone(),
        interest: interest.to_string(),
        recommended_courses: eligible.into_iter().map(|s| s.to_string()).collect(),
    }
}

/// How many courses to keep: uniform in `[min(3, max_load), max_load]`,
/// capped by the number of eligible courses.
fn truncation_count<R: Rng>(eligible: usize, max_load: usize, rng: &mut R) -> usize {
    if max_load == 0 {
        return 0;
    }
    let lo = 3.min(max_load);
    rng.random_range(lo..=max_load).min(eligible)
}
