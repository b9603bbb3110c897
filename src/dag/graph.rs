// src/dag/graph.rs

use std::collections::HashMap;

use crate::config::model::CatalogFile;

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone)]
struct CourseNode {
    /// Direct prerequisites: courses that must be passed before this one.
    prerequisites: Vec<String>,
    /// Direct dependents: courses that list this one as a prerequisite.
    dependents: Vec<String>,
}

/// In-memory curriculum DAG keyed by course name.
///
/// This is intentionally lightweight; acyclicity is already validated in
/// `config::validate`, so here we just keep adjacency information for
/// eligibility queries and the schema dump. Course order is preserved from
/// the catalog so that eligibility output is catalog-ordered, not graph-
/// ordered.
#[derive(Debug, Clone)]
pub struct CourseGraph {
    /// Catalog order of the courses.
    order: Vec<String>,
    nodes: HashMap<String, CourseNode>,
}

impl CourseGraph {
    /// Build the curriculum DAG from a validated [`CatalogFile`].
    ///
    /// Assumes that:
    /// - all prerequisite references are valid
    /// - there are no cycles
    pub fn from_catalog(cfg: &CatalogFile) -> Self {
        let mut nodes: HashMap<String, CourseNode> = HashMap::new();

        // First pass: create nodes with their prerequisite lists.
        for course in cfg.courses.iter() {
            nodes.insert(
                course.clone(),
                CourseNode {
                    prerequisites: cfg.prerequisites_of(course).to_vec(),
                    dependents: Vec::new(),
                },
            );
        }

        // Second pass: populate dependents based on prerequisites.
        for course in cfg.courses.iter() {
            let prereqs = nodes
                .get(course)
                .map(|n| n.prerequisites.clone())
                .unwrap_or_default();

            for prereq in prereqs {
                if let Some(prereq_node) = nodes.get_mut(&prereq) {
                    prereq_node.dependents.push(course.clone());
                }
            }
        }

        Self {
            order: cfg.courses.clone(),
            nodes,
        }
    }

    /// All course names, in catalog order.
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Immediate prerequisites of a course (its graph predecessors).
    pub fn prerequisites_of(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.prerequisites.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a course (courses that require it).
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Courses with no prerequisites, in catalog order.
    pub fn roots(&self) -> Vec<&str> {
        self.courses()
            .filter(|name| self.prerequisites_of(name).is_empty())
            .collect()
    }

    /// All (prerequisite, course) edges, in catalog order of the course.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().flat_map(move |course| {
            self.prerequisites_of(course)
                .iter()
                .map(move |prereq| (prereq.as_str(), course.as_str()))
        })
    }
}
