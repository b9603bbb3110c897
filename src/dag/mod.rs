// src/dag/mod.rs

//! Curriculum DAG representation.
//!
//! [`graph`] holds the directed acyclic graph of courses and prerequisite
//! edges, keyed by course name and ordered by the catalog.

pub mod graph;

pub use graph::CourseGraph;
