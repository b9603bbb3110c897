// src/output/mod.rs

//! End-of-run artifact writing.
//!
//! - [`artifacts`] serializes the student population and recommendations
//!   to JSON.
//! - [`schema`] dumps the curriculum graph as Cypher statements for a
//!   separate graph store.

pub mod artifacts;
pub mod schema;

pub use artifacts::{write_recommendations, write_students};
pub use schema::{render_cypher_schema, write_cypher_schema};
