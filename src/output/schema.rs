// src/output/schema.rs

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::dag::CourseGraph;

/// File name of the schema dump artifact.
pub const SCHEMA_FILE: &str = "cypher_schema.txt";

/// Render the curriculum as Cypher statements: one node per course, one
/// `PREREQUISITE_FOR` relationship per edge.
///
/// The dump is meant for import into a graph store; nothing in this crate
/// consumes it.
pub fn render_cypher_schema(graph: &CourseGraph) -> String {
    let mut out = String::new();

    for course in graph.courses() {
        // writeln! to a String cannot fail
        let _ = writeln!(out, "CREATE (:Course {{name: {}}})", cypher_str(course));
    }
    out.push('\n');

    for (prereq, course) in graph.edges() {
        let _ = writeln!(
            out,
            "MATCH (a:Course {{name: {}}}), (b:Course {{name: {}}})",
            cypher_str(prereq),
            cypher_str(course)
        );
        let _ = writeln!(out, "CREATE (a)-[:PREREQUISITE_FOR]->(b)");
    }

    out
}

/// Write the Cypher schema dump next to the other artifacts.
pub fn write_cypher_schema(out_dir: &Path, graph: &CourseGraph) -> Result<PathBuf> {
    let path = out_dir.join(SCHEMA_FILE);
    fs::write(&path, render_cypher_schema(graph))
        .with_context(|| format!("writing {:?}", path))?;
    info!(path = %path.display(), "wrote cypher schema dump");
    Ok(path)
}

/// Quote a course name as a Cypher string literal.
fn cypher_str(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
