// src/output/artifacts.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::recommend::Recommendation;
use crate::students::Student;

/// File name of the student population artifact.
pub const STUDENTS_FILE: &str = "students.json";

/// File name of the recommendations artifact.
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";

/// Write the generated students as a pretty-printed JSON array.
pub fn write_students(out_dir: &Path, students: &[Student]) -> Result<PathBuf> {
    let path = out_dir.join(STUDENTS_FILE);
    write_json(&path, students)?;
    info!(count = students.len(), path = %path.display(), "wrote student population");
    Ok(path)
}

/// Write the recommendations as a pretty-printed JSON array.
pub fn write_recommendations(out_dir: &Path, recs: &[Recommendation]) -> Result<PathBuf> {
    let path = out_dir.join(RECOMMENDATIONS_FILE);
    write_json(&path, recs)?;
    info!(count = recs.len(), path = %path.display(), "wrote recommendations");
    Ok(path)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {:?}", path))?;
    fs::write(path, json).with_context(|| format!("writing {:?}", path))?;
    Ok(())
}
