// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level catalog as read from a TOML file.
///
/// ```toml
/// courses = ["Intro to CS", "Data Structures"]
///
/// [prerequisites]
/// "Data Structures" = ["Intro to CS"]
///
/// [interests]
/// "AI" = []
///
/// [generator]
/// min_completed = 3
/// max_completed = 10
/// terms = 8
/// ```
///
/// All sections except `courses` are optional and have defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Ordered course list. This order is the *catalog order* used for
    /// eligibility and recommendation output.
    pub courses: Vec<String>,

    /// Course → list of prerequisite course names.
    ///
    /// Courses absent from this table have no prerequisites.
    #[serde(default)]
    pub prerequisites: BTreeMap<String, Vec<String>>,

    /// Interest → list of themed course names.
    ///
    /// The key set is the interest vocabulary students are sampled from.
    #[serde(default)]
    pub interests: BTreeMap<String, Vec<String>>,

    /// Bounds for student generation from `[generator]`.
    #[serde(default)]
    pub generator: GeneratorSection,
}

/// `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSection {
    /// Minimum number of completed courses per student.
    #[serde(default = "default_min_completed")]
    pub min_completed: usize,

    /// Maximum number of completed courses per student.
    ///
    /// Must not exceed the catalog size; generation never clamps.
    #[serde(default = "default_max_completed")]
    pub max_completed: usize,

    /// Number of academic terms; students get a term in `1..=terms`.
    #[serde(default = "default_terms")]
    pub terms: u8,
}

fn default_min_completed() -> usize {
    3
}

fn default_max_completed() -> usize {
    10
}

fn default_terms() -> u8 {
    8
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            min_completed: default_min_completed(),
            max_completed: default_max_completed(),
            terms: default_terms(),
        }
    }
}

impl CatalogFile {
    /// True if `name` is a course in this catalog.
    pub fn has_course(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c == name)
    }

    /// Prerequisites of a course; empty slice if none are listed.
    pub fn prerequisites_of(&self, name: &str) -> &[String] {
        self.prerequisites
            .get(name)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    /// The interest vocabulary, in deterministic (sorted) order.
    pub fn interest_vocabulary(&self) -> Vec<&str> {
        self.interests.keys().map(|s| s.as_str()).collect()
    }

    /// Themed courses for an interest; empty slice for unknown interests.
    pub fn themed_courses(&self, interest: &str) -> &[String] {
        self.interests
            .get(interest)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }
}
