// src/students/model.rs

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Letter grade for a completed course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades a generated student can receive.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Grade-point value used for GPA computation.
    pub fn points(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::B => 3.0,
            Grade::C => 2.0,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }

    /// Whether the grade counts as passing a course. Only F fails.
    pub fn is_passing(self) -> bool {
        !matches!(self, Grade::F)
    }
}

/// A synthetic student record.
///
/// Invariants (upheld by the generator, checked in tests):
/// - every course in `completed_courses` has a matching entry in `grades`
/// - `gpa` is the mean of grade points over `grades`, rounded to 2 decimals
/// - `interests` is non-empty; `term` is in `1..=generator.terms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub completed_courses: BTreeSet<String>,
    pub grades: BTreeMap<String, Grade>,
    pub gpa: f64,
    pub interests: Vec<String>,
    pub term: u8,
}

impl Student {
    /// Courses completed with a passing (non-F) grade.
    pub fn passed_courses(&self) -> BTreeSet<&str> {
        self.grades
            .iter()
            .filter(|(_, grade)| grade.is_passing())
            .map(|(course, _)| course.as_str())
            .collect()
    }

    /// The student's primary interest (the generator assigns exactly one).
    pub fn primary_interest(&self) -> &str {
        self.interests.first().map(|s| s.as_str()).unwrap_or("")
    }
}
