// src/errors.rs

//! Crate-wide error types.
//!
//! Domain failures are structured; the application boundary in `lib.rs`
//! wraps them in `anyhow` with context.

use thiserror::Error;

/// Errors raised while validating a catalog or generating students.
///
/// All of these abort the run; there is no recovery path in a one-shot
/// batch job.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog must contain at least one course")]
    EmptyCatalog,

    #[error("duplicate course '{0}' in catalog")]
    DuplicateCourse(String),

    #[error("course '{course}' has unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite { course: String, prerequisite: String },

    #[error("prerequisites listed for unknown course '{0}'")]
    UnknownCourse(String),

    #[error("course '{0}' cannot be its own prerequisite")]
    SelfPrerequisite(String),

    #[error("cycle detected in prerequisite graph involving course '{0}'")]
    PrerequisiteCycle(String),

    #[error("interest '{interest}' lists unknown themed course '{course}'")]
    UnknownThemedCourse { interest: String, course: String },

    #[error("catalog must define at least one interest")]
    NoInterests,

    #[error(
        "generator asks for up to {requested} completed courses but the catalog only has {available}"
    )]
    CourseCountExceedsCatalog { requested: usize, available: usize },

    #[error("generator bounds are invalid: min_completed={min}, max_completed={max}")]
    InvalidCompletedRange { min: usize, max: usize },

    #[error("generator must allow at least one term")]
    NoTerms,
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CatalogError>;
