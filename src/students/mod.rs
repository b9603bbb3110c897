// src/students/mod.rs

//! Synthetic student population.
//!
//! - [`model`] holds the student record and grade types.
//! - [`generator`] samples students from a catalog with an explicit rng.

pub mod generator;
pub mod model;

pub use generator::{generate_student, generate_students};
pub use model::{Grade, Student};
