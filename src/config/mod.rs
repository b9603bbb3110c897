// src/config/mod.rs

//! Catalog loading and validation for coursedag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a catalog file from disk, or supply the built-in one (`loader.rs`).
//! - Validate invariants like prerequisite DAG correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{builtin_catalog, load_and_validate, load_from_path};
pub use model::{CatalogFile, GeneratorSection};
pub use validate::validate_catalog;
