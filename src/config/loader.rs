// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::CatalogFile;
use crate::config::validate::validate_catalog;

/// TOML source of the built-in 15-course curriculum.
const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// Load a catalog file from a given path and return the raw `CatalogFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (unknown prerequisites, cycles, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file at {:?}", path))?;

    let catalog: CatalogFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML catalog from {:?}", path))?;

    Ok(catalog)
}

/// Load a catalog file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - prerequisites or themed courses referencing unknown courses,
///   - cycles in the prerequisite graph,
///   - generator bounds that exceed the catalog.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let catalog = load_from_path(&path)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// The built-in curriculum, validated.
///
/// Used when the CLI is run without `--catalog`.
pub fn builtin_catalog() -> Result<CatalogFile> {
    let catalog: CatalogFile =
        toml::from_str(BUILTIN_CATALOG).context("parsing built-in catalog")?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}
