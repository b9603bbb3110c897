// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `coursedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coursedag",
    version,
    about = "Generate a synthetic curriculum dataset and heuristic course recommendations.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a catalog file (TOML).
    ///
    /// If omitted, the built-in 15-course curriculum is used.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Number of students to generate.
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub students: u32,

    /// Number of students (taken from the front of the population) to
    /// compute recommendations for.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub recommendations: u32,

    /// Maximum number of courses in a single recommendation.
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub max_load: usize,

    /// Seed for the random generator.
    ///
    /// If omitted, a seed is drawn from entropy and logged so the run can
    /// be replayed.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory the output artifacts are written to.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub out_dir: String,

    /// Skip writing the Cypher schema dump.
    #[arg(long)]
    pub no_schema: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate the catalog, print it, but write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
