// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;
pub mod recommend;
pub mod students;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{builtin_catalog, load_and_validate};
use crate::config::model::CatalogFile;
use crate::dag::CourseGraph;
use crate::output::{write_cypher_schema, write_recommendations, write_students};
use crate::recommend::{Recommendation, recommend_courses};
use crate::students::generate_students;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - catalog loading + validation
/// - curriculum DAG construction
/// - student generation
/// - per-student recommendations
/// - artifact writing
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = match args.catalog.as_deref() {
        Some(path) => load_and_validate(PathBuf::from(path))?,
        None => builtin_catalog()?,
    };

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let graph = CourseGraph::from_catalog(&cfg);
    info!(
        courses = graph.len(),
        roots = ?graph.roots(),
        "built curriculum DAG"
    );

    // Explicit seed, or one drawn from entropy and logged for replay.
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "seeding random generator");
    let mut rng = SmallRng::seed_from_u64(seed);

    let students = generate_students(args.students, &cfg, &mut rng)?;
    info!(count = students.len(), "generated students");

    let recommendations: Vec<Recommendation> = students
        .iter()
        .take(args.recommendations as usize)
        .map(|student| recommend_courses(student, &graph, &cfg, args.max_load, &mut rng))
        .collect();

    let out_dir = PathBuf::from(&args.out_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {:?}", out_dir))?;

    write_students(&out_dir, &students)?;
    write_recommendations(&out_dir, &recommendations)?;
    if !args.no_schema {
        write_cypher_schema(&out_dir, &graph)?;
    }

    debug!("run complete");
    Ok(())
}

/// Simple dry-run output: print courses, prerequisites and interests.
fn print_dry_run(cfg: &CatalogFile) {
    println!("coursedag dry-run");
    println!(
        "  generator.min_completed = {}",
        cfg.generator.min_completed
    );
    println!(
        "  generator.max_completed = {}",
        cfg.generator.max_completed
    );
    println!("  generator.terms = {}", cfg.generator.terms);
    println!();

    println!("courses ({}):", cfg.courses.len());
    for course in cfg.courses.iter() {
        println!("  - {course}");
        let prereqs = cfg.prerequisites_of(course);
        if !prereqs.is_empty() {
            println!("      prerequisites: {:?}", prereqs);
        }
    }
    println!();

    println!("interests ({}):", cfg.interests.len());
    for (interest, themed) in cfg.interests.iter() {
        println!("  - {interest}: {:?}", themed);
    }

    debug!("dry-run complete (nothing written)");
}
