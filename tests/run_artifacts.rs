use std::error::Error;
use std::fs;

use coursedag::cli::CliArgs;
use coursedag::config::builtin_catalog;
use coursedag::dag::CourseGraph;
use coursedag::output::render_cypher_schema;
use coursedag::students::Student;

type TestResult = Result<(), Box<dyn Error>>;

fn args(out_dir: &str) -> CliArgs {
    CliArgs {
        catalog: None,
        students: 25,
        recommendations: 10,
        max_load: 5,
        seed: Some(1234),
        out_dir: out_dir.to_string(),
        no_schema: false,
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn run_writes_all_three_artifacts() -> TestResult {
    let dir = tempfile::tempdir()?;
    let out = dir.path().to_string_lossy().to_string();

    coursedag::run(args(&out))?;

    let students_json = fs::read_to_string(dir.path().join("students.json"))?;
    let students: Vec<Student> = serde_json::from_str(&students_json)?;
    assert_eq!(students.len(), 25);
    for s in students.iter() {
        assert!(s.gpa >= 0.0 && s.gpa <= 4.0);
        assert_eq!(
            s.grades.keys().cloned().collect::<Vec<_>>(),
            s.completed_courses.iter().cloned().collect::<Vec<_>>()
        );
    }

    let recs_json = fs::read_to_string(dir.path().join("recommendations.json"))?;
    let recs: serde_json::Value = serde_json::from_str(&recs_json)?;
    assert_eq!(recs.as_array().map(|a| a.len()), Some(10));

    assert!(dir.path().join("cypher_schema.txt").exists());
    Ok(())
}

#[test]
fn no_schema_flag_skips_the_schema_dump() -> TestResult {
    let dir = tempfile::tempdir()?;
    let out = dir.path().to_string_lossy().to_string();

    let mut a = args(&out);
    a.no_schema = true;
    coursedag::run(a)?;

    assert!(dir.path().join("students.json").exists());
    assert!(!dir.path().join("cypher_schema.txt").exists());
    Ok(())
}

#[test]
fn same_seed_writes_identical_artifacts() -> TestResult {
    let dir_a = tempfile::tempdir()?;
    let dir_b = tempfile::tempdir()?;

    coursedag::run(args(&dir_a.path().to_string_lossy()))?;
    coursedag::run(args(&dir_b.path().to_string_lossy()))?;

    for file in ["students.json", "recommendations.json", "cypher_schema.txt"] {
        let a = fs::read_to_string(dir_a.path().join(file))?;
        let b = fs::read_to_string(dir_b.path().join(file))?;
        assert_eq!(a, b, "artifact {file} differs between identical seeds");
    }
    Ok(())
}

#[test]
fn cypher_dump_covers_every_course_and_edge() -> TestResult {
    let cfg = builtin_catalog()?;
    let graph = CourseGraph::from_catalog(&cfg);

    let dump = render_cypher_schema(&graph);

    let node_lines = dump.lines().filter(|l| l.starts_with("CREATE (:Course")).count();
    assert_eq!(node_lines, cfg.courses.len());

    let edge_lines = dump
        .lines()
        .filter(|l| l.contains("[:PREREQUISITE_FOR]"))
        .count();
    let edge_count: usize = cfg.prerequisites.values().map(|p| p.len()).sum();
    assert_eq!(edge_lines, edge_count);

    assert!(dump.contains(r#"CREATE (:Course {name: "Intro to CS"})"#));
    Ok(())
}
