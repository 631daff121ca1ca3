use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use espalier_cli::{Args, run};
use espalier_core::strategy::Strategy;

/// Collects all .esp files from a directory
fn collect_esp_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("esp")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at the workspace root, relative to the workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path, strategy: Option<Strategy>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        strategy,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_esp_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.txt",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(demo_path, &output_path, None)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let grid = fs::read_to_string(&output_path).expect("Output file should exist");
        assert!(
            grid.ends_with('\n') && !grid.trim().is_empty(),
            "Grid for {} should be non-empty rows: {grid:?}",
            demo_path.display()
        );
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_esp_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.txt",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path, None)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_both_strategies_produce_identical_grids() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for demo_path in collect_esp_files(demos_path()) {
        let stem = demo_path.file_stem().unwrap().to_string_lossy().to_string();
        let width_first_out = temp_dir.path().join(format!("{stem}_wf.txt"));
        let leaf_numbering_out = temp_dir.path().join(format!("{stem}_ln.txt"));

        run(&args_for(
            &demo_path,
            &width_first_out,
            Some(Strategy::WidthFirst),
        ))
        .expect("width-first run should succeed");
        run(&args_for(
            &demo_path,
            &leaf_numbering_out,
            Some(Strategy::LeafNumbering),
        ))
        .expect("leaf-numbering run should succeed");

        let lhs = fs::read_to_string(&width_first_out).unwrap();
        let rhs = fs::read_to_string(&leaf_numbering_out).unwrap();
        assert_eq!(lhs, rhs, "Strategies disagree on {}", demo_path.display());
    }
}
