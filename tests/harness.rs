//! Golden-file test harness for the marker rewrite.
//!
//! Discovers `.input.js` files under `tests/fixtures/`, runs the rewrite
//! half of the pipeline (extract → parse → rewrite → print), and compares
//! output against the corresponding `.expected.js` file. Comparison ignores
//! whitespace: codegen layout is not under test, token content is.
//!
//! Set `YF_UPDATE_FIXTURES=1` to overwrite expected files with actual output.

use std::path::{Path, PathBuf};

use anyhow::Result;
use yf_marker::MarkerSyntax;
use yf_parser::{extract_source, parse_routine};
use yf_rewrite::rewrite_routine;
use yf_runtime::print_script;

fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/yf_test/, so go up two levels to workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
}

fn collect_input_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if !dir.exists() {
        return files;
    }
    for entry in walkdir(dir) {
        if entry
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".input.js"))
        {
            files.push(entry);
        }
    }
    files.sort();
    files
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                result.extend(walkdir(&path));
            } else {
                result.push(path);
            }
        }
    }
    result
}

fn run_rewrite(routine: &str) -> Result<String> {
    let wrapped = extract_source(routine)?;
    let mut parsed = parse_routine(&wrapped)?;
    rewrite_routine(&mut parsed.script, &MarkerSyntax::default())?;
    Ok(print_script(&parsed.script, parsed.source_map)?)
}

/// Collapse to token content only; emitted layout is the printer's business.
fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_rewrite_tests() {
    let fixtures = fixtures_dir();
    let input_files = collect_input_files(&fixtures);

    assert!(
        !input_files.is_empty(),
        "No test fixtures found in {}",
        fixtures.display()
    );

    let update_mode = std::env::var("YF_UPDATE_FIXTURES").is_ok();
    let mut failures = Vec::new();

    for input_path in &input_files {
        let expected_path = input_path
            .to_str()
            .unwrap()
            .replace(".input.js", ".expected.js");
        let expected_path = PathBuf::from(&expected_path);

        let test_name = input_path
            .strip_prefix(&fixtures)
            .unwrap()
            .display()
            .to_string();

        let source = match std::fs::read_to_string(input_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read input: {e}"));
                continue;
            }
        };

        let actual = match run_rewrite(&source) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: rewrite failed: {e}"));
                continue;
            }
        };

        if update_mode {
            if let Err(e) = std::fs::write(&expected_path, &actual) {
                failures.push(format!("{test_name}: failed to write expected: {e}"));
            }
            continue;
        }

        if !expected_path.exists() {
            failures.push(format!(
                "{test_name}: missing expected file: {}",
                expected_path.display()
            ));
            continue;
        }

        let expected = match std::fs::read_to_string(&expected_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read expected: {e}"));
                continue;
            }
        };
        if strip_whitespace(&actual) != strip_whitespace(&expected) {
            failures.push(format!(
                "{test_name}: output mismatch\n--- expected ---\n{}\n--- actual ---\n{}",
                expected.trim(),
                actual.trim()
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} golden test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}

/// Every rewrite output must itself parse as a single function literal —
/// the shape the materializer's loadable unit relies on.
#[test]
fn roundtrip_tests() {
    let fixtures = fixtures_dir();
    let input_files = collect_input_files(&fixtures);

    let mut failures = Vec::new();

    for input_path in &input_files {
        let test_name = input_path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let source = match std::fs::read_to_string(input_path) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: failed to read: {e}"));
                continue;
            }
        };

        let output = match run_rewrite(&source) {
            Ok(s) => s,
            Err(e) => {
                failures.push(format!("{test_name}: rewrite failed: {e}"));
                continue;
            }
        };

        if let Err(e) = parse_routine(output.trim()) {
            failures.push(format!(
                "{test_name}: output does not reparse as a routine: {e}\n--- output ---\n{}",
                output.trim()
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} roundtrip test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}
