/// End-to-end tests for the CLI
///
/// Each test runs the binary inside a temporary directory holding a
/// `config.json` that points at the fixture repository.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/test_repository.txt")
}

/// Writes a config file using the fixture repository in test mode.
fn write_config(dir: &Path, file_name: &str, package: &str, version: &str, extra: &str) {
    let content = format!(
        r#"{{
    "package_name": "{}",
    "repository_url": {},
    "test_repository_mode": true,
    "version": "{}",
    "output_filename": "graph.dot",
    "ascii_tree_output": true{}
}}"#,
        package,
        serde_json::to_string(fixture_path().to_str().unwrap()).unwrap(),
        version,
        extra
    );
    fs::write(dir.join(file_name), content).unwrap();
}

// ============================================================================
// Exit codes
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), "config.json", "A", "1", "");

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("deb-depgraph").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("deb-depgraph")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: Root package version not in the index
    #[test]
    fn test_exit_code_package_not_found() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), "config.json", "A", "9.9", "");

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Package not found in index: A (version 9.9)"));
    }

    /// Exit code 1: A transitive dependency is missing from the index
    #[test]
    fn test_exit_code_missing_transitive_dependency() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), "config.json", "G", "1", "");

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("missing-pkg"));

        assert!(!temp_dir.path().join("graph.dot").exists());
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("deb-depgraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - config file missing
    #[test]
    fn test_exit_code_missing_config() {
        let temp_dir = TempDir::new().unwrap();

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    /// Exit code 3: Application error - unknown configuration key
    #[test]
    fn test_exit_code_unknown_config_key() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "config.json",
            "A",
            "1",
            ",\n    \"colour\": \"red\"",
        );

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("unknown field"));
    }

    /// Exit code 3: Application error - index file missing
    #[test]
    fn test_exit_code_missing_index() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.json"),
            r#"{
    "package_name": "A",
    "repository_url": "does-not-exist.txt",
    "test_repository_mode": true,
    "version": "1",
    "output_filename": "graph.dot",
    "ascii_tree_output": false
}"#,
        )
        .unwrap();

        cargo_bin_cmd!("deb-depgraph")
            .current_dir(temp_dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read package index"));
    }
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_e2e_reports_and_graph_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "config.json", "A", "1", "");

    cargo_bin_cmd!("deb-depgraph")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Direct dependencies of A 1 (2):\n  B\n  C\n"))
        .stdout(predicate::str::contains("  A -> B, C\n  B -> (none)\n  C -> B\n"))
        .stdout(predicate::str::contains("Reverse dependencies of A (1):\n  D\n"))
        .stdout(predicate::str::contains("A\n├── B\n└── C\n    └── B\n"))
        .stderr(predicate::str::contains("Skipped 1 paragraph(s)"));

    let dot = fs::read_to_string(temp_dir.path().join("graph.dot")).unwrap();
    assert!(dot.starts_with("digraph dependencies {\n"));
    assert!(dot.contains("    \"A\" -> \"B\";\n"));
    assert!(dot.contains("    \"A\" -> \"C\";\n"));
    assert!(dot.contains("    \"C\" -> \"B\";\n"));
}

#[test]
fn test_e2e_filter_and_custom_config_path() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        "depgraph.json",
        "A",
        "1",
        ",\n    \"filter_substring\": \"C\"",
    );

    cargo_bin_cmd!("deb-depgraph")
        .current_dir(temp_dir.path())
        .args(["--config", "depgraph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exclusion filter: C\n"))
        .stdout(predicate::str::contains("  A -> B\n  B -> (none)\n"))
        .stdout(predicate::str::contains("  C -> B").not());

    let dot = fs::read_to_string(temp_dir.path().join("graph.dot")).unwrap();
    assert!(!dot.contains("\"C\""));
}

#[test]
fn test_e2e_show_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "config.json", "B", "1", "");

    cargo_bin_cmd!("deb-depgraph")
        .current_dir(temp_dir.path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Configurations ===\n"))
        .stdout(predicate::str::contains("package_name: B\n"))
        .stdout(predicate::str::contains("ascii_tree_output: true\n"))
        .stdout(predicate::str::contains("Reverse dependencies of B (3):\n  A\n  C\n  libfoo1\n"));
}

#[test]
fn test_e2e_ascii_tree_disabled() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        format!(
            r#"{{
    "package_name": "D",
    "repository_url": {},
    "test_repository_mode": true,
    "version": "2.0",
    "output_filename": "out.dot",
    "ascii_tree_output": false
}}"#,
            serde_json::to_string(fixture_path().to_str().unwrap()).unwrap()
        ),
    )
    .unwrap();

    cargo_bin_cmd!("deb-depgraph")
        .current_dir(temp_dir.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency graph (6 packages, 8 edges):"))
        .stdout(predicate::str::contains("Dependency tree").not())
        .stderr(predicate::str::contains("Parsed").not());

    assert!(temp_dir.path().join("out.dot").exists());
}
