//! Integration tests for the check command

mod common;

use common::{NOTEBOOK, NOTEBOOK_SOURCE, TestProject, WHEEL, deploycheck_cmd};
use predicates::prelude::*;

#[test]
fn test_deployable_project_passes() {
    let project = TestProject::deployable();

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("FAIL").not())
        .stdout(predicate::str::contains("2 passed, 0 failed"));
}

#[test]
fn test_missing_wheel_fails() {
    let project = TestProject::deployable();
    project.remove_file(WHEEL);

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MissingArtifact"))
        .stdout(predicate::str::contains(WHEEL))
        .stdout(predicate::str::contains("1 passed, 1 failed"));
}

#[test]
fn test_missing_install_call_names_pattern() {
    let project = TestProject::deployable();
    project.write_file(
        NOTEBOOK,
        &NOTEBOOK_SOURCE.replace("await micropip.install(wheel_url)", "pass"),
    );

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "MissingPattern(micropip.install(wheel_url))",
        ));
}

#[test]
fn test_empty_wheel_fails() {
    let project = TestProject::deployable();
    project.write_bytes(WHEEL, b"");

    deploycheck_cmd()
        .current_dir(&project.path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("EmptyArtifact"));
}

#[test]
fn test_versioned_wheel_name_fails() {
    let project = TestProject::new();
    project.write_file(
        "deploycheck.yaml",
        "artifacts:\n  - path: docs/assets/wheels/pkg-0.1.0-py3-none-any.whl\nstage:\n  package: pkg\n",
    );
    project.write_bytes("docs/assets/wheels/pkg-0.1.0-py3-none-any.whl", b"0123456789");

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MisnamedArtifact"))
        .stdout(predicate::str::contains("pkg-latest-py3-none-any.whl"))
        .stdout(predicate::str::contains("0 passed, 1 failed"));
}

#[test]
fn test_no_command_runs_check() {
    let project = TestProject::deployable();

    deploycheck_cmd()
        .current_dir(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deployment validation:"))
        .stdout(predicate::str::contains("2 passed, 0 failed"));
}

#[test]
fn test_all_failures_reported_in_one_run() {
    let project = TestProject::new();
    project.write_file("deploycheck.yaml", common::CONFIG);

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MissingArtifact"))
        .stdout(predicate::str::contains("UnreadableDescriptor"))
        .stdout(predicate::str::contains("0 passed, 2 failed"));
}

#[test]
fn test_empty_configuration_passes_vacuously() {
    let project = TestProject::new();
    project.write_file("deploycheck.yaml", "{}\n");

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 passed, 0 failed"));
}

#[test]
fn test_report_is_identical_across_runs() {
    let project = TestProject::deployable();
    project.write_file(NOTEBOOK, "nothing useful");

    let run = || {
        deploycheck_cmd()
            .current_dir(&project.path)
            .args(["check", "--format", "json"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_json_report() {
    let project = TestProject::deployable();
    project.remove_file(WHEEL);

    let output = deploycheck_cmd()
        .current_dir(&project.path)
        .args(["check", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["total"], 2);
    assert_eq!(report["checks"][0]["failure"]["kind"], "MissingArtifact");
    assert_eq!(report["checks"][1]["passed"], true);
}

#[test]
fn test_detailed_shows_digest() {
    let project = TestProject::deployable();

    deploycheck_cmd()
        .current_dir(&project.path)
        .args(["check", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 10 bytes"))
        .stdout(predicate::str::contains("Digest: blake3:"));
}

#[test]
fn test_root_flag_and_env() {
    let project = TestProject::deployable();

    deploycheck_cmd()
        .arg("--root")
        .arg(&project.path)
        .arg("check")
        .assert()
        .success();

    deploycheck_cmd()
        .env("DEPLOYCHECK_ROOT", &project.path)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_invalid_root_is_fatal() {
    let project = TestProject::new();

    deploycheck_cmd()
        .arg("--root")
        .arg(project.path.join("does-not-exist"))
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid project root"));
}

#[test]
fn test_explicit_config_file() {
    let project = TestProject::deployable();
    project.write_file(
        "ci/strict.yaml",
        "descriptors:\n  - path: docs/notebooks/kernels.py\n    patterns: ['import pkg']\n",
    );

    deploycheck_cmd()
        .current_dir(&project.path)
        .args(["-c", "ci/strict.yaml", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MissingPattern(import pkg)"))
        .stdout(predicate::str::contains("0 passed, 1 failed"));
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let project = TestProject::deployable();

    deploycheck_cmd()
        .current_dir(&project.path)
        .args(["--config", "nope.yaml", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let project = TestProject::new();
    project.write_file("deploycheck.yaml", "artifacts: [\n");

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_builtin_configuration_checks_wheel_structure() {
    let project = TestProject::new();
    project.write_wheel(
        "docs/assets/wheels/interactive_functions-latest-py3-none-any.whl",
        &[
            "interactive_functions/__init__.py",
            "interactive_functions-0.1.0.dist-info/METADATA",
        ],
    );
    let notebook = r#"
import sys
if sys.platform == "emscripten":
    wheel_url = urljoin(base_href, "assets/wheels/interactive_functions-latest-py3-none-any.whl")
    await micropip.install(wheel_url)
import interactive_functions
"#;
    project.write_file("dispersal_kernels_marimo.py", notebook);
    project.write_file("diminishing_marimo.py", notebook);

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("wheel structure"))
        .stdout(predicate::str::contains("url join"))
        .stdout(predicate::str::contains("5 passed, 0 failed"));
}

#[test]
fn test_builtin_configuration_rejects_corrupted_wheel() {
    let project = TestProject::new();
    project.write_bytes(
        "docs/assets/wheels/interactive_functions-latest-py3-none-any.whl",
        b"not a zip",
    );

    deploycheck_cmd()
        .current_dir(&project.path)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InvalidArchive"));
}
