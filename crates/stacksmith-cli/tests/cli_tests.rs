//! Binary-level tests. Generation stages that shell out (frontend,
//! backend) stay disabled so the tests never require npm or maven.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KEYS: &[(&str, &str)] = &[
    ("PROJECT_NAME", "Demo"),
    ("PROJECT_DESCRIPTION", "A demo project"),
    ("BACKEND_TYPE", "node"),
    ("BACKEND_PORT", "3000"),
    ("BE_VERSION", "0.0.1"),
    ("GROUP_ID", "com.example"),
    ("JAVA_VERSION", "17"),
    ("SPRINGBOOT_VERSION", "3.2.4"),
    ("SWAGGER_VERSION", "2.5.0"),
    ("DATABASE_TYPE", "postgres"),
    ("DATABASE_PORT", "5432"),
    ("DATABASE_USR", "demo_user"),
    ("DATABASE_PASSWORD", "demo_pass"),
    ("DATABASE_NAME", "demo_db"),
    ("DATABASE_HOST", "localhost"),
    ("DATABASE_URI", "mongodb://localhost:27017/demo_db"),
    ("FRONTEND_PORT", "4200"),
    ("ANGULAR_VERSION", "17"),
    ("UI_LIBRARY", "none"),
    ("LOG_LEVEL", "info"),
    ("COMMAND_TIMEOUT_SECS", "300"),
    ("ENABLE_GENERATE_FRONTEND", "false"),
    ("ENABLE_GENERATE_BACKEND", "false"),
    ("ENABLE_GENERATE_DOCKER", "true"),
    ("ENABLE_GENERATE_README", "true"),
    ("ENABLE_ACTUATOR", "false"),
    ("ENABLE_LOMBOK", "false"),
    ("ENABLE_VALIDATOR", "false"),
    ("ENABLE_SWAGGER", "false"),
    ("ENABLE_SAMPLES", "true"),
];

/// A command with a clean environment, a scratch working directory, and
/// the full key set pointing OUTPUT_ROOT into that directory.
fn configured_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stacksmith").unwrap();
    cmd.env_clear()
        .current_dir(dir.path())
        .env("OUTPUT_ROOT", dir.path());
    for (key, value) in KEYS {
        cmd.env(key, value);
    }
    cmd
}

#[test]
fn help_describes_the_single_command_surface() {
    let mut cmd = Command::cargo_bin("stacksmith").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("NAME"));
}

#[test]
fn version_flag_works() {
    let mut cmd = Command::cargo_bin("stacksmith").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stacksmith"));
}

#[test]
fn missing_configuration_exits_4_and_lists_keys() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("stacksmith").unwrap();
    cmd.env_clear()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("PROJECT_NAME"))
        .stderr(predicate::str::contains("DATABASE_TYPE"));
}

#[test]
fn dry_run_prints_the_plan_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    configured_cmd(&dir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"project\": \"Demo\""))
        .stdout(predicate::str::contains("\"backend\": \"node\""))
        .stdout(predicate::str::contains("\"database\": \"postgres\""));

    assert!(!dir.path().join("Demo").exists());
}

#[test]
fn dry_run_masks_the_database_password() {
    let dir = TempDir::new().unwrap();
    configured_cmd(&dir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("demo_pass").not());
}

#[test]
fn unknown_database_exits_2() {
    let dir = TempDir::new().unwrap();
    configured_cmd(&dir)
        .env("DATABASE_TYPE", "oracle")
        .arg("--dry-run")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("oracle"));
}

#[test]
fn docker_and_readme_stages_write_real_files() {
    let dir = TempDir::new().unwrap();
    configured_cmd(&dir).assert().success();

    let root = dir.path().join("Demo");
    let compose = std::fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("demobe:"));
    assert!(compose.contains("demo-network"));
    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("# Demo"));

    // Lock released after the run.
    assert!(!dir.path().join("Demo.lock").exists());
}

#[test]
fn positional_name_overrides_project_name() {
    let dir = TempDir::new().unwrap();
    let mut cmd = configured_cmd(&dir);
    cmd.env_remove("PROJECT_NAME");
    cmd.arg("Renamed").assert().success();

    let compose =
        std::fs::read_to_string(dir.path().join("Renamed/docker-compose.yml")).unwrap();
    assert!(compose.contains("renamedbe:"));
    assert!(compose.contains("renamed-network"));
}

#[test]
fn quiet_suppresses_the_success_line() {
    let dir = TempDir::new().unwrap();
    configured_cmd(&dir)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn stale_lock_file_exits_2_with_a_hint() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Demo.lock"), "pid=1\n").unwrap();

    configured_cmd(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("locked"));
}
