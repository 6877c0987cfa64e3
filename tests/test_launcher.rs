//! Entry point launch tests
mod common;

use predicates::prelude::*;

use common::{TestEnv, REGULAR_GRAMMAR, REGULAR_SESSION};

// ============================================================================
// Argument Handling
// ============================================================================

#[test]
fn test_empty_arguments_have_defined_status() {
    // No arguments and no input: the routine asks for terminals and hits EOF
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected end of input"));
}

#[test]
fn test_empty_arguments_with_complete_input_succeed() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin(format!("{}ab\n", REGULAR_SESSION))
        .assert()
        .success()
        .stdout(predicate::str::contains("Derivation steps:\nS\naA\nab\n"));
}

// ============================================================================
// Manifest Resolution
// ============================================================================

#[test]
fn test_missing_entry_point_fails_fast() {
    let env = TestEnv::new().with_config("[launcher]\nentry = \"com.example.Missing\"\n");
    env.cmd()
        .write_stdin(REGULAR_SESSION)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("entry point not found"))
        .stderr(predicate::str::contains("Missing"));
}

#[test]
fn test_missing_entry_point_ignores_arguments() {
    let env = TestEnv::new().with_config("[launcher]\nentry = \"com.example.Missing\"\n");
    let path = env.grammar_file("g.toml", REGULAR_GRAMMAR);
    env.cmd()
        .arg(&path)
        .arg("--help")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("com.example.Missing"));
}

#[test]
fn test_declared_builtin_entry_runs() {
    let env = TestEnv::new().with_config("[launcher]\nentry = \"grammar_validator::core::run\"\n");
    let path = env.grammar_file("g.toml", REGULAR_GRAMMAR);
    env.cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("It's type 3"));
}

#[test]
fn test_invalid_config_falls_back_to_builtin_entry() {
    let env = TestEnv::new().with_config("[launcher\nentry = ");
    let path = env.grammar_file("g.toml", REGULAR_GRAMMAR);
    env.cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("It's type 3"))
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_launches_are_identical() {
    let env = TestEnv::new();
    let path = env.grammar_file("g.toml", REGULAR_GRAMMAR);

    let runs: Vec<_> = (0..3)
        .map(|_| {
            env.cmd()
                .arg(&path)
                .args(["-d", "abb"])
                .output()
                .expect("Failed to run binary")
        })
        .collect();

    for run in &runs[1..] {
        assert_eq!(run.status.code(), runs[0].status.code());
        assert_eq!(run.stdout, runs[0].stdout);
    }
    assert_eq!(runs[0].status.code(), Some(0));
}

#[test]
fn test_repeated_failed_launches_are_identical() {
    let env = TestEnv::new().with_config("[launcher]\nentry = \"com.example.Missing\"\n");
    for _ in 0..3 {
        env.cmd().assert().code(1).stderr(predicate::str::contains("Missing"));
    }
}
