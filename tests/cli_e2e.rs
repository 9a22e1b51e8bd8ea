//! End-to-end CLI tests for slackpick.
//!
//! These tests run the actual binary and check stdout, stderr, and the exit
//! status.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let mixed = r#"[
  {"user_profile": {"display_name": "Alice"}, "text": "hello"},
  {"user_profile": {"display_name": "Alice"}, "text": "<http://x.com>"},
  {"user_profile": {"display_name": "Bob"}, "text": "hi"}
]"#;
    fs::write(dir.path().join("mixed.json"), mixed).unwrap();

    fs::write(
        dir.path().join("day1.json"),
        r#"[{"user_profile": {"display_name": "Alice"}, "text": "first"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("day2.json"),
        r#"[{"user_profile": {"display_name": "Alice"}, "text": "second"}]"#,
    )
    .unwrap();

    fs::write(dir.path().join("empty.json"), "[]").unwrap();
    fs::write(dir.path().join("invalid.json"), "{ not json").unwrap();
    fs::write(dir.path().join("object.json"), r#"{"messages": []}"#).unwrap();

    let malformed = r#"[
  42,
  {"text": "no profile"},
  {"user_profile": {"display_name": "Alice"}},
  {"user_profile": {"display_name": "Alice"}, "text": "still here"}
]"#;
    fs::write(dir.path().join("malformed.json"), malformed).unwrap();

    let unicode = r#"[
  {"user_profile": {"display_name": "Алиса"}, "text": "Привет! 🎉"},
  {"user_profile": {"display_name": "Алиса"}, "text": "Line 1\nLine 2"}
]"#;
    fs::write(dir.path().join("unicode.json"), unicode).unwrap();

    fs::write(
        dir.path().join("-old.json"),
        r#"[{"user_profile": {"display_name": "Alice"}, "text": "archived"}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("latin1.json"), b"[{\"text\": \"caf\xe9\"}]").unwrap();

    let many: Vec<String> = (0..20_000)
        .map(|i| format!(r#"{{"user_profile": {{"display_name": "Alice"}}, "text": "line {i}"}}"#))
        .collect();
    fs::write(dir.path().join("many.json"), format!("[{}]", many.join(","))).unwrap();

    dir
}

fn slackpick_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_slackpick"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_selects_author_and_drops_links() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "mixed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("hello\n");
    }

    #[test]
    fn test_other_author() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Bob", fixture(&fixtures, "mixed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("hi\n");
    }

    #[test]
    fn test_two_files_in_given_order() {
        let fixtures = setup_fixtures();
        let day1 = fixture(&fixtures, "day1.json");
        let day2 = fixture(&fixtures, "day2.json");

        slackpick_cmd()
            .args(["Alice", day1.to_str().unwrap(), day2.to_str().unwrap()])
            .assert()
            .success()
            .stdout("first\nsecond\n");

        slackpick_cmd()
            .args(["Alice", day2.to_str().unwrap(), day1.to_str().unwrap()])
            .assert()
            .success()
            .stdout("second\nfirst\n");
    }

    #[test]
    fn test_empty_array_prints_nothing() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "empty.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_unknown_author_prints_nothing() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Mallory", fixture(&fixtures, "mixed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_hyphen_leading_file_name() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .current_dir(fixtures.path())
            .args(["Alice", "-old.json", "day1.json"])
            .assert()
            .success()
            .stdout("archived\nfirst\n");
    }

    #[test]
    fn test_reader_closing_early_is_not_an_error() {
        use std::io::{BufRead, BufReader};
        use std::process::Stdio;

        let fixtures = setup_fixtures();
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_slackpick"))
            .args(["Alice", fixture(&fixtures, "many.json").to_str().unwrap()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let mut first = String::new();
        BufReader::new(child.stdout.take().unwrap())
            .read_line(&mut first)
            .unwrap();
        assert_eq!(first, "line 0\n");

        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        assert!(!String::from_utf8_lossy(&output.stderr).contains("Error"));
    }

    #[test]
    fn test_author_is_case_sensitive() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["alice", fixture(&fixtures, "mixed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("");
    }
}

// ============================================================================
// Malformed Input Tests
// ============================================================================

mod malformed_input {
    use super::*;

    #[test]
    fn test_malformed_records_are_tolerated() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "malformed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("\nstill here\n");
    }

    #[test]
    fn test_empty_author_matches_records_without_profile() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["", fixture(&fixtures, "malformed.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("\nno profile\n");
    }

    #[test]
    fn test_unicode_and_multiline() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Алиса", fixture(&fixtures, "unicode.json").to_str().unwrap()])
            .assert()
            .success()
            .stdout("Привет! 🎉\nLine 1\nLine 2\n");
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        slackpick_cmd()
            .args(["Alice", "/nonexistent/slack/export.json"])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("/nonexistent/slack/export.json"));
    }

    #[test]
    fn test_invalid_json() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "invalid.json").to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("invalid.json"));
    }

    #[test]
    fn test_non_utf8_file_is_parse_error() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "latin1.json").to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Failed to parse"))
            .stderr(predicate::str::contains("Cannot read").not());
    }

    #[test]
    fn test_top_level_object() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args(["Alice", fixture(&fixtures, "object.json").to_str().unwrap()])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("expected a JSON array"));
    }

    #[test]
    fn test_good_file_then_bad_file_prints_nothing() {
        let fixtures = setup_fixtures();

        slackpick_cmd()
            .args([
                "Alice",
                fixture(&fixtures, "mixed.json").to_str().unwrap(),
                fixture(&fixtures, "missing.json").to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("missing.json"));
    }

    #[test]
    fn test_no_arguments() {
        slackpick_cmd()
            .assert()
            .failure()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("Usage error"));
    }

    #[test]
    fn test_author_without_files() {
        slackpick_cmd()
            .arg("Alice")
            .assert()
            .failure()
            .code(2)
            .stdout("");
    }
}
