//! End-to-end CLI tests for chatstats.
//!
//! These tests run the actual binary with various arguments and check what
//! it prints and writes.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Table report on the terminal
//! - **Output formats**: CSV, JSON, JSONL to stdout and to files
//! - **Windows**: `--window`, `--show-silent`, `--sort`
//! - **Error handling**: Proper error messages for bad input
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

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("chat.txt"),
        "01.01.24, 10:00 - Alice: hello\n\
         01.01.24, 10:01 - Bob: hi there\n\
         02.01.24, 09:00 - Alice: second message\n\
         15/3/23, 8:5 - Carol joined using this group's invite link\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("custom.txt"),
        "01.01.24, 10:00 - Lucía se unió usando el enlace de invitación\n\
         01.01.24, 10:01 - Pablo: hola\n",
    )
    .unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("binary.txt"), [0xFF_u8, 0xFE, 0x00, 0x80]).unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_table_report() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Alice"))
            .stdout(predicate::str::contains("66.67%"))
            .stdout(predicate::str::contains("(silent)"))
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("Members:   3"))
            .stdout(predicate::str::contains("Silent:    1"));
    }

    #[test]
    fn test_table_with_dates() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["--dates"])
            .assert()
            .success()
            .stdout(predicate::str::contains("01.01.2024  02.01.2024"));
    }

    #[test]
    fn test_empty_transcript() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "empty.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("(no members)"));
    }

    #[test]
    fn test_extra_join_pattern() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "custom.txt"))
            .args([
                "-f",
                "json",
                "--join-pattern",
                "(?P<subject>.+) se unió usando el enlace de invitación",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalMembers\": 2"))
            .stdout(predicate::str::contains("Lucía"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_json_to_stdout_is_pure_json() {
        let fixtures = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["activeMembers"], 2);
        assert_eq!(report["members"][0]["member"], "Alice");
    }

    #[test]
    fn test_jsonl_to_stdout() {
        let fixtures = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["--format", "ndjson"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 3);
        for line in stdout.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_csv_file_from_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.csv");

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Member;Messages;Share;Silent\n"));
        assert!(content.contains("Alice;2;66.67;false"));
    }

    #[test]
    fn test_explicit_format_wins_over_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.txt");

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args([
                "-f",
                "json",
                "-o",
                output.to_str().unwrap(),
                "--messages",
            ])
            .assert()
            .success();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            report["members"][0]["messages"],
            serde_json::json!(["hello", "second message"])
        );
    }

    #[test]
    fn test_unknown_extension_with_table_format() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.xlsx");

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));

        assert!(!output.exists());
    }
}

// ============================================================================
// Window Tests
// ============================================================================

mod windows {
    use super::*;

    #[test]
    fn test_old_transcript_in_last_week() {
        let fixtures = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args([
                "-w",
                "last-week",
                "--show-silent",
                "-f",
                "json",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["totalMembers"], 3);
        assert_eq!(report["activeMembers"], 0);
        assert_eq!(report["silentMembers"], 3);
        assert_eq!(report["members"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_window_hides_silent_by_default() {
        let fixtures = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["-w", "month", "-f", "jsonl"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_ascending_sort() {
        let fixtures = setup_fixtures();

        let output = chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["--sort", "asc", "-f", "csv"])
            .output()
            .unwrap();

        let stdout = String::from_utf8(output.stdout).unwrap();
        let first_row = stdout.lines().nth(1).unwrap();
        assert!(first_row.starts_with("Carol;0"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatstats_cmd()
            .arg("nonexistent_chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_non_utf8_file() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "binary.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("UTF-8"));
    }

    #[test]
    fn test_unknown_window() {
        chatstats_cmd()
            .args(["chat.txt", "-w", "forever"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("last-3-months"));
    }

    #[test]
    fn test_invalid_join_pattern() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .args(["--join-pattern", "(unclosed"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid membership pattern"));
    }

    #[test]
    fn test_missing_input_argument() {
        chatstats_cmd().assert().failure();
    }

    #[test]
    fn test_invalid_format_option() {
        chatstats_cmd()
            .args(["chat.txt", "-f", "xml"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatstats_cmd()
            .args(["--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatstats"))
            .stdout(predicate::str::contains("--window"))
            .stdout(predicate::str::contains("--show-silent"));
    }

    #[test]
    fn test_version_flag() {
        chatstats_cmd()
            .args(["--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatstats"))
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
