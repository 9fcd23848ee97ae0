use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storylink_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("storylink"));
    cmd.env_remove("STORYLINK_API_URL")
        .env_remove("JIRA_BASE_URL")
        .env_remove("JIRA_EMAIL")
        .env_remove("JIRA_API_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

const ADF_DESCRIPTION: &str = r#"{
  "type": "doc",
  "version": 1,
  "content": [
    {"type": "paragraph", "content": [{"type": "text", "text": "As a shopper I want a receipt"}]},
    {"type": "paragraph", "content": [
      {"type": "text", "text": "Acceptance Criteria:"},
      {"type": "hardBreak"},
      {"type": "text", "text": "Given a paid order"},
      {"type": "hardBreak"},
      {"type": "text", "text": "Then a receipt is emailed"}
    ]},
    {"type": "paragraph", "content": [{"type": "text", "text": "Out of scope: refunds"}]}
  ]
}"#;

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    storylink_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jira"));
}

#[test]
fn test_version() {
    storylink_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storylink"));
}

// =============================================================================
// Convert
// =============================================================================

#[test]
fn test_convert_adf_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("description.json");
    std::fs::write(&path, ADF_DESCRIPTION).unwrap();

    storylink_cmd()
        .arg("convert")
        .arg(&path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("As a shopper I want a receipt"))
        .stdout(predicate::str::contains(
            "Given a paid order\nThen a receipt is emailed",
        ));
}

#[test]
fn test_convert_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("description.json");
    std::fs::write(&path, ADF_DESCRIPTION).unwrap();

    let output = storylink_cmd()
        .args(["convert", "--json"])
        .arg(&path)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["acceptanceCriteria"],
        "Given a paid order\nThen a receipt is emailed"
    );
    assert_eq!(
        value["description"],
        "As a shopper I want a receipt\nAcceptance Criteria:\nGiven a paid order\nThen a receipt is emailed\nOut of scope: refunds"
    );
}

#[test]
fn test_convert_plain_text_from_stdin_falls_back_to_whole_text() {
    let temp_dir = TempDir::new().unwrap();

    storylink_cmd()
        .args(["convert", "--json", "-"])
        .current_dir(temp_dir.path())
        .write_stdin("just some notes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""acceptanceCriteria": "just some notes""#,
        ));
}

#[test]
fn test_convert_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    storylink_cmd()
        .args(["convert", "nope.json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read description"));
}

// =============================================================================
// API commands
// =============================================================================

#[test]
fn test_generate_requires_title_or_story() {
    let temp_dir = TempDir::new().unwrap();

    storylink_cmd()
        .args(["generate", "--criteria", "- works"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn test_stories_against_unreachable_api_fails() {
    let temp_dir = TempDir::new().unwrap();

    storylink_cmd()
        .args(["stories", "--api-url", "http://127.0.0.1:1/api"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".storylink.toml"), "[server\n").unwrap();

    storylink_cmd()
        .arg("stories")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load storylink configuration"));
}
