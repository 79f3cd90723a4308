use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn nl_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nl"))
}

fn setup_test_env(links_enabled: bool) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let notes_dir = root.join("notes");
    fs::create_dir_all(notes_dir.join("guides")).unwrap();
    fs::write(
        notes_dir.join("welcome.md"),
        "# Welcome to KB Pro\n\nStart here. Everything else hangs off this note.",
    )
    .unwrap();
    fs::write(
        notes_dir.join("brain.md"),
        "# Second Brain\n\nBuilding a Second Brain is key. See Welcome to KB Pro for intro.",
    )
    .unwrap();
    fs::write(
        notes_dir.join("guides/linking.md"),
        "# Linking\n\nAlready linked: [[Second Brain]]. Also mentions welcome to kb pro.",
    )
    .unwrap();

    fs::write(
        root.join("notes.json"),
        r#"[
  {
    "id": "json-1",
    "title": "Tagged Idea",
    "content": "An idea from the browser build about zettelkasten.",
    "tags": ["idea", "inbox"],
    "properties": {"status": "draft"},
    "created_at": "2024-02-01T10:00:00Z",
    "updated_at": "2024-02-01T10:00:00Z"
  },
  {
    "id": "json-2",
    "title": "Old Idea",
    "content": "Older thoughts.",
    "tags": ["idea"],
    "created_at": "2023-01-01T10:00:00Z",
    "updated_at": "2023-01-01T10:00:00Z"
  }
]"#,
    )
    .unwrap();

    let config_content = format!(
        r#"[search]
default_limit = 10

[links]
enabled = {}

[connectors.filesystem]
root = "{}/notes"
include_globs = ["**/*.md"]

[connectors.json]
path = "{}/notes.json"
"#,
        links_enabled,
        root.display(),
        root.display()
    );

    let config_path = config_dir.join("nl.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_nl(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = nl_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run nl binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn run_json(config_path: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, success) = run_nl(config_path, args);
    assert!(success, "command failed: stdout={}, stderr={}", stdout, stderr);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("invalid JSON output ({}): {}", e, stdout))
}

#[test]
fn test_sources_reports_healthy_connectors() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, stderr, success) = run_nl(&config_path, &["sources"]);
    assert!(success, "sources failed: {}", stderr);
    assert!(stdout.contains("filesystem"));
    assert!(stdout.contains("json"));
    assert!(!stdout.contains("MISSING"));
}

#[test]
fn test_search_ranks_title_matches_first() {
    let (_tmp, config_path) = setup_test_env(true);
    let results = run_json(&config_path, &["search", "second", "--json"]);
    let results = results.as_array().unwrap();

    assert_eq!(results[0]["note_id"], "brain.md");
    assert_eq!(results[0]["relevance_score"], 1.0);
    assert_eq!(results[1]["note_id"], "guides/linking.md");
    assert_eq!(results[1]["relevance_score"], 0.5);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_search_single_char_query_is_empty() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, _, success) = run_nl(&config_path, &["search", "s"]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_tag_filter_uses_json_notes() {
    let (_tmp, config_path) = setup_test_env(true);
    let results = run_json(
        &config_path,
        &["search", "idea", "--tag", "inbox", "--json"],
    );
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["note_id"], "json-1");
}

#[test]
fn test_suggest_titles() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, _, success) = run_nl(&config_path, &["suggest", "sec"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Second Brain");

    let (stdout, _, success) = run_nl(&config_path, &["suggest", "secondbrain"]);
    assert!(success);
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_links_suggests_mentioned_titles() {
    let (_tmp, config_path) = setup_test_env(true);
    let suggestions = run_json(&config_path, &["links", "brain.md", "--json"]);
    let suggestions = suggestions.as_array().unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["source_id"], "brain.md");
    assert_eq!(suggestions[0]["target_id"], "welcome.md");
    assert_eq!(suggestions[0]["target_title"], "Welcome to KB Pro");
    assert_eq!(suggestions[0]["confidence"], 0.85);
}

#[test]
fn test_links_skips_already_linked_targets() {
    let (_tmp, config_path) = setup_test_env(true);
    let suggestions = run_json(&config_path, &["links", "guides/linking.md", "--json"]);
    let targets: Vec<&str> = suggestions
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["target_id"].as_str().unwrap())
        .collect();
    assert_eq!(targets, vec!["welcome.md"]);
}

#[test]
fn test_links_disabled_by_config() {
    let (_tmp, config_path) = setup_test_env(false);
    let (_, stderr, success) = run_nl(&config_path, &["links", "brain.md"]);
    assert!(!success);
    assert!(stderr.contains("disabled"));
}

#[test]
fn test_links_unknown_note() {
    let (_tmp, config_path) = setup_test_env(true);
    let (_, stderr, success) = run_nl(&config_path, &["links", "nope.md"]);
    assert!(!success);
    assert!(stderr.contains("note not found"));
}

#[test]
fn test_backlinks() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, _, success) = run_nl(&config_path, &["backlinks", "brain.md"]);
    assert!(success);
    assert!(stdout.contains("guides/linking.md"));

    let (stdout, _, success) = run_nl(&config_path, &["backlinks", "welcome.md"]);
    assert!(success);
    assert!(stdout.contains("No backlinks."));
}

#[test]
fn test_filter_by_tag_and_date() {
    let (_tmp, config_path) = setup_test_env(true);
    let found = run_json(
        &config_path,
        &["filter", "--tag", "idea", "--since", "2024-01-01", "--json"],
    );
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], "json-1");
}

#[test]
fn test_filter_by_property() {
    let (_tmp, config_path) = setup_test_env(true);
    let found = run_json(
        &config_path,
        &["filter", "--property", "status=draft", "--json"],
    );
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], "json-1");
    assert_eq!(found[0]["properties"]["status"], "draft");
}

#[test]
fn test_filter_orphans() {
    let (_tmp, config_path) = setup_test_env(true);
    let found = run_json(&config_path, &["filter", "--has-backlinks", "true", "--json"]);
    let ids: Vec<&str> = found
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["brain.md"]);
}

#[test]
fn test_get_prints_metrics() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, stderr, success) = run_nl(&config_path, &["get", "guides/linking.md"]);
    assert!(success, "get failed: {}", stderr);
    assert!(stdout.contains("title:        Linking"));
    assert!(stdout.contains("folder:       guides"));
    assert!(stdout.contains("links:        Second Brain"));
    assert!(stdout.contains("reading time: 1 min"));
}

#[test]
fn test_stats() {
    let (_tmp, config_path) = setup_test_env(true);
    let (stdout, _, success) = run_nl(&config_path, &["stats"]);
    assert!(success);
    assert!(stdout.contains("Notes:        5"));
    assert!(stdout.contains("idea"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_nl(&tmp.path().join("missing.toml"), &["stats"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"));
}
