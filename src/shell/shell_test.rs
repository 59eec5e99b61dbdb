// Tests for the shell front end
// Drives whole sessions from in-memory input and inspects output and the file on disk

use super::*;
use crate::events::{ChannelEventEmitter, StatusKind};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use tempfile::TempDir;

/// Run a full session over `input` against the dictionary at `path`
fn run_session(path: PathBuf, input: &str) -> (String, Shell<&[u8], Vec<u8>>) {
    let (tx, rx) = mpsc::channel();
    let mut store = DictionaryStore::new(path).with_emitter(Arc::new(ChannelEventEmitter::new(tx)));
    let _ = store.load();

    let mut shell = Shell::new(store, rx, RecentList::default(), input.as_bytes(), Vec::new());
    shell.run().unwrap();

    let output = String::from_utf8(shell.output.clone()).unwrap();
    (output, shell)
}

#[test]
fn test_not_found_term_prefills_next_add() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (output, shell) = run_session(path.clone(), "猫\n+ = cat\n猫\n:quit\n");

    assert!(output.contains("not found"));
    assert!(output.contains(StatusKind::NotFound.default_message()));
    assert!(output.contains("> cat\n"));
    assert_eq!(shell.prefill(), None);
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(saved, serde_json::json!({"猫": "cat"}));
}

#[test]
fn test_lookup_existing_dictionary() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");
    std::fs::write(&path, r#"{"猫": "cat", "狗": "dog"}"#).unwrap();

    let (output, shell) = run_session(path, "狗\n");

    assert!(output.contains("Dictionary loaded"));
    assert!(output.contains("> dog\n"));
    assert_eq!(shell.store().len(), 2);
}

#[test]
fn test_duplicate_prompt_declined() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (output, shell) = run_session(path, "+ 猫 = cat\n+ 貓 = cat\nn\n");

    assert!(output.contains("[y/N]"));
    assert!(output.contains("Add cancelled"));
    assert!(!shell.store().has_source("貓"));
    assert_eq!(shell.recent().len(), 1);
}

#[test]
fn test_duplicate_prompt_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (_output, shell) = run_session(path, "+ 猫 = cat\n+ 貓 = cat\ny\n:recent\n");

    assert!(shell.store().has_source("貓"));
    let recent: Vec<&str> = shell.recent().items().collect();
    assert_eq!(recent, vec!["貓 – cat", "猫 – cat"]);
}

#[test]
fn test_duplicate_prompt_at_end_of_input_declines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (_output, shell) = run_session(path, "+ 猫 = cat\n+ 貓 = cat\n");

    assert!(!shell.store().has_source("貓"));
}

#[test]
fn test_add_without_prefill_is_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (output, shell) = run_session(path.clone(), "+ = dog\n");

    assert!(output.contains("Empty input"));
    assert!(shell.store().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_overwrite_reports_previous_translation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (output, shell) = run_session(path, "+ 猫 = cat\n+ 猫 = kitty\n");

    assert!(output.contains("猫 was \"cat\", now \"kitty\""));
    assert_eq!(shell.store().len(), 1);
}

#[test]
fn test_recent_and_unknown_commands() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (output, _shell) = run_session(path, ":recent\n:bogus\n:help\n");

    assert!(output.contains("(nothing added yet)"));
    assert!(output.contains("Unknown command :bogus"));
    assert!(output.contains("+ <source> = <target>"));
}

#[test]
fn test_quit_stops_reading() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");

    let (_output, shell) = run_session(path, ":quit\n+ 猫 = cat\n");

    assert!(shell.store().is_empty());
}

#[test]
fn test_escaped_term_is_looked_up() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dic.json");
    std::fs::write(&path, r#"{"+1": "plus one"}"#).unwrap();

    let (_output, shell) = run_session(path, "\\+1\n");

    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("> plus one\n"));
}
