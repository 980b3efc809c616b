//! Tests for the file and clipboard export paths.
mod common;
use calbridge::export::{ClipboardBackend, Osc52Clipboard, copy_text_with};
use calbridge::export::clipboard::{ClipboardCommand, SystemClipboard};
use calbridge::prelude::*;
use common::*;
use std::fs;

#[test]
fn test_download_writes_parseable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflow.json");
    let doc = fixed_document(None);

    let written = download(&doc, Some(path.as_path())).unwrap();
    assert_eq!(written, path);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, doc.to_json_pretty().unwrap());
    assert_eq!(WorkflowDocument::from_json(&content).unwrap(), doc);
}

#[test]
fn test_download_accepts_any_serializable_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    download(&full_config(), Some(path.as_path())).unwrap();

    let parsed = SyncConfig::from_file(&path).unwrap();
    assert_eq!(parsed, full_config());
}

#[test]
fn test_download_reports_host_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("workflow.json");
    let err = download(&generate(None), Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.to_string().contains("workflow.json"));
}

#[test]
fn test_default_filename() {
    assert_eq!(DEFAULT_WORKFLOW_FILENAME, "google-zoho-calendar-sync.json");
}

#[test]
fn test_setup_guide_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.txt");
    write_setup_guide(Some(path.as_path())).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), setup_guide());
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sync.json");
    fs::write(&path, FULL_CONFIG_JSON).unwrap();
    assert_eq!(SyncConfig::from_file(&path).unwrap(), full_config());

    let err = SyncConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_copy_falls_back_when_primary_is_unavailable() {
    let mut primary = SystemClipboard::with_commands(vec![ClipboardCommand::new(
        "calbridge-no-such-clipboard-tool",
        &[],
    )]);
    let mut fallback = Osc52Clipboard::new(Vec::new());
    let json = generate(None).to_json_pretty().unwrap();

    assert!(copy_text_with(&mut primary, &mut fallback, &json));

    let emitted = String::from_utf8(fallback.into_inner()).unwrap();
    assert!(emitted.starts_with("\x1b]52;c;"));
    assert!(emitted.ends_with('\x07'));
}

struct BrokenWriter;

impl std::io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_copy_reports_false_when_everything_fails() {
    let mut primary = SystemClipboard::with_commands(Vec::new());
    let mut fallback = Osc52Clipboard::new(BrokenWriter);
    assert!(fallback.write_text("x").is_err());
    assert!(!copy_text_with(&mut primary, &mut fallback, "x"));
}
