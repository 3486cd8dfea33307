// Chunk: docs/chunks/outline_layout_persistence - Integration test for persisted outline groups
//!
//! Integration tests for the file-backed layout state store.
//!
//! These tests verify end-to-end persistence by:
//! 1. Showing outlines with a manager backed by a state file in a temp directory
//! 2. Dropping the manager (the "restart")
//! 3. Opening a fresh manager on the same file
//! 4. Verifying windows get their outline back in the remembered group

use std::fs;
use tempfile::TempDir;

use codemap::memory_host::{MemoryDocument, MemoryWindow};
use codemap::{
    FileStateStore, LayoutStateStore, OutlineConfig, OutlineError, PanelManager, RestoreSkip,
    Window,
};
use codemap_symbols::IndentResolver;

fn manager_with_file(store: FileStateStore) -> PanelManager {
    PanelManager::new(OutlineConfig::default(), IndentResolver::new(), Box::new(store))
}

fn window(id: u64) -> MemoryWindow {
    let mut window = MemoryWindow::new(id);
    window.open_document(MemoryDocument::new(id * 10, "fn main() {}\n"));
    window
}

#[test]
fn test_outline_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");

    // First session: show the outline in window 1, leave window 2 alone.
    let mut first = window(1);
    let layout = {
        let mut manager = manager_with_file(FileStateStore::open(&path));
        manager.show(&mut first).unwrap();
        first.layout()
    };
    assert!(path.exists());

    // Second session: the host re-creates the window grid without panels.
    let mut reopened = MemoryWindow::new(1).with_layout(layout.clone());
    reopened.open_document_in(MemoryDocument::new(10, "fn main() {}\n"), 0);
    let mut untouched = window(2);

    let mut manager = manager_with_file(FileStateStore::open(&path));
    let panel = manager.restore_on_window_open(&mut reopened).unwrap();

    assert_eq!(reopened.panel_group(panel), Some(1));
    assert_eq!(reopened.layout(), layout);
    assert_eq!(
        manager.restore_on_window_open(&mut untouched),
        Err(OutlineError::RestoreSkipped(RestoreSkip::NothingPersisted))
    );
}

#[test]
fn test_hide_erases_record_on_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");

    let mut win = window(1);
    {
        let mut manager = manager_with_file(FileStateStore::open(&path));
        manager.show(&mut win).unwrap();
        manager.hide(&mut win, None).unwrap();
    }

    let store = FileStateStore::open(&path);
    assert_eq!(store.get(1), None);
}

#[test]
fn test_records_are_per_window() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");

    {
        let mut store = FileStateStore::open(&path);
        store.set(1, 1);
        store.set(2, 3);
        store.set(1, 2);
    }

    let store = FileStateStore::open(&path);
    assert_eq!(store.get(1), Some(2));
    assert_eq!(store.get(2), Some(3));
    assert_eq!(store.get(3), None);
}

#[test]
fn test_missing_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = FileStateStore::open(temp.path().join("nothing_here.json"));
    assert_eq!(store.get(1), None);
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");
    fs::write(&path, "{ this is not json").unwrap();

    let mut store = FileStateStore::open(&path);
    assert_eq!(store.get(1), None);

    // The next write replaces the corrupt file.
    store.set(1, 1);
    assert_eq!(FileStateStore::open(&path).get(1), Some(1));
}

#[test]
fn test_schema_mismatch_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");
    fs::write(&path, r#"{"schema_version":99,"groups":{"1":1}}"#).unwrap();

    let store = FileStateStore::open(&path);
    assert_eq!(store.get(1), None);
}

#[test]
fn test_save_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("layout_state.json");

    let mut store = FileStateStore::open(&path);
    store.set(5, 1);

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"schema_version\": 1"));
}

#[test]
fn test_unwritable_location_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing_dir").join("layout_state.json");

    let mut manager = manager_with_file(FileStateStore::open(&path));
    let mut win = window(1);

    assert!(manager.show(&mut win).is_ok());
    assert!(manager.hide(&mut win, None).is_ok());
    assert!(!path.exists());
}
