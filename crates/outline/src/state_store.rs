// Chunk: docs/chunks/outline_layout_persistence - Persisted outline group per window
//!
//! Persistence of the outline panel's group per window.
//!
//! When a panel is shown its group index is recorded for the window; when it
//! is hidden the record is erased. On the next launch the record tells
//! `restore_on_window_open` which (now empty) group to rebind the panel to.
//!
//! ## File Location
//!
//! [`FileStateStore`] keeps the records in `<data dir>/codemap/layout_state.json`
//! (`~/Library/Application Support/codemap/layout_state.json` on macOS).
//!
//! ## Schema Version
//!
//! The file carries a schema version. A file with another version is
//! discarded (graceful degradation to "nothing to restore").

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::APP_NAME;
use crate::error::StateStoreError;
use crate::host::WindowId;

/// Current schema version for the state file.
const SCHEMA_VERSION: u32 = 1;

/// State file name.
const STATE_FILENAME: &str = "layout_state.json";

/// Durable per-window record of the outline's group.
pub trait LayoutStateStore {
    fn get(&self, window: WindowId) -> Option<usize>;

    fn set(&mut self, window: WindowId, group: usize);

    fn erase(&mut self, window: WindowId);
}

// =============================================================================
// MemoryStateStore
// =============================================================================

/// In-process store, for tests and hosts that persist window settings
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    groups: HashMap<WindowId, usize>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStateStore for MemoryStateStore {
    fn get(&self, window: WindowId) -> Option<usize> {
        self.groups.get(&window).copied()
    }

    fn set(&mut self, window: WindowId, group: usize) {
        self.groups.insert(window, group);
    }

    fn erase(&mut self, window: WindowId) {
        self.groups.remove(&window);
    }
}

// =============================================================================
// FileStateStore
// =============================================================================

/// Root structure of the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutStateData {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Outline group per window id.
    pub groups: BTreeMap<WindowId, usize>,
}

impl Default for LayoutStateData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            groups: BTreeMap::new(),
        }
    }
}

/// JSON-file-backed store. Every mutation is written through.
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    data: LayoutStateData,
}

impl FileStateStore {
    /// Opens the store at `path`, starting empty if the file is missing,
    /// unreadable, or from another schema version.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match read_state(&path) {
            Ok(Some(data)) => data,
            Ok(None) => LayoutStateData::default(),
            Err(e) => {
                tracing::warn!(?path, error = %e, "discarding outline layout state");
                LayoutStateData::default()
            }
        };
        Self { path, data }
    }

    /// Opens the store at the platform location, creating its directory.
    ///
    /// Returns `None` if the data directory cannot be determined or created.
    pub fn open_default() -> Option<Self> {
        let app_dir = dirs::data_dir()?.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            tracing::warn!(?app_dir, error = %e, "failed to create state directory");
            return None;
        }
        Some(Self::open(app_dir.join(STATE_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the state file.
    ///
    /// Uses atomic write (write to temp file, then rename) to prevent
    /// corruption.
    pub fn save(&self) -> Result<(), StateStoreError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn write_through(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(path = ?self.path, error = %e, "failed to save outline layout state");
        }
    }
}

impl LayoutStateStore for FileStateStore {
    fn get(&self, window: WindowId) -> Option<usize> {
        self.data.groups.get(&window).copied()
    }

    fn set(&mut self, window: WindowId, group: usize) {
        self.data.groups.insert(window, group);
        self.write_through();
    }

    fn erase(&mut self, window: WindowId) {
        if self.data.groups.remove(&window).is_some() {
            self.write_through();
        }
    }
}

/// Reads the state file. `Ok(None)` means there is no file.
fn read_state(path: &Path) -> Result<Option<LayoutStateData>, StateStoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let data: LayoutStateData = serde_json::from_str(&contents)?;
    if data.schema_version != SCHEMA_VERSION {
        return Err(StateStoreError::SchemaMismatch {
            expected: SCHEMA_VERSION,
            found: data.schema_version,
        });
    }

    Ok(Some(data))
}
