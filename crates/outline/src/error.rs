// Chunk: docs/chunks/outline_panel - Outline panel lifecycle, rendering and commands

//! Error types.
//!
//! Lifecycle and command failures are structural no-ops: nothing happened,
//! and the caller usually ignores them (toggling an already-correct state is
//! routine). Persistence and settings failures degrade to defaults and are
//! logged where they happen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::host::{DocumentId, PanelId, WindowId};

pub type OutlineResult<T> = Result<T, OutlineError>;

/// Why an outline operation did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    #[error("no window has focus")]
    NoActiveWindow,

    #[error("window {0} does not exist")]
    NoWindow(WindowId),

    #[error("window has no active document")]
    NoActiveDocument,

    #[error("document {0} is not open in any window")]
    DocumentNotFound(DocumentId),

    #[error("window has no outline panel")]
    NoPanel,

    #[error("outline panel {0} was closed outside the manager")]
    StalePanel(PanelId),

    #[error("document has no symbols")]
    NoSymbols,

    #[error("restore skipped: {0}")]
    RestoreSkipped(RestoreSkip),
}

/// Why `restore_on_window_open` left a window alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreSkip {
    #[error("no persisted group")]
    NothingPersisted,

    #[error("persisted group {group} out of range ({count} groups)")]
    GroupOutOfRange { group: usize, count: usize },

    #[error("persisted group {0} is not empty")]
    GroupOccupied(usize),
}

impl From<RestoreSkip> for OutlineError {
    fn from(skip: RestoreSkip) -> Self {
        OutlineError::RestoreSkipped(skip)
    }
}

/// A `codemap:` URL could not be turned back into a command.
#[derive(Debug, Error)]
pub enum CommandUrlError {
    #[error("not a codemap command url")]
    WrongScheme,

    #[error("malformed command: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("panel width {0} is not between 0 and 1")]
    InvalidWidth(f64),
}

/// The persisted layout state could not be written or read.
#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to encode layout state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout state schema version mismatch (expected {expected}, got {found})")]
    SchemaMismatch { expected: u32, found: u32 },
}
