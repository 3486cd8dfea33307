// Chunk: docs/chunks/outline_panel - Outline panel lifecycle, rendering and commands

//! codemap: a live code map panel for split-pane editors.
//!
//! The outline lists the active document's symbols in a dedicated column of
//! the window, highlights the symbols under the carets, and links every entry
//! back to its source. The crate never talks to a concrete editor: hosts
//! implement the traits in [`host`] and forward their events to [`events`].
//!
//! # Overview
//!
//! - [`PanelManager`] shows, hides, toggles and restores one panel per
//!   window, carving its column with [`codemap_layout::compute_expanded_layout`]
//!   and persisting the chosen group through a [`LayoutStateStore`].
//! - [`OutlineRenderer`] turns a document into [`OutlineContent`], using
//!   [`codemap_symbols::ActiveSymbolTracker`] for highlighting and
//!   [`codemap_symbols::IndentResolver`] for nesting.
//! - [`Command`] is the user-facing command surface; outline links carry
//!   commands as `codemap:` URLs.
//! - [`memory_host`] is a complete in-memory host.
//!
//! # Example
//!
//! ```
//! use codemap::memory_host::{MemoryDocument, MemoryWindow};
//! use codemap::{PanelManager, Window};
//!
//! let mut window = MemoryWindow::new(1);
//! window.open_document(MemoryDocument::new(7, "fn main() {}\n"));
//!
//! let mut manager = PanelManager::in_memory();
//! let panel = manager.show(&mut window).unwrap();
//! assert_eq!(window.group_count(), 2);
//! assert_eq!(window.panel_group(panel), Some(1));
//!
//! manager.hide(&mut window, None).unwrap();
//! assert_eq!(window.group_count(), 1);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod memory_host;
pub mod panel;
pub mod render;
pub mod state_store;

pub use command::{goto_reference, goto_symbol, move_to_adjacent_symbol, Command};
pub use config::{settings_file_path, OutlineConfig, PanelPosition};
pub use error::{
    CommandUrlError, ConfigError, OutlineError, OutlineResult, RestoreSkip, StateStoreError,
};
pub use host::{Document, DocumentId, Host, PanelId, Window, WindowId};
pub use panel::{PanelManager, Toggled};
pub use render::{OutlineContent, OutlineEntry, OutlineRenderer};
pub use state_store::{FileStateStore, LayoutStateStore, MemoryStateStore};
