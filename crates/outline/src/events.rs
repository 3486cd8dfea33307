// Chunk: docs/chunks/outline_panel - Outline panel lifecycle, rendering and commands

//! Host event hooks.
//!
//! Hosts call these from their event dispatch. Each runs synchronously and
//! to completion; renders are cheap enough to redo on every selection change.

use crate::host::{Host, Window};
use crate::panel::PanelManager;

/// Startup: rebind every window's outline from the previous session.
pub fn on_plugin_loaded(manager: &mut PanelManager, host: &mut dyn Host) {
    let restored = manager.restore_all(host);
    tracing::info!(restored, "outline loaded");
}

/// Teardown: hide every outline.
pub fn on_plugin_unloaded(manager: &mut PanelManager, host: &mut dyn Host) {
    let hidden = manager.clear_all(host);
    tracing::info!(hidden, "outline unloaded");
}

/// A window was opened after startup.
pub fn on_new_window(manager: &mut PanelManager, window: &mut dyn Window) {
    if let Err(e) = manager.restore_on_window_open(window) {
        tracing::trace!(window = window.id(), error = %e, "nothing restored");
    }
}

/// A caret moved somewhere. Every window's outline is refreshed.
pub fn on_selection_modified(manager: &mut PanelManager, host: &mut dyn Host) {
    manager.update_all(host);
}

/// A document gained focus. Every window's outline is refreshed.
pub fn on_activated(manager: &mut PanelManager, host: &mut dyn Host) {
    manager.update_all(host);
}
