// Chunk: docs/chunks/outline_commands - User commands and outline link actions

//! The command surface.
//!
//! Every user-facing action is a [`Command`] value. Commands serialize to a
//! tagged JSON object, which is also how outline links carry them: an entry's
//! link is `codemap:` followed by the command's JSON.
//!
//! ```
//! use codemap::Command;
//!
//! let command = Command::GotoSymbol { document: 3, offset: 120 };
//! assert_eq!(command.url(), r#"codemap:{"command":"goto_symbol","document":3,"offset":120}"#);
//! assert_eq!(Command::from_url(&command.url()).unwrap(), command);
//! ```

use codemap_symbols::{Step, Symbol};
use serde::{Deserialize, Serialize};

use crate::error::{CommandUrlError, OutlineError, OutlineResult};
use crate::host::{DocumentId, Host, Window, WindowId};
use crate::panel::PanelManager;

/// Scheme of outline link URLs.
pub const URL_SCHEME: &str = "codemap:";

/// A user or link action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Shows or hides the outline in the active window.
    ToggleOutline,
    /// Hides the outline in every window.
    CloseAllOutlines,
    /// Moves the active document's caret to the next or previous symbol.
    MoveToAdjacentSymbol { direction: Step },
    /// Focuses a document and reveals an offset.
    GotoSymbol { document: DocumentId, offset: usize },
    /// Focuses a document and runs the host's reference lookup.
    GotoReference { document: DocumentId, symbol: String },
}

impl Command {
    /// The link URL that runs this command.
    pub fn url(&self) -> String {
        // A tagged enum of plain fields always serializes.
        let json = serde_json::to_string(self).unwrap_or_default();
        format!("{URL_SCHEME}{json}")
    }

    /// Parses a link URL produced by [`Command::url`].
    pub fn from_url(url: &str) -> Result<Self, CommandUrlError> {
        let json = url
            .strip_prefix(URL_SCHEME)
            .ok_or(CommandUrlError::WrongScheme)?;
        Ok(serde_json::from_str(json)?)
    }

    /// Runs the command.
    pub fn execute(&self, manager: &mut PanelManager, host: &mut dyn Host) -> OutlineResult<()> {
        match self {
            Command::ToggleOutline => {
                let window = active_window(host)?;
                manager.toggle(window)?;
            }
            Command::CloseAllOutlines => {
                manager.clear_all(host);
            }
            Command::MoveToAdjacentSymbol { direction } => {
                let window = active_window(host)?;
                move_to_adjacent_symbol(window, *direction)?;
            }
            Command::GotoSymbol { document, offset } => {
                goto_symbol(host, *document, *offset)?;
            }
            Command::GotoReference { document, symbol } => {
                goto_reference(host, *document, symbol)?;
            }
        }
        Ok(())
    }

    /// Runs the command, logging instead of returning failures.
    ///
    /// Most failures are routine (toggling without an open document, moving
    /// through a document without symbols), so the host does not surface
    /// them.
    pub fn run(&self, manager: &mut PanelManager, host: &mut dyn Host) {
        if let Err(e) = self.execute(manager, host) {
            tracing::debug!(command = ?self, error = %e, "command did nothing");
        }
    }
}

fn active_window(host: &mut dyn Host) -> OutlineResult<&mut dyn Window> {
    let id = host.active_window().ok_or(OutlineError::NoActiveWindow)?;
    host.window_mut(id).ok_or(OutlineError::NoWindow(id))
}

/// Finds the window holding `document`.
fn window_of(host: &mut dyn Host, document: DocumentId) -> OutlineResult<&mut dyn Window> {
    let id: Option<WindowId> = host.window_ids().into_iter().find(|&id| {
        host.window_mut(id)
            .is_some_and(|window| window.document(document).is_some())
    });
    let id = id.ok_or(OutlineError::DocumentNotFound(document))?;
    host.window_mut(id).ok_or(OutlineError::NoWindow(id))
}

/// Moves the caret of `window`'s active document one symbol in `step`'s
/// direction, wrapping around, and returns the symbol moved to.
pub fn move_to_adjacent_symbol(window: &mut dyn Window, step: Step) -> OutlineResult<Symbol> {
    let id = window.active_document().ok_or(OutlineError::NoActiveDocument)?;
    let document = window
        .document_mut(id)
        .ok_or(OutlineError::DocumentNotFound(id))?;

    let symbols = document.symbols();
    let tracker = document.tracker(&symbols);
    let target = tracker
        .navigate_symbol(&symbols, &document.selected_lines(), step)
        .cloned()
        .ok_or(OutlineError::NoSymbols)?;

    document.reveal_offset(target.start());
    tracing::debug!(document = id, symbol = %target.name, ?step, "moved to symbol");
    Ok(target)
}

/// Focuses `document` and reveals `offset` in it.
pub fn goto_symbol(host: &mut dyn Host, document: DocumentId, offset: usize) -> OutlineResult<()> {
    let window = window_of(host, document)?;
    window.focus_document(document);
    if let Some(doc) = window.document_mut(document) {
        doc.reveal_offset(offset);
    }
    Ok(())
}

/// Focuses `document` and runs the host's reference lookup for `symbol`.
pub fn goto_reference(host: &mut dyn Host, document: DocumentId, symbol: &str) -> OutlineResult<()> {
    let window = window_of(host, document)?;
    window.focus_document(document);
    window.lookup_reference(symbol);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
