// Chunk: docs/chunks/outline_panel - Outline panel lifecycle, rendering and commands

//! Host capability traits.
//!
//! The outline never touches a concrete editor type. Editors expose the
//! operations below and the core drives them. Ids are host-assigned and
//! stable for the lifetime of the entity; window ids must also be stable
//! across restarts for layout restoration to find its window again.
//!
//! [`crate::memory_host`] implements these traits in memory.

use codemap_layout::GridLayout;
use codemap_symbols::{ActiveSymbolTracker, IndentSource, Symbol};
use codemap_text::Position;

use crate::render::OutlineContent;

/// Host-assigned window id.
pub type WindowId = u64;

/// Host-assigned document id.
pub type DocumentId = u64;

/// Host-assigned panel id.
pub type PanelId = u64;

/// An open editable buffer with a symbol table.
pub trait Document {
    fn id(&self) -> DocumentId;

    /// Syntax scope of the document, e.g. `source.rust`.
    fn scope(&self) -> Option<String>;

    /// The symbol table, ordered by position.
    fn symbols(&self) -> Vec<Symbol>;

    /// Offsets of every caret (the anchor of each selection).
    fn carets(&self) -> Vec<usize>;

    /// Converts an offset into a (line, column) position.
    fn position_of(&self, offset: usize) -> Position;

    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// The document's indentation level at `offset`.
    fn indentation_level(&self, offset: usize) -> usize;

    /// Space-separated scope names of the token at `offset`.
    fn scope_name(&self, offset: usize) -> String;

    /// Replaces the selection with a caret at `offset` and scrolls it into
    /// the middle of the view.
    fn reveal_offset(&mut self, offset: usize);

    /// Line containing `offset`.
    fn line_of(&self, offset: usize) -> usize {
        self.position_of(offset).line
    }

    /// Line of every caret.
    fn selected_lines(&self) -> Vec<usize> {
        self.carets()
            .into_iter()
            .map(|offset| self.line_of(offset))
            .collect()
    }

    /// Span bookkeeping for `symbols`, which must come from this document.
    fn tracker(&self, symbols: &[Symbol]) -> ActiveSymbolTracker {
        ActiveSymbolTracker::for_symbols(symbols, |offset| self.line_of(offset), self.line_count())
    }
}

/// Lets indent strategies read a [`Document`].
pub(crate) struct DocumentIndent<'a>(pub &'a dyn Document);

impl IndentSource for DocumentIndent<'_> {
    fn indentation_level(&self, offset: usize) -> usize {
        self.0.indentation_level(offset)
    }

    fn scope_name(&self, offset: usize) -> String {
        self.0.scope_name(offset)
    }
}

/// A top-level editor frame with a grid of pane groups.
pub trait Window {
    fn id(&self) -> WindowId;

    /// The document with input focus, if any.
    fn active_document(&self) -> Option<DocumentId>;

    fn document(&self, id: DocumentId) -> Option<&dyn Document>;

    fn document_mut(&mut self, id: DocumentId) -> Option<&mut dyn Document>;

    /// The current grid.
    fn layout(&self) -> GridLayout;

    /// Re-tiles the window. Returns the resulting number of groups.
    fn set_layout(&mut self, layout: GridLayout) -> usize;

    fn group_count(&self) -> usize;

    /// Returns true if `group` exists and holds no documents and no panels.
    fn group_is_empty(&self, group: usize) -> bool;

    /// Creates a panel in `group` and returns its id.
    fn create_panel(&mut self, title: &str, content: OutlineContent, group: usize) -> PanelId;

    /// Replaces a panel's content. Returns false if the panel is gone.
    fn set_panel_content(&mut self, panel: PanelId, content: OutlineContent) -> bool;

    /// The group holding `panel`, or `None` once the panel was closed.
    fn panel_group(&self, panel: PanelId) -> Option<usize>;

    /// Closes a panel. Returns false if it was already gone.
    fn close_panel(&mut self, panel: PanelId) -> bool;

    /// Removes a group and contracts the grid. Returns false if refused.
    fn close_group(&mut self, group: usize) -> bool;

    /// Gives input focus to a document.
    fn focus_document(&mut self, document: DocumentId);

    /// Whether the editor's sidebar is on the right edge.
    fn sidebar_on_right(&self) -> bool;

    /// Runs the host's "go to reference" lookup for a symbol name.
    fn lookup_reference(&mut self, symbol: &str);

    /// Whether showing a panel bound to an existing group promotes it to
    /// the group's active tab, which restoration has to correct.
    fn promotes_shown_panels(&self) -> bool {
        true
    }
}

/// The running editor.
pub trait Host {
    /// Every open window, in host order.
    fn window_ids(&self) -> Vec<WindowId>;

    fn window_mut(&mut self, id: WindowId) -> Option<&mut dyn Window>;

    /// The window with input focus, if any.
    fn active_window(&self) -> Option<WindowId>;
}
