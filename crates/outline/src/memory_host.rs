// Chunk: docs/chunks/memory_host - In-memory editor host

//! An editor host that lives entirely in memory.
//!
//! [`MemoryHost`], [`MemoryWindow`] and [`MemoryDocument`] implement the host
//! traits with real grid semantics: groups follow the layout's cells, and
//! closing a group contracts the grid with [`GridLayout::remove_group`].
//! They back the command line tool and the test suite.
//!
//! Documents can also be described as JSON through [`DocumentSnapshot`]:
//!
//! ```json
//! {
//!   "text": "fn a() {}\nfn b() {}\n",
//!   "scope": "source.rust",
//!   "symbols": [
//!     { "name": "a", "kind": "function", "region": { "start": 3, "end": 4 } },
//!     { "name": "b", "kind": "function", "region": { "start": 13, "end": 14 } }
//!   ],
//!   "carets": [12]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use codemap_layout::GridLayout;
use codemap_symbols::Symbol;
use codemap_text::{LineIndex, Position, TextRegion};
use serde::{Deserialize, Serialize};

use crate::host::{Document, DocumentId, Host, PanelId, Window, WindowId};
use crate::render::OutlineContent;

const DEFAULT_TAB_SIZE: usize = 4;

fn default_document_id() -> DocumentId {
    1
}

fn default_tab_size() -> usize {
    DEFAULT_TAB_SIZE
}

// =============================================================================
// Documents
// =============================================================================

/// A syntax scope covering part of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSpan {
    pub region: TextRegion,
    pub scope: String,
}

/// JSON description of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default = "default_document_id")]
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// Caret offsets. Defaults to a single caret at the start.
    #[serde(default)]
    pub carets: Vec<usize>,
    #[serde(default)]
    pub scope_spans: Vec<ScopeSpan>,
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

impl DocumentSnapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<DocumentSnapshot> for MemoryDocument {
    fn from(snapshot: DocumentSnapshot) -> Self {
        let mut document = MemoryDocument::new(snapshot.id, &snapshot.text)
            .with_symbols(snapshot.symbols)
            .with_tab_size(snapshot.tab_size);
        document.scope = snapshot.scope;
        document.scope_spans = snapshot.scope_spans;
        if !snapshot.carets.is_empty() {
            document.carets = snapshot.carets;
        }
        document
    }
}

/// A document with text, carets and a fixed symbol table.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    id: DocumentId,
    text: String,
    line_index: LineIndex,
    scope: Option<String>,
    symbols: Vec<Symbol>,
    carets: Vec<usize>,
    scope_spans: Vec<ScopeSpan>,
    tab_size: usize,
}

impl MemoryDocument {
    /// A document with one caret at the start and no symbols.
    pub fn new(id: DocumentId, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            line_index: LineIndex::from_text(text),
            scope: None,
            symbols: Vec::new(),
            carets: vec![0],
            scope_spans: Vec::new(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.symbols.extend(symbols);
        self
    }

    pub fn with_carets(mut self, carets: Vec<usize>) -> Self {
        self.carets = carets;
        self
    }

    /// Adds a scope name reported for offsets inside `region`.
    pub fn with_scope_span(mut self, region: TextRegion, scope: &str) -> Self {
        self.scope_spans.push(ScopeSpan {
            region,
            scope: scope.to_string(),
        });
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Document for MemoryDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn scope(&self) -> Option<String> {
        self.scope.clone()
    }

    fn symbols(&self) -> Vec<Symbol> {
        self.symbols.clone()
    }

    fn carets(&self) -> Vec<usize> {
        self.carets.clone()
    }

    fn position_of(&self, offset: usize) -> Position {
        self.line_index.position_of(offset)
    }

    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Leading whitespace of the line, in tab stops. A tab counts as a
    /// full stop.
    fn indentation_level(&self, offset: usize) -> usize {
        let line = self.line_index.line_at_offset(offset);
        let start = self.line_index.line_start(line).unwrap_or(0);

        let width: usize = self
            .text
            .chars()
            .skip(start)
            .map_while(|ch| match ch {
                ' ' => Some(1),
                '\t' => Some(self.tab_size),
                _ => None,
            })
            .sum();
        width / self.tab_size
    }

    fn scope_name(&self, offset: usize) -> String {
        self.scope
            .iter()
            .map(String::as_str)
            .chain(
                self.scope_spans
                    .iter()
                    .filter(|span| span.region.contains(offset))
                    .map(|span| span.scope.as_str()),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn reveal_offset(&mut self, offset: usize) {
        self.carets = vec![offset.min(self.line_index.len())];
    }
}

// =============================================================================
// Windows
// =============================================================================

/// A panel created by the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPanel {
    pub title: String,
    pub content: OutlineContent,
}

#[derive(Debug, Clone, Default)]
struct Group {
    documents: Vec<DocumentId>,
    panels: Vec<PanelId>,
}

impl Group {
    fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.panels.is_empty()
    }

    fn absorb(&mut self, other: Group) {
        self.documents.extend(other.documents);
        self.panels.extend(other.panels);
    }
}

/// A window whose groups follow its grid's cells.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    id: WindowId,
    layout: GridLayout,
    groups: Vec<Group>,
    documents: BTreeMap<DocumentId, MemoryDocument>,
    panels: HashMap<PanelId, MemoryPanel>,
    active_document: Option<DocumentId>,
    next_panel: PanelId,
    sidebar_on_right: bool,
    promotes_shown_panels: bool,
    reference_lookups: Vec<String>,
}

impl MemoryWindow {
    /// An empty window with a single group.
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            layout: GridLayout::single(),
            groups: vec![Group::default()],
            documents: BTreeMap::new(),
            panels: HashMap::new(),
            active_document: None,
            next_panel: 1,
            sidebar_on_right: false,
            promotes_shown_panels: true,
            reference_lookups: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.set_layout(layout);
        self
    }

    pub fn with_sidebar_on_right(mut self, sidebar_on_right: bool) -> Self {
        self.sidebar_on_right = sidebar_on_right;
        self
    }

    pub fn with_promotes_shown_panels(mut self, promotes: bool) -> Self {
        self.promotes_shown_panels = promotes;
        self
    }

    /// Opens `document` in the active document's group (or group 0) and
    /// focuses it.
    pub fn open_document(&mut self, document: MemoryDocument) {
        let group = self
            .active_document
            .and_then(|id| self.group_of_document(id))
            .unwrap_or(0);
        self.open_document_in(document, group);
    }

    /// Opens `document` in `group` and focuses it. Out-of-range groups
    /// clamp to the last one.
    pub fn open_document_in(&mut self, document: MemoryDocument, group: usize) {
        let group = group.min(self.groups.len() - 1);
        let id = document.id;
        self.close_document(id);
        self.groups[group].documents.push(id);
        self.documents.insert(id, document);
        self.active_document = Some(id);
    }

    /// Closes a document. Focus moves to the lowest remaining id.
    pub fn close_document(&mut self, id: DocumentId) -> bool {
        if self.documents.remove(&id).is_none() {
            return false;
        }
        for group in &mut self.groups {
            group.documents.retain(|&doc| doc != id);
        }
        if self.active_document == Some(id) {
            self.active_document = self.documents.keys().next().copied();
        }
        true
    }

    pub fn memory_document(&self, id: DocumentId) -> Option<&MemoryDocument> {
        self.documents.get(&id)
    }

    pub fn memory_document_mut(&mut self, id: DocumentId) -> Option<&mut MemoryDocument> {
        self.documents.get_mut(&id)
    }

    pub fn panel(&self, id: PanelId) -> Option<&MemoryPanel> {
        self.panels.get(&id)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn documents_in_group(&self, group: usize) -> &[DocumentId] {
        self.groups
            .get(group)
            .map(|group| group.documents.as_slice())
            .unwrap_or(&[])
    }

    pub fn panels_in_group(&self, group: usize) -> &[PanelId] {
        self.groups
            .get(group)
            .map(|group| group.panels.as_slice())
            .unwrap_or(&[])
    }

    /// Symbol names passed to [`Window::lookup_reference`], oldest first.
    pub fn reference_lookups(&self) -> &[String] {
        &self.reference_lookups
    }

    fn group_of_document(&self, id: DocumentId) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.documents.contains(&id))
    }
}

impl Window for MemoryWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn active_document(&self) -> Option<DocumentId> {
        self.active_document
    }

    fn document(&self, id: DocumentId) -> Option<&dyn Document> {
        self.documents.get(&id).map(|doc| doc as &dyn Document)
    }

    fn document_mut(&mut self, id: DocumentId) -> Option<&mut dyn Document> {
        self.documents
            .get_mut(&id)
            .map(|doc| doc as &mut dyn Document)
    }

    fn layout(&self) -> GridLayout {
        self.layout.clone()
    }

    /// Groups beyond the new cell count are merged into the last remaining
    /// group.
    fn set_layout(&mut self, layout: GridLayout) -> usize {
        if layout.cells.is_empty() {
            return self.groups.len();
        }

        let count = layout.cells.len();
        if self.groups.len() > count {
            let removed: Vec<Group> = self.groups.drain(count..).collect();
            for group in removed {
                self.groups[count - 1].absorb(group);
            }
        }
        self.groups.resize_with(count, Group::default);
        self.layout = layout;
        count
    }

    fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn group_is_empty(&self, group: usize) -> bool {
        self.groups.get(group).is_some_and(Group::is_empty)
    }

    fn create_panel(&mut self, title: &str, content: OutlineContent, group: usize) -> PanelId {
        let group = group.min(self.groups.len() - 1);
        let id = self.next_panel;
        self.next_panel += 1;

        self.groups[group].panels.push(id);
        self.panels.insert(
            id,
            MemoryPanel {
                title: title.to_string(),
                content,
            },
        );
        id
    }

    fn set_panel_content(&mut self, panel: PanelId, content: OutlineContent) -> bool {
        match self.panels.get_mut(&panel) {
            Some(existing) => {
                existing.content = content;
                true
            }
            None => false,
        }
    }

    fn panel_group(&self, panel: PanelId) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.panels.contains(&panel))
    }

    fn close_panel(&mut self, panel: PanelId) -> bool {
        if self.panels.remove(&panel).is_none() {
            return false;
        }
        for group in &mut self.groups {
            group.panels.retain(|&id| id != panel);
        }
        true
    }

    /// Contents of the closed group move to the group before it.
    fn close_group(&mut self, group: usize) -> bool {
        if group >= self.groups.len() || !self.layout.remove_group(group) {
            return false;
        }

        let removed = self.groups.remove(group);
        let target = group.saturating_sub(1).min(self.groups.len() - 1);
        self.groups[target].absorb(removed);
        true
    }

    fn focus_document(&mut self, document: DocumentId) {
        if self.documents.contains_key(&document) {
            self.active_document = Some(document);
        }
    }

    fn sidebar_on_right(&self) -> bool {
        self.sidebar_on_right
    }

    fn lookup_reference(&mut self, symbol: &str) {
        self.reference_lookups.push(symbol.to_string());
    }

    fn promotes_shown_panels(&self) -> bool {
        self.promotes_shown_panels
    }
}

// =============================================================================
// Host
// =============================================================================

/// A set of windows, one of which has focus.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    windows: Vec<MemoryWindow>,
    active: Option<WindowId>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a window. The first window added gets focus.
    pub fn add_window(&mut self, window: MemoryWindow) {
        if self.active.is_none() {
            self.active = Some(window.id);
        }
        self.windows.push(window);
    }

    pub fn set_active_window(&mut self, id: WindowId) {
        if self.windows.iter().any(|window| window.id == id) {
            self.active = Some(id);
        }
    }

    pub fn window(&self, id: WindowId) -> Option<&MemoryWindow> {
        self.windows.iter().find(|window| window.id == id)
    }

    pub fn memory_window_mut(&mut self, id: WindowId) -> Option<&mut MemoryWindow> {
        self.windows.iter_mut().find(|window| window.id == id)
    }
}

impl Host for MemoryHost {
    fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|window| window.id).collect()
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut dyn Window> {
        self.memory_window_mut(id)
            .map(|window| window as &mut dyn Window)
    }

    fn active_window(&self) -> Option<WindowId> {
        self.active
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use codemap_layout::Cell;
    use codemap_symbols::SymbolKind;

    #[test]
    fn test_indentation_level() {
        let doc = MemoryDocument::new(1, "a\n    b\n\tc\n  d\n\t    e\n");
        assert_eq!(doc.indentation_level(0), 0);
        assert_eq!(doc.indentation_level(6), 1);
        assert_eq!(doc.indentation_level(9), 1);
        assert_eq!(doc.indentation_level(13), 0);
        assert_eq!(doc.indentation_level(20), 2);
    }

    #[test]
    fn test_scope_name_stacks_spans() {
        let doc = MemoryDocument::new(1, "# Title\n")
            .with_scope("text.html.markdown")
            .with_scope_span(TextRegion::new(0, 7), "markup.heading.1.markdown")
            .with_scope_span(TextRegion::new(2, 7), "entity.name.section.markdown");

        assert_eq!(
            doc.scope_name(3),
            "text.html.markdown markup.heading.1.markdown entity.name.section.markdown"
        );
        assert_eq!(doc.scope_name(7), "text.html.markdown");
        assert_eq!(MemoryDocument::new(2, "x").scope_name(0), "");
    }

    #[test]
    fn test_reveal_offset_replaces_carets() {
        let mut doc = MemoryDocument::new(1, "one\ntwo\n").with_carets(vec![0, 5]);
        doc.reveal_offset(4);
        assert_eq!(doc.carets(), vec![4]);
        assert_eq!(doc.selected_lines(), vec![1]);

        doc.reveal_offset(100);
        assert_eq!(doc.carets(), vec![8]);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = DocumentSnapshot::from_json(
            r#"{
                "text": "fn a() {}\n",
                "symbols": [{ "name": "a", "kind": "function", "region": { "start": 3, "end": 4 } }]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.tab_size, 4);

        let doc = MemoryDocument::from(snapshot);
        assert_eq!(doc.carets(), vec![0]);
        assert_eq!(doc.symbols()[0].kind, SymbolKind::Function);
        assert_eq!(doc.scope(), None);
    }

    #[test]
    fn test_snapshot_unknown_kind_is_ambiguous() {
        let snapshot = DocumentSnapshot::from_json(
            r#"{ "text": "x", "symbols": [{ "name": "x", "kind": "macro", "region": { "start": 0, "end": 1 } }] }"#,
        )
        .unwrap();
        assert_eq!(snapshot.symbols[0].kind, SymbolKind::Ambiguous);
    }

    #[test]
    fn test_set_layout_merges_dropped_groups() {
        let mut window = MemoryWindow::new(1).with_layout(GridLayout::columns_of(3));
        window.open_document_in(MemoryDocument::new(10, ""), 1);
        window.open_document_in(MemoryDocument::new(11, ""), 2);

        assert_eq!(window.set_layout(GridLayout::columns_of(2)), 2);
        assert_eq!(window.documents_in_group(1), &[10, 11]);
    }

    #[test]
    fn test_close_group_contracts_layout() {
        let mut window = MemoryWindow::new(1).with_layout(GridLayout::columns_of(2));
        window.open_document_in(MemoryDocument::new(10, ""), 0);
        window.open_document_in(MemoryDocument::new(11, ""), 1);

        assert!(window.close_group(1));
        assert_eq!(window.layout(), GridLayout::single());
        assert_eq!(window.documents_in_group(0), &[10, 11]);
        assert!(!window.close_group(0));
    }

    #[test]
    fn test_panels_follow_groups() {
        let mut window = MemoryWindow::new(1).with_layout(GridLayout::columns_of(2));
        let panel = window.create_panel("Code Map", OutlineContent::empty(), 7);

        assert_eq!(window.panel_group(panel), Some(1));
        assert!(!window.group_is_empty(1));
        assert!(window.group_is_empty(0));
        assert_eq!(window.panel(panel).unwrap().title, "Code Map");

        assert!(window.close_panel(panel));
        assert!(!window.close_panel(panel));
        assert_eq!(window.panel_group(panel), None);
        assert!(!window.set_panel_content(panel, OutlineContent::empty()));
    }

    #[test]
    fn test_focus_ignores_unknown_documents() {
        let mut window = MemoryWindow::new(1);
        window.open_document(MemoryDocument::new(10, ""));
        window.focus_document(99);
        assert_eq!(window.active_document(), Some(10));
    }

    #[test]
    fn test_host_active_window() {
        let mut host = MemoryHost::new();
        assert_eq!(host.active_window(), None);

        host.add_window(MemoryWindow::new(1));
        host.add_window(MemoryWindow::new(2));
        assert_eq!(host.active_window(), Some(1));

        host.set_active_window(2);
        assert_eq!(host.active_window(), Some(2));
        host.set_active_window(9);
        assert_eq!(host.active_window(), Some(2));
        assert_eq!(host.window_ids(), vec![1, 2]);
        assert_eq!(
            host.window_mut(2).unwrap().layout().cells,
            vec![Cell::new(0, 0, 1, 1)]
        );
    }
}
