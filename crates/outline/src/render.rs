// Chunk: docs/chunks/outline_rendering - Outline content from a document's symbols
//!
//! Outline rendering.
//!
//! A render is a pure read of the document into an [`OutlineContent`] value.
//! Panels are replaced wholesale with a fresh render on every selection or
//! activation change; there is no incremental diffing.

use codemap_symbols::{IndentResolver, SymbolKind};
use codemap_text::Position;
use serde::Serialize;

use crate::command::Command;
use crate::host::{Document, DocumentId, DocumentIndent};

/// One line of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub name: String,
    pub kind: SymbolKind,
    /// CSS classes for the kind badge.
    pub class_name: &'static str,
    pub short_label: &'static str,
    pub long_label: &'static str,
    /// Where the symbol starts.
    pub position: Position,
    /// The symbol's span contains a caret line.
    pub active: bool,
    /// Indentation level; always 0 when indentation is disabled.
    pub indent: usize,
    /// Jumps to the symbol start.
    pub goto: Command,
    /// Runs the host's reference lookup for the symbol name.
    pub reference: Command,
}

/// Everything a panel displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutlineContent {
    /// The document the entries were read from, `None` for a blank outline.
    pub document: Option<DocumentId>,
    pub entries: Vec<OutlineEntry>,
}

impl OutlineContent {
    /// The outline shown when a window has no active document.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of the active entries.
    pub fn active_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.active)
            .map(|(index, _)| index)
            .collect()
    }

    /// Renders the outline as HTML, with `css` inlined.
    ///
    /// Links use `codemap:` command URLs (see [`Command::url`]).
    pub fn to_html(&self, css: &str) -> String {
        let mut html = format!("<body><style>{css}</style>");
        for entry in &self.entries {
            let class = if entry.active { "item active" } else { "item" };
            let style = indent_style(entry.indent);
            html.push_str(&format!(
                "<div class='{class}' style='{style}'>\
                 <i class='{}' title='{}'>{}</i>\
                 <a href='{}' title='{}'>{}</a>\
                 <a href='{}'>⧉</a>\
                 </div>",
                entry.class_name,
                entry.long_label,
                entry.short_label,
                escape_html(&entry.goto.url()),
                entry.position,
                escape_html(&entry.name),
                escape_html(&entry.reference.url()),
            ));
        }
        html.push_str("</body>");
        html
    }
}

/// Left margin for an indentation level.
fn indent_style(level: usize) -> String {
    if level == 0 {
        return String::new();
    }
    format!("margin-left: {}rem;", 0.5 + level as f64 * 1.6)
}

fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

/// Builds outline content from documents.
#[derive(Debug, Clone, Copy)]
pub struct OutlineRenderer<'a> {
    resolver: &'a IndentResolver,
    enable_indent: bool,
}

impl<'a> OutlineRenderer<'a> {
    pub fn new(resolver: &'a IndentResolver, enable_indent: bool) -> Self {
        Self {
            resolver,
            enable_indent,
        }
    }

    /// Renders `document` with carets on `selected_lines`.
    pub fn render(&self, document: &dyn Document, selected_lines: &[usize]) -> OutlineContent {
        let symbols = document.symbols();
        let tracker = document.tracker(&symbols);
        let scope = document.scope();
        let indent_source = DocumentIndent(document);

        let entries = symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| {
                let indent = if self.enable_indent {
                    self.resolver
                        .resolve(&indent_source, scope.as_deref(), symbol)
                } else {
                    0
                };

                OutlineEntry {
                    name: symbol.name.clone(),
                    kind: symbol.kind,
                    class_name: symbol.kind.class_name(),
                    short_label: symbol.kind.short_label(),
                    long_label: symbol.kind.long_label(),
                    position: document.position_of(symbol.start()),
                    active: tracker.is_active(index, selected_lines),
                    indent,
                    goto: Command::GotoSymbol {
                        document: document.id(),
                        offset: symbol.start(),
                    },
                    reference: Command::GotoReference {
                        document: document.id(),
                        symbol: symbol.name.clone(),
                    },
                }
            })
            .collect();

        tracing::trace!(document = document.id(), "rendered outline");

        OutlineContent {
            document: Some(document.id()),
            entries,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_host::MemoryDocument;
    use codemap_symbols::{Symbol, MARKDOWN_SCOPE};
    use codemap_text::TextRegion;

    /// 15 lines, symbols A@0, B@5, C@10 (each line is "xxxx\n").
    fn fifteen_lines() -> MemoryDocument {
        let text = "xxxx\n".repeat(14) + "xxxx";
        MemoryDocument::new(1, &text)
            .with_symbol(Symbol::new("A", SymbolKind::Function, TextRegion::new(0, 4)))
            .with_symbol(Symbol::new("B", SymbolKind::Type, TextRegion::new(25, 29)))
            .with_symbol(Symbol::new("C", SymbolKind::Ambiguous, TextRegion::new(50, 54)))
    }

    #[test]
    fn test_render_marks_active_symbol() {
        let resolver = IndentResolver::new();
        let doc = fifteen_lines();
        let content = OutlineRenderer::new(&resolver, true).render(&doc, &[7]);

        assert_eq!(content.document, Some(1));
        let names: Vec<&str> = content.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(content.active_indices(), vec![1]);
    }

    #[test]
    fn test_render_kind_table() {
        let resolver = IndentResolver::new();
        let content = OutlineRenderer::new(&resolver, true).render(&fifteen_lines(), &[]);

        assert_eq!(content.entries[0].class_name, "kind kind_function");
        assert_eq!(content.entries[0].short_label, "f");
        assert_eq!(content.entries[1].long_label, "Type");
        assert_eq!(content.entries[2].class_name, "kind kind_ambiguous");
        assert_eq!(content.entries[2].short_label, "");
        assert!(content.active_indices().is_empty());
    }

    #[test]
    fn test_render_actions() {
        let resolver = IndentResolver::new();
        let content = OutlineRenderer::new(&resolver, true).render(&fifteen_lines(), &[]);

        let b = &content.entries[1];
        assert_eq!(b.position, Position::new(5, 0));
        assert_eq!(b.goto, Command::GotoSymbol { document: 1, offset: 25 });
        assert_eq!(
            b.reference,
            Command::GotoReference { document: 1, symbol: "B".to_string() }
        );
    }

    #[test]
    fn test_render_empty_symbol_list() {
        let resolver = IndentResolver::new();
        let doc = MemoryDocument::new(3, "no symbols here\n");
        let content = OutlineRenderer::new(&resolver, true).render(&doc, &[0]);
        assert!(content.is_empty());
        assert_eq!(content.document, Some(3));
    }

    #[test]
    fn test_render_native_indent() {
        let resolver = IndentResolver::new();
        let doc = MemoryDocument::new(1, "impl A {\n    fn b() {}\n}\n")
            .with_scope("source.rust")
            .with_symbol(Symbol::new("A", SymbolKind::Type, TextRegion::new(5, 6)))
            .with_symbol(Symbol::new("b", SymbolKind::Function, TextRegion::new(16, 17)));

        let content = OutlineRenderer::new(&resolver, true).render(&doc, &[]);
        assert_eq!(content.entries[0].indent, 0);
        assert_eq!(content.entries[1].indent, 1);
    }

    #[test]
    fn test_render_markdown_heading_indent() {
        let resolver = IndentResolver::new();
        let doc = MemoryDocument::new(1, "# Title\n## Part\ntext\n")
            .with_scope(MARKDOWN_SCOPE)
            .with_scope_span(TextRegion::new(0, 7), "markup.heading.1.markdown")
            .with_scope_span(TextRegion::new(8, 15), "markup.heading.2.markdown")
            .with_symbol(Symbol::new("Title", SymbolKind::Markup, TextRegion::new(2, 7)))
            .with_symbol(Symbol::new("Part", SymbolKind::Markup, TextRegion::new(11, 15)));

        let content = OutlineRenderer::new(&resolver, true).render(&doc, &[]);
        let indents: Vec<usize> = content.entries.iter().map(|e| e.indent).collect();
        assert_eq!(indents, vec![0, 1]);
    }

    #[test]
    fn test_render_indent_disabled() {
        let resolver = IndentResolver::new();
        let doc = MemoryDocument::new(1, "impl A {\n    fn b() {}\n}\n")
            .with_symbol(Symbol::new("b", SymbolKind::Function, TextRegion::new(16, 17)));

        let content = OutlineRenderer::new(&resolver, false).render(&doc, &[]);
        assert_eq!(content.entries[0].indent, 0);
    }

    #[test]
    fn test_to_html() {
        let resolver = IndentResolver::new();
        let doc = MemoryDocument::new(4, "fn a<'x>() {}\n    fn b() {}\n")
            .with_symbol(Symbol::new("a<'x>", SymbolKind::Function, TextRegion::new(3, 4)))
            .with_symbol(Symbol::new("b", SymbolKind::Function, TextRegion::new(21, 22)));

        let html = OutlineRenderer::new(&resolver, true)
            .render(&doc, &[1])
            .to_html(".item {}");

        assert!(html.starts_with("<body><style>.item {}</style>"));
        assert!(html.ends_with("</body>"));
        assert!(html.contains("<div class='item' style=''>"));
        assert!(html.contains("<div class='item active' style='margin-left: 2.1rem;'>"));
        assert!(html.contains("<i class='kind kind_function' title='Function'>f</i>"));
        assert!(html.contains(">a&lt;&#x27;x&gt;</a>"));
        assert!(html.contains("title='2:8'"));
        assert!(html.contains("codemap:"));
        assert!(!html.contains("\"command\""));
    }

    #[test]
    fn test_indent_style() {
        assert_eq!(indent_style(0), "");
        assert_eq!(indent_style(2), "margin-left: 3.7rem;");
    }
}
