// Chunk: docs/chunks/symbol_tracking - Symbol model, active symbol tracking, indentation strategies

use codemap_text::TextRegion;
use serde::{Deserialize, Serialize};

/// The category of a symbol, as reported by the host's symbol provider.
///
/// Providers may report kinds the outline has no style for; those
/// deserialize as [`SymbolKind::Ambiguous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Keyword,
    Type,
    Function,
    Namespace,
    Navigation,
    Markup,
    Variable,
    Snippet,
    #[default]
    #[serde(other)]
    Ambiguous,
}

impl SymbolKind {
    /// CSS class list for the kind badge.
    pub fn class_name(self) -> &'static str {
        match self {
            SymbolKind::Keyword => "kind kind_keyword",
            SymbolKind::Type => "kind kind_type",
            SymbolKind::Function => "kind kind_function",
            SymbolKind::Namespace => "kind kind_namespace",
            SymbolKind::Navigation => "kind kind_navigation",
            SymbolKind::Markup => "kind kind_markup",
            SymbolKind::Variable => "kind kind_variable",
            SymbolKind::Snippet => "kind kind_snippet",
            SymbolKind::Ambiguous => "kind kind_ambiguous",
        }
    }

    /// One-letter badge text. Empty for ambiguous symbols, which render
    /// without a visible badge.
    pub fn short_label(self) -> &'static str {
        match self {
            SymbolKind::Keyword => "k",
            SymbolKind::Type => "t",
            SymbolKind::Function => "f",
            SymbolKind::Namespace => "n",
            SymbolKind::Navigation => "#",
            SymbolKind::Markup => "m",
            SymbolKind::Variable => "v",
            SymbolKind::Snippet => "s",
            SymbolKind::Ambiguous => "",
        }
    }

    /// Human readable kind name, used as the badge tooltip.
    pub fn long_label(self) -> &'static str {
        match self {
            SymbolKind::Keyword => "Keyword",
            SymbolKind::Type => "Type",
            SymbolKind::Function => "Function",
            SymbolKind::Namespace => "Namespace",
            SymbolKind::Navigation => "Navigation",
            SymbolKind::Markup => "Markup",
            SymbolKind::Variable => "Variable",
            SymbolKind::Snippet => "Snippet",
            SymbolKind::Ambiguous => "Ambiguous",
        }
    }
}

/// One entry of a document's symbol table.
///
/// Symbols are snapshots: the outline never mutates them and rebuilds its
/// view from a fresh list on every render. Names may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default)]
    pub kind: SymbolKind,
    pub region: TextRegion,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, region: TextRegion) -> Self {
        Self {
            name: name.into(),
            kind,
            region,
        }
    }

    /// Character offset where the symbol starts.
    pub fn start(&self) -> usize {
        self.region.start
    }
}
