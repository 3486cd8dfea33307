// Chunk: docs/chunks/symbol_tracking - Symbol model, active symbol tracking, indentation strategies

//! Scope-keyed indentation strategies.
//!
//! `IndentResolver` maps a document's syntax scope to a strategy computing
//! how deep a symbol sits in the outline. Resolution always terminates:
//!
//! 1. the strategy registered for the document's scope, or the default slot
//!    when the scope has none;
//! 2. if that reports [`IndentError`], the default slot;
//! 3. if that reports [`IndentError`] too, [`native_indent`], which cannot
//!    fail.
//!
//! The default slot starts out as [`native_indent`] and can be replaced by
//! registering under `None`; it can never be removed.

use std::collections::HashMap;

use thiserror::Error;

use crate::symbol::Symbol;

/// Syntax scope of Markdown documents.
pub const MARKDOWN_SCOPE: &str = "text.html.markdown";

/// Scope prefix of Markdown heading tokens, e.g. `markup.heading.2.markdown`.
pub const HEADING_SCOPE_PREFIX: &str = "markup.heading";

/// What an indent strategy may ask of a document.
pub trait IndentSource {
    /// The document's own indentation level at `offset`.
    fn indentation_level(&self, offset: usize) -> usize;

    /// Space-separated scope names of the token at `offset`, outermost first.
    fn scope_name(&self, offset: usize) -> String;
}

/// A strategy could not determine a symbol's indentation.
///
/// Only ever consumed by [`IndentResolver::resolve`], which falls back to the
/// next tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndentError {
    #[error("no heading scope at offset {0}")]
    NoHeading(usize),

    #[error("heading scope `{0}` carries no usable level")]
    BadHeadingLevel(String),

    #[error("indentation undetermined: {0}")]
    Undetermined(String),
}

/// Computes the indentation level of `symbol` in a document.
pub type IndentStrategy = Box<dyn Fn(&dyn IndentSource, &Symbol) -> Result<usize, IndentError>>;

/// The built-in strategy: the document's indentation at the symbol start.
pub fn native_indent(source: &dyn IndentSource, symbol: &Symbol) -> usize {
    source.indentation_level(symbol.start())
}

fn native_strategy(source: &dyn IndentSource, symbol: &Symbol) -> Result<usize, IndentError> {
    Ok(native_indent(source, symbol))
}

/// Indents Markdown headings by level: `#` is 0, `##` is 1, and so on.
///
/// Reads the first `markup.heading.*` scope at the symbol start and parses
/// its third component.
pub fn markup_heading_indent(source: &dyn IndentSource, symbol: &Symbol) -> Result<usize, IndentError> {
    let scopes = source.scope_name(symbol.start());
    let heading = scopes
        .split_whitespace()
        .find(|scope| scope.starts_with(HEADING_SCOPE_PREFIX))
        .ok_or(IndentError::NoHeading(symbol.start()))?;

    heading
        .split('.')
        .nth(2)
        .and_then(|level| level.parse::<usize>().ok())
        .and_then(|level| level.checked_sub(1))
        .ok_or_else(|| IndentError::BadHeadingLevel(heading.to_string()))
}

/// Registry of indentation strategies keyed by syntax scope.
pub struct IndentResolver {
    /// The default slot, used for unregistered scopes and as the fallback.
    default: IndentStrategy,
    /// Map from exact syntax scope to its strategy.
    scoped: HashMap<String, IndentStrategy>,
}

impl IndentResolver {
    /// Creates a resolver with only the default slot, holding
    /// [`native_indent`].
    pub fn bare() -> Self {
        Self {
            default: Box::new(native_strategy),
            scoped: HashMap::new(),
        }
    }

    /// Creates a resolver with the built-in strategies: native indentation
    /// as default and heading levels for Markdown.
    pub fn new() -> Self {
        let mut resolver = Self::bare();
        resolver.register(Some(MARKDOWN_SCOPE), markup_heading_indent);
        resolver
    }

    /// Registers `strategy` for `scope`, replacing any previous one.
    ///
    /// `None` replaces the default slot.
    pub fn register<F>(&mut self, scope: Option<&str>, strategy: F)
    where
        F: Fn(&dyn IndentSource, &Symbol) -> Result<usize, IndentError> + 'static,
    {
        match scope {
            Some(scope) => {
                tracing::debug!(scope, "registered indent strategy");
                self.scoped.insert(scope.to_string(), Box::new(strategy));
            }
            None => {
                tracing::debug!("replaced default indent strategy");
                self.default = Box::new(strategy);
            }
        }
    }

    /// Resolves the indentation level of `symbol` in a document of `scope`.
    pub fn resolve(&self, source: &dyn IndentSource, scope: Option<&str>, symbol: &Symbol) -> usize {
        let strategy = scope
            .and_then(|scope| self.scoped.get(scope))
            .unwrap_or(&self.default);

        match strategy(source, symbol) {
            Ok(level) => return level,
            Err(err) => {
                tracing::trace!(?scope, symbol = %symbol.name, %err, "scope indent undetermined, trying default slot");
            }
        }

        match (self.default)(source, symbol) {
            Ok(level) => level,
            Err(err) => {
                tracing::trace!(symbol = %symbol.name, %err, "default indent undetermined, using native indentation");
                native_indent(source, symbol)
            }
        }
    }
}

impl Default for IndentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IndentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut scopes: Vec<&str> = self.scoped.keys().map(String::as_str).collect();
        scopes.sort_unstable();
        f.debug_struct("IndentResolver").field("scopes", &scopes).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
