// Chunk: docs/chunks/outline_panel - Outline panel lifecycle, rendering and commands

//! Outline panel lifecycle.
//!
//! Each window is either `Hidden` (no panel) or `Visible` (one panel bound to
//! a pane group). [`PanelManager`] owns the window to panel association and
//! drives every transition through the host traits:
//!
//! ```text
//!            show / toggle / restore_on_window_open
//!   Hidden ─────────────────────────────────────────▶ Visible
//!          ◀─────────────────────────────────────────
//!            hide / toggle / clear_all / panel closed externally
//! ```
//!
//! A panel the user closed through the host is not reported to the manager.
//! It is detected lazily: every lookup first asks the window whether the
//! panel still has a group and forgets it if not.

use std::collections::HashMap;

use codemap_layout::compute_expanded_layout;
use codemap_symbols::IndentResolver;

use crate::config::OutlineConfig;
use crate::error::{OutlineError, OutlineResult, RestoreSkip};
use crate::host::{Host, PanelId, Window, WindowId};
use crate::render::{OutlineContent, OutlineRenderer};
use crate::state_store::{LayoutStateStore, MemoryStateStore};

/// Result of [`PanelManager::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Shown(PanelId),
    Hidden,
}

/// Owns the outline panels of every window.
///
/// Constructed once at startup and dropped at shutdown; there is no global
/// instance.
pub struct PanelManager {
    config: OutlineConfig,
    resolver: IndentResolver,
    store: Box<dyn LayoutStateStore>,
    panels: HashMap<WindowId, PanelId>,
}

impl PanelManager {
    /// A manager with the given settings. A width outside `(0, 1)` is
    /// replaced by the default.
    pub fn new(
        mut config: OutlineConfig,
        resolver: IndentResolver,
        store: Box<dyn LayoutStateStore>,
    ) -> Self {
        if let Err(e) = config.validate() {
            let width = OutlineConfig::default().width;
            tracing::warn!(error = %e, width, "using default panel width");
            config.width = width;
        }
        Self {
            config,
            resolver,
            store,
            panels: HashMap::new(),
        }
    }

    /// A manager with default settings and an in-process state store.
    pub fn in_memory() -> Self {
        Self::new(
            OutlineConfig::default(),
            IndentResolver::new(),
            Box::new(MemoryStateStore::new()),
        )
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// The indent strategy table, for registering scope strategies.
    pub fn resolver_mut(&mut self) -> &mut IndentResolver {
        &mut self.resolver
    }

    pub fn store(&self) -> &dyn LayoutStateStore {
        self.store.as_ref()
    }

    /// The live panel of `window`, if any.
    ///
    /// Forgets the panel if the host destroyed it.
    pub fn panel(&mut self, window: &dyn Window) -> Option<PanelId> {
        let panel = *self.panels.get(&window.id())?;
        if window.panel_group(panel).is_some() {
            return Some(panel);
        }

        tracing::debug!(window = window.id(), panel, "forgetting closed outline panel");
        self.panels.remove(&window.id());
        None
    }

    /// Renders the outline for `window`'s active document.
    pub fn render(&self, window: &dyn Window) -> OutlineContent {
        let Some(document) = window
            .active_document()
            .and_then(|id| window.document(id))
        else {
            return OutlineContent::empty();
        };

        OutlineRenderer::new(&self.resolver, self.config.enable_indent)
            .render(document, &document.selected_lines())
    }

    /// Carves a column for the outline and shows a panel in it.
    ///
    /// An existing panel is hidden first, so showing twice leaves one panel.
    /// Focus returns to the document that was active before the call.
    pub fn show(&mut self, window: &mut dyn Window) -> OutlineResult<PanelId> {
        let document = window
            .active_document()
            .ok_or(OutlineError::NoActiveDocument)?;

        if self.panel(window).is_some() {
            self.hide(window, None)?;
        }

        let side = self.config.panel_side(window.sidebar_on_right());
        let expanded = compute_expanded_layout(window.layout(), side, self.config.width);
        let groups = window.set_layout(expanded.layout);
        if expanded.group >= groups {
            tracing::warn!(
                window = window.id(),
                group = expanded.group,
                groups,
                "host tiled fewer groups than planned"
            );
        }

        let panel = self.bind_panel(window, expanded.group);
        let group = window.panel_group(panel).unwrap_or(expanded.group);
        self.store.set(window.id(), group);
        window.focus_document(document);

        tracing::debug!(window = window.id(), panel, group, ?side, "outline shown");
        Ok(panel)
    }

    /// Closes the outline panel and contracts the layout around it.
    ///
    /// `panel` defaults to the window's own panel.
    pub fn hide(&mut self, window: &mut dyn Window, panel: Option<PanelId>) -> OutlineResult<()> {
        let panel = match panel {
            Some(panel) => panel,
            None => self.panel(window).ok_or(OutlineError::NoPanel)?,
        };

        let Some(group) = window.panel_group(panel) else {
            self.forget(window.id(), panel);
            return Err(OutlineError::StalePanel(panel));
        };

        let document = window.active_document();

        window.close_panel(panel);
        if window.group_is_empty(group) && !window.close_group(group) {
            tracing::debug!(window = window.id(), group, "host kept the empty outline group");
        }

        self.forget(window.id(), panel);
        self.store.erase(window.id());
        if let Some(document) = document {
            window.focus_document(document);
        }

        tracing::debug!(window = window.id(), panel, group, "outline hidden");
        Ok(())
    }

    /// Hides a live panel, shows one otherwise.
    pub fn toggle(&mut self, window: &mut dyn Window) -> OutlineResult<Toggled> {
        if self.panel(window).is_some() {
            self.hide(window, None)?;
            Ok(Toggled::Hidden)
        } else {
            self.show(window).map(Toggled::Shown)
        }
    }

    /// Rebinds the outline to the group it occupied in a previous session.
    ///
    /// Only an existing, empty group is reused; the layout is never changed
    /// here. Hosts that promote a shown panel to the active tab get a second,
    /// ordinary [`show`](Self::show) to repair their tab selection.
    pub fn restore_on_window_open(&mut self, window: &mut dyn Window) -> OutlineResult<PanelId> {
        let group = self
            .store
            .get(window.id())
            .ok_or(RestoreSkip::NothingPersisted)?;

        let count = window.group_count();
        if group >= count {
            return Err(RestoreSkip::GroupOutOfRange { group, count }.into());
        }
        if !window.group_is_empty(group) {
            return Err(RestoreSkip::GroupOccupied(group).into());
        }

        let panel = self.bind_panel(window, group);
        tracing::debug!(window = window.id(), panel, group, "outline restored");

        if !window.promotes_shown_panels() {
            return Ok(panel);
        }

        match self.show(window) {
            Ok(panel) => Ok(panel),
            // The bound panel stays; it just shows an empty outline.
            Err(OutlineError::NoActiveDocument) => Ok(panel),
            Err(e) => Err(e),
        }
    }

    /// Re-renders the window's panel in place.
    pub fn update_content(
        &mut self,
        window: &mut dyn Window,
        panel: Option<PanelId>,
    ) -> OutlineResult<()> {
        let panel = match panel {
            Some(panel) => panel,
            None => self.panel(window).ok_or(OutlineError::NoPanel)?,
        };

        let content = self.render(window);
        if window.set_panel_content(panel, content) {
            Ok(())
        } else {
            self.forget(window.id(), panel);
            Err(OutlineError::StalePanel(panel))
        }
    }

    /// Re-renders every window's panel. Returns how many were updated.
    pub fn update_all(&mut self, host: &mut dyn Host) -> usize {
        self.each_window(host, "update", |manager, window| {
            manager.update_content(window, None)
        })
    }

    /// Hides every window's panel. Returns how many were hidden.
    pub fn clear_all(&mut self, host: &mut dyn Host) -> usize {
        let hidden = self.each_window(host, "hide", |manager, window| manager.hide(window, None));
        self.panels.clear();
        hidden
    }

    /// Restores every window. Returns how many got a panel back.
    pub fn restore_all(&mut self, host: &mut dyn Host) -> usize {
        self.each_window(host, "restore", |manager, window| {
            manager.restore_on_window_open(window).map(drop)
        })
    }

    /// Runs `transition` on every window independently; one window's failure
    /// never stops the others.
    fn each_window<T, F>(&mut self, host: &mut dyn Host, action: &str, mut transition: F) -> usize
    where
        F: FnMut(&mut Self, &mut dyn Window) -> OutlineResult<T>,
    {
        let mut succeeded = 0;
        for id in host.window_ids() {
            let Some(window) = host.window_mut(id) else {
                continue;
            };
            match transition(self, window) {
                Ok(_) => succeeded += 1,
                Err(e) => tracing::trace!(window = id, action, error = %e, "skipped window"),
            }
        }
        succeeded
    }

    /// Creates a panel in `group` and records it as the window's panel.
    fn bind_panel(&mut self, window: &mut dyn Window, group: usize) -> PanelId {
        let content = self.render(window);
        let panel = window.create_panel(&self.config.tab_name, content, group);
        self.panels.insert(window.id(), panel);
        panel
    }

    fn forget(&mut self, window: WindowId, panel: PanelId) {
        if self.panels.get(&window) == Some(&panel) {
            self.panels.remove(&window);
        }
    }
}

impl std::fmt::Debug for PanelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelManager")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .field("panels", &self.panels)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_host::{MemoryDocument, MemoryWindow};
    use codemap_layout::GridLayout;

    fn window_with_document() -> MemoryWindow {
        let mut window = MemoryWindow::new(1);
        window.open_document(MemoryDocument::new(10, "fn main() {}\n"));
        window
    }

    #[test]
    fn test_show_carves_right_column() {
        let mut window = window_with_document();
        let mut manager = PanelManager::in_memory();

        let panel = manager.show(&mut window).unwrap();

        assert_eq!(window.layout().columns, vec![0.0, 0.8, 1.0]);
        assert_eq!(window.panel_group(panel), Some(1));
        assert_eq!(manager.store().get(1), Some(1));
        assert_eq!(window.active_document(), Some(10));
    }

    #[test]
    fn test_show_left_when_sidebar_on_right() {
        let mut window = window_with_document().with_sidebar_on_right(true);
        let mut manager = PanelManager::in_memory();

        let panel = manager.show(&mut window).unwrap();

        assert_eq!(window.layout().columns, vec![0.0, 0.2, 1.0]);
        let group = window.panel_group(panel).unwrap();
        assert_eq!(window.layout().cells[group].col0, 0);
    }

    #[test]
    fn test_show_without_document_fails() {
        let mut window = MemoryWindow::new(1);
        let mut manager = PanelManager::in_memory();

        assert_eq!(manager.show(&mut window), Err(OutlineError::NoActiveDocument));
        assert_eq!(window.layout(), GridLayout::single());
    }

    #[test]
    fn test_hide_restores_layout() {
        let mut window = window_with_document();
        let mut manager = PanelManager::in_memory();

        manager.show(&mut window).unwrap();
        manager.hide(&mut window, None).unwrap();

        assert_eq!(window.layout(), GridLayout::single());
        assert_eq!(window.panel_count(), 0);
        assert_eq!(manager.store().get(1), None);
        assert_eq!(manager.panel(&window), None);
    }

    #[test]
    fn test_hide_without_panel() {
        let mut window = window_with_document();
        let mut manager = PanelManager::in_memory();
        assert_eq!(manager.hide(&mut window, None), Err(OutlineError::NoPanel));
    }

    #[test]
    fn test_toggle() {
        let mut window = window_with_document();
        let mut manager = PanelManager::in_memory();

        let Toggled::Shown(panel) = manager.toggle(&mut window).unwrap() else {
            panic!("expected the outline to be shown");
        };
        assert_eq!(manager.panel(&window), Some(panel));

        assert_eq!(manager.toggle(&mut window), Ok(Toggled::Hidden));
        assert_eq!(manager.panel(&window), None);
    }

    #[test]
    fn test_update_content_without_panel() {
        let mut window = window_with_document();
        let mut manager = PanelManager::in_memory();
        assert_eq!(manager.update_content(&mut window, None), Err(OutlineError::NoPanel));
    }

    #[test]
    fn test_render_without_document_is_empty() {
        let window = MemoryWindow::new(1);
        let manager = PanelManager::in_memory();
        assert_eq!(manager.render(&window), OutlineContent::empty());
    }
}
