//! Focus node identifiers and the scoped focus store.
//!
//! This module is the single source of truth for focus node names used by
//! components. Focus is organized as a stack of scopes: the root scope holds
//! the always-present widgets (sidebar, search, topbar), and opening a modal
//! pushes a trapped scope containing only the modal's focusable elements.
//! While a trapped scope is on top, Tab/Shift-Tab cycle within it; popping
//! the scope restores the previous focus position untouched.

/// Top-level focus nodes (always present).
pub mod root {
    /// Sidebar navigation node ID.
    pub const SIDEBAR: &str = "root.sidebar";
    /// Global search input node ID.
    pub const SEARCH: &str = "root.search";
    /// Topbar dropdown triggers node ID.
    pub const TOPBAR: &str = "root.topbar";
}

/// Modal focus nodes (active within a trapped scope while a modal is open).
pub mod modal {
    /// Confirm button node ID.
    pub const CONFIRM: &str = "modal.confirm";
    /// Cancel button node ID.
    pub const CANCEL: &str = "modal.cancel";
    /// Close button node ID (single-button modals).
    pub const CLOSE: &str = "modal.close";
}

/// Scope-stack focus store.
///
/// Each scope is an ordered ring of focusable node IDs; traversal wraps in
/// both directions. Only the topmost scope receives traversal, which is what
/// makes a pushed modal scope a focus trap.
#[derive(Debug, Default)]
pub struct FocusStore {
    // Stack of scopes; each scope is an ordered ring of focusable node IDs.
    scopes: Vec<Vec<&'static str>>,
    // Current index per scope (parallel to `scopes`).
    indices: Vec<usize>,
}

impl FocusStore {
    pub fn new() -> Self {
        Self {
            scopes: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Registers the root scope with the given ordered node IDs.
    pub fn register_root(&mut self, nodes: &[&'static str]) {
        self.scopes.clear();
        self.indices.clear();
        self.scopes.push(nodes.to_vec());
        self.indices.push(0);
    }

    /// Pushes a new trapped scope (e.g. a modal), focusing its first node.
    pub fn push_scope(&mut self, nodes: &[&'static str]) {
        self.scopes.push(nodes.to_vec());
        self.indices.push(0);
    }

    /// Pops the current scope, restoring the previous one.
    pub fn pop_scope(&mut self) {
        let _ = self.scopes.pop();
        let _ = self.indices.pop();
        if self.scopes.is_empty() {
            // Keep an empty root so `current` stays total.
            self.scopes.push(Vec::new());
            self.indices.push(0);
        }
    }

    /// Returns the currently focused node ID, if any.
    pub fn current(&self) -> Option<&'static str> {
        if let (Some(scope), Some(idx)) = (self.scopes.last(), self.indices.last()) {
            return scope.get(*idx).copied();
        }
        None
    }

    /// Moves focus to the next node within the current scope, wrapping.
    pub fn next(&mut self) {
        if let (Some(scope), Some(idx)) = (self.scopes.last(), self.indices.last_mut())
            && !scope.is_empty()
        {
            *idx = (*idx + 1) % scope.len();
        }
    }

    /// Moves focus to the previous node within the current scope, wrapping.
    pub fn prev(&mut self) {
        if let (Some(scope), Some(idx)) = (self.scopes.last(), self.indices.last_mut())
            && !scope.is_empty()
        {
            *idx = (*idx + scope.len() - 1) % scope.len();
        }
    }

    /// Sets focus to a specific node within the current scope, if present.
    pub fn focus(&mut self, node: &'static str) {
        if let (Some(scope), Some(idx)) = (self.scopes.last(), self.indices.last_mut())
            && let Some(i) = scope.iter().position(|n| *n == node)
        {
            *idx = i;
        }
    }

    /// Checks whether the given node is currently focused.
    pub fn is_focused(&self, node: &'static str) -> bool {
        self.current() == Some(node)
    }

    /// Whether a trapped scope is currently active above the root scope.
    pub fn is_trapped(&self) -> bool {
        self.scopes.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_root() -> FocusStore {
        let mut store = FocusStore::new();
        store.register_root(&[root::SIDEBAR, root::SEARCH, root::TOPBAR]);
        store
    }

    #[test]
    fn root_traversal_wraps_both_ways() {
        let mut store = store_with_root();
        assert_eq!(store.current(), Some(root::SIDEBAR));
        store.next();
        store.next();
        assert_eq!(store.current(), Some(root::TOPBAR));
        store.next();
        assert_eq!(store.current(), Some(root::SIDEBAR));
        store.prev();
        assert_eq!(store.current(), Some(root::TOPBAR));
    }

    #[test]
    fn pushed_scope_traps_traversal() {
        let mut store = store_with_root();
        store.focus(root::SEARCH);
        store.push_scope(&[modal::CONFIRM, modal::CANCEL]);
        assert_eq!(store.current(), Some(modal::CONFIRM));

        // Tab on the last focusable wraps to the first, never escaping.
        store.next();
        assert_eq!(store.current(), Some(modal::CANCEL));
        store.next();
        assert_eq!(store.current(), Some(modal::CONFIRM));

        // Shift-Tab on the first wraps to the last.
        store.prev();
        assert_eq!(store.current(), Some(modal::CANCEL));
    }

    #[test]
    fn pop_restores_previous_focus() {
        let mut store = store_with_root();
        store.focus(root::TOPBAR);
        store.push_scope(&[modal::CLOSE]);
        store.pop_scope();
        assert_eq!(store.current(), Some(root::TOPBAR));
    }

    #[test]
    fn focus_ignores_nodes_outside_current_scope() {
        let mut store = store_with_root();
        store.push_scope(&[modal::CLOSE]);
        store.focus(root::SIDEBAR);
        assert_eq!(store.current(), Some(modal::CLOSE));
    }

    #[test]
    fn pop_on_root_keeps_store_usable() {
        let mut store = store_with_root();
        store.pop_scope();
        assert_eq!(store.current(), None);
        store.next();
        assert_eq!(store.current(), None);
    }
}
