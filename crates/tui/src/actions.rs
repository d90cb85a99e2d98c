//! Quick action registry.
//!
//! Actions are looked up by identifier in an explicit registry populated at
//! startup, never resolved dynamically by name. Handlers are plain function
//! pointers taking the application state and reporting effects, so the
//! runtime can copy a handler out of the registry before invoking it.

use std::collections::HashMap;

use landlord_types::{Effect, Route, Severity};

use crate::app::App;

/// A quick action handler.
pub type ActionHandler = fn(&mut App) -> Vec<Effect>;

/// One registered quick action.
#[derive(Clone, Copy)]
pub struct ActionEntry {
    /// Label shown in confirmation prompts.
    pub label: &'static str,
    pub handler: ActionHandler,
}

/// Registry mapping action identifiers to handlers.
#[derive(Default)]
pub struct ActionRegistry {
    entries: HashMap<&'static str, ActionEntry>,
}

impl ActionRegistry {
    /// Builds the registry with the console's standard actions.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register("lease-new", "Start a new lease", |_app| {
            vec![
                Effect::SwitchTo(Route::Leases),
                toast("Lease drafting is not wired to a backend yet", Severity::Info),
            ]
        });
        registry.register("payment-record", "Record a payment", |_app| {
            vec![
                Effect::SwitchTo(Route::Payments),
                toast("Payment recording is not wired to a backend yet", Severity::Info),
            ]
        });
        registry.register("maintenance-log", "Log a maintenance request", |_app| {
            vec![
                Effect::SwitchTo(Route::Maintenance),
                toast("Work order logging is not wired to a backend yet", Severity::Info),
            ]
        });
        registry.register("page-refresh", "Refresh this view", |app| {
            vec![toast(format!("{} refreshed", app.route.title()), Severity::Success)]
        });
        registry.register("path-copy", "Copy the page path", |app| {
            vec![toast(format!("Path {} noted in the log", app.route.path()), Severity::Info)]
        });
        registry.register("sign-out", "Sign out", |_app| {
            vec![toast("Signed out of the demo session", Severity::Warning)]
        });
        registry
    }

    /// Registers (or replaces) an action.
    pub fn register(&mut self, id: &'static str, label: &'static str, handler: ActionHandler) {
        self.entries.insert(id, ActionEntry { label, handler });
    }

    /// Looks up an action by identifier.
    pub fn get(&self, id: &str) -> Option<ActionEntry> {
        self.entries.get(id).copied()
    }
}

fn toast(message: impl Into<String>, severity: Severity) -> Effect {
    Effect::ShowToast {
        message: message.into(),
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_console_menus() {
        let registry = ActionRegistry::with_defaults();
        for id in [
            "lease-new",
            "payment-record",
            "maintenance-log",
            "page-refresh",
            "path-copy",
            "sign-out",
        ] {
            assert!(registry.get(id).is_some(), "missing action {id}");
        }
    }

    #[test]
    fn unknown_identifiers_resolve_to_none() {
        let registry = ActionRegistry::with_defaults();
        assert!(registry.get("export-csv").is_none());
    }

    #[test]
    fn register_replaces_existing_entries() {
        let mut registry = ActionRegistry::with_defaults();
        registry.register("sign-out", "Sign out now", |_app| Vec::new());
        assert_eq!(registry.get("sign-out").unwrap().label, "Sign out now");
    }
}
