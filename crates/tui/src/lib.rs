//! # Landlord Console TUI Library
//!
//! Terminal user interface for the landlord property-management admin
//! console. The interface is built on Ratatui with a component-based
//! architecture: the sidebar, topbar dropdowns, search box, modal, context
//! menu, toasts, and charts are each separate components that handle events
//! and render themselves.
//!
//! ## Key behaviors
//!
//! - Collapsible sidebar sections whose expanded set persists across runs
//! - Exclusive topbar dropdown menus with outside-click and Escape dismissal
//! - Modal overlays with a trapped Tab focus ring
//! - Context menus positioned at the pointer and clamped to the viewport
//! - Debounced global search and toast notifications

use std::path::PathBuf;

use anyhow::Result;
use landlord_types::Route;
use landlord_util::nav_state::NavStateStore;
use landlord_util::session_state::SessionStore;

mod actions;
mod app;
mod theme;
mod ui;

/// Everything the launcher hands to the console at startup.
pub struct ConsoleOptions {
    /// Page whose navigation link starts out marked active, when the
    /// launcher was pointed at one.
    pub active_page: Option<Route>,
    /// Path to the metrics feed consumed by the dashboard charts.
    pub metrics_path: Option<PathBuf>,
    /// Store for the persisted sidebar open-set.
    pub nav_store: NavStateStore,
    /// Store for session-scoped UI state (scroll offset, breadcrumbs).
    pub session: Box<dyn SessionStore>,
    /// Verbose diagnostics toggle.
    pub debug_enabled: bool,
}

/// Runs the console until the user quits.
///
/// Sets up the terminal, builds the application state from `options`, and
/// drives the main event loop. Returns once the user exits (Ctrl+C) or the
/// input channel closes.
pub async fn run(options: ConsoleOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
