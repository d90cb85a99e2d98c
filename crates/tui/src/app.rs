//! Application state for the landlord console.
//!
//! `App` is the central state container: one field per feature plus the
//! shared context (stores, action registry). State transitions that several
//! components care about live here as methods; components call them and
//! report `Effect`s for anything that crosses component boundaries.

use std::time::Instant;

use landlord_types::{Effect, Modal, Msg, Route};
use landlord_util::nav_state::NavStateStore;
use landlord_util::session_state::{BreadcrumbRecord, SessionStore};
use ratatui::layout::Rect;
use tracing::warn;

use crate::ConsoleOptions;
use crate::actions::ActionRegistry;
use crate::ui::components::charts::ChartState;
use crate::ui::components::context_menu::ContextMenuState;
use crate::ui::components::modal::ModalState;
use crate::ui::components::search::SearchState;
use crate::ui::components::sidebar::SidebarState;
use crate::ui::components::toasts::ToastsState;
use crate::ui::components::topbar::TopbarState;
use crate::ui::focus::{FocusStore, root};
use crate::ui::layout::SIDEBAR_BREAKPOINT;

/// Cross-cutting shared context owned by the App.
///
/// Holds the persistence stores and the action registry so they don't have
/// to be threaded through every component call.
pub struct SharedCtx {
    /// Persisted sidebar open-set store.
    pub nav_store: NavStateStore,
    /// Session-scoped UI state store.
    pub session: Box<dyn SessionStore>,
    /// Quick action registry, populated once at startup.
    pub actions: ActionRegistry,
    /// Verbose diagnostics toggle.
    pub debug_enabled: bool,
}

/// The main application state.
pub struct App {
    /// Page currently shown in the content area.
    pub route: Route,
    pub ctx: SharedCtx,
    /// Scoped focus store; modals push a trapped scope onto it.
    pub focus: FocusStore,
    pub sidebar: SidebarState,
    pub topbar: TopbarState,
    pub search: SearchState,
    pub toasts: ToastsState,
    pub charts: ChartState,
    /// Open modal, created fresh on each open and dropped on close.
    pub modal: Option<ModalState>,
    /// Open context menu; at most one instance exists at a time.
    pub context_menu: Option<ContextMenuState>,
    /// Breadcrumb cache, most recent first, refreshed after each push.
    pub crumbs: Vec<BreadcrumbRecord>,
    /// Last known terminal area.
    pub viewport: Rect,
    /// Last rendered content area, for context-menu targeting.
    pub content_area: Rect,
}

impl App {
    pub fn new(options: ConsoleOptions) -> Self {
        let ctx = SharedCtx {
            nav_store: options.nav_store,
            session: options.session,
            actions: ActionRegistry::with_defaults(),
            debug_enabled: options.debug_enabled,
        };

        let sections = SidebarState::console_sections(options.active_page);
        let mut sidebar = SidebarState::initialize(sections, ctx.nav_store.open_sections());
        sidebar.scroll = ctx.session.sidebar_scroll();

        let mut focus = FocusStore::new();
        focus.register_root(&[root::SIDEBAR, root::SEARCH, root::TOPBAR]);

        let route = options.active_page.unwrap_or(Route::Dashboard);
        let mut app = Self {
            route,
            ctx,
            focus,
            sidebar,
            topbar: TopbarState::console_default(),
            search: SearchState::default(),
            toasts: ToastsState::default(),
            charts: ChartState::load(options.metrics_path.as_deref()),
            modal: None,
            context_menu: None,
            crumbs: Vec::new(),
            viewport: Rect::default(),
            content_area: Rect::default(),
        };
        app.record_visit(route);
        app
    }

    /// Whether the terminal is below the sidebar breakpoint, in which case
    /// the sidebar renders as a toggleable overlay drawer.
    pub fn is_narrow(&self) -> bool {
        self.viewport.width < SIDEBAR_BREAKPOINT
    }

    /// Processes a runtime message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => self.tick(Instant::now()),
            Msg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, *width, *height);
                if !self.is_narrow() {
                    self.sidebar.drawer_open = false;
                }
                Vec::new()
            }
        }
    }

    /// Advances deadline-driven state: toast phases and the search debounce.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.toasts.advance(now);
        if let Some(query) = self.search.take_due_dispatch(now) {
            effects.push(Effect::DispatchSearch(query));
        }
        effects
    }

    /// Whether the runtime should tick fast to service pending deadlines.
    pub fn has_pending_timers(&self) -> bool {
        !self.toasts.is_empty() || self.search.has_pending()
    }

    /// Toggles a sidebar section and persists the updated open-set before
    /// returning, so the store stays the source of truth across a crash.
    pub fn toggle_section(&mut self, slug: &str) {
        self.sidebar.toggle(slug);
        if let Err(error) = self.ctx.nav_store.set_open_sections(self.sidebar.open_slugs()) {
            warn!(error = %error, "Failed to persist sidebar state");
        }
    }

    /// Switches the content view and records the visit in the breadcrumb
    /// trail. On narrow terminals the drawer closes so the new page is
    /// visible.
    pub fn switch_route(&mut self, route: Route) {
        self.route = route;
        self.record_visit(route);
        if self.is_narrow() {
            self.sidebar.drawer_open = false;
        }
    }

    /// Updates the sidebar scroll offset and persists it session-scoped.
    pub fn set_sidebar_scroll(&mut self, offset: u16) {
        self.sidebar.scroll = offset;
        if let Err(error) = self.ctx.session.set_sidebar_scroll(offset) {
            warn!(error = %error, "Failed to persist sidebar scroll offset");
        }
    }

    /// Opens a modal, replacing any open one. A kind with no backing
    /// content is a no-op. The modal's focusable ring is recomputed here and
    /// pushed as a trapped focus scope.
    pub fn open_modal(&mut self, kind: Modal) {
        let Some(state) = ModalState::build(kind, &self.ctx.actions) else {
            return;
        };
        if self.modal.take().is_some() {
            self.focus.pop_scope();
        }
        self.focus.push_scope(&state.focusables());
        self.modal = Some(state);
    }

    /// Closes the open modal and restores the previous focus. A no-op when
    /// nothing is open.
    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            self.focus.pop_scope();
        }
    }

    /// Opens a context menu at the given cell, synchronously replacing any
    /// prior instance.
    pub fn open_context_menu(&mut self, column: u16, row: u16, route: Route) {
        self.context_menu = Some(ContextMenuState::open_at(column, row, route, self.viewport));
    }

    /// Closes the context menu. A no-op when nothing is open.
    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    fn record_visit(&mut self, route: Route) {
        if let Err(error) = self.ctx.session.push_breadcrumb(route.title(), &route.path()) {
            warn!(error = %error, "Failed to persist breadcrumb trail");
        }
        self.crumbs = self.ctx.session.breadcrumbs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landlord_util::session_state::InMemorySessionStore;

    fn test_app(active: Option<Route>) -> App {
        App::new(ConsoleOptions {
            active_page: active,
            metrics_path: None,
            nav_store: NavStateStore::ephemeral(),
            session: Box::new(InMemorySessionStore::new()),
            debug_enabled: false,
        })
    }

    #[test]
    fn startup_seeds_the_open_set_from_the_active_page() {
        let app = test_app(Some(Route::Leases));
        assert_eq!(app.sidebar.open_slugs(), vec!["leases".to_string()]);
        // Seeding must not write back to the store.
        assert!(app.ctx.nav_store.open_sections().is_empty());
    }

    #[test]
    fn toggling_persists_synchronously() {
        let mut app = test_app(None);
        app.toggle_section("finance");
        assert!(app.ctx.nav_store.open_sections().contains(&"finance".to_string()));
        app.toggle_section("finance");
        assert!(!app.ctx.nav_store.open_sections().contains(&"finance".to_string()));
    }

    #[test]
    fn unbacked_modal_open_is_a_no_op() {
        let mut app = test_app(None);
        app.open_modal(Modal::ConfirmAction("not-registered".into()));
        assert!(app.modal.is_none());
        assert!(!app.focus.is_trapped());
    }

    #[test]
    fn modal_open_traps_focus_and_close_restores_it() {
        let mut app = test_app(None);
        app.focus.focus(crate::ui::focus::root::TOPBAR);
        app.open_modal(Modal::Help);
        assert!(app.focus.is_trapped());
        assert_eq!(app.focus.current(), Some(crate::ui::focus::modal::CLOSE));

        app.close_modal();
        assert!(!app.focus.is_trapped());
        assert_eq!(app.focus.current(), Some(crate::ui::focus::root::TOPBAR));

        // Closing again with nothing open changes nothing.
        app.close_modal();
        assert!(!app.focus.is_trapped());
        assert_eq!(app.focus.current(), Some(crate::ui::focus::root::TOPBAR));
    }

    #[test]
    fn reopening_a_modal_replaces_the_scope_instead_of_stacking() {
        let mut app = test_app(None);
        app.open_modal(Modal::Help);
        app.open_modal(Modal::ConfirmAction("sign-out".into()));
        assert_eq!(app.focus.current(), Some(crate::ui::focus::modal::CONFIRM));
        app.close_modal();
        assert!(!app.focus.is_trapped());
    }

    #[test]
    fn context_menu_open_replaces_the_prior_instance() {
        let mut app = test_app(None);
        app.viewport = Rect::new(0, 0, 120, 40);
        app.open_context_menu(10, 10, Route::Leases);
        let first_area = app.context_menu.as_ref().unwrap().area;
        app.open_context_menu(40, 20, Route::Tenants);
        let second_area = app.context_menu.as_ref().unwrap().area;
        assert_ne!(first_area, second_area);
        app.close_context_menu();
        assert!(app.context_menu.is_none());
        // Closing again is a no-op.
        app.close_context_menu();
    }

    #[test]
    fn route_switches_build_the_breadcrumb_trail() {
        let mut app = test_app(None);
        app.switch_route(Route::Leases);
        app.switch_route(Route::Payments);
        let urls: Vec<&str> = app.crumbs.iter().map(|crumb| crumb.url.as_str()).collect();
        assert_eq!(urls, vec!["/payments", "/leases", "/dashboard"]);
    }

    #[test]
    fn tick_flushes_due_search_dispatches() {
        let mut app = test_app(None);
        let start = Instant::now();
        app.search.push_char('q', start);
        assert!(app.tick(start).is_empty());
        let effects = app.tick(start + crate::ui::components::search::SEARCH_DEBOUNCE);
        assert_eq!(effects, vec![Effect::DispatchSearch("q".to_string())]);
    }
}
