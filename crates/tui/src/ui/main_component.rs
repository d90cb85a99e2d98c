//! Main view: event routing and frame composition.
//!
//! Owns one instance of every component and decides who sees an event.
//! Overlays take precedence in a fixed order — modal, then context menu,
//! then the open dropdown — so a trapped modal really traps, and
//! outside-click dismissal for each disclosure element happens exactly once
//! per click. Global shortcuts are resolved here before any routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::{Effect, Msg, Route};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::{
    BreadcrumbsComponent, ChartComponent, Component, ContextMenuComponent, ModalComponent, SearchComponent,
    SidebarComponent, ToastsComponent, TopbarComponent,
};
use crate::ui::focus::root;
use crate::ui::layout::MainLayout;

/// The root view composing every component.
#[derive(Debug, Default)]
pub struct MainView {
    sidebar: SidebarComponent,
    topbar: TopbarComponent,
    search: SearchComponent,
    breadcrumbs: BreadcrumbsComponent,
    charts: ChartComponent,
    modal: ModalComponent,
    context_menu: ContextMenuComponent,
    toasts: ToastsComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards a runtime message to the application state.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Global shortcuts, unless a modal scope has trapped input.
        if key.modifiers.contains(KeyModifiers::CONTROL) && !app.focus.is_trapped() {
            match key.code {
                KeyCode::Char('k') => {
                    app.focus.focus(root::SEARCH);
                    return Vec::new();
                }
                KeyCode::Char('b') => {
                    if app.is_narrow() {
                        app.sidebar.drawer_open = !app.sidebar.drawer_open;
                        if app.sidebar.drawer_open {
                            app.focus.focus(root::SIDEBAR);
                        }
                    }
                    return Vec::new();
                }
                _ => {}
            }
        }

        if app.modal.is_some() {
            return self.modal.handle_key_events(app, key);
        }
        if app.context_menu.is_some() {
            return self.context_menu.handle_key_events(app, key);
        }
        if key.code == KeyCode::Esc {
            return Self::handle_escape(app);
        }
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        match app.focus.current() {
            Some(root::SEARCH) => self.search.handle_key_events(app, key),
            Some(root::SIDEBAR) => self.sidebar.handle_key_events(app, key),
            Some(root::TOPBAR) => self.topbar.handle_key_events(app, key),
            _ => Vec::new(),
        }
    }

    /// Escape closes the open element of each family independently; with
    /// nothing open it degrades to clearing a focused search input, then to
    /// a no-op.
    fn handle_escape(app: &mut App) -> Vec<Effect> {
        let mut closed = app.topbar.family.close();
        if app.sidebar.drawer_open {
            app.sidebar.drawer_open = false;
            closed = true;
        }
        if !closed && app.focus.is_focused(root::SEARCH) && !app.search.input.is_empty() {
            app.search.clear();
        }
        Vec::new()
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        let sidebar_visible = !app.is_narrow() || app.sidebar.drawer_open;

        if matches!(mouse.kind, MouseEventKind::ScrollUp | MouseEventKind::ScrollDown) {
            if app.modal.is_none() && sidebar_visible && app.sidebar.last_area.contains(position) {
                return self.sidebar.handle_mouse_events(app, mouse);
            }
            return Vec::new();
        }
        let MouseEventKind::Down(button) = mouse.kind else {
            return Vec::new();
        };

        if app.modal.is_some() {
            return self.modal.handle_mouse_events(app, mouse);
        }

        if let Some(menu) = app.context_menu.as_ref() {
            if menu.contains(mouse.column, mouse.row) {
                return self.context_menu.handle_mouse_events(app, mouse);
            }
            // A fresh right-click in the content replaces the instance
            // directly; any other outside click dismisses it.
            if button == MouseButton::Right && app.content_area.contains(position) {
                return vec![Effect::OpenContextMenu {
                    column: mouse.column,
                    row: mouse.row,
                    route: app.route,
                }];
            }
            return vec![Effect::CloseContextMenu];
        }

        if app.topbar.family.open_index().is_some() {
            // The topbar resolves trigger hits, item hits, and outside
            // clicks for its open menu.
            return self.topbar.handle_mouse_events(app, mouse);
        }

        if app.is_narrow() && app.sidebar.drawer_open {
            if app.sidebar.last_area.contains(position) {
                return self.sidebar.handle_mouse_events(app, mouse);
            }
            app.sidebar.drawer_open = false;
            return Vec::new();
        }

        if app.topbar.last_area.contains(position) {
            return self.topbar.handle_mouse_events(app, mouse);
        }
        if app.search.last_area.contains(position) {
            return self.search.handle_mouse_events(app, mouse);
        }
        if sidebar_visible && app.sidebar.last_area.contains(position) {
            return self.sidebar.handle_mouse_events(app, mouse);
        }
        if button == MouseButton::Right && app.content_area.contains(position) {
            return vec![Effect::OpenContextMenu {
                column: mouse.column,
                row: mouse.row,
                route: app.route,
            }];
        }
        Vec::new()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.viewport = area;
        let areas = MainLayout::responsive_layout(area);
        app.content_area = areas.content;

        self.render_title(frame, areas.title, app);
        self.search.render(frame, areas.search, app);
        self.topbar.render(frame, areas.menus, app);
        self.breadcrumbs.render(frame, areas.breadcrumbs, app);

        if let Some(sidebar_area) = areas.sidebar {
            self.sidebar.render(frame, sidebar_area, app);
        } else if !app.sidebar.drawer_open {
            // A hidden sidebar must not keep swallowing clicks.
            app.sidebar.last_area = Rect::default();
            app.sidebar.row_areas.clear();
        }

        self.render_content(frame, areas.content, app);
        self.render_hints(frame, areas.hints, app);

        // Overlays stack above the base layer.
        if app.sidebar.drawer_open && areas.sidebar.is_none() {
            let drawer = MainLayout::drawer_area(areas.body);
            frame.render_widget(Clear, drawer);
            self.sidebar.render(frame, drawer, app);
        }
        self.topbar.render_menu_overlay(frame, app);
        self.context_menu.render(frame, area, app);
        self.modal.render(frame, area, app);
        self.toasts.render(frame, area, app);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect, _app: &mut App) {
        let line = Line::from(vec![
            Span::styled(" landlord", theme::list_highlight_style()),
            Span::styled(concat!(" v", env!("CARGO_PKG_VERSION")), theme::text_muted()),
            Span::styled("  property operations", theme::text_muted()),
        ]);
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(Paragraph::new(line), row);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if matches!(app.route, Route::Dashboard | Route::Reports) {
            // The chart component degrades to a placeholder on its own when
            // the feed is unavailable.
            self.charts.render(frame, area, app);
            return;
        }

        let block = Block::default()
            .title(Span::styled(app.route.title(), theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from(Span::styled(
            format!("{} — {}", app.route.title(), app.route.path()),
            theme::text_style(),
        ))];
        if let Some(query) = app.search.last_query.as_deref() {
            lines.push(Line::from(Span::styled(
                format!("Search \"{query}\" dispatched — results service not connected."),
                theme::text_muted(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let pairs: &[(&str, &str)] = if app.modal.is_some() {
            &[(" Tab", " Cycle"), (" Enter", " Activate"), (" Esc", " Close")]
        } else if app.context_menu.is_some() || app.topbar.family.open_index().is_some() {
            &[(" ↑/↓", " Move"), (" Enter", " Select"), (" Esc", " Close")]
        } else {
            &[
                (" Tab", " Panels"),
                (" ↑/↓", " Move"),
                (" Enter", " Open"),
                (" Ctrl+K", " Search"),
                (" Ctrl+C", " Quit"),
            ]
        };
        let mut spans = Vec::with_capacity(pairs.len() * 2);
        for (key, action) in pairs {
            spans.push(Span::styled(*key, theme::title_style().fg(theme::ACCENT)));
            spans.push(Span::styled(*action, theme::text_muted()));
        }
        if app.ctx.debug_enabled {
            let focus = app.focus.current().unwrap_or("none");
            spans.push(Span::styled(format!("  focus: {focus}"), theme::text_muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landlord_types::{Modal, Route};
    use landlord_util::nav_state::NavStateStore;
    use landlord_util::session_state::InMemorySessionStore;

    use crate::ConsoleOptions;

    fn test_app() -> App {
        let mut app = App::new(ConsoleOptions {
            active_page: None,
            metrics_path: None,
            nav_store: NavStateStore::ephemeral(),
            session: Box::new(InMemorySessionStore::new()),
            debug_enabled: false,
        });
        app.viewport = Rect::new(0, 0, 140, 40);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(character: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(character), KeyModifiers::CONTROL)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn escape_with_a_modal_open_reports_close() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.open_modal(Modal::Help);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::CloseModal]);
    }

    #[test]
    fn escape_with_nothing_open_is_a_no_op() {
        let mut view = MainView::new();
        let mut app = test_app();
        let before = app.focus.current();
        let effects = view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(effects.is_empty());
        assert_eq!(app.focus.current(), before);
        assert!(app.modal.is_none());
        assert!(app.topbar.family.open_index().is_none());
    }

    #[test]
    fn escape_closes_the_open_dropdown() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.topbar.family.open_at(1);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(effects.is_empty());
        assert_eq!(app.topbar.family.open_index(), None);
    }

    #[test]
    fn ctrl_k_focuses_the_search_input() {
        let mut view = MainView::new();
        let mut app = test_app();
        view.handle_key_events(&mut app, ctrl('k'));
        assert!(app.focus.is_focused(root::SEARCH));
    }

    #[test]
    fn tab_is_trapped_while_a_modal_is_open() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.open_modal(Modal::ConfirmAction("sign-out".into()));
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus.current(), Some(crate::ui::focus::modal::CANCEL));
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus.current(), Some(crate::ui::focus::modal::CONFIRM));
    }

    #[test]
    fn outside_click_closes_the_open_dropdown() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.topbar.family.open_at(0);
        app.topbar.family.menus_mut()[0].trigger_area = Rect::new(100, 0, 12, 3);
        app.topbar.family.menus_mut()[0].menu_area = Rect::new(100, 3, 16, 5);
        let effects = view.handle_mouse_events(&mut app, left_click(10, 20));
        assert!(effects.is_empty());
        assert_eq!(app.topbar.family.open_index(), None);
    }

    #[test]
    fn trigger_click_while_open_switches_menus_without_dismissal() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.topbar.family.menus_mut()[0].trigger_area = Rect::new(90, 0, 12, 3);
        app.topbar.family.menus_mut()[1].trigger_area = Rect::new(104, 0, 12, 3);
        app.topbar.family.open_at(0);
        view.handle_mouse_events(&mut app, left_click(106, 1));
        assert_eq!(app.topbar.family.open_index(), Some(1));
    }

    #[test]
    fn outside_click_closes_the_context_menu() {
        let mut view = MainView::new();
        let mut app = test_app();
        app.open_context_menu(30, 10, Route::Dashboard);
        let effects = view.handle_mouse_events(&mut app, left_click(1, 1));
        assert_eq!(effects, vec![Effect::CloseContextMenu]);
    }

    #[test]
    fn ctrl_b_toggles_the_drawer_only_when_narrow() {
        let mut view = MainView::new();
        let mut app = test_app();
        view.handle_key_events(&mut app, ctrl('b'));
        assert!(!app.sidebar.drawer_open);

        app.viewport = Rect::new(0, 0, 70, 30);
        view.handle_key_events(&mut app, ctrl('b'));
        assert!(app.sidebar.drawer_open);
        assert!(app.focus.is_focused(root::SIDEBAR));
        view.handle_key_events(&mut app, ctrl('b'));
        assert!(!app.sidebar.drawer_open);
    }
}
