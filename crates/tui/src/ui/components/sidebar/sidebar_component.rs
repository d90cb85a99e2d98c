//! Sidebar navigation component.
//!
//! Renders the collapsible section tree and handles toggling, link
//! activation, circular cursor movement, scroll persistence, and the
//! right-click context menu trigger.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{SidebarRow, SidebarState};
use crate::app::App;
use crate::theme;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::focus::root;

/// Component for the sidebar navigation tree.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Activates the row under the cursor: headers toggle, links navigate.
    fn activate_cursor_row(app: &mut App) -> Vec<Effect> {
        match app.sidebar.cursor_row() {
            Some(SidebarRow::Header(section)) => {
                if let Some(slug) = app.sidebar.sections.get(section).map(|section| section.slug.clone()) {
                    app.toggle_section(&slug);
                }
                Vec::new()
            }
            Some(row @ SidebarRow::Link { .. }) => match app.sidebar.link_at(row) {
                Some(link) => vec![Effect::SwitchTo(link.route)],
                None => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    /// Collapses (`Left`) or expands (`Right`) the section the cursor is in.
    fn set_cursor_section_open(app: &mut App, open: bool) {
        let section_index = match app.sidebar.cursor_row() {
            Some(SidebarRow::Header(section)) => section,
            Some(SidebarRow::Link { section, .. }) => section,
            None => return,
        };
        let Some(slug) = app.sidebar.sections.get(section_index).map(|section| section.slug.clone()) else {
            return;
        };
        if app.sidebar.is_open(&slug) != open {
            app.sidebar.set_cursor_to(SidebarRow::Header(section_index));
            app.toggle_section(&slug);
        }
    }

    fn adjust_scroll(app: &mut App, delta: i32) {
        let rows = app.sidebar.visible_rows().len() as i32;
        let current = app.sidebar.scroll as i32;
        let next = (current + delta).clamp(0, (rows - 1).max(0));
        if next != current {
            app.set_sidebar_scroll(next as u16);
        }
    }

    fn row_line<'a>(state: &SidebarState, row: SidebarRow, is_cursor: bool, focused: bool) -> Line<'a> {
        let cursor_style = if is_cursor && focused {
            theme::highlight_style()
        } else {
            theme::text_style()
        };
        match row {
            SidebarRow::Header(section) => {
                let section = &state.sections[section];
                let marker = if state.is_open(&section.slug) { "▾ " } else { "▸ " };
                Line::from(vec![
                    Span::styled(marker.to_string(), theme::text_muted()),
                    Span::styled(section.title.clone(), theme::title_style().patch(cursor_style)),
                ])
            }
            row @ SidebarRow::Link { .. } => {
                let Some(link) = state.link_at(row) else {
                    return Line::default();
                };
                let style = if link.active {
                    theme::list_highlight_style()
                } else {
                    cursor_style
                };
                let marker = if link.active { "  ● " } else { "  · " };
                Line::from(vec![
                    Span::styled(marker.to_string(), theme::text_muted()),
                    Span::styled(link.title.clone(), style),
                ])
            }
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => {
                app.sidebar.cycle_cursor(true);
                Vec::new()
            }
            KeyCode::Up => {
                app.sidebar.cycle_cursor(false);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => Self::activate_cursor_row(app),
            KeyCode::Left => {
                Self::set_cursor_section_open(app, false);
                Vec::new()
            }
            KeyCode::Right => {
                Self::set_cursor_section_open(app, true);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                Self::adjust_scroll(app, -1);
                Vec::new()
            }
            MouseEventKind::ScrollDown => {
                Self::adjust_scroll(app, 1);
                Vec::new()
            }
            MouseEventKind::Down(button) => {
                let areas: Vec<Rect> = app.sidebar.row_areas.iter().map(|(_, area)| *area).collect();
                let Some(index) =
                    find_target_index_by_mouse_position(&app.sidebar.last_area, &areas, mouse.column, mouse.row)
                else {
                    return Vec::new();
                };
                let row = app.sidebar.row_areas[index].0;
                app.sidebar.set_cursor_to(row);
                app.focus.focus(root::SIDEBAR);

                match (button, row) {
                    (MouseButton::Left, SidebarRow::Header(section)) => {
                        if let Some(slug) = app.sidebar.sections.get(section).map(|section| section.slug.clone()) {
                            app.toggle_section(&slug);
                        }
                        Vec::new()
                    }
                    (MouseButton::Left, row @ SidebarRow::Link { .. }) => match app.sidebar.link_at(row) {
                        Some(link) => vec![Effect::SwitchTo(link.route)],
                        None => Vec::new(),
                    },
                    (MouseButton::Right, row @ SidebarRow::Link { .. }) => match app.sidebar.link_at(row) {
                        Some(link) => vec![Effect::OpenContextMenu {
                            column: mouse.column,
                            row: mouse.row,
                            route: link.route,
                        }],
                        None => Vec::new(),
                    },
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.focus.is_focused(root::SIDEBAR);
        let block = Block::default()
            .title(Span::styled("Navigation", theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = app.sidebar.visible_rows();
        let max_scroll = rows.len().saturating_sub(inner.height as usize) as u16;
        let scroll = app.sidebar.scroll.min(max_scroll);
        let cursor_row = app.sidebar.cursor_row();

        let mut row_areas = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let Some(screen_row) = index.checked_sub(scroll as usize) else {
                continue;
            };
            if screen_row >= inner.height as usize {
                break;
            }
            let row_area = Rect::new(inner.x, inner.y + screen_row as u16, inner.width, 1);
            let line = Self::row_line(&app.sidebar, *row, cursor_row == Some(*row), focused);
            frame.render_widget(Paragraph::new(line), row_area);
            row_areas.push((*row, row_area));
        }

        app.sidebar.last_area = area;
        app.sidebar.row_areas = row_areas;
    }
}
