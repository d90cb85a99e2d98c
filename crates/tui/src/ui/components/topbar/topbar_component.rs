//! Topbar dropdown component.
//!
//! Renders the trigger strip and, while a menu is open, its overlay. The
//! family's exclusivity means the component never has to close siblings
//! explicitly; opening one closes the other by construction. Outside-click
//! dismissal is routed here by the main view whenever a menu is open, and
//! trigger clicks are hit-tested first so the click that opens a menu can
//! never be seen as an outside click.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;
use crate::ui::focus::root;

/// Component for the topbar dropdown strip.
#[derive(Debug, Default)]
pub struct TopbarComponent;

impl TopbarComponent {
    /// Activates an item of the open menu, closing the menu.
    fn activate_item(app: &mut App, index: usize) -> Vec<Effect> {
        let effects = app
            .topbar
            .family
            .open_menu()
            .and_then(|menu| menu.items.get(index))
            .map(|item| vec![item.action.to_effect()])
            .unwrap_or_default();
        app.topbar.family.close();
        effects
    }

    /// Renders the open menu's overlay. Called by the main view after the
    /// content has been drawn so the menu stacks above it.
    pub fn render_menu_overlay(&self, frame: &mut Frame, app: &mut App) {
        let viewport = app.viewport;
        let selected = app.topbar.family.selected;
        let Some(open_index) = app.topbar.family.open_index() else {
            return;
        };
        let Some(menu) = app.topbar.family.menus_mut().get_mut(open_index) else {
            return;
        };

        let width = menu
            .items
            .iter()
            .map(|item| item.label.len() as u16)
            .max()
            .unwrap_or(0)
            .max(menu.title.len() as u16)
            + 4;
        let height = menu.items.len() as u16 + 2;
        let x = menu
            .trigger_area
            .x
            .min(viewport.right().saturating_sub(width))
            .max(viewport.x);
        let y = menu.trigger_area.bottom().min(viewport.bottom().saturating_sub(height));
        let area = Rect::new(x, y, width.min(viewport.width), height.min(viewport.height));
        menu.menu_area = area;

        let block = Block::default()
            .title(Span::styled(menu.title.clone(), theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(true));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        for (index, item) in menu.items.iter().enumerate() {
            if index >= inner.height as usize {
                break;
            }
            let style = if index == selected {
                theme::highlight_style()
            } else {
                theme::text_style()
            };
            let row_area = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            frame.render_widget(Paragraph::new(Span::styled(format!(" {}", item.label), style)), row_area);
        }
    }
}

impl Component for TopbarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.topbar.family.open_index().is_some() {
            return match key.code {
                KeyCode::Down => {
                    app.topbar.family.cycle_selected(true);
                    Vec::new()
                }
                KeyCode::Up => {
                    app.topbar.family.cycle_selected(false);
                    Vec::new()
                }
                // Menu-bar style: sideways movement slides the open menu.
                KeyCode::Left | KeyCode::Right => {
                    app.topbar.cycle_trigger(key.code == KeyCode::Right);
                    let cursor = app.topbar.trigger_cursor;
                    app.topbar.family.open_at(cursor);
                    Vec::new()
                }
                KeyCode::Enter => {
                    let selected = app.topbar.family.selected;
                    Self::activate_item(app, selected)
                }
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Left => {
                app.topbar.cycle_trigger(false);
                Vec::new()
            }
            KeyCode::Right => {
                app.topbar.cycle_trigger(true);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                let cursor = app.topbar.trigger_cursor;
                app.topbar.family.toggle_at(cursor);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);

        // Trigger clicks come first: the click that opens a menu is consumed
        // here and never reaches the outside-click check below.
        if let Some(index) = app.topbar.family.trigger_at(x, y) {
            app.topbar.trigger_cursor = index;
            app.focus.focus(root::TOPBAR);
            app.topbar.family.toggle_at(index);
            return Vec::new();
        }

        if app.topbar.family.open_index().is_some() {
            if let Some(index) = app.topbar.family.item_at(x, y) {
                return Self::activate_item(app, index);
            }
            // Outside click dismisses the open menu.
            app.topbar.family.close();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.focus.is_focused(root::TOPBAR);
        let menu_count = app.topbar.family.menus().len();
        if menu_count == 0 {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, menu_count as u32); menu_count];
        let cells = Layout::horizontal(constraints).split(area);

        let open_index = app.topbar.family.open_index();
        let trigger_cursor = app.topbar.trigger_cursor;
        for (index, menu) in app.topbar.family.menus_mut().iter_mut().enumerate() {
            let Some(cell) = cells.get(index).copied() else { continue };
            let is_open = open_index == Some(index);
            let style = if is_open {
                theme::list_highlight_style()
            } else if focused && index == trigger_cursor {
                theme::highlight_style()
            } else {
                theme::text_muted()
            };
            let marker = if is_open { "▴" } else { "▾" };
            let trigger = Paragraph::new(Span::styled(format!(" {} {marker} ", menu.title), style))
                .block(Block::default().borders(Borders::ALL).border_style(theme::border_style(
                    focused && index == trigger_cursor,
                )))
                .centered();
            frame.render_widget(trigger, cell);
            menu.trigger_area = cell;
        }
        app.topbar.last_area = area;
    }
}
