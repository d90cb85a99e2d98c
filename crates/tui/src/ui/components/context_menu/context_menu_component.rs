//! Context menu component.
//!
//! The menu is a transient overlay: arrow keys move the highlight, Enter
//! activates and closes, Escape or an outside click closes. The main view
//! routes events here whenever a menu instance exists.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;

/// Component for the context menu overlay.
#[derive(Debug, Default)]
pub struct ContextMenuComponent;

impl ContextMenuComponent {
    fn activate(app: &App, index: usize) -> Vec<Effect> {
        let mut effects = app
            .context_menu
            .as_ref()
            .and_then(|menu| menu.items.get(index))
            .map(|item| vec![item.action.to_effect()])
            .unwrap_or_default();
        effects.push(Effect::CloseContextMenu);
        effects
    }
}

impl Component for ContextMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(menu) = app.context_menu.as_mut() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Esc => vec![Effect::CloseContextMenu],
            KeyCode::Down => {
                menu.cycle_selected(true);
                Vec::new()
            }
            KeyCode::Up => {
                menu.cycle_selected(false);
                Vec::new()
            }
            KeyCode::Enter => {
                let selected = menu.selected;
                Self::activate(app, selected)
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Vec::new();
        }
        let Some(menu) = app.context_menu.as_ref() else {
            return Vec::new();
        };
        match menu.item_at(mouse.column, mouse.row) {
            Some(index) => Self::activate(app, index),
            None if menu.contains(mouse.column, mouse.row) => Vec::new(),
            None => vec![Effect::CloseContextMenu],
        }
    }

    fn render(&mut self, frame: &mut Frame, _area: Rect, app: &mut App) {
        let Some(menu) = app.context_menu.as_ref() else {
            return;
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(true));
        let inner = block.inner(menu.area);
        frame.render_widget(Clear, menu.area);
        frame.render_widget(block, menu.area);

        for (index, item) in menu.items.iter().enumerate() {
            if index >= inner.height as usize {
                break;
            }
            let style = if index == menu.selected {
                theme::highlight_style()
            } else {
                theme::text_style()
            };
            let row_area = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            frame.render_widget(Paragraph::new(Span::styled(format!(" {}", item.label), style)), row_area);
        }
    }
}
