//! Global search input component.
//!
//! Text input feeding the debounced dispatch in [`super::SearchState`].
//! Enter flushes immediately; everything else rides the quiet period.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;
use crate::ui::focus::root;

/// Component for the topbar search box.
#[derive(Debug, Default)]
pub struct SearchComponent;

impl Component for SearchComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.search.push_char(character, Instant::now());
                }
                Vec::new()
            }
            KeyCode::Backspace => {
                app.search.backspace(Instant::now());
                Vec::new()
            }
            KeyCode::Enter => match app.search.flush_now() {
                Some(query) => vec![Effect::DispatchSearch(query)],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && app.search.last_area.contains(Position::new(mouse.column, mouse.row))
        {
            app.focus.focus(root::SEARCH);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.focus.is_focused(root::SEARCH);
        let block = Block::default()
            .title(Span::styled("Search  Ctrl+K", theme::title_style()))
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused));
        let inner = block.inner(area);
        let input = Paragraph::new(app.search.input.as_str()).style(theme::text_style()).block(block);
        frame.render_widget(input, area);

        // Cursor sits at the end of the input while focused.
        if focused {
            let x = inner.x.saturating_add(app.search.input.chars().count() as u16);
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
        app.search.last_area = area;
    }
}
