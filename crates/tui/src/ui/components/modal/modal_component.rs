//! Modal overlay component.
//!
//! While a modal is open it traps all key events: Tab/Shift-Tab cycle the
//! trapped focus ring, Enter activates the focused button, Escape closes.
//! A click outside the dialog closes it too.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use landlord_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;
use crate::ui::focus;
use crate::ui::utils::centered_fixed;

/// Component for the modal overlay.
#[derive(Debug, Default)]
pub struct ModalComponent;

impl ModalComponent {
    /// Effects for activating the button carrying the given focus node.
    fn activate(app: &App, focus_id: &'static str) -> Vec<Effect> {
        match focus_id {
            focus::modal::CONFIRM => {
                let mut effects = Vec::new();
                if let Some(action_id) = app.modal.as_ref().and_then(|modal| modal.confirm_action.clone()) {
                    effects.push(Effect::RunAction(action_id));
                }
                effects.push(Effect::CloseModal);
                effects
            }
            focus::modal::CANCEL | focus::modal::CLOSE => vec![Effect::CloseModal],
            _ => Vec::new(),
        }
    }
}

impl Component for ModalComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::CloseModal],
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match app.focus.current() {
                Some(focus_id) => Self::activate(app, focus_id),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        let Some(modal) = app.modal.as_ref() else {
            return Vec::new();
        };

        if !modal.area.contains(position) {
            // Outside click dismisses, same as the other disclosure elements.
            return vec![Effect::CloseModal];
        }

        let clicked = modal
            .buttons
            .iter()
            .zip(modal.button_areas.iter())
            .find(|(_, area)| area.contains(position))
            .map(|(button, _)| button.focus_id);
        if let Some(focus_id) = clicked {
            app.focus.focus(focus_id);
            return Self::activate(app, focus_id);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let current_focus = app.focus.current();
        let Some(modal) = app.modal.as_mut() else {
            return;
        };

        let body_lines = modal.body.lines().count() as u16;
        let dialog = centered_fixed(58, body_lines + 6, area);
        modal.area = dialog;

        let mut title = modal.title.clone();
        title.push_str("  [Esc] Close");
        let block = Block::default()
            .title(Span::styled(title, theme::title_style().fg(theme::ACCENT)))
            .borders(Borders::ALL)
            .border_style(theme::border_style(true));
        let inner = block.inner(dialog);
        frame.render_widget(Clear, dialog);
        frame.render_widget(block, dialog);

        let splits = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let body = Paragraph::new(modal.body.as_str())
            .style(theme::text_style())
            .wrap(Wrap { trim: false });
        frame.render_widget(body, splits[0]);

        // Buttons on one row, left to right in focus order.
        let mut button_areas = Vec::new();
        let mut x = splits[1].x;
        for button in &modal.buttons {
            let label = format!("[ {} ]", button.label);
            let width = (label.len() as u16).min(splits[1].right().saturating_sub(x));
            if width == 0 {
                button_areas.push(Rect::default());
                continue;
            }
            let button_area = Rect::new(x, splits[1].y, width, 1);
            let style = if current_focus == Some(button.focus_id) {
                theme::list_highlight_style()
            } else {
                theme::text_muted()
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), button_area);
            button_areas.push(button_area);
            x = x.saturating_add(width + 2);
        }
        modal.button_areas = button_areas;
    }
}
