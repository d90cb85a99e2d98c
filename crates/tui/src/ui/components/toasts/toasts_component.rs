//! Toast notification overlay.
//!
//! Toasts stack in the bottom-right corner, newest at the bottom. A toast
//! in its leaving phase renders dimmed so the exit is visible before the
//! runtime removes it on a later tick.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Component for the toast stack.
#[derive(Debug, Default)]
pub struct ToastsComponent;

impl Component for ToastsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let width = TOAST_WIDTH.min(area.width);
        if width == 0 || area.height < TOAST_HEIGHT {
            return;
        }
        let x = area.right().saturating_sub(width + 1);

        for (offset, toast) in app.toasts.toasts().iter().rev().enumerate() {
            let lifted = (offset as u16 + 1) * TOAST_HEIGHT;
            let Some(y) = area.bottom().checked_sub(lifted + 1) else {
                break;
            };
            if y < area.y {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

            let color = theme::severity_color(toast.severity);
            let (border, text) = if toast.is_leaving() {
                (Style::default().fg(theme::BORDER), theme::text_muted())
            } else {
                (Style::default().fg(color), theme::text_style())
            };
            let block = Block::default().borders(Borders::ALL).border_style(border);
            let inner = block.inner(toast_area);
            frame.render_widget(Clear, toast_area);
            frame.render_widget(block, toast_area);
            frame.render_widget(Paragraph::new(Span::styled(toast.message.clone(), text)), inner);
        }
    }
}
