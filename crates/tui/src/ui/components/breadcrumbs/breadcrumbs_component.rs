//! Breadcrumb trail rendering.
//!
//! The session store keeps visits most recent first; the trail reads left
//! to right from oldest to the current page, with the current page
//! emphasized.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;
use crate::ui::components::Component;

/// Component for the breadcrumb line under the topbar.
#[derive(Debug, Default)]
pub struct BreadcrumbsComponent;

impl Component for BreadcrumbsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let count = app.crumbs.len();
        let mut spans = vec![Span::styled(" ", theme::text_muted())];
        for (position, crumb) in app.crumbs.iter().rev().enumerate() {
            let is_current = position + 1 == count;
            let style = if is_current {
                theme::list_highlight_style()
            } else {
                theme::text_muted()
            };
            spans.push(Span::styled(crumb.title.clone(), style));
            if !is_current {
                spans.push(Span::styled(" › ", theme::text_muted()));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
