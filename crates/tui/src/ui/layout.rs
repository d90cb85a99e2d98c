//! Screen layout for the console.
//!
//! One vertical arrangement: topbar (title, search, dropdown triggers),
//! breadcrumb line, body, hint line. Wide terminals split the body into a
//! fixed sidebar column and the content area; below the breakpoint the
//! sidebar column disappears and the sidebar becomes an overlay drawer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width below which the sidebar collapses into a drawer.
pub const SIDEBAR_BREAKPOINT: u16 = 96;

/// Sidebar column width on wide terminals (also the drawer width).
pub const SIDEBAR_WIDTH: u16 = 28;

/// Resolved screen areas for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub title: Rect,
    pub search: Rect,
    pub menus: Rect,
    pub breadcrumbs: Rect,
    /// Sidebar column; `None` below the breakpoint.
    pub sidebar: Option<Rect>,
    /// Whole body row, used to place the overlay drawer.
    pub body: Rect,
    pub content: Rect,
    pub hints: Rect,
}

pub(crate) struct MainLayout;

impl MainLayout {
    /// Computes the frame layout for the given terminal size.
    pub fn responsive_layout(size: Rect) -> ScreenAreas {
        let rows = Layout::vertical([
            Constraint::Length(3), // topbar
            Constraint::Length(1), // breadcrumbs
            Constraint::Min(5),    // body
            Constraint::Length(1), // hints
        ])
        .split(size);

        let top = Layout::horizontal([
            Constraint::Min(18),    // title
            Constraint::Length(34), // search
            Constraint::Length(48), // dropdown triggers
        ])
        .split(rows[0]);

        let body = rows[2];
        let (sidebar, content) = if size.width >= SIDEBAR_BREAKPOINT {
            let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)]).split(body);
            (Some(columns[0]), columns[1])
        } else {
            (None, body)
        };

        ScreenAreas {
            title: top[0],
            search: top[1],
            menus: top[2],
            breadcrumbs: rows[1],
            sidebar,
            body,
            content,
            hints: rows[3],
        }
    }

    /// Area the sidebar drawer overlays on narrow terminals.
    pub fn drawer_area(body: Rect) -> Rect {
        Rect::new(body.x, body.y, SIDEBAR_WIDTH.min(body.width), body.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminals_keep_a_sidebar_column() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 140, 40));
        let sidebar = areas.sidebar.expect("sidebar column");
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.content.x, sidebar.right());
    }

    #[test]
    fn narrow_terminals_give_the_body_to_content() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 80, 30));
        assert!(areas.sidebar.is_none());
        assert_eq!(areas.content, areas.body);
    }

    #[test]
    fn drawer_covers_the_left_edge_of_the_body() {
        let body = Rect::new(0, 4, 80, 25);
        let drawer = MainLayout::drawer_area(body);
        assert_eq!(drawer.x, body.x);
        assert_eq!(drawer.height, body.height);
        assert_eq!(drawer.width, SIDEBAR_WIDTH);
    }
}
