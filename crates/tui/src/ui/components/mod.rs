//! UI components: sidebar, topbar, search, modal, context menu, toasts,
//! breadcrumbs, charts.

use ratatui::layout::{Position, Rect};

pub mod breadcrumbs;
pub mod charts;
pub mod component;
pub mod context_menu;
pub mod modal;
pub mod search;
pub mod sidebar;
pub mod toasts;
pub mod topbar;

pub use breadcrumbs::BreadcrumbsComponent;
pub use charts::ChartComponent;
pub use component::Component;
pub use context_menu::ContextMenuComponent;
pub use modal::ModalComponent;
pub use search::SearchComponent;
pub use sidebar::SidebarComponent;
pub use toasts::ToastsComponent;
pub use topbar::TopbarComponent;

/// Resolves a mouse position to the index of the row area containing it,
/// provided the position lies inside the surrounding container.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !container.contains(Position::new(x, y)) {
        return None;
    }
    areas.iter().position(|area| area.contains(Position::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_requires_the_container() {
        let container = Rect::new(0, 0, 10, 4);
        let rows = [Rect::new(0, 0, 10, 1), Rect::new(0, 1, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 2, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 2, 3), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 20, 1), None);
    }
}
