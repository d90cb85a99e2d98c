//! Context menu state: a single transient menu anchored at the pointer.
//!
//! Exactly one context menu instance exists at a time; opening a new one
//! replaces any prior instance. The menu is positioned at the triggering
//! pointer cell and then clamped so its bottom-right corner keeps a minimum
//! margin from the viewport's right and bottom edges.

use landlord_types::Route;
use ratatui::layout::{Position, Rect};

use crate::ui::components::topbar::{MenuAction, MenuItem};

/// Minimum distance kept between the menu and the right/bottom viewport
/// edges when clamping.
pub const EDGE_MARGIN: u16 = 10;

/// A context menu created fresh on each open and dropped on close.
#[derive(Debug)]
pub struct ContextMenuState {
    pub items: Vec<MenuItem>,
    /// Clamped on-screen area.
    pub area: Rect,
    /// Highlighted item index.
    pub selected: usize,
}

impl ContextMenuState {
    /// Builds a menu for a right-click on the given page, anchored at the
    /// pointer cell and clamped into the viewport.
    pub fn open_at(column: u16, row: u16, route: Route, viewport: Rect) -> Self {
        let items = vec![
            MenuItem::new("Refresh view", MenuAction::Run("page-refresh".into())),
            MenuItem::new(format!("Copy path {}", route.path()), MenuAction::Run("path-copy".into())),
            MenuItem::new("Go to dashboard", MenuAction::Navigate(Route::Dashboard)),
        ];
        let width = items.iter().map(|item| item.label.len() as u16).max().unwrap_or(0) + 4;
        let height = items.len() as u16 + 2;
        Self {
            area: place_menu(column, row, width, height, viewport),
            items,
            selected: 0,
        }
    }

    /// Whether the given cell lies inside the menu.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains(Position::new(x, y))
    }

    /// Resolves a click inside the menu to an item index.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let row = y.checked_sub(self.area.y + 1)? as usize;
        (row < self.items.len()).then_some(row)
    }

    /// Moves the highlight, wrapping at both ends.
    pub fn cycle_selected(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let selected = self.selected.min(len - 1);
        self.selected = if forward { (selected + 1) % len } else { (selected + len - 1) % len };
    }
}

/// Positions a menu at the anchor cell, shifting left/up by any overflow so
/// the bottom-right corner stays at least [`EDGE_MARGIN`] cells from the
/// viewport's right and bottom edges. The menu never leaves the viewport's
/// top-left corner either.
pub fn place_menu(anchor_x: u16, anchor_y: u16, width: u16, height: u16, viewport: Rect) -> Rect {
    let max_x = viewport.right().saturating_sub(EDGE_MARGIN + width);
    let max_y = viewport.bottom().saturating_sub(EDGE_MARGIN + height);
    let x = anchor_x.min(max_x).max(viewport.x);
    let y = anchor_y.min(max_y).max(viewport.y);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_inside_the_safe_zone_is_kept() {
        let viewport = Rect::new(0, 0, 120, 40);
        let area = place_menu(20, 10, 24, 5, viewport);
        assert_eq!((area.x, area.y), (20, 10));
    }

    #[test]
    fn bottom_right_overflow_is_shifted_back_with_margin() {
        let viewport = Rect::new(0, 0, 120, 40);
        let area = place_menu(118, 39, 24, 5, viewport);
        assert!(area.right() <= viewport.right() - EDGE_MARGIN);
        assert!(area.bottom() <= viewport.bottom() - EDGE_MARGIN);
    }

    #[test]
    fn menu_never_escapes_the_viewport_origin() {
        let viewport = Rect::new(0, 0, 30, 12);
        // Viewport too small to honor the margin; clamp to the origin side.
        let area = place_menu(25, 10, 24, 5, viewport);
        assert_eq!((area.x, area.y), (0, 0));
    }

    #[test]
    fn item_hit_testing_accounts_for_the_border() {
        let menu = ContextMenuState::open_at(5, 5, Route::Leases, Rect::new(0, 0, 120, 40));
        let inside_first = (menu.area.x + 2, menu.area.y + 1);
        assert_eq!(menu.item_at(inside_first.0, inside_first.1), Some(0));
        assert_eq!(menu.item_at(menu.area.x + 2, menu.area.y), None);
        assert_eq!(menu.item_at(0, 0), None);
    }

    #[test]
    fn selection_wraps() {
        let mut menu = ContextMenuState::open_at(5, 5, Route::Leases, Rect::new(0, 0, 120, 40));
        let len = menu.items.len();
        for _ in 0..len {
            menu.cycle_selected(true);
        }
        assert_eq!(menu.selected, 0);
        menu.cycle_selected(false);
        assert_eq!(menu.selected, len - 1);
    }
}
