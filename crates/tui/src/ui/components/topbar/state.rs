//! Topbar dropdown state: an exclusive family of menus.
//!
//! A `DropdownFamily` owns its member menus and at most one open index.
//! Exclusivity is enforced at the open transition: opening a member replaces
//! whatever member was open. Scoping is per family instance, so two
//! toolbars each holding their own family can never close each other's
//! menus.

use landlord_types::{Effect, Modal, Route};
use ratatui::layout::{Position, Rect};

/// What activating a menu item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Switch the content view to a page.
    Navigate(Route),
    /// Dispatch a registered quick action by identifier.
    Run(String),
    /// Open a modal overlay.
    Open(Modal),
}

impl MenuAction {
    /// The effect activating this action reports to the runtime.
    pub fn to_effect(&self) -> Effect {
        match self {
            MenuAction::Navigate(route) => Effect::SwitchTo(*route),
            MenuAction::Run(action_id) => Effect::RunAction(action_id.clone()),
            MenuAction::Open(modal) => Effect::ShowModal(modal.clone()),
        }
    }
}

/// One selectable entry in a dropdown or context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// One dropdown: a trigger button and the items revealed under it.
#[derive(Debug, Clone)]
pub struct DropdownMenu {
    pub title: String,
    pub items: Vec<MenuItem>,
    /// Last rendered trigger button area, for mouse hit testing.
    pub trigger_area: Rect,
    /// Last rendered menu overlay area; only meaningful while open.
    pub menu_area: Rect,
}

impl DropdownMenu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
            trigger_area: Rect::default(),
            menu_area: Rect::default(),
        }
    }
}

/// An exclusive group of dropdowns: at most one member open at any instant.
#[derive(Debug, Default)]
pub struct DropdownFamily {
    menus: Vec<DropdownMenu>,
    open: Option<usize>,
    /// Highlighted item inside the open menu.
    pub selected: usize,
}

impl DropdownFamily {
    pub fn new(menus: Vec<DropdownMenu>) -> Self {
        Self {
            menus,
            open: None,
            selected: 0,
        }
    }

    pub fn menus(&self) -> &[DropdownMenu] {
        &self.menus
    }

    pub fn menus_mut(&mut self) -> &mut [DropdownMenu] {
        &mut self.menus
    }

    /// Index of the open member, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// The open member, if any.
    pub fn open_menu(&self) -> Option<&DropdownMenu> {
        self.open.and_then(|index| self.menus.get(index))
    }

    /// Opens the member at `index`, closing any open sibling first. Opening
    /// an out-of-range index is a no-op.
    pub fn open_at(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        self.open = Some(index);
        self.selected = 0;
    }

    /// Toggles the member at `index`: closes it when it is the open one,
    /// otherwise opens it (closing any sibling).
    pub fn toggle_at(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        } else {
            self.open_at(index);
        }
    }

    /// Closes the open member. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Moves the item highlight inside the open menu, wrapping.
    pub fn cycle_selected(&mut self, forward: bool) {
        let Some(menu) = self.open_menu() else { return };
        let len = menu.items.len();
        if len == 0 {
            return;
        }
        let selected = self.selected.min(len - 1);
        self.selected = if forward { (selected + 1) % len } else { (selected + len - 1) % len };
    }

    /// Finds the trigger whose button contains the given cell.
    pub fn trigger_at(&self, x: u16, y: u16) -> Option<usize> {
        self.menus
            .iter()
            .position(|menu| menu.trigger_area.contains(Position::new(x, y)))
    }

    /// Resolves a click inside the open menu to an item index.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        let menu = self.open_menu()?;
        if !menu.menu_area.contains(Position::new(x, y)) {
            return None;
        }
        // One item per row inside the menu border.
        let row = y.checked_sub(menu.menu_area.y + 1)? as usize;
        (row < menu.items.len()).then_some(row)
    }
}

/// State for the topbar: one dropdown family plus the trigger cursor used
/// for keyboard traversal.
#[derive(Debug, Default)]
pub struct TopbarState {
    pub family: DropdownFamily,
    /// Trigger the keyboard cursor sits on while no menu is open.
    pub trigger_cursor: usize,
    /// Last rendered trigger strip area.
    pub last_area: Rect,
}

impl TopbarState {
    /// The console's standard topbar menus.
    pub fn console_default() -> Self {
        let quick_actions = DropdownMenu::new(
            "Quick actions",
            vec![
                MenuItem::new("New lease", MenuAction::Run("lease-new".into())),
                MenuItem::new("Record payment", MenuAction::Run("payment-record".into())),
                MenuItem::new("Log maintenance", MenuAction::Run("maintenance-log".into())),
            ],
        );
        let notifications = DropdownMenu::new(
            "Notifications",
            vec![
                MenuItem::new("3 overdue payments", MenuAction::Navigate(Route::Payments)),
                MenuItem::new("2 open work orders", MenuAction::Navigate(Route::Maintenance)),
                MenuItem::new("1 expiring lease", MenuAction::Navigate(Route::Leases)),
            ],
        );
        let account = DropdownMenu::new(
            "Account",
            vec![
                MenuItem::new("Keyboard shortcuts", MenuAction::Open(Modal::Help)),
                MenuItem::new("Sign out", MenuAction::Open(Modal::ConfirmAction("sign-out".into()))),
            ],
        );
        Self {
            family: DropdownFamily::new(vec![quick_actions, notifications, account]),
            trigger_cursor: 0,
            last_area: Rect::default(),
        }
    }

    /// Moves the keyboard cursor across triggers, wrapping.
    pub fn cycle_trigger(&mut self, forward: bool) {
        let len = self.family.menus().len();
        if len == 0 {
            return;
        }
        let cursor = self.trigger_cursor.min(len - 1);
        self.trigger_cursor = if forward { (cursor + 1) % len } else { (cursor + len - 1) % len };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_of(count: usize) -> DropdownFamily {
        let menus = (0..count)
            .map(|index| {
                DropdownMenu::new(
                    format!("Menu {index}"),
                    vec![
                        MenuItem::new("First", MenuAction::Navigate(Route::Dashboard)),
                        MenuItem::new("Second", MenuAction::Navigate(Route::Reports)),
                    ],
                )
            })
            .collect();
        DropdownFamily::new(menus)
    }

    #[test]
    fn opening_a_member_closes_its_sibling() {
        let mut family = family_of(3);
        family.open_at(1);
        assert_eq!(family.open_index(), Some(1));
        family.open_at(0);
        assert_eq!(family.open_index(), Some(0));
    }

    #[test]
    fn toggle_closes_the_open_member() {
        let mut family = family_of(2);
        family.toggle_at(1);
        assert_eq!(family.open_index(), Some(1));
        family.toggle_at(1);
        assert_eq!(family.open_index(), None);
    }

    #[test]
    fn close_with_nothing_open_is_a_no_op() {
        let mut family = family_of(2);
        assert!(!family.close());
        family.open_at(0);
        assert!(family.close());
        assert!(!family.close());
    }

    #[test]
    fn families_are_scoped_independently() {
        let mut toolbar_a = family_of(2);
        let mut toolbar_b = family_of(2);
        toolbar_a.open_at(0);
        toolbar_b.open_at(1);
        assert_eq!(toolbar_a.open_index(), Some(0));
        assert_eq!(toolbar_b.open_index(), Some(1));
        toolbar_a.close();
        assert_eq!(toolbar_b.open_index(), Some(1));
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut family = family_of(2);
        family.open_at(7);
        assert_eq!(family.open_index(), None);
    }

    #[test]
    fn selection_wraps_inside_the_open_menu() {
        let mut family = family_of(1);
        family.open_at(0);
        family.cycle_selected(true);
        family.cycle_selected(true);
        assert_eq!(family.selected, 0);
        family.cycle_selected(false);
        assert_eq!(family.selected, 1);
    }

    #[test]
    fn item_hit_testing_uses_the_open_menu_area() {
        let mut family = family_of(1);
        family.open_at(0);
        family.menus_mut()[0].menu_area = Rect::new(10, 2, 20, 4);
        assert_eq!(family.item_at(12, 3), Some(0));
        assert_eq!(family.item_at(12, 4), Some(1));
        assert_eq!(family.item_at(5, 3), None);
    }
}
