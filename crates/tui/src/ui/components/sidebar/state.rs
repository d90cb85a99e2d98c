//! Sidebar navigation state: collapsible sections and the expanded-set.
//!
//! The expanded set is an insertion-ordered set of section slugs; order
//! reflects most-recent-toggle order, not display order. The set is seeded
//! once at startup from (a) the persisted copy, (b) the section containing
//! the link the launcher marked active, (c) the first section as a
//! deterministic fallback. Seeding never writes back to the store; only user
//! toggles do, and the caller persists immediately after each toggle.

use indexmap::IndexSet;
use landlord_types::{NavLink, NavSection, Route};
use ratatui::layout::Rect;

/// One renderable sidebar row: a section header or a link within an
/// expanded section. Indices refer to `SidebarState::sections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Header(usize),
    Link { section: usize, link: usize },
}

/// State for the sidebar navigation tree.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Fixed set of sections, in display order, built once at startup.
    pub sections: Vec<NavSection>,
    /// Expanded section slugs in most-recent-toggle order, no duplicates.
    open: IndexSet<String>,
    /// Keyboard cursor position within the visible rows.
    pub cursor: usize,
    /// Vertical scroll offset in rows, restored from the session store.
    pub scroll: u16,
    /// Whether the overlay drawer is open (narrow terminals only).
    pub drawer_open: bool,
    /// Last rendered area; used for mouse hit testing and outside-click
    /// drawer dismissal.
    pub last_area: Rect,
    /// Per-row areas from the last render, paired with the row they show.
    pub row_areas: Vec<(SidebarRow, Rect)>,
}

impl SidebarState {
    /// Builds the sidebar from the console's sections and the persisted
    /// expanded list, applying the three-step seeding described above.
    pub fn initialize(sections: Vec<NavSection>, persisted: Vec<String>) -> Self {
        let mut open: IndexSet<String> = persisted.into_iter().collect();

        if let Some(section) = sections.iter().find(|section| section.contains_active_link()) {
            open.insert(section.slug.clone());
        }

        if open.is_empty()
            && let Some(first) = sections.first()
        {
            open.insert(first.slug.clone());
        }

        Self {
            sections,
            open,
            cursor: 0,
            scroll: 0,
            drawer_open: false,
            last_area: Rect::default(),
            row_areas: Vec::new(),
        }
    }

    /// The default console sections, with the link for `active` (if any)
    /// marked as the current page.
    pub fn console_sections(active: Option<Route>) -> Vec<NavSection> {
        let link = |route: Route| NavLink::new(route, active == Some(route));
        vec![
            NavSection::new("overview", "Overview", vec![link(Route::Dashboard), link(Route::Reports)]),
            NavSection::new("portfolio", "Portfolio", vec![link(Route::Properties), link(Route::Units)]),
            NavSection::new("leases", "Leasing", vec![link(Route::Leases), link(Route::Applications)]),
            NavSection::new("people", "People", vec![link(Route::Tenants), link(Route::Vendors)]),
            NavSection::new("finance", "Finance", vec![link(Route::Payments), link(Route::Invoices)]),
            NavSection::new(
                "operations",
                "Operations",
                vec![link(Route::Maintenance), link(Route::Inspections)],
            ),
        ]
    }

    /// Whether the section with the given slug is expanded.
    pub fn is_open(&self, slug: &str) -> bool {
        self.open.contains(slug)
    }

    /// Toggles a section and returns whether it is now expanded. Only the
    /// named section changes; every other section keeps its state.
    pub fn toggle(&mut self, slug: &str) -> bool {
        let now_open = if self.open.shift_remove(slug) {
            false
        } else {
            self.open.insert(slug.to_string());
            true
        };
        self.clamp_cursor();
        now_open
    }

    /// The expanded slugs in most-recent-toggle order, for persistence.
    pub fn open_slugs(&self) -> Vec<String> {
        self.open.iter().cloned().collect()
    }

    /// The rows currently renderable: every header, plus the links of
    /// expanded sections.
    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (section_index, section) in self.sections.iter().enumerate() {
            rows.push(SidebarRow::Header(section_index));
            if self.is_open(&section.slug) {
                for link_index in 0..section.links.len() {
                    rows.push(SidebarRow::Link {
                        section: section_index,
                        link: link_index,
                    });
                }
            }
        }
        rows
    }

    /// The row under the keyboard cursor.
    pub fn cursor_row(&self) -> Option<SidebarRow> {
        let rows = self.visible_rows();
        if rows.is_empty() {
            return None;
        }
        rows.get(self.cursor.min(rows.len() - 1)).copied()
    }

    /// Moves the cursor up or down, wrapping at both ends.
    pub fn cycle_cursor(&mut self, forward: bool) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor.min(len - 1);
        self.cursor = if forward { (cursor + 1) % len } else { (cursor + len - 1) % len };
    }

    /// Places the cursor on the given row, if it is currently visible.
    pub fn set_cursor_to(&mut self, row: SidebarRow) {
        if let Some(index) = self.visible_rows().iter().position(|candidate| *candidate == row) {
            self.cursor = index;
        }
    }

    /// Resolves a row to the link it shows, when it shows one.
    pub fn link_at(&self, row: SidebarRow) -> Option<&NavLink> {
        match row {
            SidebarRow::Link { section, link } => self.sections.get(section)?.links.get(link),
            SidebarRow::Header(_) => None,
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_sections(slugs: &[&str]) -> Vec<NavSection> {
        slugs
            .iter()
            .map(|slug| NavSection::new(*slug, slug.to_uppercase(), vec![NavLink::new(Route::Dashboard, false)]))
            .collect()
    }

    #[test]
    fn active_link_expands_its_section() {
        let sections = SidebarState::console_sections(Some(Route::Leases));
        let state = SidebarState::initialize(sections, Vec::new());
        assert_eq!(state.open_slugs(), vec!["leases".to_string()]);
    }

    #[test]
    fn empty_state_falls_back_to_first_section() {
        let state = SidebarState::initialize(plain_sections(&["a", "b", "c"]), Vec::new());
        assert_eq!(state.open_slugs(), vec!["a".to_string()]);
    }

    #[test]
    fn persisted_set_is_restored_without_fallback() {
        let state = SidebarState::initialize(plain_sections(&["a", "b", "c"]), vec!["c".into(), "b".into()]);
        assert_eq!(state.open_slugs(), vec!["c".to_string(), "b".to_string()]);
        assert!(!state.is_open("a"));
    }

    #[test]
    fn active_link_joins_persisted_set() {
        let sections = SidebarState::console_sections(Some(Route::Payments));
        let state = SidebarState::initialize(sections, vec!["overview".into()]);
        assert!(state.is_open("overview"));
        assert!(state.is_open("finance"));
        assert_eq!(state.open_slugs().len(), 2);
    }

    #[test]
    fn duplicate_persisted_entries_collapse_to_one() {
        let state = SidebarState::initialize(plain_sections(&["a", "b"]), vec!["a".into(), "a".into()]);
        assert_eq!(state.open_slugs(), vec!["a".to_string()]);
    }

    #[test]
    fn toggle_parity_controls_membership() {
        let mut state = SidebarState::initialize(plain_sections(&["a", "b"]), Vec::new());
        for toggles in 1..=4 {
            state.toggle("b");
            assert_eq!(state.is_open("b"), toggles % 2 == 1);
        }
    }

    #[test]
    fn toggle_never_affects_other_sections() {
        let mut state = SidebarState::initialize(plain_sections(&["a", "b", "c"]), vec!["b".into(), "c".into()]);
        state.toggle("b");
        assert!(!state.is_open("a"));
        assert!(!state.is_open("b"));
        assert!(state.is_open("c"));
        state.toggle("b");
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));
        assert!(state.is_open("c"));
    }

    #[test]
    fn open_order_tracks_most_recent_toggle() {
        let mut state = SidebarState::initialize(plain_sections(&["a", "b", "c"]), Vec::new());
        state.toggle("c");
        state.toggle("b");
        assert_eq!(
            state.open_slugs(),
            vec!["a".to_string(), "c".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn visible_rows_follow_expansion() {
        let mut state = SidebarState::initialize(plain_sections(&["a", "b"]), Vec::new());
        // "a" starts open with one link; "b" is collapsed.
        assert_eq!(state.visible_rows().len(), 3);
        state.toggle("b");
        assert_eq!(state.visible_rows().len(), 4);
        state.toggle("a");
        assert_eq!(state.visible_rows().len(), 3);
    }

    #[test]
    fn cursor_wraps_and_survives_collapse() {
        let mut state = SidebarState::initialize(plain_sections(&["a", "b"]), Vec::new());
        let rows = state.visible_rows().len();
        for _ in 0..rows {
            state.cycle_cursor(true);
        }
        assert_eq!(state.cursor, 0);
        state.cycle_cursor(false);
        assert_eq!(state.cursor, rows - 1);

        // Collapsing the section the cursor sits in clamps it back in range.
        state.toggle("a");
        assert!(state.cursor_row().is_some());
    }
}
