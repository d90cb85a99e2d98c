//! Shared vocabulary for the landlord admin console.
//!
//! Routes, navigation model types, application messages/effects, and the
//! metrics feed records consumed by the dashboard charts. Everything here is
//! plain data; behavior lives in the `tui` crate.

use serde::{Deserialize, Serialize};

pub mod metrics;

/// Pages the console can display.
///
/// Each route corresponds to one navigation link in the sidebar. The set is
/// fixed at startup; routing only switches between members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Reports,
    Properties,
    Units,
    Leases,
    Applications,
    Tenants,
    Vendors,
    Payments,
    Invoices,
    Maintenance,
    Inspections,
}

impl Route {
    /// Stable identifier used for CLI arguments and breadcrumb urls.
    pub const fn slug(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Reports => "reports",
            Route::Properties => "properties",
            Route::Units => "units",
            Route::Leases => "leases",
            Route::Applications => "applications",
            Route::Tenants => "tenants",
            Route::Vendors => "vendors",
            Route::Payments => "payments",
            Route::Invoices => "invoices",
            Route::Maintenance => "maintenance",
            Route::Inspections => "inspections",
        }
    }

    /// Human-friendly title shown in the sidebar and breadcrumb trail.
    pub const fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Reports => "Reports",
            Route::Properties => "Properties",
            Route::Units => "Units",
            Route::Leases => "Leases",
            Route::Applications => "Applications",
            Route::Tenants => "Tenants",
            Route::Vendors => "Vendors",
            Route::Payments => "Payments",
            Route::Invoices => "Invoices",
            Route::Maintenance => "Maintenance",
            Route::Inspections => "Inspections",
        }
    }

    /// Breadcrumb url for this route.
    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    /// Resolves a slug back to a route. Unknown slugs return `None` so the
    /// caller can fall back to the default page.
    pub fn from_slug(slug: &str) -> Option<Self> {
        ALL_ROUTES.iter().copied().find(|route| route.slug() == slug)
    }
}

/// Every route, in display order.
pub const ALL_ROUTES: &[Route] = &[
    Route::Dashboard,
    Route::Reports,
    Route::Properties,
    Route::Units,
    Route::Leases,
    Route::Applications,
    Route::Tenants,
    Route::Vendors,
    Route::Payments,
    Route::Invoices,
    Route::Maintenance,
    Route::Inspections,
];

/// A single link inside a sidebar navigation section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Label rendered in the sidebar.
    pub title: String,
    /// Page the link switches to.
    pub route: Route,
    /// Whether the launcher marked this link as the current page. Set once
    /// when the console model is built and never changed afterwards.
    pub active: bool,
}

impl NavLink {
    pub fn new(route: Route, active: bool) -> Self {
        Self {
            title: route.title().to_string(),
            route,
            active,
        }
    }
}

/// A collapsible group of navigation links.
///
/// The `slug` is the group's identity in the persisted open-set; it must be
/// unique across the console model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub slug: String,
    pub title: String,
    pub links: Vec<NavLink>,
}

impl NavSection {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            links,
        }
    }

    /// Whether any link in this section is marked active.
    pub fn contains_active_link(&self) -> bool {
        self.links.iter().any(|link| link.active)
    }
}

/// Toast and modal severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Modal kinds the console can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcut reference.
    Help,
    /// Confirmation gate in front of a registered quick action. The payload
    /// is the action identifier to dispatch on confirm; opening a modal for
    /// an unregistered identifier is a no-op.
    ConfirmAction(String),
}

/// Messages delivered to the application by the runtime.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic tick driving debounce flushes and toast lifetimes.
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
}

/// Side effects reported by components and processed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch the main content to the given page.
    SwitchTo(Route),
    /// Open a modal overlay.
    ShowModal(Modal),
    /// Close the open modal, if any.
    CloseModal,
    /// Open a context menu at the given cell coordinates.
    OpenContextMenu { column: u16, row: u16, route: Route },
    /// Close the open context menu, if any.
    CloseContextMenu,
    /// Surface a toast notification.
    ShowToast { message: String, severity: Severity },
    /// A debounced search query became due.
    DispatchSearch(String),
    /// Run a quick action by registry identifier.
    RunAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip() {
        for route in ALL_ROUTES {
            assert_eq!(Route::from_slug(route.slug()), Some(*route));
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert_eq!(Route::from_slug("billing"), None);
        assert_eq!(Route::from_slug(""), None);
    }

    #[test]
    fn nav_section_active_detection() {
        let section = NavSection::new(
            "leasing",
            "Leasing",
            vec![NavLink::new(Route::Leases, false), NavLink::new(Route::Applications, true)],
        );
        assert!(section.contains_active_link());

        let inactive = NavSection::new("people", "People", vec![NavLink::new(Route::Tenants, false)]);
        assert!(!inactive.contains_active_link());
    }
}
