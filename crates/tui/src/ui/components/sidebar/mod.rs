//! Sidebar navigation component and state.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{SidebarRow, SidebarState};
