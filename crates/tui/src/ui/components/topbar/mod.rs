//! Topbar dropdown component and the exclusive dropdown family state.

mod state;
mod topbar_component;

pub use state::{DropdownFamily, DropdownMenu, MenuAction, MenuItem, TopbarState};
pub use topbar_component::TopbarComponent;
