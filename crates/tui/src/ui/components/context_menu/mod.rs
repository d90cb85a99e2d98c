//! Context menu component and state.

mod context_menu_component;
mod state;

pub use context_menu_component::ContextMenuComponent;
pub use state::{ContextMenuState, EDGE_MARGIN, place_menu};
