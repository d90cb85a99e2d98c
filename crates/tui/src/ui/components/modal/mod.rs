//! Modal overlay component and state.

mod modal_component;
mod state;

pub use modal_component::ModalComponent;
pub use state::{ModalButton, ModalState};
