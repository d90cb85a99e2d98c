//! Toast notification component and state.

mod state;
mod toasts_component;

pub use state::{MAX_TOASTS, TOAST_EXIT_FOR, TOAST_VISIBLE_FOR, Toast, ToastPhase, ToastsState};
pub use toasts_component::ToastsComponent;
