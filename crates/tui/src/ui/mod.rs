//! UI rendering and event routing for the console.

pub mod components;
pub mod focus;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod utils;
