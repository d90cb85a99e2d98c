//! Dashboard chart component and state.

mod chart_component;
mod state;

pub use chart_component::ChartComponent;
pub use state::ChartState;
