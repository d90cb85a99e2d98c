//! Component contract for the console UI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while reporting cross-cutting side effects back to the
//! runtime as `Effect`s. State they share with other components lives on
//! `App`; anything purely local stays inside the component.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use landlord_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;

/// A UI component with its own event handling and rendering.
///
/// All handlers default to doing nothing so components only implement what
/// they care about. Handlers run to completion on the event loop; none of
/// them block.
pub trait Component {
    /// One-time setup hook.
    #[allow(dead_code)]
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event routed to this component.
    #[allow(dead_code)]
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    #[allow(dead_code)]
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// React to an application message.
    #[allow(dead_code)]
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into the given area. Rendering may update
    /// hit-testing areas on the component's state but must not otherwise
    /// mutate behavior-relevant state.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
