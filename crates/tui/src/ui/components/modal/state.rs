//! Modal state: built fresh on each open, dropped on close.
//!
//! A modal's focusable elements are recomputed at open time and pushed as a
//! trapped focus scope by the caller; the state itself only records what to
//! render and which action a confirm resolves to. Building a modal for a
//! kind with no backing content (an unregistered action) yields `None`, and
//! the open request becomes a no-op.

use landlord_types::Modal;
use ratatui::layout::Rect;

use crate::actions::ActionRegistry;
use crate::ui::focus;

/// A button inside a modal: label plus its focus node ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalButton {
    pub label: &'static str,
    pub focus_id: &'static str,
}

/// The open modal.
#[derive(Debug)]
pub struct ModalState {
    pub kind: Modal,
    pub title: String,
    pub body: String,
    /// Action dispatched when the confirm button activates.
    pub confirm_action: Option<String>,
    pub buttons: Vec<ModalButton>,
    /// Last rendered dialog area, for outside-click dismissal.
    pub area: Rect,
    /// Last rendered button areas, parallel to `buttons`.
    pub button_areas: Vec<Rect>,
}

impl ModalState {
    /// Builds the modal for `kind`, or `None` when the kind has no backing
    /// content.
    pub fn build(kind: Modal, actions: &ActionRegistry) -> Option<Self> {
        match kind {
            Modal::Help => Some(Self {
                kind: Modal::Help,
                title: "Keyboard shortcuts".to_string(),
                body: [
                    "Tab / Shift+Tab   cycle focus",
                    "Ctrl+K            focus search",
                    "Ctrl+B            toggle the sidebar drawer (narrow terminals)",
                    "Up / Down         move within the focused panel",
                    "Enter / Space     activate or toggle",
                    "Esc               dismiss menus and overlays",
                    "Ctrl+C            quit",
                ]
                .join("\n"),
                confirm_action: None,
                buttons: vec![ModalButton {
                    label: "Close",
                    focus_id: focus::modal::CLOSE,
                }],
                area: Rect::default(),
                button_areas: Vec::new(),
            }),
            Modal::ConfirmAction(action_id) => {
                let entry = actions.get(&action_id)?;
                Some(Self {
                    kind: Modal::ConfirmAction(action_id.clone()),
                    title: "Confirm".to_string(),
                    body: format!("{}?", entry.label),
                    confirm_action: Some(action_id),
                    buttons: vec![
                        ModalButton {
                            label: "Confirm",
                            focus_id: focus::modal::CONFIRM,
                        },
                        ModalButton {
                            label: "Cancel",
                            focus_id: focus::modal::CANCEL,
                        },
                    ],
                    area: Rect::default(),
                    button_areas: Vec::new(),
                })
            }
        }
    }

    /// The ordered focusable ring for the trapped scope, recomputed from the
    /// buttons present on this instance.
    pub fn focusables(&self) -> Vec<&'static str> {
        self.buttons.iter().map(|button| button.focus_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_modal_always_builds() {
        let actions = ActionRegistry::with_defaults();
        let modal = ModalState::build(Modal::Help, &actions).expect("help modal");
        assert_eq!(modal.focusables(), vec![focus::modal::CLOSE]);
        assert!(modal.confirm_action.is_none());
    }

    #[test]
    fn confirm_modal_builds_for_registered_actions() {
        let actions = ActionRegistry::with_defaults();
        let modal = ModalState::build(Modal::ConfirmAction("sign-out".into()), &actions).expect("confirm modal");
        assert_eq!(modal.confirm_action.as_deref(), Some("sign-out"));
        assert_eq!(modal.focusables(), vec![focus::modal::CONFIRM, focus::modal::CANCEL]);
    }

    #[test]
    fn unbacked_kind_builds_nothing() {
        let actions = ActionRegistry::with_defaults();
        assert!(ModalState::build(Modal::ConfirmAction("does-not-exist".into()), &actions).is_none());
    }
}
