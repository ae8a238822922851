//! Side effects that must wait for the rendering layer.
//!
//! Moving focus into a popup only works once the popup's content exists, and
//! the clear control only exists once a value is shown. So instead of touching
//! the UI tree, the picker hands back [`DeferredAction`]s. The host runs each one
//! after its [`DeferredAction::delay`]; by then the widget may be gone, which
//! [`DeferredAction::run`] detects through [`ActionHost::target_exists`].

use std::time::Duration;

use crate::FocusTarget;

/// How long to wait before running a deferred action.
pub const DEFERRED_ACTION_DELAY: Duration = Duration::from_millis(100);

/// The element a deferred action touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionTarget {
    Focus(FocusTarget),
    ClearControl,
}

/// Attributes that make the clear control keyboard reachable and labelled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClearControlPatch {
    pub tab_index: i32,
    pub aria_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PendingAction {
    Focus(FocusTarget),
    PatchClearControl(ClearControlPatch),
}

/// A [`PendingAction`] to run after `delay`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeferredAction {
    pub action: PendingAction,
    pub delay: Duration,
}

/// The hosting UI layer, as seen by deferred actions.
pub trait ActionHost {
    /// Is the target still part of the live UI?
    fn target_exists(&self, target: ActionTarget) -> bool;

    fn move_focus(&mut self, target: FocusTarget);

    fn set_attribute(&mut self, target: ActionTarget, name: &str, value: &str);
}

impl DeferredAction {
    pub fn focus(target: FocusTarget) -> Self {
        Self {
            action: PendingAction::Focus(target),
            delay: DEFERRED_ACTION_DELAY,
        }
    }

    pub fn patch_clear_control(patch: ClearControlPatch) -> Self {
        Self {
            action: PendingAction::PatchClearControl(patch),
            delay: DEFERRED_ACTION_DELAY,
        }
    }

    pub fn target(&self) -> ActionTarget {
        match self.action {
            PendingAction::Focus(target) => ActionTarget::Focus(target),
            PendingAction::PatchClearControl(_) => ActionTarget::ClearControl,
        }
    }

    /// The focus target, if this is a focus move.
    pub fn focus_target(&self) -> Option<FocusTarget> {
        match self.action {
            PendingAction::Focus(target) => Some(target),
            PendingAction::PatchClearControl(_) => None,
        }
    }

    /// Perform the action against `host`.
    ///
    /// Returns `false`, and does nothing, if the target no longer exists.
    pub fn run(&self, host: &mut impl ActionHost) -> bool {
        let target = self.target();
        if !host.target_exists(target) {
            log::trace!("Dropping deferred action: {target:?} no longer exists");
            return false;
        }

        match &self.action {
            PendingAction::Focus(focus) => host.move_focus(*focus),
            PendingAction::PatchClearControl(patch) => {
                host.set_attribute(target, "tabIndex", &patch.tab_index.to_string());
                host.set_attribute(target, "aria-label", &patch.aria_label);
            }
        }
        true
    }
}
