use crate::deferred::DeferredAction;

/// Is the calendar popup shown?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PopupState {
    #[default]
    Closed,
    Open,
}

/// Where keyboard focus should land next.
///
/// The hosting UI layer maps these onto its own widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The calendar icon button next to the input.
    TriggerButton,

    /// The text input holding the formatted value.
    InputField,

    /// The first focusable control inside the popup.
    FirstCalendarControl,
}

/// Why the popup closed. Decides where focus goes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The selection is complete.
    Completed,
    Escape,
    TriggerButton,

    /// Focus already left the picker.
    TabOut,

    /// A click somewhere else. That click decides focus.
    OutsideInteraction,

    /// Closed by the host.
    Requested,
}

/// Where an interaction outside the input field happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionTarget {
    TriggerButton,
    InsidePopup,
    Elsewhere,
}

/// The result of one controller call.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: PopupState,
    pub changed: bool,
    pub actions: Vec<DeferredAction>,
}

impl Transition {
    fn unchanged(state: PopupState) -> Self {
        Self {
            state,
            changed: false,
            actions: Vec::new(),
        }
    }

    /// The focus request, if any.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.actions.iter().find_map(DeferredAction::focus_target)
    }
}

/// Owns the popup state and decides when it opens and closes, and where focus goes.
///
/// None of the calls can fail. A call that does not apply in the current state,
/// like closing a closed popup, returns an unchanged [`Transition`].
#[derive(Clone, Debug, Default)]
pub struct PopupController {
    state: PopupState,

    /// Calendar rendered in place, without a separate input to return focus to.
    inline: bool,
}

impl PopupController {
    pub fn new(inline: bool) -> Self {
        Self {
            state: PopupState::Closed,
            inline,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    fn open(&mut self, focus: Option<FocusTarget>, cause: &str) -> Transition {
        if self.is_open() {
            return Transition::unchanged(self.state);
        }
        log::debug!("Date picker popup: Closed -> Open ({cause})");
        self.state = PopupState::Open;
        Transition {
            state: self.state,
            changed: true,
            actions: focus.map(DeferredAction::focus).into_iter().collect(),
        }
    }

    /// Open, then move focus into the popup once it exists.
    pub fn request_open(&mut self) -> Transition {
        self.open(Some(FocusTarget::FirstCalendarControl), "requested")
    }

    /// Close, returning focus to the input field.
    pub fn request_close(&mut self) -> Transition {
        self.close(CloseReason::Requested)
    }

    pub fn close(&mut self, reason: CloseReason) -> Transition {
        if !self.is_open() {
            return Transition::unchanged(self.state);
        }
        log::debug!("Date picker popup: Open -> Closed ({reason:?})");
        self.state = PopupState::Closed;

        let focus = match reason {
            CloseReason::Completed | CloseReason::Escape | CloseReason::Requested => {
                (!self.inline).then_some(FocusTarget::InputField)
            }
            CloseReason::TriggerButton => (!self.inline).then_some(FocusTarget::TriggerButton),
            CloseReason::TabOut | CloseReason::OutsideInteraction => None,
        };
        Transition {
            state: self.state,
            changed: true,
            actions: focus.map(DeferredAction::focus).into_iter().collect(),
        }
    }

    /// A value was stored. Close if it finished the selection.
    pub fn on_value_committed(&mut self, is_complete: bool) -> Transition {
        if is_complete {
            self.close(CloseReason::Completed)
        } else {
            Transition::unchanged(self.state)
        }
    }

    pub fn on_key_space(&mut self) -> Transition {
        if self.inline {
            return Transition::unchanged(self.state);
        }
        self.open(Some(FocusTarget::FirstCalendarControl), "space")
    }

    pub fn on_key_escape(&mut self) -> Transition {
        self.close(CloseReason::Escape)
    }

    /// Keyboard focus left the whole picker, not just moved between its parts.
    pub fn on_tab_out(&mut self) -> Transition {
        self.close(CloseReason::TabOut)
    }

    /// Clicking the trigger button is handled by [`Self::on_trigger_button_activated`],
    /// and clicks inside the popup keep it open.
    pub fn on_outside_interaction(&mut self, target: InteractionTarget) -> Transition {
        match target {
            InteractionTarget::Elsewhere => self.close(CloseReason::OutsideInteraction),
            InteractionTarget::TriggerButton | InteractionTarget::InsidePopup => {
                Transition::unchanged(self.state)
            }
        }
    }

    /// Toggle. Focus goes into the popup on open, and back to the button on close.
    pub fn on_trigger_button_activated(&mut self) -> Transition {
        match self.state {
            PopupState::Closed => {
                self.open(Some(FocusTarget::FirstCalendarControl), "trigger button")
            }
            PopupState::Open => self.close(CloseReason::TriggerButton),
        }
    }

    /// Clicking the input opens the popup, leaving focus in the input.
    pub fn on_input_clicked(&mut self) -> Transition {
        self.open(None, "input clicked")
    }
}
