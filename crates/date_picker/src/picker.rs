use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    DatePickerConfig, PopupController, PopupState, SelectabilityResolver, Selection,
    SelectionMode,
    deferred::{ClearControlPatch, DeferredAction},
    popup::{InteractionTarget, Transition},
    selection::{PickedValue, on_value_picked, today_pick},
};

/// A key the picker reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Other,
}

/// Something the user did, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    ValuePicked(PickedValue),
    TriggerButtonActivated,
    InputClicked,
    KeyPressed(Key),
    OutsideInteraction(InteractionTarget),

    /// Keyboard focus left the picker entirely.
    FocusLeftRegion,

    /// The today shortcut, using the local clock.
    TodayActivated,
}

/// What the host should do after an event.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub popup: PopupState,

    /// Run each after its delay.
    pub actions: Vec<DeferredAction>,

    /// Write this back to the host's stored value. `None` if the selection did not change.
    pub committed: Option<Selection>,

    /// The committed pick finished the selection.
    pub completed: bool,
}

impl Response {
    fn from_transition(transition: Transition) -> Self {
        Self {
            popup: transition.state,
            actions: transition.actions,
            committed: None,
            completed: false,
        }
    }
}

/// One date picker instance: configuration, current selection and popup state.
///
/// ```
/// use date_picker::{DatePicker, DatePickerConfig, Key, PickerEvent, PopupState};
///
/// let mut picker = DatePicker::new(DatePickerConfig::new("due"));
/// let response = picker.handle(PickerEvent::KeyPressed(Key::Space));
/// assert_eq!(response.popup, PopupState::Open);
/// ```
#[derive(Clone, Debug)]
pub struct DatePicker {
    config: DatePickerConfig,
    mode: SelectionMode,
    selection: Selection,
    popup: PopupController,
}

impl DatePicker {
    pub fn new(config: DatePickerConfig) -> Self {
        let mode = config.selection_mode();
        Self::with_selection(config, Selection::empty(mode))
    }

    /// Start from a value the host already stores.
    pub fn with_selection(config: DatePickerConfig, selection: Selection) -> Self {
        for issue in config.issues() {
            log::warn!("Date picker {:?}: {issue}", config.id);
        }
        let mode = config.selection_mode();
        let popup = PopupController::new(config.inline);
        Self {
            config,
            mode,
            selection: selection.coerce(mode),
            popup,
        }
    }

    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn popup_state(&self) -> PopupState {
        self.popup.state()
    }

    pub fn resolver(&self) -> SelectabilityResolver<'_> {
        SelectabilityResolver::from_config(&self.config)
    }

    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.resolver().is_date_selectable(date)
    }

    pub fn is_time_selectable(&self, time: NaiveTime) -> bool {
        self.resolver().is_time_selectable(time)
    }

    /// Actions to run right after the picker is first shown.
    pub fn initial_actions(&self) -> Vec<DeferredAction> {
        self.clear_control_patch().into_iter().collect()
    }

    fn clear_control_patch(&self) -> Option<DeferredAction> {
        (self.config.clearable && !self.selection.is_empty()).then(|| {
            DeferredAction::patch_clear_control(ClearControlPatch {
                tab_index: self.config.tab_index,
                aria_label: self.config.labels.clear_button.clone(),
            })
        })
    }

    pub fn handle(&mut self, event: PickerEvent) -> Response {
        if self.config.readonly {
            log::trace!("Ignoring {event:?}: date picker is read-only");
            return Response::from_transition(self.unchanged());
        }

        let transition = match event {
            PickerEvent::ValuePicked(value) => return self.pick(value),
            PickerEvent::TodayActivated => {
                return self.today_at(chrono::Local::now().naive_local());
            }
            PickerEvent::TriggerButtonActivated => self.popup.on_trigger_button_activated(),
            PickerEvent::InputClicked => self.popup.on_input_clicked(),
            PickerEvent::KeyPressed(Key::Space) => self.popup.on_key_space(),
            PickerEvent::KeyPressed(Key::Escape) => self.popup.on_key_escape(),
            PickerEvent::KeyPressed(Key::Other) => self.unchanged(),
            PickerEvent::OutsideInteraction(target) => self.popup.on_outside_interaction(target),
            PickerEvent::FocusLeftRegion => self.popup.on_tab_out(),
        };
        Response::from_transition(transition)
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.popup.state(),
            changed: false,
            actions: Vec::new(),
        }
    }

    fn accepts(&self, value: PickedValue) -> bool {
        let resolver = self.resolver();
        let accepts = |value: Option<NaiveDateTime>| {
            value.is_none_or(|value| resolver.is_date_value_selectable(value))
        };
        match value {
            PickedValue::Date(value) => accepts(Some(value)),
            PickedValue::Range { start, end } => accepts(start) && accepts(end),
            PickedValue::Cleared => true,
        }
    }

    /// Apply a pick, commit it, and close the popup if that finished the selection.
    ///
    /// Dates that are not selectable are ignored.
    pub fn pick(&mut self, value: PickedValue) -> Response {
        if self.config.readonly {
            return Response::from_transition(self.unchanged());
        }
        if !self.accepts(value) {
            log::trace!("Ignoring pick of unselectable {value:?}");
            return Response::from_transition(self.unchanged());
        }

        let outcome = on_value_picked(self.mode, self.selection, value);
        self.selection = outcome.selection;
        log::debug!(
            "Date picker {:?}: selection {:?} (complete: {})",
            self.config.id,
            self.selection,
            outcome.is_complete
        );

        let mut response = Response::from_transition(self.popup.on_value_committed(outcome.is_complete));
        response.actions.extend(self.clear_control_patch());
        response.committed = Some(self.selection);
        response.completed = outcome.is_complete;
        response
    }

    /// The today shortcut, at a given "now".
    pub fn today_at(&mut self, now: NaiveDateTime) -> Response {
        self.pick(today_pick(now))
    }
}

#[cfg(test)]
mod tests {
    use crate::{DayOfWeekMask, FocusTarget, PendingAction, SelectionType};

    use super::*;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    #[test]
    fn readonly_ignores_everything() {
        let mut picker = DatePicker::new(DatePickerConfig::default().readonly(true));
        for event in [
            PickerEvent::KeyPressed(Key::Space),
            PickerEvent::TriggerButtonActivated,
            PickerEvent::InputClicked,
            PickerEvent::ValuePicked(PickedValue::Date(day(11))),
        ] {
            let response = picker.handle(event);
            assert_eq!(response.popup, PopupState::Closed);
            assert_eq!(response.committed, None);
        }
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn unselectable_pick_is_ignored() {
        let config = DatePickerConfig::default().disabled_weekdays(DayOfWeekMask::weekends());
        let mut picker = DatePicker::new(config);
        let _ = picker.handle(PickerEvent::InputClicked);

        // Saturday
        let response = picker.pick(PickedValue::Date(day(9)));
        assert_eq!(response.committed, None);
        assert_eq!(response.popup, PopupState::Open);
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn single_pick_closes_and_focuses_input() {
        let mut picker = DatePicker::new(DatePickerConfig::default().clearable(false));
        let _ = picker.handle(PickerEvent::TriggerButtonActivated);
        let response = picker.pick(PickedValue::Date(day(11)));
        assert_eq!(response.popup, PopupState::Closed);
        assert_eq!(response.committed, Some(Selection::Single(Some(day(11)))));
        assert!(response.completed);
        assert_eq!(
            response.actions,
            [DeferredAction::focus(FocusTarget::InputField)]
        );
    }

    #[test]
    fn clear_control_is_patched_once_there_is_a_value() {
        let picker = DatePicker::new(DatePickerConfig::default());
        assert!(picker.initial_actions().is_empty());

        let mut picker = DatePicker::with_selection(
            DatePickerConfig::default().tab_index(2),
            Selection::Single(Some(day(11))),
        );
        let actions = picker.initial_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(
            actions[0].action,
            PendingAction::PatchClearControl(ClearControlPatch {
                tab_index: 2,
                aria_label: "Clear selection".to_owned(),
            })
        );

        let response = picker.pick(PickedValue::Cleared);
        assert!(response.committed.is_some_and(|selection| selection.is_empty()));
        assert!(
            response
                .actions
                .iter()
                .all(|action| action.focus_target().is_some())
        );
    }

    #[test]
    fn stored_selection_is_reshaped_to_the_mode() {
        let config = DatePickerConfig::default().selection_type(SelectionType::Range);
        let picker = DatePicker::with_selection(config, Selection::Single(Some(day(4))));
        assert_eq!(picker.mode(), SelectionMode::Range);
        assert_eq!(picker.selection(), Selection::range(day(4), None));
    }

    #[test]
    fn stored_range_is_normalized() {
        let config = DatePickerConfig::default().selection_type(SelectionType::Range);
        let backwards = Selection::Range {
            start: Some(day(15)),
            end: Some(day(10)),
        };
        let picker = DatePicker::with_selection(config.clone(), backwards);
        assert_eq!(picker.selection(), Selection::range(day(10), Some(day(15))));

        let end_only = Selection::Range {
            start: None,
            end: Some(day(12)),
        };
        let picker = DatePicker::with_selection(config, end_only);
        assert_eq!(picker.selection(), Selection::range(day(12), None));
    }

    #[test]
    fn pick_on_finished_range_closes_with_a_new_start() {
        let config = DatePickerConfig::default().selection_type(SelectionType::Range);
        let mut picker =
            DatePicker::with_selection(config, Selection::range(day(4), Some(day(8))));
        let _ = picker.handle(PickerEvent::InputClicked);

        let response = picker.pick(PickedValue::Date(day(20)));
        assert_eq!(response.committed, Some(Selection::range(day(20), None)));
        assert!(response.completed);
        assert_eq!(response.popup, PopupState::Closed);
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut picker = DatePicker::new(DatePickerConfig::default());
        let response = picker.handle(PickerEvent::KeyPressed(Key::Other));
        assert_eq!(response.popup, PopupState::Closed);
        assert!(response.actions.is_empty());
    }
}
