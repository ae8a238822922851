use chrono::{NaiveDate, NaiveDateTime};
use date_picker::{
    ActionHost, ActionTarget, DateFormat, DatePicker, DatePickerConfig, FocusTarget,
    InteractionTarget, Key, PickedValue, PickerEvent, PopupState, Selection, SelectionType,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0)
}

/// A UI layer whose widgets can be torn down between scheduling and running an action.
#[derive(Default)]
struct FakeHost {
    torn_down: bool,
    focused: Option<FocusTarget>,
}

impl ActionHost for FakeHost {
    fn target_exists(&self, _target: ActionTarget) -> bool {
        !self.torn_down
    }

    fn move_focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
    }

    fn set_attribute(&mut self, _target: ActionTarget, _name: &str, _value: &str) {}
}

#[test]
fn range_selection_scenario() {
    let config = DatePickerConfig::new("stay").selection_type(SelectionType::Range);
    let mut picker = DatePicker::new(config);
    assert_eq!(picker.handle(PickerEvent::InputClicked).popup, PopupState::Open);

    let first = picker.handle(PickerEvent::ValuePicked(PickedValue::Date(day(2024, 3, 10))));
    assert_eq!(first.committed, Some(Selection::range(day(2024, 3, 10), None)));
    assert!(!first.completed);
    assert_eq!(first.popup, PopupState::Open);

    let second = picker.handle(PickerEvent::ValuePicked(PickedValue::Date(day(2024, 3, 15))));
    assert_eq!(
        second.committed,
        Some(Selection::range(day(2024, 3, 10), Some(day(2024, 3, 15))))
    );
    assert!(second.completed);
    assert_eq!(second.popup, PopupState::Closed);
    assert_eq!(picker.popup_state(), PopupState::Closed);
}

#[test]
fn date_and_time_stays_open_while_moving_between_dates() {
    let config = DatePickerConfig::new("meeting").date_format(DateFormat::DateTime);
    let mut picker = DatePicker::with_selection(config, Selection::Single(Some(at(2024, 3, 10, 9, 0))));
    let _ = picker.handle(PickerEvent::TriggerButtonActivated);

    let same_time = picker.pick(PickedValue::Date(at(2024, 3, 12, 9, 0)));
    assert!(!same_time.completed);
    assert_eq!(same_time.popup, PopupState::Open);

    let new_time = picker.pick(PickedValue::Date(at(2024, 3, 12, 14, 30)));
    assert!(new_time.completed);
    assert_eq!(new_time.popup, PopupState::Closed);
    assert_eq!(picker.selection(), Selection::Single(Some(at(2024, 3, 12, 14, 30))));
}

#[test]
fn today_shortcut_is_midnight() {
    let config = DatePickerConfig::new("due").date_format(DateFormat::DateTime);
    let mut picker = DatePicker::new(config);
    let _ = picker.handle(PickerEvent::TriggerButtonActivated);

    let response = picker.today_at(at(2024, 3, 10, 17, 45));
    assert_eq!(response.committed, Some(Selection::Single(Some(day(2024, 3, 10)))));
    // First pick with no previous value: complete.
    assert_eq!(response.popup, PopupState::Closed);

    let live = picker.handle(PickerEvent::TodayActivated);
    let stored = live.committed.and_then(|selection| selection.start()).unwrap();
    assert_eq!(stored.time(), chrono::NaiveTime::MIN);
}

#[test]
fn keyboard_open_and_escape() {
    let mut picker = DatePicker::new(DatePickerConfig::new("due"));
    let mut host = FakeHost::default();

    let open = picker.handle(PickerEvent::KeyPressed(Key::Space));
    assert_eq!(open.popup, PopupState::Open);
    for action in &open.actions {
        assert!(action.run(&mut host));
    }
    assert_eq!(host.focused, Some(FocusTarget::FirstCalendarControl));

    let close = picker.handle(PickerEvent::KeyPressed(Key::Escape));
    assert_eq!(close.popup, PopupState::Closed);
    for action in &close.actions {
        assert!(action.run(&mut host));
    }
    assert_eq!(host.focused, Some(FocusTarget::InputField));
}

#[test]
fn deferred_focus_after_teardown_does_nothing() {
    let mut picker = DatePicker::new(DatePickerConfig::new("due"));
    let open = picker.handle(PickerEvent::TriggerButtonActivated);
    assert!(!open.actions.is_empty());

    let mut host = FakeHost {
        torn_down: true,
        ..Default::default()
    };
    assert!(open.actions.iter().all(|action| !action.run(&mut host)));
    assert_eq!(host.focused, None);
}

#[test]
fn trigger_button_returns_focus_to_itself() {
    let mut picker = DatePicker::new(DatePickerConfig::new("due"));
    let _ = picker.handle(PickerEvent::TriggerButtonActivated);
    let close = picker.handle(PickerEvent::TriggerButtonActivated);
    assert_eq!(close.popup, PopupState::Closed);
    assert_eq!(close.actions[0].focus_target(), Some(FocusTarget::TriggerButton));
}

#[test]
fn outside_interaction_and_tab_out() {
    let mut picker = DatePicker::new(DatePickerConfig::new("due"));

    // Closed: nothing to do.
    let response = picker.handle(PickerEvent::OutsideInteraction(InteractionTarget::Elsewhere));
    assert_eq!(response.popup, PopupState::Closed);
    assert!(response.actions.is_empty());

    let _ = picker.handle(PickerEvent::InputClicked);
    let response = picker.handle(PickerEvent::OutsideInteraction(InteractionTarget::TriggerButton));
    assert_eq!(response.popup, PopupState::Open);

    let response = picker.handle(PickerEvent::FocusLeftRegion);
    assert_eq!(response.popup, PopupState::Closed);
    assert!(response.actions.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn config_loads_from_ron() {
    let text = r#"(
        id: "holiday",
        selection_type: Range,
        date_format: Custom,
        display_format: "dd.MM.yyyy HH:mm",
        disabled_weekdays: [Sunday],
        specific_days: (mode: Exclude, days: ["2024-12-25"]),
        intervals: (
            mode: Include,
            intervals: [(start: "2024-12-01", end: "2024-12-31")],
        ),
    )"#;
    let config: DatePickerConfig = ron::from_str(text).unwrap();
    assert_eq!(config.id, "holiday");
    assert!(config.shows_time_select());
    assert_eq!(config.validate(), Ok(()));

    let picker = DatePicker::new(config.clone());
    assert!(picker.is_date_selectable(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()));
    assert!(!picker.is_date_selectable(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
    assert!(!picker.is_date_selectable(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
    // Saturday and Sunday have separate flags.
    assert!(picker.is_date_selectable(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap()));
    assert!(!picker.is_date_selectable(NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()));

    let saved = ron::to_string(&config).unwrap();
    let reloaded: DatePickerConfig = ron::from_str(&saved).unwrap();
    assert_eq!(reloaded, config);
}
