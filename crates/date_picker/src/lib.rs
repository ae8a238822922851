//! The decision logic behind a form date/time picker.
//!
//! This crate does not draw anything. A hosting UI layer renders the input, the
//! trigger button and the calendar, and asks this crate two kinds of questions:
//!
//! * **Which dates and times can be picked?** See [`SelectabilityResolver`], which
//!   combines a weekday mask, min/max bounds, a specific-days list and an interval list
//!   (plus time bounds and a specific-times list when the format shows a time).
//! * **What happens when the user does something?** Feed [`PickerEvent`]s to a
//!   [`DatePicker`]. Each [`Response`] says whether the popup is open, which value to
//!   store, and which [`DeferredAction`]s (focus moves, attribute patches) to run
//!   once the rendering layer has caught up.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

pub mod a11y;
mod config;
mod deferred;
mod format;
mod picker;
mod popup;
pub mod rules;
mod selectability;
mod selection;
pub mod time_of_day;
mod weekday;

pub use crate::{
    config::{AccessibilityLabels, ConfigError, DatePickerConfig, RuleKind},
    deferred::{
        ActionHost, ActionTarget, ClearControlPatch, DEFERRED_ACTION_DELAY, DeferredAction,
        PendingAction,
    },
    format::{
        CalendarKind, DateFormat, SelectionType, contains_time, extract_time_format,
        selection_mode,
    },
    picker::{DatePicker, Key, PickerEvent, Response},
    popup::{CloseReason, FocusTarget, InteractionTarget, PopupController, PopupState, Transition},
    rules::{Bounds, DateInterval, IntervalsRule, RuleMode, SpecificDaysRule, SpecificTimesRule},
    selectability::{
        DATE_RULE_ORDER, DateRejection, DateRule, SelectabilityResolver, TimeRejection,
        check_date_bounds, check_intervals, check_specific_days, check_specific_times,
        check_time_bounds, check_weekday,
    },
    selection::{PickOutcome, PickedValue, Selection, SelectionMode, on_value_picked, today_pick},
    weekday::{DayOfWeek, DayOfWeekMask},
};
