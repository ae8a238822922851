use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    DateFormat, DayOfWeekMask, SelectionMode, SelectionType,
    format::selection_mode,
    rules::{Bounds, IntervalsRule, RuleMode, SpecificDaysRule, SpecificTimesRule},
};

/// Labels read out by assistive technology.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessibilityLabels {
    pub calendar_icon: String,

    /// Prefixed to a day (or the today button) when announcing it as selectable.
    pub select_prefix: String,
    pub clear_button: String,
}

impl Default for AccessibilityLabels {
    fn default() -> Self {
        Self {
            calendar_icon: "Show calendar".to_owned(),
            select_prefix: "Select".to_owned(),
            clear_button: "Clear selection".to_owned(),
        }
    }
}

/// Everything the host configures about one date picker.
///
/// Build it with the builder methods, or load it with `serde` (the `serde` feature):
///
/// ```
/// use date_picker::{DatePickerConfig, DateFormat, DayOfWeekMask, SelectionType};
///
/// let config = DatePickerConfig::new("birthday")
///     .date_format(DateFormat::Custom)
///     .display_format("dd/MM/yyyy HH:mm")
///     .selection_type(SelectionType::Single)
///     .disabled_weekdays(DayOfWeekMask::weekends());
/// assert!(config.shows_time_select());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DatePickerConfig {
    /// Id of the input field. The label is expected at `"{id}-label"`.
    pub id: String,
    pub tab_index: i32,
    pub placeholder: String,

    pub selection_type: SelectionType,
    pub date_format: DateFormat,

    /// The pattern the input shows, like `"MM/dd/yyyy"`.
    pub display_format: String,

    /// Step between time slots.
    pub time_interval_minutes: u32,

    pub readonly: bool,

    /// Render the calendar in place, with no input or trigger button.
    pub inline: bool,

    /// Build an input mask from the display format.
    pub mask_input: bool,

    pub clearable: bool,
    pub show_icon: bool,

    /// Render the trigger button inside the input, out of the tab order.
    pub show_icon_inside: bool,
    pub show_today_button: bool,
    pub today_button_text: String,

    pub date_bounds: Bounds<NaiveDate>,
    pub time_bounds: Bounds<NaiveTime>,
    pub disabled_weekdays: DayOfWeekMask,
    pub specific_days: SpecificDaysRule,
    pub intervals: IntervalsRule,
    pub specific_times: SpecificTimesRule,

    pub labels: AccessibilityLabels,
    pub required: bool,

    /// The host's validation rejected the current value.
    pub invalid: bool,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            id: "date-picker".to_owned(),
            tab_index: 0,
            placeholder: String::new(),
            selection_type: SelectionType::Single,
            date_format: DateFormat::Date,
            display_format: "MM/dd/yyyy".to_owned(),
            time_interval_minutes: 15,
            readonly: false,
            inline: false,
            mask_input: false,
            clearable: true,
            show_icon: true,
            show_icon_inside: false,
            show_today_button: false,
            today_button_text: "Today".to_owned(),
            date_bounds: Bounds::default(),
            time_bounds: Bounds::default(),
            disabled_weekdays: DayOfWeekMask::default(),
            specific_days: SpecificDaysRule::default(),
            intervals: IntervalsRule::default(),
            specific_times: SpecificTimesRule::default(),
            labels: AccessibilityLabels::default(),
            required: false,
            invalid: false,
        }
    }
}

impl DatePickerConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    #[inline]
    pub fn selection_type(mut self, selection_type: SelectionType) -> Self {
        self.selection_type = selection_type;
        self
    }

    #[inline]
    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Change the pattern shown in the input. (Default: `MM/dd/yyyy`)
    #[inline]
    pub fn display_format(mut self, display_format: impl Into<String>) -> Self {
        self.display_format = display_format.into();
        self
    }

    #[inline]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Show the calendar in place instead of in a popup. (Default: false)
    #[inline]
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    #[inline]
    pub fn mask_input(mut self, mask_input: bool) -> Self {
        self.mask_input = mask_input;
        self
    }

    /// Show a control that clears the value. (Default: true)
    #[inline]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[inline]
    pub fn show_icon_inside(mut self, show_icon_inside: bool) -> Self {
        self.show_icon_inside = show_icon_inside;
        self
    }

    #[inline]
    pub fn show_today_button(mut self, show_today_button: bool) -> Self {
        self.show_today_button = show_today_button;
        self
    }

    #[inline]
    pub fn date_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.date_bounds = Bounds::new(min, max);
        self
    }

    #[inline]
    pub fn time_bounds(mut self, min: Option<NaiveTime>, max: Option<NaiveTime>) -> Self {
        self.time_bounds = Bounds::new(min, max);
        self
    }

    #[inline]
    pub fn disabled_weekdays(mut self, disabled_weekdays: DayOfWeekMask) -> Self {
        self.disabled_weekdays = disabled_weekdays;
        self
    }

    #[inline]
    pub fn specific_days(mut self, specific_days: SpecificDaysRule) -> Self {
        self.specific_days = specific_days;
        self
    }

    #[inline]
    pub fn intervals(mut self, intervals: IntervalsRule) -> Self {
        self.intervals = intervals;
        self
    }

    #[inline]
    pub fn specific_times(mut self, specific_times: SpecificTimesRule) -> Self {
        self.specific_times = specific_times;
        self
    }

    #[inline]
    pub fn labels(mut self, labels: AccessibilityLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn shows_time_select(&self) -> bool {
        self.date_format.shows_time_select(&self.display_format)
    }

    pub fn selection_mode(&self) -> SelectionMode {
        selection_mode(self.selection_type, self.date_format, &self.display_format)
    }

    /// Pattern for the time list, when one is shown.
    pub fn time_format(&self) -> Option<&str> {
        self.date_format.time_format(&self.display_format)
    }

    /// The pattern to build an input mask from, if masking is on.
    pub fn input_mask_source(&self) -> Option<&str> {
        (self.mask_input && !self.inline).then_some(self.display_format.as_str())
    }

    /// Every configuration problem, in a fixed order.
    ///
    /// These never stop the picker from working; they just leave nothing (or less than
    /// intended) selectable.
    pub fn issues(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();

        if let (Some(min), Some(max)) = (self.date_bounds.min, self.date_bounds.max)
            && self.date_bounds.is_inverted()
        {
            issues.push(ConfigError::InvertedDateBounds { min, max });
        }
        if self.shows_time_select()
            && let (Some(min), Some(max)) = (self.time_bounds.min, self.time_bounds.max)
            && self.time_bounds.is_inverted()
        {
            issues.push(ConfigError::InvertedTimeBounds { min, max });
        }
        if self.disabled_weekdays.all_disabled() {
            issues.push(ConfigError::AllWeekdaysDisabled);
        }
        if self.specific_days.mode == RuleMode::Include && self.specific_days.days.is_empty() {
            issues.push(ConfigError::EmptyInclusion {
                rule: RuleKind::SpecificDays,
            });
        }
        if self.intervals.mode != RuleMode::None {
            for (index, interval) in self.intervals.intervals.iter().enumerate() {
                if interval.is_inverted() {
                    issues.push(ConfigError::InvertedInterval {
                        index,
                        start: interval.start,
                        end: interval.end,
                    });
                }
            }
        }
        if self.intervals.mode == RuleMode::Include && self.intervals.intervals.is_empty() {
            issues.push(ConfigError::EmptyInclusion {
                rule: RuleKind::Intervals,
            });
        }
        if self.shows_time_select()
            && self.specific_times.mode == RuleMode::Include
            && self.specific_times.times.is_empty()
        {
            issues.push(ConfigError::EmptyInclusion {
                rule: RuleKind::SpecificTimes,
            });
        }

        issues
    }

    /// Check for settings that leave the picker (partly) unusable.
    ///
    /// # Errors
    /// Returns the first of [`Self::issues`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

/// The rule lists that can be in include mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    SpecificDays,
    Intervals,
    SpecificTimes,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SpecificDays => "specific days",
            Self::Intervals => "intervals",
            Self::SpecificTimes => "specific times",
        })
    }
}

/// A configuration that leaves some or all values unselectable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum date {min} is after maximum date {max}")]
    InvertedDateBounds { min: NaiveDate, max: NaiveDate },

    #[error("minimum time {min} is after maximum time {max}")]
    InvertedTimeBounds { min: NaiveTime, max: NaiveTime },

    #[error("interval #{index} starts on {start}, after its end {end}")]
    InvertedInterval {
        index: usize,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("the {rule} rule includes an empty list, so nothing can be picked")]
    EmptyInclusion { rule: RuleKind },

    #[error("every day of the week is disabled")]
    AllWeekdaysDisabled,
}
