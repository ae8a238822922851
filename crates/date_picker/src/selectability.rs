//! Deciding whether a candidate date or time can be picked.
//!
//! A date runs through a fixed chain of rules ([`DATE_RULE_ORDER`]) and is
//! rejected by the first one that fails. Each rule is a small pure function,
//! so it can be tested on its own and the chain order stays visible here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    DatePickerConfig,
    rules::{Bounds, IntervalsRule, RuleMode, SpecificDaysRule, SpecificTimesRule},
    time_of_day::compare_time_of_day,
    weekday::{DayOfWeek, DayOfWeekMask},
};

/// Why a date cannot be picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateRejection {
    DisabledWeekday(DayOfWeek),
    BeforeMin,
    AfterMax,

    /// Include-mode day list, and the date is not on it.
    NotIncluded,

    /// Exclude-mode day list, and the date is on it.
    Excluded,

    /// Include-mode intervals, and the date is in none of them.
    OutsideIntervals,

    /// Exclude-mode intervals, and the date is in one of them.
    InsideExcludedInterval,
}

/// Why a time of day cannot be picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeRejection {
    BeforeMin,
    AfterMax,
    NotIncluded,
    Excluded,
}

/// One link in the date rule chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateRule {
    Weekday,
    Bounds,
    SpecificDays,
    Intervals,
}

/// The order in which date rules are evaluated. The first failure wins.
pub const DATE_RULE_ORDER: [DateRule; 4] = [
    DateRule::Weekday,
    DateRule::Bounds,
    DateRule::SpecificDays,
    DateRule::Intervals,
];

pub fn check_weekday(date: NaiveDate, mask: &DayOfWeekMask) -> Result<(), DateRejection> {
    let day = DayOfWeek::of(date);
    if mask.is_disabled(day) {
        Err(DateRejection::DisabledWeekday(day))
    } else {
        Ok(())
    }
}

pub fn check_date_bounds(date: NaiveDate, bounds: &Bounds<NaiveDate>) -> Result<(), DateRejection> {
    if bounds.min.is_some_and(|min| date < min) {
        Err(DateRejection::BeforeMin)
    } else if bounds.max.is_some_and(|max| date > max) {
        Err(DateRejection::AfterMax)
    } else {
        Ok(())
    }
}

pub fn check_specific_days(date: NaiveDate, rule: &SpecificDaysRule) -> Result<(), DateRejection> {
    match rule.mode {
        RuleMode::None => Ok(()),
        RuleMode::Include if rule.contains(date) => Ok(()),
        RuleMode::Include => Err(DateRejection::NotIncluded),
        RuleMode::Exclude if rule.contains(date) => Err(DateRejection::Excluded),
        RuleMode::Exclude => Ok(()),
    }
}

pub fn check_intervals(date: NaiveDate, rule: &IntervalsRule) -> Result<(), DateRejection> {
    match rule.mode {
        RuleMode::None => Ok(()),
        RuleMode::Include if rule.covers(date) => Ok(()),
        RuleMode::Include => Err(DateRejection::OutsideIntervals),
        RuleMode::Exclude if rule.covers(date) => Err(DateRejection::InsideExcludedInterval),
        RuleMode::Exclude => Ok(()),
    }
}

pub fn check_time_bounds(time: NaiveTime, bounds: &Bounds<NaiveTime>) -> Result<(), TimeRejection> {
    if bounds
        .min
        .is_some_and(|min| compare_time_of_day(time, min).is_lt())
    {
        Err(TimeRejection::BeforeMin)
    } else if bounds
        .max
        .is_some_and(|max| compare_time_of_day(time, max).is_gt())
    {
        Err(TimeRejection::AfterMax)
    } else {
        Ok(())
    }
}

pub fn check_specific_times(time: NaiveTime, rule: &SpecificTimesRule) -> Result<(), TimeRejection> {
    match rule.mode {
        RuleMode::None => Ok(()),
        RuleMode::Include if rule.contains(time) => Ok(()),
        RuleMode::Include => Err(TimeRejection::NotIncluded),
        RuleMode::Exclude if rule.contains(time) => Err(TimeRejection::Excluded),
        RuleMode::Exclude => Ok(()),
    }
}

/// Combines every configured rule into one predicate for dates and one for times.
///
/// Borrows the rule sets, so build one whenever you need it:
///
/// ```
/// use date_picker::{DatePickerConfig, DayOfWeekMask, SelectabilityResolver};
/// # use chrono::NaiveDate;
/// let config = DatePickerConfig::default().disabled_weekdays(DayOfWeekMask::weekends());
/// let resolver = SelectabilityResolver::from_config(&config);
/// let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert!(!resolver.is_date_selectable(saturday));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SelectabilityResolver<'a> {
    pub disabled_weekdays: &'a DayOfWeekMask,
    pub date_bounds: Bounds<NaiveDate>,
    pub specific_days: &'a SpecificDaysRule,
    pub intervals: &'a IntervalsRule,
    pub time_bounds: Bounds<NaiveTime>,
    pub specific_times: &'a SpecificTimesRule,

    /// Time rules only apply when the display format shows a time.
    pub time_active: bool,
}

impl<'a> SelectabilityResolver<'a> {
    pub fn from_config(config: &'a DatePickerConfig) -> Self {
        Self {
            disabled_weekdays: &config.disabled_weekdays,
            date_bounds: config.date_bounds,
            specific_days: &config.specific_days,
            intervals: &config.intervals,
            time_bounds: config.time_bounds,
            specific_times: &config.specific_times,
            time_active: config.shows_time_select(),
        }
    }

    fn check_rule(&self, rule: DateRule, date: NaiveDate) -> Result<(), DateRejection> {
        match rule {
            DateRule::Weekday => check_weekday(date, self.disabled_weekdays),
            DateRule::Bounds => check_date_bounds(date, &self.date_bounds),
            DateRule::SpecificDays => check_specific_days(date, self.specific_days),
            DateRule::Intervals => check_intervals(date, self.intervals),
        }
    }

    /// Run the date rule chain, stopping at the first rejection.
    pub fn check_date(&self, date: NaiveDate) -> Result<(), DateRejection> {
        DATE_RULE_ORDER
            .iter()
            .try_for_each(|&rule| self.check_rule(rule, date))
    }

    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.check_date(date).is_ok()
    }

    /// Check a full date/time. Only the date part is looked at.
    pub fn is_date_value_selectable(&self, value: NaiveDateTime) -> bool {
        self.is_date_selectable(value.date())
    }

    pub fn check_time(&self, time: NaiveTime) -> Result<(), TimeRejection> {
        if !self.time_active {
            return Ok(());
        }
        check_time_bounds(time, &self.time_bounds)?;
        check_specific_times(time, self.specific_times)
    }

    pub fn is_time_selectable(&self, time: NaiveTime) -> bool {
        self.check_time(time).is_ok()
    }
}
