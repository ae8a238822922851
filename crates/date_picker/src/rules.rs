//! The configurable inclusion/exclusion rule sets.
//!
//! These are plain data, owned by the host and handed read-only to
//! [`crate::SelectabilityResolver`] for every evaluation.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use crate::time_of_day::compare_time_of_day;

/// How a rule's list is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RuleMode {
    /// The list is ignored.
    #[default]
    None,

    /// Only values in the list can be picked.
    ///
    /// An empty list means nothing can be picked.
    Include,

    /// Values in the list can never be picked.
    Exclude,
}

/// Optional inclusive lower and upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl Bounds<NaiveDate> {
    /// Both set, and `min > max`. Nothing can satisfy such bounds.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

impl Bounds<NaiveTime> {
    /// Both set, and `min > max` by hour and minute.
    pub fn is_inverted(&self) -> bool {
        matches!(
            (self.min, self.max),
            (Some(min), Some(max)) if compare_time_of_day(min, max).is_gt()
        )
    }
}

/// A list of individual days to include or exclude.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpecificDaysRule {
    pub mode: RuleMode,
    pub days: BTreeSet<NaiveDate>,
}

impl SpecificDaysRule {
    pub fn include(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            mode: RuleMode::Include,
            days: days.into_iter().collect(),
        }
    }

    pub fn exclude(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            mode: RuleMode::Exclude,
            days: days.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }
}

/// An inclusive range of days. `start > end` contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// A list of day intervals to include or exclude.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntervalsRule {
    pub mode: RuleMode,
    pub intervals: Vec<DateInterval>,
}

impl IntervalsRule {
    pub fn include(intervals: impl IntoIterator<Item = DateInterval>) -> Self {
        Self {
            mode: RuleMode::Include,
            intervals: intervals.into_iter().collect(),
        }
    }

    pub fn exclude(intervals: impl IntoIterator<Item = DateInterval>) -> Self {
        Self {
            mode: RuleMode::Exclude,
            intervals: intervals.into_iter().collect(),
        }
    }

    /// Is `date` inside any of the intervals?
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.intervals.iter().any(|interval| interval.contains(date))
    }
}

/// A list of times of day to include or exclude. Dates play no part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpecificTimesRule {
    pub mode: RuleMode,
    pub times: Vec<NaiveTime>,
}

impl SpecificTimesRule {
    pub fn include(times: impl IntoIterator<Item = NaiveTime>) -> Self {
        Self {
            mode: RuleMode::Include,
            times: times.into_iter().collect(),
        }
    }

    pub fn exclude(times: impl IntoIterator<Item = NaiveTime>) -> Self {
        Self {
            mode: RuleMode::Exclude,
            times: times.into_iter().collect(),
        }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.times
            .iter()
            .any(|&listed| compare_time_of_day(listed, time).is_eq())
    }
}
