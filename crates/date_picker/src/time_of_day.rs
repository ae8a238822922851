//! Comparisons on the time-of-day part of a date/time, ignoring the date.

use std::cmp::Ordering;

use chrono::{NaiveDateTime, NaiveTime, Timelike as _};

/// Order two times of day by hour and minute.
///
/// Seconds and below are ignored: a time slot in the picker never carries them,
/// so two values that land in the same slot compare equal.
pub fn compare_time_of_day(a: NaiveTime, b: NaiveTime) -> Ordering {
    (a.hour(), a.minute()).cmp(&(b.hour(), b.minute()))
}

/// Do `a` and `b` fall on the same time of day, whatever their dates?
pub fn time_matches(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    compare_time_of_day(a.time(), b.time()).is_eq()
}

/// The same date at midnight.
pub fn start_of_day(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_time(NaiveTime::MIN)
}
