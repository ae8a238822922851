use chrono::{Datelike as _, NaiveDate, Weekday};
use enum_map::{Enum, EnumMap};

/// A day of the week, usable as an [`EnumMap`] key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// Weekdays that can never be picked.
///
/// Each day has its own flag. The mask is consulted before any
/// inclusion or exclusion list.
///
/// Serialized as the list of disabled days, like `[Saturday, Sunday]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<DayOfWeek>", into = "Vec<DayOfWeek>")
)]
pub struct DayOfWeekMask(EnumMap<DayOfWeek, bool>);

impl From<Vec<DayOfWeek>> for DayOfWeekMask {
    fn from(days: Vec<DayOfWeek>) -> Self {
        days.into_iter().fold(Self::default(), Self::disable)
    }
}

impl From<DayOfWeekMask> for Vec<DayOfWeek> {
    fn from(mask: DayOfWeekMask) -> Self {
        mask.disabled_days().collect()
    }
}

impl DayOfWeekMask {
    /// Disable `day`. (Builder style)
    #[inline]
    pub fn disable(mut self, day: DayOfWeek) -> Self {
        self.0[day] = true;
        self
    }

    /// Disable both Saturday and Sunday.
    #[inline]
    pub fn weekends() -> Self {
        Self::default()
            .disable(DayOfWeek::Saturday)
            .disable(DayOfWeek::Sunday)
    }

    pub fn set_disabled(&mut self, day: DayOfWeek, disabled: bool) {
        self.0[day] = disabled;
    }

    pub fn is_disabled(&self, day: DayOfWeek) -> bool {
        self.0[day]
    }

    /// Is the weekday of `date` allowed?
    pub fn allows(&self, date: NaiveDate) -> bool {
        !self.is_disabled(DayOfWeek::of(date))
    }

    pub fn all_disabled(&self) -> bool {
        self.0.values().all(|&disabled| disabled)
    }

    pub fn disabled_days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.0
            .iter()
            .filter_map(|(day, &disabled)| disabled.then_some(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_and_sunday_are_independent() {
        // 2024-03-09 is a Saturday, 2024-03-10 a Sunday.
        let only_sunday = DayOfWeekMask::default().disable(DayOfWeek::Sunday);
        assert!(only_sunday.allows(date(2024, 3, 9)));
        assert!(!only_sunday.allows(date(2024, 3, 10)));

        let only_saturday = DayOfWeekMask::default().disable(DayOfWeek::Saturday);
        assert!(!only_saturday.allows(date(2024, 3, 9)));
        assert!(only_saturday.allows(date(2024, 3, 10)));
    }

    #[test]
    fn every_day_of_a_week() {
        let mask = DayOfWeekMask::weekends();
        // 2024-03-04 is a Monday.
        let allowed: Vec<bool> = (4..=10).map(|d| mask.allows(date(2024, 3, d))).collect();
        assert_eq!(allowed, [true, true, true, true, true, false, false]);
        assert_eq!(
            mask.disabled_days().collect::<Vec<_>>(),
            [DayOfWeek::Saturday, DayOfWeek::Sunday]
        );
    }

    #[test]
    fn all_disabled() {
        let mut mask = DayOfWeekMask::default();
        assert!(!mask.all_disabled());
        for day in DayOfWeek::ALL {
            mask.set_disabled(day, true);
        }
        assert!(mask.all_disabled());
    }
}
