//! What the display format tells us about the picker.
//!
//! Display patterns use Unicode date field symbols (`yyyy`, `MM`, `dd`, `HH`, `mm`, `a`, …),
//! with literal text in single quotes and `''` for a literal quote.

use crate::SelectionMode;

/// Which kind of value the picker shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DateFormat {
    #[default]
    Date,
    Time,
    DateTime,

    /// Whatever the display pattern says.
    Custom,
    Month,
    Quarter,
    Year,
}

/// Single value or start/end pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SelectionType {
    #[default]
    Single,
    Range,
}

/// Which grid the calendar renderer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Day,
    Month,
    Quarter,
    Year,
}

fn is_time_field(c: char) -> bool {
    matches!(c, 'H' | 'h' | 'k' | 'K' | 'm')
}

fn is_time_related(c: char) -> bool {
    is_time_field(c) || matches!(c, 's' | 'S' | 'a' | 'b' | 'B')
}

/// Characters of `pattern` that are field symbols, with their byte offsets.
///
/// Quoted literal text is skipped.
fn field_chars(pattern: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut quoted = false;
    pattern.char_indices().filter(move |&(_, c)| {
        if c == '\'' {
            quoted = !quoted;
            false
        } else {
            !quoted && c.is_ascii_alphabetic()
        }
    })
}

/// Does the pattern show an hour or a minute?
pub fn contains_time(pattern: &str) -> bool {
    field_chars(pattern).any(|(_, c)| is_time_field(c))
}

/// The time part of a display pattern: from its first hour/minute field
/// to its last time-related field (seconds, am/pm included).
///
/// ```
/// # use date_picker::extract_time_format;
/// assert_eq!(extract_time_format("MM/dd/yyyy hh:mm a"), Some("hh:mm a"));
/// assert_eq!(extract_time_format("dd.MM.yyyy"), None);
/// ```
pub fn extract_time_format(pattern: &str) -> Option<&str> {
    let start = field_chars(pattern)
        .find(|&(_, c)| is_time_field(c))
        .map(|(index, _)| index)?;
    let end = field_chars(pattern)
        .filter(|&(index, c)| index >= start && is_time_related(c))
        .map(|(index, c)| index + c.len_utf8())
        .max()?;
    Some(&pattern[start..end])
}

impl DateFormat {
    /// Should a time list be shown next to (or instead of) the calendar?
    pub fn shows_time_select(self, display_pattern: &str) -> bool {
        match self {
            Self::Time | Self::DateTime => true,
            Self::Custom => contains_time(display_pattern),
            Self::Date | Self::Month | Self::Quarter | Self::Year => false,
        }
    }

    pub fn is_time_only(self) -> bool {
        self == Self::Time
    }

    /// A date grid and a time list together.
    pub fn is_date_and_time(self, display_pattern: &str) -> bool {
        self.shows_time_select(display_pattern) && !self.is_time_only()
    }

    pub fn calendar_kind(self) -> CalendarKind {
        match self {
            Self::Month => CalendarKind::Month,
            Self::Quarter => CalendarKind::Quarter,
            Self::Year => CalendarKind::Year,
            Self::Date | Self::Time | Self::DateTime | Self::Custom => CalendarKind::Day,
        }
    }

    /// Time pattern for the time list, if there is one.
    pub fn time_format(self, display_pattern: &str) -> Option<&str> {
        if self.shows_time_select(display_pattern) {
            extract_time_format(display_pattern)
        } else {
            None
        }
    }
}

/// The mode the completion policy runs in.
///
/// A time-only picker behaves like [`SelectionMode::Single`]: picking a time finishes it.
pub fn selection_mode(
    selection_type: SelectionType,
    format: DateFormat,
    display_pattern: &str,
) -> SelectionMode {
    match selection_type {
        SelectionType::Range => SelectionMode::Range,
        SelectionType::Single if format.is_date_and_time(display_pattern) => {
            SelectionMode::SingleWithTime
        }
        SelectionType::Single => SelectionMode::Single,
    }
}
