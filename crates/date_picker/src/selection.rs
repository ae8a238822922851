//! The current selection, and when a pick finishes it.

use chrono::NaiveDateTime;

use crate::time_of_day::{start_of_day, time_matches};

/// How picks combine into a selection. Fixed for the lifetime of a picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SelectionMode {
    /// One date, done after a single pick.
    Single,

    /// One date and time of day. The time is adjusted after the date.
    SingleWithTime,

    /// A start and an end date.
    Range,
}

/// What the user has picked so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Selection {
    Single(Option<NaiveDateTime>),

    /// `start <= end` once both are set. `end` is only set after `start`.
    Range {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
}

impl Selection {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single | SelectionMode::SingleWithTime => Self::Single(None),
            SelectionMode::Range => Self::Range {
                start: None,
                end: None,
            },
        }
    }

    pub fn range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self::Range {
            start: Some(start),
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self::Single(None)
                | Self::Range {
                    start: None,
                    end: None
                }
        )
    }

    /// The single value, or the start of a range.
    pub fn start(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Single(value) => value,
            Self::Range { start, .. } => start,
        }
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        match *self {
            Self::Single(_) => None,
            Self::Range { end, .. } => end,
        }
    }

    /// Reshape to fit `mode`, keeping what carries over, and normalize.
    pub fn coerce(self, mode: SelectionMode) -> Self {
        match (mode, self.normalized()) {
            (SelectionMode::Range, Self::Single(value)) => Self::Range {
                start: value,
                end: None,
            },
            (SelectionMode::Single | SelectionMode::SingleWithTime, Self::Range { start, .. }) => {
                Self::Single(start)
            }
            (_, selection) => selection,
        }
    }

    /// Restore `start <= end` and "no end without a start".
    pub fn normalized(self) -> Self {
        match self {
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => ordered(start, end),
            Self::Range {
                start: None,
                end: Some(end),
            } => Self::range(end, None),
            selection => selection,
        }
    }
}

/// A value handed over by the calendar renderer, the input field or the today shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickedValue {
    /// One clicked day or time slot.
    Date(NaiveDateTime),

    /// A whole start/end pair, as typed into a range input.
    Range {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },

    /// The clear control was used.
    Cleared,
}

/// Result of [`on_value_picked`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickOutcome {
    pub selection: Selection,

    /// Nothing more to pick: the popup should close.
    pub is_complete: bool,
}

/// The pick made by the "today" shortcut: the current date at midnight.
pub fn today_pick(now: NaiveDateTime) -> PickedValue {
    PickedValue::Date(start_of_day(now))
}

/// Apply `picked` to `previous` and decide whether the selection is finished.
///
/// * [`SelectionMode::Single`]: every pick finishes it.
/// * [`SelectionMode::SingleWithTime`]: finished on the first pick, or when the time of day
///   changes. Picking another date at the same time keeps the popup open.
/// * [`SelectionMode::Range`]: finished whenever a start was already picked. The pick either
///   supplies the end (an end before the start is swapped in front of it) or, on a finished
///   range, starts a new one.
///
/// Clearing always finishes.
pub fn on_value_picked(
    mode: SelectionMode,
    previous: Selection,
    picked: PickedValue,
) -> PickOutcome {
    let previous = previous.coerce(mode);

    if picked == PickedValue::Cleared {
        return PickOutcome {
            selection: Selection::empty(mode),
            is_complete: true,
        };
    }

    match mode {
        SelectionMode::Single => PickOutcome {
            selection: Selection::Single(picked_start(picked)),
            is_complete: true,
        },
        SelectionMode::SingleWithTime => {
            let value = picked_start(picked);
            let is_complete = match (previous.start(), value) {
                (None, _) => true,
                (Some(previous), Some(value)) => !time_matches(previous, value),
                (Some(_), None) => false,
            };
            PickOutcome {
                selection: Selection::Single(value),
                is_complete,
            }
        }
        SelectionMode::Range => pick_range(previous, picked),
    }
}

fn picked_start(picked: PickedValue) -> Option<NaiveDateTime> {
    match picked {
        PickedValue::Date(value) => Some(value),
        PickedValue::Range { start, .. } => start,
        PickedValue::Cleared => None,
    }
}

fn ordered(a: NaiveDateTime, b: NaiveDateTime) -> Selection {
    Selection::range(a.min(b), Some(a.max(b)))
}

fn pick_range(previous: Selection, picked: PickedValue) -> PickOutcome {
    let had_start = previous.start().is_some();
    match picked {
        PickedValue::Date(value) => {
            let selection = match (previous.start(), previous.end()) {
                (Some(start), None) => ordered(start, value),
                // Nothing started yet, or a finished range: start over.
                _ => Selection::range(value, None),
            };
            PickOutcome {
                selection,
                is_complete: had_start,
            }
        }
        PickedValue::Range { start, end } => PickOutcome {
            selection: Selection::Range { start, end }.normalized(),
            is_complete: had_start,
        },
        PickedValue::Cleared => PickOutcome {
            selection: Selection::empty(SelectionMode::Range),
            is_complete: true,
        },
    }
}
