//! Accessibility attributes for the parts of the picker the host renders.

use crate::DatePickerConfig;

/// Attributes for the text input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAttributes {
    pub id: String,
    pub aria_labelledby: String,
    pub aria_invalid: bool,
    pub aria_required: bool,
    pub tab_index: i32,
    pub readonly: bool,
}

/// Attributes for the calendar icon button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerButtonAttributes {
    pub aria_label: String,

    /// Id of the input the popup belongs to.
    pub aria_controls: String,
    pub aria_haspopup: bool,

    /// `-1` keeps it out of the tab order.
    pub tab_index: i32,
}

pub fn input_attributes(config: &DatePickerConfig) -> InputAttributes {
    InputAttributes {
        id: config.id.clone(),
        aria_labelledby: format!("{}-label", config.id),
        aria_invalid: config.invalid,
        aria_required: config.required,
        tab_index: config.tab_index,
        readonly: config.readonly,
    }
}

/// `None` when no trigger button is rendered.
pub fn trigger_button_attributes(config: &DatePickerConfig) -> Option<TriggerButtonAttributes> {
    if config.inline || !config.show_icon {
        return None;
    }
    Some(TriggerButtonAttributes {
        aria_label: config.labels.calendar_icon.clone(),
        aria_controls: config.id.clone(),
        aria_haspopup: true,
        tab_index: if config.show_icon_inside {
            -1
        } else {
            config.tab_index
        },
    })
}

/// Label for the today button, or `None` if there is no such button.
pub fn today_button_label(config: &DatePickerConfig) -> Option<String> {
    config
        .show_today_button
        .then(|| format!("{} {}", config.labels.select_prefix, config.today_button_text))
}
