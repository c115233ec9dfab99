//!
//! Date formatting for the display field and the picker header.
//!

use crate::date_picker::{PickerState, ViewMode};
use crate::DatePickerError;
use chrono::{Datelike, Locale, NaiveDate};
use log::warn;
use std::fmt::Write;

/// Validated chrono format pattern for the display field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    loc: Locale,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: Self::DEFAULT_PATTERN.to_string(),
            loc: Locale::POSIX,
        }
    }
}

impl DateFormat {
    /// "15-Feb-2024"
    pub const DEFAULT_PATTERN: &'static str = "%d-%b-%Y";

    /// Checks the pattern. Anything chrono can't render for a plain
    /// date is rejected, which includes the time-of-day specifiers.
    pub fn new(pattern: &str) -> Result<Self, DatePickerError> {
        Self::new_localized(pattern, Locale::POSIX)
    }

    /// Checks the pattern with the given locale.
    pub fn new_localized(pattern: &str, loc: Locale) -> Result<Self, DatePickerError> {
        let mut probe = String::new();
        if write!(probe, "{}", NaiveDate::MIN.format_localized(pattern, loc)).is_err() {
            return Err(DatePickerError::InvalidFormat(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
            loc,
        })
    }

    /// Change the locale.
    pub fn with_locale(mut self, loc: Locale) -> Self {
        self.loc = loc;
        self
    }

    /// Pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Locale.
    pub fn locale(&self) -> Locale {
        self.loc
    }

    /// Format the date.
    pub fn format(&self, date: NaiveDate) -> String {
        let mut buf = String::new();
        if write!(buf, "{}", date.format_localized(&self.pattern, self.loc)).is_err() {
            warn!("can't format {} with {:?}", date, self.pattern);
            buf.clear();
            _ = write!(buf, "{}", date);
        }
        buf
    }
}

/// Title for the active view.
///
/// * Date: "March 2024"
/// * Month: "2024"
/// * Year: "2014-2033"
pub fn title(state: &PickerState, loc: Locale) -> String {
    match state.view_mode() {
        ViewMode::Date => state
            .selected_date()
            .format_localized("%B %Y", loc)
            .to_string(),
        ViewMode::Month => state.selected_date().year().to_string(),
        ViewMode::Year => format!("{}-{}", state.year_range_start(), state.year_range_end()),
    }
}

/// Label for the month selector button. "Mar"
pub fn month_label(state: &PickerState, loc: Locale) -> String {
    state
        .selected_date()
        .format_localized("%b", loc)
        .to_string()
}

/// Label for the year selector button. "2024"
pub fn year_label(state: &PickerState) -> String {
    state.selected_date().year().to_string()
}
