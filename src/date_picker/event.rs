use rat_event::{ConsumedEvent, Outcome};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DatePickerOutcome {
    /// The given event has not been used at all.
    Continue,
    /// The event has been recognized, but the result was nil.
    /// Further processing for this event may stop.
    Unchanged,
    /// The event has been recognized and there is some change
    /// due to it. View mode, open state or the year range.
    /// Further processing for this event may stop.
    /// Rendering the ui is advised.
    Changed,
    /// The selected date has changed.
    Selected,
}

impl ConsumedEvent for DatePickerOutcome {
    fn is_consumed(&self) -> bool {
        *self != DatePickerOutcome::Continue
    }
}

impl From<Outcome> for DatePickerOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Continue => DatePickerOutcome::Continue,
            Outcome::Unchanged => DatePickerOutcome::Unchanged,
            Outcome::Changed => DatePickerOutcome::Changed,
        }
    }
}

impl From<DatePickerOutcome> for Outcome {
    fn from(value: DatePickerOutcome) -> Self {
        match value {
            DatePickerOutcome::Continue => Outcome::Continue,
            DatePickerOutcome::Unchanged => Outcome::Unchanged,
            DatePickerOutcome::Changed => Outcome::Changed,
            DatePickerOutcome::Selected => Outcome::Changed,
        }
    }
}
