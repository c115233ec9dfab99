use crate::date_picker::event::DatePickerOutcome;
use crate::date_picker::state::{PickerState, ViewMode, YEAR_RANGE_LEAD};
use chrono::Datelike;
use log::debug;

impl PickerState {
    /// Switch to the month grid.
    pub fn open_month_view(&mut self) -> DatePickerOutcome {
        debug!("picker view {:?} -> Month", self.view_mode);
        self.view_mode = ViewMode::Month;
        DatePickerOutcome::Changed
    }

    /// Switch to the year grid.
    ///
    /// The year range is reset to start ten years before the
    /// selected year.
    pub fn open_year_view(&mut self) -> DatePickerOutcome {
        self.view_mode = ViewMode::Year;
        self.year_range_start = self.selected.year().saturating_sub(YEAR_RANGE_LEAD);
        debug!("picker view Year from {}", self.year_range_start);
        DatePickerOutcome::Changed
    }

    /// Set the view directly. Year view anchors the range like
    /// [open_year_view](PickerState::open_year_view).
    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> DatePickerOutcome {
        match view_mode {
            ViewMode::Date => {
                self.view_mode = ViewMode::Date;
                DatePickerOutcome::Changed
            }
            ViewMode::Month => self.open_month_view(),
            ViewMode::Year => self.open_year_view(),
        }
    }
}
