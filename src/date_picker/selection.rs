use crate::calendar_math::{first_of_month, with_year};
use crate::date_picker::event::DatePickerOutcome;
use crate::date_picker::grid::CellDescriptor;
use crate::date_picker::state::{PickerState, ViewMode};
use chrono::NaiveDate;
use log::debug;
use std::mem;

/// What happens when a grid cell is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellAction {
    /// Select the date and close the picker.
    SelectDay(NaiveDate),
    /// Select the first day of the month (zero-based index) in the
    /// selected year and return to the date view.
    SelectMonth(u32),
    /// Select the year, keep month and day, and return to the
    /// date view.
    SelectYear(i32),
}

impl PickerState {
    /// Select a day and close the picker.
    /// The view mode is not touched.
    pub fn select_day(&mut self, date: NaiveDate) -> DatePickerOutcome {
        debug!("picker select day {}", date);
        let r = self.set_selected_date(date);
        let was_open = mem::replace(&mut self.open, false);
        r.max(if was_open {
            DatePickerOutcome::Changed
        } else {
            DatePickerOutcome::Unchanged
        })
    }

    /// Select the first of the month in the current year and switch
    /// to the date view. `month0` is zero-based.
    pub fn select_month(&mut self, month0: u32) -> DatePickerOutcome {
        let date = first_of_month(self.selected, month0);
        debug!("picker select month {} -> {}", month0, date);
        self.view_mode = ViewMode::Date;
        self.set_selected_date(date).max(DatePickerOutcome::Changed)
    }

    /// Change the year and switch to the date view.
    /// Month and day stay, February 29th may roll over to March 1st.
    pub fn select_year(&mut self, year: i32) -> DatePickerOutcome {
        let date = with_year(self.selected, year);
        debug!("picker select year {} -> {}", year, date);
        self.view_mode = ViewMode::Date;
        self.set_selected_date(date).max(DatePickerOutcome::Changed)
    }

    /// Run a cell action.
    pub fn apply(&mut self, action: CellAction) -> DatePickerOutcome {
        match action {
            CellAction::SelectDay(date) => self.select_day(date),
            CellAction::SelectMonth(month0) => self.select_month(month0),
            CellAction::SelectYear(year) => self.select_year(year),
        }
    }

    /// Activate a grid cell. Blank cells do nothing.
    pub fn activate(&mut self, cell: &CellDescriptor) -> DatePickerOutcome {
        if let Some(action) = cell.action {
            self.apply(action)
        } else {
            DatePickerOutcome::Continue
        }
    }
}
