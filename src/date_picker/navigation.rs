use crate::calendar_math::{add_months, add_years};
use crate::date_picker::event::DatePickerOutcome;
use crate::date_picker::state::{PickerState, ViewMode, YEAR_RANGE_LEN};
use log::debug;

impl PickerState {
    /// Step back.
    ///
    /// * Date view: same day in the previous month. A day that doesn't
    ///   exist in that month rolls over into the following one.
    /// * Month view: same day in the previous year.
    /// * Year view: the previous twenty years.
    pub fn prev(&mut self) -> DatePickerOutcome {
        self.step(-1)
    }

    /// Step forward.
    ///
    /// * Date view: same day in the next month. A day that doesn't
    ///   exist in that month rolls over into the following one.
    /// * Month view: same day in the next year.
    /// * Year view: the next twenty years.
    pub fn next(&mut self) -> DatePickerOutcome {
        self.step(1)
    }

    fn step(&mut self, n: i32) -> DatePickerOutcome {
        match self.view_mode {
            ViewMode::Date => {
                let date = add_months(self.selected, n);
                debug!("picker step month {} -> {}", self.selected, date);
                self.set_selected_date(date)
            }
            ViewMode::Month => {
                let date = add_years(self.selected, n);
                debug!("picker step year {} -> {}", self.selected, date);
                self.set_selected_date(date)
            }
            ViewMode::Year => {
                // no bounds, can go negative.
                self.year_range_start = self
                    .year_range_start
                    .saturating_add(n.saturating_mul(YEAR_RANGE_LEN));
                debug!("picker year range {}", self.year_range_start);
                DatePickerOutcome::Changed
            }
        }
    }

    /// Select today. Leaves the view and the open state as they are.
    pub fn go_to_today(&mut self) -> DatePickerOutcome {
        let today = self.clock.today();
        debug!("picker today {}", today);
        self.set_selected_date(today)
    }

    /// Show/hide the grid. Always returns to the date view.
    pub fn toggle_open(&mut self) -> DatePickerOutcome {
        self.open = !self.open;
        self.view_mode = ViewMode::Date;
        debug!("picker open {}", self.open);
        DatePickerOutcome::Changed
    }

    /// Hide the grid if it is visible. Returns to the date view.
    pub fn close(&mut self) -> DatePickerOutcome {
        if self.open {
            self.toggle_open()
        } else {
            DatePickerOutcome::Continue
        }
    }
}
