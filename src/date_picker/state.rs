use crate::clock::{Clock, LocalClock};
use crate::date_picker::event::DatePickerOutcome;
use chrono::{Datelike, NaiveDate};
use std::rc::Rc;

/// Number of years shown by the year view.
pub const YEAR_RANGE_LEN: i32 = 20;

/// Years shown before the selected year when the year view opens.
pub const YEAR_RANGE_LEAD: i32 = 10;

/// Which grid the picker currently shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Days of the selected month.
    #[default]
    Date,
    /// The twelve months.
    Month,
    /// A range of twenty years.
    Year,
}

///
/// The date-picker state machine.
///
/// Holds the selected date, the open flag, the active view and the
/// start of the displayed year range. Everything here is independent
/// of rendering, the [DatePicker](crate::date_picker::DatePicker)
/// widget only reads it and forwards gestures.
///
/// The commands live in separate impl blocks:
/// * navigation: [prev](PickerState::prev), [next](PickerState::next),
///   [go_to_today](PickerState::go_to_today),
///   [toggle_open](PickerState::toggle_open)
/// * view mode: [open_month_view](PickerState::open_month_view),
///   [open_year_view](PickerState::open_year_view)
/// * selection: [select_day](PickerState::select_day),
///   [select_month](PickerState::select_month),
///   [select_year](PickerState::select_year),
///   [activate](PickerState::activate)
///
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Selected date. Midnight is implied.
    pub(super) selected: NaiveDate,
    /// Grid overlay is visible.
    pub(super) open: bool,
    /// Active view.
    pub(super) view_mode: ViewMode,
    /// First year of the year view.
    pub(super) year_range_start: i32,
    /// Today.
    pub(super) clock: Rc<dyn Clock>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl PickerState {
    /// New state with today's date from the local clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// New state with today's date from the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let clock: Rc<dyn Clock> = Rc::new(clock);
        let today = clock.today();
        Self {
            selected: today,
            open: false,
            view_mode: ViewMode::Date,
            year_range_start: today.year().saturating_sub(YEAR_RANGE_LEAD),
            clock,
        }
    }

    /// Today according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Selected date.
    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    /// Set the selected date without any other side effects.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> DatePickerOutcome {
        if self.selected != date {
            self.selected = date;
            DatePickerOutcome::Selected
        } else {
            DatePickerOutcome::Unchanged
        }
    }

    /// Is the grid overlay visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Active view.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// First year of the year view.
    pub fn year_range_start(&self) -> i32 {
        self.year_range_start
    }

    /// Last year of the year view, inclusive.
    pub fn year_range_end(&self) -> i32 {
        self.year_range_start.saturating_add(YEAR_RANGE_LEN - 1)
    }
}
