//!
//! Grid generation for the three views.
//!
//! The grids are rebuilt on every request. They only read the
//! [PickerState] and carry no hidden state of their own.
//!

use crate::calendar_math::{days_in_month, first_day_offset, normalize_date, week_rows, WEEKDAYS};
use crate::date_picker::selection::CellAction;
use crate::date_picker::state::{PickerState, ViewMode, YEAR_RANGE_LEN};
use chrono::{Datelike, Days, Locale, NaiveDate};

/// Columns of the day grid.
pub const DAY_COLUMNS: usize = 7;
/// Maximum number of week rows a month can occupy.
pub const DAY_ROWS_MAX: usize = 6;
/// Layout of the month grid.
pub const MONTH_ROWS: usize = 3;
pub const MONTH_COLUMNS: usize = 4;
/// Layout of the year grid.
pub const YEAR_ROWS: usize = 5;
pub const YEAR_COLUMNS: usize = 4;

/// One cell of a grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CellDescriptor {
    /// Display text. Empty for blank cells.
    pub label: String,
    /// Padding cell without a date.
    pub blank: bool,
    /// Cell matches the selected date. Day cells compare the full
    /// date, month and year cells only their month/year.
    pub selected: bool,
    /// Cell contains today.
    pub today: bool,
    /// Mouse is over this cell. Only filled in by the widget.
    pub hovered: bool,
    /// Transition when the cell is activated. None for blanks.
    pub action: Option<CellAction>,
}

impl CellDescriptor {
    /// Padding cell.
    pub fn blank() -> Self {
        Self {
            blank: true,
            ..Default::default()
        }
    }
}

/// Cells of the active view in row-major order.
///
/// `cells.len() == rows * columns` always holds. Blank cells are
/// explicit entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// View this grid belongs to.
    pub view_mode: ViewMode,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Column headers. Only the day grid has any.
    pub headers: Vec<String>,
    /// All cells, row-major.
    pub cells: Vec<CellDescriptor>,
}

impl Grid {
    /// Cell at the position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellDescriptor> {
        if row < self.rows && column < self.columns {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Iterate over the rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[CellDescriptor]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Number of non-blank cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|v| !v.blank).count()
    }

    /// Index of the selected cell.
    pub fn selected_idx(&self) -> Option<usize> {
        self.cells.iter().position(|v| v.selected)
    }

    /// Index of the cell with this action.
    pub fn position(&self, action: CellAction) -> Option<usize> {
        self.cells.iter().position(|v| v.action == Some(action))
    }

    /// Mark one cell as hovered, clears all others.
    /// Blank cells are never hovered.
    pub fn set_hovered(&mut self, idx: Option<usize>) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.hovered = Some(i) == idx && !cell.blank;
        }
    }
}

/// Weekday column headers, Monday first.
pub fn weekday_headers(loc: Locale) -> Vec<String> {
    // 2024-01-01 is a Monday.
    let monday = normalize_date(2024, 1, 1);
    WEEKDAYS
        .iter()
        .map(|wd| {
            (monday + Days::new(wd.num_days_from_monday() as u64))
                .format_localized("%a", loc)
                .to_string()
        })
        .collect()
}

/// Abbreviated month name, zero-based.
pub fn month_abbr(month0: u32, loc: Locale) -> String {
    normalize_date(2000, month0 as i32 + 1, 1)
        .format_localized("%b", loc)
        .to_string()
}

/// Day grid for the month of `selected`.
///
/// Monday-first, padding cells before the first and after the last
/// day. Only as many week rows as the month needs are generated,
/// never more than [DAY_ROWS_MAX].
pub fn day_grid(selected: NaiveDate, today: NaiveDate, loc: Locale) -> Grid {
    let year = selected.year();
    let month = selected.month();
    let offset = first_day_offset(year, month);
    let days = days_in_month(year, month) as usize;

    let rows = week_rows(year, month);

    let mut cells = Vec::with_capacity(rows * DAY_COLUMNS);
    let mut day = 1;
    for week in 0..rows {
        for weekday in 0..DAY_COLUMNS {
            if (week == 0 && weekday < offset) || day > days {
                cells.push(CellDescriptor::blank());
            } else {
                let date = normalize_date(year, month as i32, day as i32);
                cells.push(CellDescriptor {
                    label: day.to_string(),
                    blank: false,
                    selected: date == selected,
                    today: date == today,
                    hovered: false,
                    action: Some(CellAction::SelectDay(date)),
                });
                day += 1;
            }
        }
    }

    Grid {
        view_mode: ViewMode::Date,
        rows,
        columns: DAY_COLUMNS,
        headers: weekday_headers(loc),
        cells,
    }
}

/// Month grid, Jan to Dec in 3 rows of 4.
pub fn month_grid(selected: NaiveDate, today: NaiveDate, loc: Locale) -> Grid {
    let cells = (0..(MONTH_ROWS * MONTH_COLUMNS) as u32)
        .map(|month0| CellDescriptor {
            label: month_abbr(month0, loc),
            blank: false,
            selected: selected.month0() == month0,
            today: today.year() == selected.year() && today.month0() == month0,
            hovered: false,
            action: Some(CellAction::SelectMonth(month0)),
        })
        .collect();

    Grid {
        view_mode: ViewMode::Month,
        rows: MONTH_ROWS,
        columns: MONTH_COLUMNS,
        headers: Vec::new(),
        cells,
    }
}

/// Year grid, twenty years from `range_start` in 5 rows of 4.
pub fn year_grid(range_start: i32, selected: NaiveDate, today: NaiveDate) -> Grid {
    let cells = (0..YEAR_RANGE_LEN)
        .map(|i| {
            let year = range_start.saturating_add(i);
            CellDescriptor {
                label: year.to_string(),
                blank: false,
                selected: selected.year() == year,
                today: today.year() == year,
                hovered: false,
                action: Some(CellAction::SelectYear(year)),
            }
        })
        .collect();

    Grid {
        view_mode: ViewMode::Year,
        rows: YEAR_ROWS,
        columns: YEAR_COLUMNS,
        headers: Vec::new(),
        cells,
    }
}

impl PickerState {
    /// Grid for the active view with english names.
    pub fn grid(&self) -> Grid {
        self.grid_localized(Locale::POSIX)
    }

    /// Grid for the active view.
    pub fn grid_localized(&self, loc: Locale) -> Grid {
        let today = self.clock.today();
        match self.view_mode {
            ViewMode::Date => day_grid(self.selected, today, loc),
            ViewMode::Month => month_grid(self.selected, today, loc),
            ViewMode::Year => year_grid(self.year_range_start, self.selected, today),
        }
    }
}
