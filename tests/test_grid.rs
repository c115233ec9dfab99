use chrono::{Datelike, Locale, NaiveDate};
use rat_datepicker::calendar_math::{days_in_month, first_day_offset};
use rat_datepicker::clock::FixedClock;
use rat_datepicker::date_picker::{
    day_grid, month_grid, weekday_headers, year_grid, CellAction, PickerState, ViewMode,
};
use rat_datepicker::event::ConsumedEvent;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("date")
}

#[test]
fn test_headers() {
    assert_eq!(
        weekday_headers(Locale::POSIX),
        vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    );
}

#[test]
fn test_day_grid_feb_leap() {
    let g = day_grid(d(2024, 2, 15), d(2025, 6, 1), Locale::POSIX);
    assert_eq!(g.view_mode, ViewMode::Date);
    assert_eq!(g.columns, 7);
    assert_eq!(g.active_count(), 29);
    // 2024-02-01 is a Thursday.
    assert!(g.cells[..3].iter().all(|v| v.blank));
    assert_eq!(g.cells[3].label, "1");
    assert_eq!(g.cells.len(), g.rows * g.columns);
}

#[test]
fn test_day_grid_feb() {
    let g = day_grid(d(2023, 2, 15), d(2025, 6, 1), Locale::POSIX);
    assert_eq!(g.active_count(), 28);

    // 2021-02-01 is a Monday, exactly four rows.
    let g = day_grid(d(2021, 2, 1), d(2025, 6, 1), Locale::POSIX);
    assert_eq!(g.rows, 4);
    assert_eq!(g.cells[0].label, "1");
    assert!(g.cells.iter().all(|v| !v.blank));
}

#[test]
fn test_day_grid_sunday_start() {
    // 2024-09-01 is a Sunday.
    let g = day_grid(d(2024, 9, 1), d(2025, 6, 1), Locale::POSIX);
    assert!(g.cells[..6].iter().all(|v| v.blank));
    assert_eq!(g.cells[6].label, "1");
    assert_eq!(g.rows, 6);
}

#[test]
fn test_day_grid_alignment() {
    for year in [1600, 1900, 1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            let g = day_grid(d(year, month, 10), d(2025, 6, 1), Locale::POSIX);
            let offset = first_day_offset(year, month);
            let days = days_in_month(year, month) as usize;

            assert_eq!(g.cells.len(), g.rows * 7);
            assert!(g.rows >= 4 && g.rows <= 6);
            assert_eq!(g.active_count(), days);
            assert!(g.cells[..offset].iter().all(|v| v.blank));
            assert!(g.cells[offset + days..].iter().all(|v| v.blank));

            for (i, cell) in g.cells[offset..offset + days].iter().enumerate() {
                let date = d(year, month, i as u32 + 1);
                assert_eq!(cell.label, (i + 1).to_string());
                assert_eq!(cell.action, Some(CellAction::SelectDay(date)));
                assert_eq!(
                    (offset + i) % 7,
                    date.weekday().num_days_from_monday() as usize
                );
            }
            // the last row has at least one day.
            assert!(g.cells[(g.rows - 1) * 7..].iter().any(|v| !v.blank));
        }
    }
}

#[test]
fn test_day_grid_flags() {
    let g = day_grid(d(2024, 3, 15), d(2024, 3, 10), Locale::POSIX);
    let sel = g.selected_idx().expect("selected");
    assert_eq!(g.cells[sel].label, "15");
    let today = g.cells.iter().position(|v| v.today).expect("today");
    assert_eq!(g.cells[today].label, "10");
    assert_eq!(g.cells.iter().filter(|v| v.selected).count(), 1);

    // today in another month isn't marked.
    let g = day_grid(d(2024, 3, 15), d(2024, 4, 10), Locale::POSIX);
    assert!(g.cells.iter().all(|v| !v.today));
}

#[test]
fn test_month_grid() {
    let g = month_grid(d(2024, 5, 20), d(2024, 3, 1), Locale::POSIX);
    assert_eq!(g.view_mode, ViewMode::Month);
    assert_eq!((g.rows, g.columns), (3, 4));
    assert_eq!(g.cells.len(), 12);
    assert_eq!(g.cells[0].label, "Jan");
    assert_eq!(g.cells[11].label, "Dec");
    assert_eq!(g.selected_idx(), Some(4));
    assert!(g.cells[2].today);
    assert_eq!(g.cell(1, 0).map(|v| v.label.as_str()), Some("May"));
    assert_eq!(g.cell(3, 0), None);

    // today only marked in the same year.
    let g = month_grid(d(2023, 5, 20), d(2024, 3, 1), Locale::POSIX);
    assert!(g.cells.iter().all(|v| !v.today));
}

#[test]
fn test_year_grid() {
    let g = year_grid(2014, d(2024, 5, 20), d(2025, 1, 1));
    assert_eq!(g.view_mode, ViewMode::Year);
    assert_eq!((g.rows, g.columns), (5, 4));
    assert_eq!(g.cells.len(), 20);
    assert_eq!(g.cells[0].label, "2014");
    assert_eq!(g.cells[19].label, "2033");
    assert_eq!(g.selected_idx(), Some(10));
    assert!(g.cells[11].today);
    assert_eq!(g.position(CellAction::SelectYear(2020)), Some(6));

    // selected year outside the range.
    let g = year_grid(2034, d(2024, 5, 20), d(2025, 1, 1));
    assert_eq!(g.selected_idx(), None);
}

#[test]
fn test_grid_for_view() {
    let mut p = PickerState::with_clock(FixedClock(d(2024, 3, 15)));
    assert_eq!(p.grid().view_mode, ViewMode::Date);
    assert_eq!(p.grid().headers.len(), 7);
    p.open_month_view();
    assert_eq!(p.grid().view_mode, ViewMode::Month);
    assert!(p.grid().headers.is_empty());
    p.open_year_view();
    assert_eq!(p.grid().view_mode, ViewMode::Year);

    // grids are derived fresh, no stale data.
    p.next();
    assert_eq!(p.grid().cells[0].label, "2034");
}

#[test]
fn test_activate_cell() {
    let mut p = PickerState::with_clock(FixedClock(d(2024, 3, 15)));
    p.toggle_open();
    let g = p.grid();
    // 2024-03-01 is a Friday, column 4.
    assert!(g.cells[0].blank);
    assert!(!p.activate(&g.cells[0]).is_consumed());
    p.activate(&g.cells[4 + 9]);
    assert_eq!(p.selected_date(), d(2024, 3, 10));
    assert!(!p.is_open());
}

#[test]
fn test_hover() {
    let mut g = year_grid(2014, d(2024, 5, 20), d(2025, 1, 1));
    g.set_hovered(Some(3));
    assert!(g.cells[3].hovered);
    assert_eq!(g.cells.iter().filter(|v| v.hovered).count(), 1);
    g.set_hovered(None);
    assert!(g.cells.iter().all(|v| !v.hovered));

    let mut g = day_grid(d(2024, 3, 15), d(2024, 3, 10), Locale::POSIX);
    g.set_hovered(Some(0));
    assert!(!g.cells[0].hovered);
}
