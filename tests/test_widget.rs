use chrono::NaiveDate;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_datepicker::clock::FixedClock;
use rat_datepicker::date_picker::{
    handle_events, handle_mouse_events, DatePicker, DatePickerState, DatePickerStyle, ViewMode,
};
use rat_datepicker::event::{DatePickerOutcome, HandleEvent, Regular};
use rat_datepicker::focus::HasFocus;
use rat_datepicker::reloc::RelocatableState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("date")
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(state: &mut DatePickerState, code: KeyCode) -> DatePickerOutcome {
    state.handle(&key(code), Regular)
}

fn click(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
}

fn render(state: &mut DatePickerState) -> Buffer {
    let area = Rect::new(0, 0, 30, 12);
    let mut buf = Buffer::empty(area);
    DatePicker::new()
        .styles(DatePickerStyle::default())
        .render(area, &mut buf, state);
    buf
}

// 2024-03-15, a month with five week rows starting on Friday.
fn state() -> DatePickerState {
    DatePickerState::with_clock(FixedClock(d(2024, 3, 15)))
}

#[test]
fn test_closed() {
    let mut state = state();
    let buf = render(&mut state);
    assert!(row_text(&buf, 0).starts_with("15-Mar-2024"));
    assert_eq!(state.area_field, Rect::new(0, 0, 30, 1));
    assert_eq!(state.area_toggle, Rect::new(27, 0, 3, 1));
    assert!(state.area_popup.is_empty());
    assert!(state.area_cells.is_empty());
    assert_eq!(row_text(&buf, 1).trim(), "");
}

#[test]
fn test_open_layout() {
    let mut state = state();
    state.picker.toggle_open();
    let buf = render(&mut state);

    assert_eq!(state.area_popup, Rect::new(0, 1, 30, 11));
    assert_eq!(state.inner_popup, Rect::new(1, 2, 28, 9));
    assert!(row_text(&buf, 1).contains("March 2024"));
    assert_eq!(state.area_prev, Rect::new(1, 2, 3, 1));
    assert_eq!(state.area_next, Rect::new(26, 2, 3, 1));
    assert!(row_text(&buf, 2).contains(" Mar "));
    assert!(row_text(&buf, 2).contains(" 2024 "));
    assert!(row_text(&buf, 3).contains("Mon"));
    assert!(row_text(&buf, 3).contains("Sun"));

    // five rows of seven
    assert_eq!(state.area_cells.len(), 35);
    assert!(state.area_cells[..4].iter().all(|v| v.is_empty()));
    assert_eq!(state.area_cells[4], Rect::new(17, 4, 4, 1));
    assert!(row_text(&buf, 10).contains("Go to Today"));
}

#[test]
fn test_open_year_layout() {
    let mut state = state();
    state.picker.toggle_open();
    state.picker.open_year_view();
    let buf = render(&mut state);

    assert!(row_text(&buf, 1).contains("2014-2033"));
    assert_eq!(state.area_cells.len(), 20);
    assert_eq!(state.area_cells[0], Rect::new(1, 3, 7, 1));
    assert!(row_text(&buf, 3).contains("2014"));
    assert!(row_text(&buf, 7).contains("2033"));
}

#[test]
fn test_keys() {
    let mut state = state();
    state.focus.set(true);

    assert_eq!(press(&mut state, KeyCode::F(4)), DatePickerOutcome::Changed);
    assert!(state.is_open());
    assert_eq!(press(&mut state, KeyCode::PageDown), DatePickerOutcome::Selected);
    assert_eq!(state.selected_date(), d(2024, 4, 15));
    assert_eq!(press(&mut state, KeyCode::PageUp), DatePickerOutcome::Selected);
    assert_eq!(state.selected_date(), d(2024, 3, 15));

    assert_eq!(press(&mut state, KeyCode::Char('y')), DatePickerOutcome::Changed);
    assert_eq!(state.view_mode(), ViewMode::Year);
    assert_eq!(press(&mut state, KeyCode::Char('m')), DatePickerOutcome::Changed);
    assert_eq!(state.view_mode(), ViewMode::Month);

    assert_eq!(press(&mut state, KeyCode::Esc), DatePickerOutcome::Changed);
    assert!(!state.is_open());
    assert_eq!(state.view_mode(), ViewMode::Date);
    assert_eq!(press(&mut state, KeyCode::Esc), DatePickerOutcome::Continue);

    // paging only when open
    assert_eq!(press(&mut state, KeyCode::PageDown), DatePickerOutcome::Continue);

    assert_eq!(press(&mut state, KeyCode::Enter), DatePickerOutcome::Changed);
    assert!(state.is_open());
}

#[test]
fn test_keys_unfocused() {
    let mut state = state();
    let r = handle_events(&mut state, false, &key(KeyCode::F(4)));
    assert_eq!(r, DatePickerOutcome::Continue);
    assert!(!state.is_open());

    let r = handle_events(&mut state, true, &key(KeyCode::F(4)));
    assert_eq!(r, DatePickerOutcome::Changed);
    assert!(state.is_focused());
}

#[test]
fn test_mouse() {
    let mut state = state();
    render(&mut state);

    // open with a click on the field.
    assert_eq!(
        handle_mouse_events(&mut state, &click(5, 0)),
        DatePickerOutcome::Changed
    );
    render(&mut state);

    assert_eq!(
        handle_mouse_events(&mut state, &click(2, 2)),
        DatePickerOutcome::Selected
    );
    assert_eq!(state.selected_date(), d(2024, 2, 15));
    render(&mut state);
    assert_eq!(
        handle_mouse_events(&mut state, &click(27, 2)),
        DatePickerOutcome::Selected
    );
    assert_eq!(state.selected_date(), d(2024, 3, 15));
    render(&mut state);

    // blank cell, nothing happens.
    assert_eq!(
        handle_mouse_events(&mut state, &click(2, 4)),
        DatePickerOutcome::Unchanged
    );

    // March 1st.
    assert_eq!(
        handle_mouse_events(&mut state, &click(18, 4)),
        DatePickerOutcome::Selected
    );
    assert_eq!(state.selected_date(), d(2024, 3, 1));
    assert!(!state.is_open());
}

#[test]
fn test_mouse_views() {
    let mut state = state();
    state.picker.toggle_open();
    render(&mut state);

    let year = state.area_year;
    assert_eq!(
        handle_mouse_events(&mut state, &click(year.x, year.y)),
        DatePickerOutcome::Changed
    );
    assert_eq!(state.view_mode(), ViewMode::Year);
    render(&mut state);

    // 2019 in the second row.
    let cell = state.area_cells[5];
    assert_eq!(
        handle_mouse_events(&mut state, &click(cell.x, cell.y)),
        DatePickerOutcome::Selected
    );
    assert_eq!(state.selected_date(), d(2019, 3, 15));
    assert_eq!(state.view_mode(), ViewMode::Date);
    assert!(state.is_open());
    render(&mut state);

    let month = state.area_month;
    handle_mouse_events(&mut state, &click(month.x, month.y));
    assert_eq!(state.view_mode(), ViewMode::Month);
    render(&mut state);

    let cell = state.area_cells[11];
    handle_mouse_events(&mut state, &click(cell.x, cell.y));
    assert_eq!(state.selected_date(), d(2019, 12, 1));
    assert_eq!(state.view_mode(), ViewMode::Date);
    render(&mut state);

    let today = state.area_today;
    assert_eq!(
        handle_mouse_events(&mut state, &click(today.x, today.y)),
        DatePickerOutcome::Selected
    );
    assert_eq!(state.selected_date(), d(2024, 3, 15));
}

#[test]
fn test_hover_scroll() {
    let mut state = state();
    state.picker.toggle_open();
    render(&mut state);

    let r = handle_mouse_events(&mut state, &mouse(MouseEventKind::Moved, 18, 4));
    assert_eq!(r, DatePickerOutcome::Changed);
    assert_eq!(state.hover, Some(4));
    let r = handle_mouse_events(&mut state, &mouse(MouseEventKind::Moved, 19, 4));
    assert_eq!(r, DatePickerOutcome::Continue);

    let r = handle_mouse_events(&mut state, &mouse(MouseEventKind::ScrollDown, 10, 5));
    assert_eq!(r, DatePickerOutcome::Selected);
    assert_eq!(state.selected_date(), d(2024, 4, 15));
    let r = handle_mouse_events(&mut state, &mouse(MouseEventKind::ScrollUp, 10, 5));
    assert_eq!(r, DatePickerOutcome::Selected);
    assert_eq!(state.selected_date(), d(2024, 3, 15));

    // outside the popup
    let r = handle_mouse_events(&mut state, &mouse(MouseEventKind::ScrollUp, 10, 20));
    assert_eq!(r, DatePickerOutcome::Continue);
}

#[test]
fn test_activate_cell() {
    let mut state = state();
    state.picker.toggle_open();
    assert_eq!(state.activate_cell(0), DatePickerOutcome::Continue);
    assert_eq!(state.activate_cell(100), DatePickerOutcome::Continue);
    assert_eq!(state.activate_cell(4 + 19), DatePickerOutcome::Selected);
    assert_eq!(state.selected_date(), d(2024, 3, 20));
}

#[test]
fn test_relocate() {
    let mut state = state();
    state.picker.toggle_open();
    render(&mut state);
    state.relocate((5, 2), Rect::new(0, 0, 100, 100));
    assert_eq!(state.area_field, Rect::new(5, 2, 30, 1));
    assert_eq!(state.area_cells[4], Rect::new(22, 6, 4, 1));
}

#[test]
fn test_clone() {
    let mut state = DatePickerState::named("picker");
    state.picker.toggle_open();
    let clone = state.clone();
    assert_eq!(clone.focus.name(), state.focus.name());
    assert!(clone.is_open());
    let _ = DatePicker::new().width();
    assert!(DatePicker::new().height() >= 11);
}
