use crate::_private::NonExhaustive;
use crate::clock::Clock;
use crate::date_picker::event::DatePickerOutcome;
use crate::date_picker::grid::{CellDescriptor, Grid, DAY_COLUMNS, DAY_ROWS_MAX, YEAR_ROWS};
use crate::date_picker::state::{PickerState, ViewMode};
use crate::date_picker::style::DatePickerStyle;
use crate::format::{month_label, title, year_label, DateFormat};
use crate::util::{block_size, fallback_underline_style, revert_style};
use chrono::{Locale, NaiveDate};
use rat_event::util::item_at;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use std::cmp::max;

const PREV: &str = " < ";
const NEXT: &str = " > ";
const TOGGLE: &str = " \u{25BE} ";
const TOGGLE_WIDTH: u16 = 3;
const TODAY: &str = " Go to Today ";

/// Date-picker widget.
///
/// Renders a one line display field with the selected date. When
/// the picker is open the day, month or year grid is drawn below
/// the field, using the rest of the area.
#[derive(Debug, Clone)]
pub struct DatePicker<'a> {
    style: Style,
    field_style: Option<Style>,
    focus_style: Option<Style>,
    popup_style: Option<Style>,
    popup_block: Option<Block<'a>>,
    title_style: Option<Style>,
    button_style: Option<Style>,
    weekday_style: Option<Style>,
    cell_style: Option<Style>,
    select_style: Option<Style>,
    today_style: Option<Style>,
    hover_style: Option<Style>,

    loc: Locale,
    format: DateFormat,
}

/// State & event-handling.
#[derive(Debug)]
pub struct DatePickerState {
    /// Complete area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Display field.
    /// __readonly__. renewed for each render.
    pub area_field: Rect,
    /// Toggle marker at the end of the field.
    /// __readonly__. renewed for each render.
    pub area_toggle: Rect,
    /// Popup area including the border. Empty when closed.
    /// __readonly__. renewed for each render.
    pub area_popup: Rect,
    /// Popup area inside the border.
    /// __readonly__. renewed for each render.
    pub inner_popup: Rect,
    /// Previous button.
    /// __readonly__. renewed for each render.
    pub area_prev: Rect,
    /// Next button.
    /// __readonly__. renewed for each render.
    pub area_next: Rect,
    /// Month selector button.
    /// __readonly__. renewed for each render.
    pub area_month: Rect,
    /// Year selector button.
    /// __readonly__. renewed for each render.
    pub area_year: Rect,
    /// Go to today button.
    /// __readonly__. renewed for each render.
    pub area_today: Rect,
    /// One area per cell of the rendered grid, same index as
    /// [Grid::cells]. Blank cells get an empty Rect.
    /// __readonly__. renewed for each render.
    pub area_cells: Vec<Rect>,

    /// The state machine.
    /// __read+write__
    pub picker: PickerState,
    /// Cell under the mouse.
    /// __read+write__
    pub hover: Option<usize>,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Default for DatePicker<'_> {
    fn default() -> Self {
        Self {
            style: Default::default(),
            field_style: None,
            focus_style: None,
            popup_style: None,
            popup_block: None,
            title_style: None,
            button_style: None,
            weekday_style: None,
            cell_style: None,
            select_style: None,
            today_style: None,
            hover_style: None,
            loc: Locale::POSIX,
            format: Default::default(),
        }
    }
}

impl<'a> DatePicker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all styles.
    #[inline]
    pub fn styles_opt(self, styles: Option<DatePickerStyle>) -> Self {
        if let Some(styles) = styles {
            self.styles(styles)
        } else {
            self
        }
    }

    /// Set all styles.
    pub fn styles(mut self, styles: DatePickerStyle) -> Self {
        self.style = styles.style;
        if styles.field.is_some() {
            self.field_style = styles.field;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.popup.is_some() {
            self.popup_style = styles.popup;
        }
        if let Some(block) = styles.popup_block {
            self.popup_block = Some(block);
        }
        if styles.title.is_some() {
            self.title_style = styles.title;
        }
        if styles.button.is_some() {
            self.button_style = styles.button;
        }
        if styles.weekday.is_some() {
            self.weekday_style = styles.weekday;
        }
        if styles.cell.is_some() {
            self.cell_style = styles.cell;
        }
        if styles.select.is_some() {
            self.select_style = styles.select;
        }
        if styles.today.is_some() {
            self.today_style = styles.today;
        }
        if styles.hover.is_some() {
            self.hover_style = styles.hover;
        }
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Style for the display field.
    #[inline]
    pub fn field_style(mut self, style: impl Into<Style>) -> Self {
        self.field_style = Some(style.into());
        self
    }

    /// Style for the display field when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Base style of the popup.
    #[inline]
    pub fn popup_style(mut self, style: impl Into<Style>) -> Self {
        self.popup_style = Some(style.into());
        self
    }

    /// Border for the popup. The view title is added to it.
    #[inline]
    pub fn popup_block(mut self, block: Block<'a>) -> Self {
        self.popup_block = Some(block);
        self
    }

    /// Style for the popup title.
    #[inline]
    pub fn title_style(mut self, style: impl Into<Style>) -> Self {
        self.title_style = Some(style.into());
        self
    }

    /// Style for all buttons.
    #[inline]
    pub fn button_style(mut self, style: impl Into<Style>) -> Self {
        self.button_style = Some(style.into());
        self
    }

    /// Style for the weekday headers.
    #[inline]
    pub fn weekday_style(mut self, style: impl Into<Style>) -> Self {
        self.weekday_style = Some(style.into());
        self
    }

    /// Default style for grid cells.
    #[inline]
    pub fn cell_style(mut self, style: impl Into<Style>) -> Self {
        self.cell_style = Some(style.into());
        self
    }

    /// Style for the selected cell.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Style for today.
    #[inline]
    pub fn today_style(mut self, style: impl Into<Style>) -> Self {
        self.today_style = Some(style.into());
        self
    }

    /// Style for the cell under the mouse.
    #[inline]
    pub fn hover_style(mut self, style: impl Into<Style>) -> Self {
        self.hover_style = Some(style.into());
        self
    }

    /// Locale for month-names, day-names.
    #[inline]
    pub fn locale(mut self, loc: Locale) -> Self {
        self.loc = loc;
        self.format = self.format.with_locale(loc);
        self
    }

    /// Format for the display field.
    #[inline]
    pub fn format(mut self, format: DateFormat) -> Self {
        self.format = format.with_locale(self.loc);
        self
    }

    /// Inherent width.
    pub fn width(&self) -> u16 {
        let grid = max(DAY_COLUMNS as u16 * 3, TODAY.len() as u16);
        grid + block_size(&self.popup_block_or_default()).width
    }

    /// Inherent height when open.
    pub fn height(&self) -> u16 {
        // field, header, weekdays, rows, footer
        let rows = max(DAY_ROWS_MAX + 1, YEAR_ROWS) as u16;
        1 + 1 + rows + 1 + block_size(&self.popup_block_or_default()).height
    }

    fn popup_block_or_default(&self) -> Option<Block<'a>> {
        Some(self.popup_block.clone().unwrap_or_else(Block::bordered))
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl<'a> StatefulWidgetRef for DatePicker<'a> {
    type State = DatePickerState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for &DatePicker<'_> {
    type State = DatePickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for DatePicker<'_> {
    type State = DatePickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &DatePicker<'_>, area: Rect, buf: &mut Buffer, state: &mut DatePickerState) {
    state.clear_areas();
    state.area = area;
    if area.is_empty() {
        return;
    }

    let style = widget.style;
    let field_style = widget.field_style.unwrap_or(style);
    let focus_style = widget.focus_style.unwrap_or(revert_style(field_style));

    // display field
    state.area_field = Rect::new(area.x, area.y, area.width, 1);
    state.area_toggle = Rect::new(
        area.right().saturating_sub(TOGGLE_WIDTH),
        area.y,
        TOGGLE_WIDTH,
        1,
    )
    .intersection(state.area_field);

    let field_style = if state.is_focused() {
        focus_style
    } else {
        field_style
    };
    buf.set_style(state.area_field, field_style);
    Line::from(widget.format.format(state.picker.selected_date()))
        .render(state.area_field, buf);
    Line::from(TOGGLE).render(state.area_toggle, buf);

    if !state.picker.is_open() {
        return;
    }

    let popup_style = widget.popup_style.unwrap_or(style);
    let title_style = widget.title_style.unwrap_or(popup_style);
    let button_style = widget.button_style.unwrap_or(popup_style);
    let weekday_style = widget.weekday_style.unwrap_or(popup_style);
    let cell_style = widget.cell_style.unwrap_or(popup_style);
    let select_style = widget.select_style.unwrap_or(revert_style(popup_style));
    let today_style = widget
        .today_style
        .unwrap_or(fallback_underline_style(popup_style));
    let hover_style = widget.hover_style.unwrap_or(revert_style(cell_style));

    state.area_popup = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    let block = widget
        .popup_block_or_default()
        .unwrap_or_default()
        .style(popup_style)
        .title(title(&state.picker, widget.loc))
        .title_style(title_style)
        .title_alignment(Alignment::Center);
    state.inner_popup = block.inner(state.area_popup);
    block.render(state.area_popup, buf);

    let inner = state.inner_popup;
    if inner.is_empty() {
        return;
    }
    let mut y = inner.y;

    // header
    state.area_prev = Rect::new(inner.x, y, PREV.len() as u16, 1).intersection(inner);
    state.area_next = Rect::new(
        inner.right().saturating_sub(NEXT.len() as u16),
        y,
        NEXT.len() as u16,
        1,
    )
    .intersection(inner);
    render_button(PREV, state.area_prev, button_style, buf);
    render_button(NEXT, state.area_next, button_style, buf);

    let month = format!(" {} ", month_label(&state.picker, widget.loc));
    let year = format!(" {} ", year_label(&state.picker));
    let month_width = Line::from(month.as_str()).width() as u16;
    let year_width = Line::from(year.as_str()).width() as u16;
    let start = inner.x + inner.width.saturating_sub(month_width + 1 + year_width) / 2;
    state.area_month = Rect::new(start, y, month_width, 1).intersection(inner);
    state.area_year = Rect::new(start + month_width + 1, y, year_width, 1).intersection(inner);
    render_button(&month, state.area_month, button_style, buf);
    render_button(&year, state.area_year, button_style, buf);
    y += 1;

    // grid
    let mut grid = state.picker.grid_localized(widget.loc);
    grid.set_hovered(state.hover);
    let cell_width = inner.width / max(grid.columns, 1) as u16;

    if !grid.headers.is_empty() {
        buf.set_style(Rect::new(inner.x, y, inner.width, 1).intersection(inner), weekday_style);
        for (col, header) in grid.headers.iter().enumerate() {
            let area = cell_area(inner, col, y, cell_width);
            Line::from(header.as_str())
                .alignment(Alignment::Center)
                .render(area, buf);
        }
        y += 1;
    }

    render_grid(&grid, inner, y, cell_width, buf, state, |cell| {
        let mut style = cell_style;
        if cell.today {
            style = style.patch(today_style);
        }
        if cell.selected {
            style = style.patch(select_style);
        }
        if cell.hovered {
            style = style.patch(hover_style);
        }
        style
    });

    // footer
    let today_width = TODAY.len() as u16;
    state.area_today = Rect::new(
        inner.right().saturating_sub(today_width),
        inner.bottom().saturating_sub(1),
        today_width,
        1,
    )
    .intersection(inner);
    render_button(TODAY, state.area_today, button_style, buf);
}

fn render_grid(
    grid: &Grid,
    inner: Rect,
    y: u16,
    cell_width: u16,
    buf: &mut Buffer,
    state: &mut DatePickerState,
    cell_style: impl Fn(&CellDescriptor) -> Style,
) {
    state.area_cells.reserve(grid.cells.len());
    for (row, cells) in grid.row_iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.blank {
                state.area_cells.push(Rect::default());
                continue;
            }
            let area = cell_area(inner, col, y + row as u16, cell_width);
            state.area_cells.push(area);
            Line::from(cell.label.as_str())
                .alignment(Alignment::Center)
                .style(cell_style(cell))
                .render(area, buf);
        }
    }
}

fn cell_area(inner: Rect, col: usize, y: u16, cell_width: u16) -> Rect {
    Rect::new(inner.x + col as u16 * cell_width, y, cell_width, 1).intersection(inner)
}

fn render_button(text: &str, area: Rect, style: Style, buf: &mut Buffer) {
    buf.set_style(area, style);
    Line::from(text).render(area, buf);
}

impl Clone for DatePickerState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            area_field: self.area_field,
            area_toggle: self.area_toggle,
            area_popup: self.area_popup,
            inner_popup: self.inner_popup,
            area_prev: self.area_prev,
            area_next: self.area_next,
            area_month: self.area_month,
            area_year: self.area_year,
            area_today: self.area_today,
            area_cells: self.area_cells.clone(),
            picker: self.picker.clone(),
            hover: self.hover,
            focus: FocusFlag::named(self.focus.name()),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            area_field: Default::default(),
            area_toggle: Default::default(),
            area_popup: Default::default(),
            inner_popup: Default::default(),
            area_prev: Default::default(),
            area_next: Default::default(),
            area_month: Default::default(),
            area_year: Default::default(),
            area_today: Default::default(),
            area_cells: Default::default(),
            picker: Default::default(),
            hover: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for DatePickerState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for DatePickerState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.area_field = relocate_area(self.area_field, shift, clip);
        self.area_toggle = relocate_area(self.area_toggle, shift, clip);
        self.area_popup = relocate_area(self.area_popup, shift, clip);
        self.inner_popup = relocate_area(self.inner_popup, shift, clip);
        self.area_prev = relocate_area(self.area_prev, shift, clip);
        self.area_next = relocate_area(self.area_next, shift, clip);
        self.area_month = relocate_area(self.area_month, shift, clip);
        self.area_year = relocate_area(self.area_year, shift, clip);
        self.area_today = relocate_area(self.area_today, shift, clip);
        relocate_areas(&mut self.area_cells, shift, clip);
    }
}

impl DatePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Default::default()
        }
    }

    /// New state with today from the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            picker: PickerState::with_clock(clock),
            ..Default::default()
        }
    }

    /// Reset all areas.
    pub fn clear_areas(&mut self) {
        self.area = Rect::default();
        self.area_field = Rect::default();
        self.area_toggle = Rect::default();
        self.area_popup = Rect::default();
        self.inner_popup = Rect::default();
        self.area_prev = Rect::default();
        self.area_next = Rect::default();
        self.area_month = Rect::default();
        self.area_year = Rect::default();
        self.area_today = Rect::default();
        self.area_cells.clear();
    }

    /// Selected date.
    pub fn selected_date(&self) -> NaiveDate {
        self.picker.selected_date()
    }

    /// Set the selected date.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> DatePickerOutcome {
        self.picker.set_selected_date(date)
    }

    /// Popup is visible.
    pub fn is_open(&self) -> bool {
        self.picker.is_open()
    }

    /// Active view.
    pub fn view_mode(&self) -> ViewMode {
        self.picker.view_mode()
    }

    /// Activate the n-th cell of the current grid.
    pub fn activate_cell(&mut self, n: usize) -> DatePickerOutcome {
        let grid = self.picker.grid();
        let r = match grid.cells.get(n) {
            Some(cell) => self.picker.activate(cell),
            None => DatePickerOutcome::Continue,
        };
        if r.is_consumed() {
            self.hover = None;
        }
        r
    }

    fn click(&mut self, x: u16, y: u16) -> DatePickerOutcome {
        let pos = Position::new(x, y);
        if self.area_field.contains(pos) {
            self.hover = None;
            return self.picker.toggle_open();
        }
        if !self.picker.is_open() {
            return DatePickerOutcome::Continue;
        }

        if self.area_prev.contains(pos) {
            self.picker.prev()
        } else if self.area_next.contains(pos) {
            self.picker.next()
        } else if self.area_month.contains(pos) {
            self.hover = None;
            self.picker.open_month_view()
        } else if self.area_year.contains(pos) {
            self.hover = None;
            self.picker.open_year_view()
        } else if self.area_today.contains(pos) {
            self.picker.go_to_today()
        } else if let Some(n) = item_at(&self.area_cells, x, y) {
            self.activate_cell(n)
        } else if self.area_popup.contains(pos) {
            DatePickerOutcome::Unchanged
        } else {
            DatePickerOutcome::Continue
        }
    }

    fn hover_at(&mut self, x: u16, y: u16) -> DatePickerOutcome {
        let hover = if self.picker.is_open() {
            item_at(&self.area_cells, x, y)
        } else {
            None
        };
        if hover != self.hover {
            self.hover = hover;
            DatePickerOutcome::Changed
        } else {
            DatePickerOutcome::Continue
        }
    }
}

impl HandleEvent<crossterm::event::Event, Regular, DatePickerOutcome> for DatePickerState {
    fn handle(
        &mut self,
        event: &crossterm::event::Event,
        _qualifier: Regular,
    ) -> DatePickerOutcome {
        let r = if self.is_focused() {
            let open = self.picker.is_open();
            match event {
                ct_event!(keycode press F(4)) => self.picker.toggle_open(),
                ct_event!(keycode press Enter) | ct_event!(key press ' ') if !open => {
                    self.picker.toggle_open()
                }
                ct_event!(keycode press Esc) if open => self.picker.close(),
                ct_event!(keycode press CONTROL-Home) => self.picker.go_to_today(),
                ct_event!(keycode press PageUp) if open => self.picker.prev(),
                ct_event!(keycode press PageDown) if open => self.picker.next(),
                ct_event!(key press 'm') if open => self.picker.open_month_view(),
                ct_event!(key press 'y') if open => self.picker.open_year_view(),
                _ => DatePickerOutcome::Continue,
            }
        } else {
            DatePickerOutcome::Continue
        };

        r.or_else(|| self.handle(event, MouseOnly))
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, DatePickerOutcome> for DatePickerState {
    fn handle(
        &mut self,
        event: &crossterm::event::Event,
        _qualifier: MouseOnly,
    ) -> DatePickerOutcome {
        match event {
            ct_event!(mouse down Left for x, y) => self.click(*x, *y),
            ct_event!(mouse moved for x, y) => self.hover_at(*x, *y),
            ct_event!(scroll up for x, y)
                if self.picker.is_open() && self.area_popup.contains(Position::new(*x, *y)) =>
            {
                self.picker.prev()
            }
            ct_event!(scroll down for x, y)
                if self.picker.is_open() && self.area_popup.contains(Position::new(*x, *y)) =>
            {
                self.picker.next()
            }
            _ => DatePickerOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut DatePickerState,
    focus: bool,
    event: &crossterm::event::Event,
) -> DatePickerOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut DatePickerState,
    event: &crossterm::event::Event,
) -> DatePickerOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}
