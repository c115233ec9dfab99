use crate::mini_salsa::{run_ui, setup_logging, MiniSalsaState};
use chrono::Locale;
use rat_datepicker::date_picker::{DatePicker, DatePickerState, DatePickerStyle};
use rat_datepicker::event::{DatePickerOutcome, HandleEvent, Outcome, Regular};
use rat_datepicker::format::DateFormat;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};

mod mini_salsa;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut state = State {
        picker: DatePickerState::named("picker"),
        format: DateFormat::new("%a, %d. %B %Y")?,
        loc: Locale::POSIX,
    };
    state.picker.focus.set(true);

    run_ui("datepicker1", event, render, &mut state)
}

struct State {
    picker: DatePickerState,
    format: DateFormat,
    loc: Locale,
}

fn styles() -> DatePickerStyle {
    DatePickerStyle {
        style: Style::new().fg(Color::White).bg(Color::Rgb(32, 32, 40)),
        focus: Some(Style::new().black().on_cyan()),
        popup_block: Some(Block::bordered().border_type(BorderType::Rounded)),
        title: Some(Style::new().bold()),
        button: Some(Style::new().fg(Color::Cyan)),
        weekday: Some(Style::new().fg(Color::Gray).italic()),
        select: Some(Style::new().black().on_cyan()),
        today: Some(Style::new().fg(Color::Yellow).underlined()),
        hover: Some(Style::new().on_dark_gray()),
        ..Default::default()
    }
}

fn render(
    buf: &mut Buffer,
    area: Rect,
    _ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let picker = DatePicker::new()
        .styles(styles())
        .locale(state.loc)
        .format(state.format.clone());

    let l0 = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Length(picker.width() + 8),
        Constraint::Fill(1),
    ])
    .split(area);
    let l1 = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(picker.height()),
        Constraint::Fill(1),
    ])
    .split(l0[1]);

    picker.render(l1[1], buf, &mut state.picker);

    let l2 = Layout::vertical([Constraint::Length(1); 4]).split(l0[2]);
    Line::from(format!("selected {}", state.picker.selected_date())).render(l2[0], buf);
    Line::from(format!("view {:?}", state.picker.view_mode())).render(l2[1], buf);
    Line::from("F4 open | PgUp/PgDn | Ctrl+Home today | m/y views").render(l2[2], buf);
    Line::from("F2 toggle locale").render(l2[3], buf);

    Ok(())
}

fn event(
    event: &crossterm::event::Event,
    ctx: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    use rat_datepicker::event::ct_event;

    if let ct_event!(keycode press F(2)) = event {
        state.loc = if state.loc == Locale::POSIX {
            Locale::de_DE
        } else {
            Locale::POSIX
        };
        ctx.status = format!("{:?}", state.loc);
        return Ok(Outcome::Changed);
    }

    Ok(match state.picker.handle(event, Regular) {
        DatePickerOutcome::Selected => {
            ctx.status = format!("selected {}", state.picker.selected_date());
            Outcome::Changed
        }
        r => r.into(),
    })
}
