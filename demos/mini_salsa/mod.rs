#![allow(dead_code)]

use anyhow::anyhow;
use crossterm::cursor::{DisableBlinking, SetCursorStyle};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rat_datepicker::event::{ct_event, Outcome};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use std::fs;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Shared state of the demo harness.
#[derive(Debug, Default)]
pub struct MiniSalsaState {
    pub name: String,
    pub frame: usize,
    pub status: String,
    pub quit: bool,
}

impl MiniSalsaState {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

pub fn run_ui<State>(
    name: &str,
    handle: fn(&Event, &mut MiniSalsaState, &mut State) -> Result<Outcome, anyhow::Error>,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut istate = MiniSalsaState::new(name);
    repaint_ui(&mut terminal, repaint, &mut istate, state)?;

    let r = 'l: loop {
        let o = match crossterm::event::poll(Duration::from_millis(10)) {
            Ok(true) => {
                let event = match crossterm::event::read() {
                    Ok(v) => v,
                    Err(e) => break 'l Err(anyhow!(e)),
                };
                match handle_event(handle, event, &mut istate, state) {
                    Ok(v) => v,
                    Err(e) => break 'l Err(e),
                }
            }
            Ok(false) => continue,
            Err(e) => {
                istate.status = format!("{}", e);
                Outcome::Changed
            }
        };

        if istate.quit {
            break 'l Ok(());
        }

        if o == Outcome::Changed {
            if let Err(e) = repaint_ui(&mut terminal, repaint, &mut istate, state) {
                break 'l Err(e);
            }
        }
    };

    stdout().execute(DisableMouseCapture)?;
    stdout().execute(SetCursorStyle::DefaultUserShape)?;
    stdout().execute(DisableBlinking)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    r
}

fn repaint_ui<State>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let mut res = Ok(());
    terminal.draw(|frame| {
        res = repaint_tui(frame, repaint, istate, state);
    })?;
    res
}

fn repaint_tui<State>(
    frame: &mut Frame<'_>,
    repaint: fn(&mut Buffer, Rect, &mut MiniSalsaState, &mut State) -> Result<(), anyhow::Error>,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let area = frame.area();
    let l = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

    repaint(frame.buffer_mut(), l[0], istate, state)?;

    istate.frame = istate.frame.saturating_add(1);
    Line::from(format!(
        "{} | {} | F12 quit | frame {}",
        istate.name, istate.status, istate.frame
    ))
    .style(Style::new().black().on_white())
    .render(l[1], frame.buffer_mut());

    Ok(())
}

fn handle_event<State>(
    handle: fn(&Event, &mut MiniSalsaState, &mut State) -> Result<Outcome, anyhow::Error>,
    event: Event,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    match &event {
        ct_event!(resized) => return Ok(Outcome::Changed),
        ct_event!(keycode press F(12)) => {
            istate.quit = true;
            return Ok(Outcome::Changed);
        }
        _ => {}
    }

    handle(&event, istate, state)
}

pub fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("datepicker.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
