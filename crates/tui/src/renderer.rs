use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_core::{HistoryAction, TimeTravel};
use rewind_demos::move_box::{BoxAction, BoxState, GRID_MAX};

fn key_to_action(code: KeyCode) -> Option<HistoryAction<BoxAction>> {
    match code {
        KeyCode::Up => Some(HistoryAction::Apply(BoxAction::Move { dx: 0, dy: -1 })),
        KeyCode::Down => Some(HistoryAction::Apply(BoxAction::Move { dx: 0, dy: 1 })),
        KeyCode::Left => Some(HistoryAction::Apply(BoxAction::Move { dx: -1, dy: 0 })),
        KeyCode::Right => Some(HistoryAction::Apply(BoxAction::Move { dx: 1, dy: 0 })),
        KeyCode::Char('o') => Some(HistoryAction::Apply(BoxAction::Reset)),
        KeyCode::Char('u') => Some(HistoryAction::Undo),
        KeyCode::Char('r') => Some(HistoryAction::Redo),
        KeyCode::Char('0') => Some(HistoryAction::Reset),
        _ => None,
    }
}

/// The 10×10 grid with the box at its current position.
fn grid_lines(state: &BoxState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(GRID_MAX as usize + 1);
    for y in 0..=GRID_MAX {
        let mut spans = Vec::with_capacity(GRID_MAX as usize + 1);
        for x in 0..=GRID_MAX {
            if x == state.x && y == state.y {
                spans.push(Span::styled("[]", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::styled(" ·", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub fn run_tui(time_travel: &mut TimeTravel<BoxState, BoxAction>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        let timeline = time_travel.timeline();
        let state = *timeline.present();

        // The original demo prints the record with JSON.stringify; the
        // history panel does the same.
        let past_json = serde_json::to_string(timeline.past())?;
        let present_json = serde_json::to_string(timeline.present())?;
        let future_json = serde_json::to_string(timeline.future())?;
        let past_len = timeline.past().len();
        let future_len = timeline.future().len();

        terminal.draw(|frame| {
            let area = frame.area();

            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " rewind — box at ({}, {}) | arrows move | u undo ({past_len}) | r redo \
                     ({future_len}) | 0 rewind | o origin | q quit ",
                    state.x, state.y,
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let body = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let [grid_area, history_area] =
                Layout::vertical([Constraint::Length(12), Constraint::Min(5)]).areas(body);

            let grid = Paragraph::new(grid_lines(&state))
                .block(Block::default().borders(Borders::ALL).title(" grid "));
            frame.render_widget(grid, grid_area);

            let history = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("past:    ", Style::default().fg(Color::Gray)),
                    Span::raw(past_json),
                ]),
                Line::from(vec![
                    Span::styled("present: ", Style::default().fg(Color::Green)),
                    Span::raw(present_json),
                ]),
                Line::from(vec![
                    Span::styled("future:  ", Style::default().fg(Color::Gray)),
                    Span::raw(future_json),
                ]),
            ])
            .block(Block::default().borders(Borders::ALL).title(" timeline "));
            frame.render_widget(history, history_area);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    code => {
                        if let Some(action) = key_to_action(code) {
                            time_travel.dispatch(action);
                        }
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
