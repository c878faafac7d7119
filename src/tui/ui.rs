//! UI rendering for the focus view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::features::pomodoro::Mode;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, timer, companion, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Timer
            Constraint::Length(4), // Companion bubble
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_companion(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(" studypal - {}'s focus session ", app.user_name);

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown, phase name, cycle dots, and progress gauge.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = &app.controller;

    let phase_color = match controller.mode() {
        Mode::Focus => Color::Red,
        Mode::ShortBreak => Color::Green,
        Mode::LongBreak => Color::Blue,
    };

    let state = if controller.is_running() {
        "running"
    } else {
        "paused"
    };

    // One dot per focus phase in the cycle, filled as they complete
    let dots: String = (0..controller.cycles_until_long_break())
        .map(|i| {
            if i < controller.focus_cycles_completed() {
                '●'
            } else {
                '○'
            }
        })
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            controller.format_remaining(),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} ({state})", controller.mode().display_name()),
            Style::default().fg(phase_color),
        )),
        Line::from(Span::styled(dots, Style::default().fg(Color::Yellow))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(phase_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        parts[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color))
        .ratio(app.controller.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, parts[1]);
}

/// Render the companion and its speech bubble.
fn render_companion(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let glyph = app.character.glyph();

    let line = app.bubble.as_ref().map_or_else(
        || Line::from(Span::styled(glyph, Style::default().fg(Color::Magenta))),
        |bubble| {
            Line::from(vec![
                Span::styled(glyph, Style::default().fg(Color::Magenta)),
                Span::raw("  "),
                Span::styled(
                    bubble.text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        },
    );

    let companion = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.character.display_name()))
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(companion, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | f/s/l:phase | r:reset | c:chat | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
