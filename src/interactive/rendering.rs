//! TUI rendering with ratatui
//!
//! Layout for watch mode: the stored board on the left, the live
//! attempt and the alert block on the right.

use super::app::App;
use crate::core::{Cell, Judgement, WORD_LENGTH};
use crate::output::formatters::attempt_slots;
use crate::state::StateStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StateStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board left, attempt + alerts right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_attempt(f, app, right_chunks[0]);
    render_alerts(f, app, right_chunks[1]);

    render_status(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🛡 WORDLE GUARD - Live Guess Check")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let style = match cell.judgement() {
        Judgement::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Judgement::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Judgement::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    Span::styled(format!(" {} ", cell.letter() as char), style)
}

fn render_board<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = match app.monitor.session().grid() {
        Some(grid) => grid
            .rows()
            .iter()
            .map(|row| match row {
                Some(cells) => {
                    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
                    for &cell in cells {
                        spans.push(cell_span(cell));
                        spans.push(Span::raw(" "));
                    }
                    Line::from(spans)
                }
                None => Line::from(Span::styled(
                    " ·   ·   ·   ·   · ",
                    Style::default().fg(Color::DarkGray),
                )),
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "No stored state",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_attempt<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let attempt = app.monitor.session().attempt();
    let slots = attempt_slots(attempt);

    let spaced: String = slots.chars().flat_map(|c| [c, ' ']).collect();
    let content = vec![
        Line::default(),
        Line::from(Span::styled(
            spaced,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_alerts<S: StateStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    // Empty report renders an empty panel, mirroring a hidden alert block
    let items: Vec<ListItem> = app
        .violations
        .iter()
        .map(|violation| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", violation.tag()),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(violation.message, Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Alerts ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let status = Paragraph::new("type letters · Backspace delete · Ctrl-R clear · Esc quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
