//! TUI rendering with ratatui
//!
//! Draws the board, the message log and the status bar.

use super::app::{App, MessageStyle};
use crate::core::{CellColor, GuessFeedback};
use crate::game::RoundState;
use crate::storage::KeyValueStore;
use crate::wordlists::Dictionary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Left margin inside the board block
const BOARD_MARGIN: u16 = 2;
/// Columns per board cell: a three-wide tile and a gap
const CELL_WIDTH: u16 = 4;

struct Areas {
    header: Rect,
    board: Rect,
    messages: Rect,
    banner: Rect,
    status: Rect,
}

fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(3), // Round end / input hint
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    Areas {
        header: chunks[0],
        board: main_chunks[0],
        messages: main_chunks[1],
        banner: chunks[2],
        status: chunks[3],
    }
}

/// Main UI rendering function
pub fn ui<D: Dictionary + ?Sized, S: KeyValueStore>(f: &mut Frame, app: &App<'_, D, S>) {
    let areas = split(f.area());

    render_header(f, app, areas.header);
    render_board(f, app, areas.board);
    render_messages(f, app, areas.messages);
    render_banner(f, app, areas.banner);
    render_status(f, app, areas.status);
}

/// Submitted cell under screen position `(column, row)`, as `(row, position)`
///
/// `screen` is the whole terminal area the UI was drawn into.
#[must_use]
pub fn cell_at(
    screen: Rect,
    rows: usize,
    width: usize,
    column: u16,
    row: u16,
) -> Option<(usize, usize)> {
    let board = split(screen).board;
    let left = board.x + 1 + BOARD_MARGIN;
    let top = board.y + 1;
    if column < left || row < top || column >= board.right().saturating_sub(1) {
        return None;
    }

    // Every board row is followed by a blank spacer line
    let line = row - top;
    let offset = column - left;
    if line % 2 == 1 || offset % CELL_WIDTH == CELL_WIDTH - 1 {
        return None;
    }

    let cell = (usize::from(line / 2), usize::from(offset / CELL_WIDTH));
    (cell.0 < rows && cell.1 < width).then_some(cell)
}

fn render_header<D: Dictionary + ?Sized, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, D, S>,
    area: Rect,
) {
    let header = Paragraph::new(format!("🟩 WORDLE - Day {}", app.session.day()))
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

/// Background and foreground for one cell color
#[must_use]
pub fn cell_style(color: CellColor) -> Style {
    match color {
        CellColor::Unknown => Style::default().fg(Color::Black).bg(Color::Gray),
        CellColor::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellColor::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellColor::Correct => Style::default().fg(Color::Black).bg(Color::Green),
    }
    .add_modifier(Modifier::BOLD)
}

fn feedback_spans(feedback: GuessFeedback) -> Vec<Span<'static>> {
    vec![
        Span::raw("  "),
        Span::styled(
            format!("{}●", feedback.correct),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{}○", feedback.wrong_position),
            Style::default().fg(Color::Yellow),
        ),
    ]
}

fn margin() -> Span<'static> {
    Span::raw(" ".repeat(usize::from(BOARD_MARGIN)))
}

fn board_lines<D: Dictionary + ?Sized, S: KeyValueStore>(app: &App<'_, D, S>) -> Vec<Line<'static>> {
    let session = &app.session;
    let width = session.solution_length();
    let mut lines = Vec::with_capacity(session.max_rounds() * 2);

    for (row, guess) in session.submitted_guesses().iter().enumerate() {
        let mut spans = Vec::with_capacity(width * 2 + 5);
        spans.push(margin());
        for (position, letter) in guess.chars().enumerate() {
            let mut style = cell_style(session.display_colors()[row][position]);
            if app.cursor == Some((row, position)) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        spans.extend(feedback_spans(session.guess_feedback()[row]));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut remaining = session.max_rounds() - session.submitted_guesses().len();
    if remaining > 0 && session.state() == RoundState::Playing {
        let typing = if session.invalid_word() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        let mut letters = session.current_guess().chars();
        let spans: Vec<Span> = std::iter::once(margin())
            .chain((0..width).flat_map(|_| {
                let cell = letters.next().map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |c| Span::styled(format!(" {} ", c.to_ascii_uppercase()), typing),
                );
                [cell, Span::raw(" ")]
            }))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        remaining -= 1;
    }

    for _ in 0..remaining {
        let spans: Vec<Span> = std::iter::once(margin())
            .chain((0..width).flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            }))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<D: Dictionary + ?Sized, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, D, S>,
    area: Rect,
) {
    let title = format!(
        " Board {}/{} ",
        app.session.submitted_guesses().len(),
        app.session.max_rounds()
    );
    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<D: Dictionary + ?Sized, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, D, S>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner<D: Dictionary + ?Sized, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, D, S>,
    area: Rect,
) {
    let (title, content, color) = if app.show_round_end {
        match app.session.state() {
            RoundState::Won => (
                " 🎉 SOLVED! 🎉 ",
                format!(
                    "Solved in {} | Esc to quit",
                    app.session.submitted_guesses().len()
                ),
                Color::Green,
            ),
            RoundState::Lost => (
                " Out of guesses ",
                format!(
                    "The answer was {} | Esc to quit",
                    app.session
                        .revealed_solution()
                        .map(|w| w.text().to_uppercase())
                        .unwrap_or_default()
                ),
                Color::Red,
            ),
            RoundState::Playing => (" Playing ", String::new(), Color::Yellow),
        }
    } else if app.session.invalid_word() {
        (" Not in word list ", String::new(), Color::Red)
    } else {
        (
            " Type a guess | Enter: Submit | Backspace: Delete ",
            String::new(),
            Color::Yellow,
        )
    };

    let banner = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(banner, area);
}

fn render_status<D: Dictionary + ?Sized, S: KeyValueStore>(
    f: &mut Frame,
    app: &App<'_, D, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state_text = match app.session.state() {
        RoundState::Playing => "Round: Playing",
        RoundState::Won => "Round: Won",
        RoundState::Lost => "Round: Lost",
    };
    f.render_widget(
        Paragraph::new(state_text).alignment(Alignment::Center),
        chunks[0],
    );

    let cursor_text = app.cursor.map_or_else(
        || "Cell: none".to_string(),
        |(row, position)| format!("Cell: row {} col {}", row + 1, position + 1),
    );
    f.render_widget(
        Paragraph::new(cursor_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.state() == RoundState::Playing {
        "Esc: Quit | ←↑↓→: Select cell | Space: Cycle color | Ctrl-L: Clear colors"
    } else {
        "Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
