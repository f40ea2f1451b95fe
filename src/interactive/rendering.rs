//! TUI rendering with ratatui
//!
//! Board, candidates, recommendations and letter keyboard for the assistant.

use super::app::{App, MessageStyle};
use crate::core::Status;
use crate::solver::LetterStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and candidates
            Constraint::Percentage(50), // Recommendations and letters
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn letter_style(status: Status) -> Style {
    match status {
        Status::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Status::Present => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Status::Absent | Status::Unknown => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

fn known_letter_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => letter_style(Status::Correct),
        LetterStatus::Present => letter_style(Status::Present),
        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
        LetterStatus::Unused => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

/// One tile per letter, like the game board
fn tiles(letters: impl IntoIterator<Item = (char, Status)>) -> Vec<Span<'static>> {
    letters
        .into_iter()
        .flat_map(|(c, status)| {
            [
                Span::styled(format!(" {} ", c.to_ascii_uppercase()), letter_style(status)),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT - Interactive Mode")
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

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Length(3),      // Narrowing gauge
            Constraint::Min(4),         // Candidates
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_narrowing(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .guesses
        .iter()
        .map(|guess| {
            Line::from(tiles(
                guess.letters().iter().map(|l| (l.as_char(), l.status)),
            ))
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_narrowing(f: &mut Frame, app: &App, area: Rect) {
    let total = app.assistant.dictionary().len();
    let remaining = app.analysis.candidates.len();
    let eliminated_pct = if total == 0 {
        0
    } else {
        ((total - remaining) * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining}/{total} words remain"));
    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = &app.analysis.candidates;
    // Leave room for the borders
    let visible = usize::from(area.height.saturating_sub(2));

    let items: Vec<ListItem> = if candidates.is_empty() {
        vec![ListItem::new("No word matches every guess").style(Style::default().fg(Color::Red))]
    } else {
        let mut items: Vec<ListItem> = candidates
            .iter()
            .take(visible.saturating_sub(1).max(1))
            .map(|w| ListItem::new(format!("  {}", w.text().to_uppercase())))
            .collect();
        if candidates.len() > items.len() {
            items.push(
                ListItem::new(format!("  … and {} more", candidates.len() - items.len()))
                    .style(Style::default().fg(Color::DarkGray)),
            );
        }
        items
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Recommendations
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_recommendations(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_recommendations(f: &mut Frame, app: &App, area: Rect) {
    let recommendations = &app.analysis.recommendations;

    let items: Vec<ListItem> = if recommendations.is_empty() {
        vec![ListItem::new("No suggestion available").style(Style::default().fg(Color::Yellow))]
    } else {
        recommendations
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let (prefix, style) = if r.is_candidate {
                    ("🟢", Style::default().fg(Color::Green))
                } else {
                    ("⚪", Style::default().fg(Color::White))
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:>2}. ", i + 1)),
                    Span::raw(prefix),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:<8}", r.word.text().to_uppercase()),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("{:>4}", r.score), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Recommended (🟢 = could be the answer) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let stat = app.analysis.stats.get(b);
                    [
                        Span::styled(
                            char::from(b.to_ascii_uppercase()).to_string(),
                            known_letter_style(stat.status),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.assistant.rules();
    let title = format!(
        " Guess ('{}' = green, '{}' = yellow) | Enter: submit ",
        rules.correct_marker(),
        rules.present_marker()
    );

    let mut spans = vec![Span::styled(
        format!("{:<16}", app.input_buffer),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(tiles(app.input_preview()));

    let input = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Guesses: {} | Candidates: {} | Esc: Quit | Ctrl-U: Undo | Ctrl-N: New Game",
        app.guesses.len(),
        app.analysis.candidates.len()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
