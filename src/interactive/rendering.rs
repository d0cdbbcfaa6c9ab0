//! TUI rendering with ratatui

use super::app::{App, GRID_COLUMNS, Screen};
use crate::core::SolvedGroup;
use crate::output::formatters::{last_played, mistake_dots};
use crate::service::PuzzleService;
use crate::session::{LOADING_MESSAGE, SessionStatus, Snapshot};
use crate::store::ProfileStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const GROUP_COLORS: [Color; 4] = [
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightGreen,
];

/// Main UI rendering function
pub fn ui<P: PuzzleService, S: ProfileStore>(f: &mut Frame, app: &App<P, S>) {
    let snapshot = app.engine.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &snapshot, chunks[0]);

    match app.screen {
        Screen::Home => render_home(f, app, chunks[1]),
        Screen::Instructions => render_instructions(f, chunks[1]),
        Screen::Playing => render_playing(f, app, &snapshot, chunks[1]),
    }

    render_status(f, app, &snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "GRIDCONNECT",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score: {}", snapshot.score),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Streak: {}", snapshot.streak),
            Style::default().fg(Color::LightRed),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_home<P: PuzzleService, S: ProfileStore>(f: &mut Frame, app: &App<P, S>, area: Rect) {
    let profile = app.engine.profile();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Find the connection. Solve the grid.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", profile.score)),
        Line::from(format!("Streak: {}", profile.streak)),
        Line::from(format!("Last win: {}", last_played(profile.last_played_date))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to play today's puzzle",
            Style::default().fg(Color::Green),
        )),
    ];

    let home = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Home ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(home, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("Find groups of four words that share a common theme."),
        Line::from("Select four words and submit them."),
        Line::from("Correct groups earn points. Fewer mistakes mean a bigger bonus!"),
        Line::from("You can make four mistakes before the game ends."),
        Line::from("Win every day to build up your streak."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter: Let's Go!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let instructions = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(instructions, area);
}

fn render_playing<P: PuzzleService, S: ProfileStore>(
    f: &mut Frame,
    app: &App<P, S>,
    snapshot: &Snapshot,
    area: Rect,
) {
    let solved_height = u16::try_from(snapshot.solved.len()).unwrap_or(u16::MAX) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Message
            Constraint::Length(solved_height), // Solved groups
            Constraint::Min(6),                // Grid
            Constraint::Length(3),             // Mistakes
        ])
        .split(area);

    render_message(f, app, snapshot, chunks[0]);
    render_solved(f, &snapshot.solved, chunks[1]);
    render_grid(f, app, snapshot, chunks[2]);
    render_mistakes(f, snapshot, chunks[3]);
}

fn render_message<P: PuzzleService, S: ProfileStore>(
    f: &mut Frame,
    app: &App<P, S>,
    snapshot: &Snapshot,
    area: Rect,
) {
    let (text, color) = if app.is_loading() {
        (LOADING_MESSAGE, Color::Gray)
    } else {
        let color = match snapshot.status {
            SessionStatus::Won => Color::Green,
            SessionStatus::Lost | SessionStatus::NotStarted => Color::Red,
            _ if app.is_shaking() => Color::Red,
            _ => Color::White,
        };
        (snapshot.message.as_str(), color)
    };

    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_solved(f: &mut Frame, solved: &[SolvedGroup], area: Rect) {
    let lines: Vec<Line> = solved
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let color = GROUP_COLORS[i % GROUP_COLORS.len()];
            Line::from(vec![
                Span::styled(
                    format!("{}: ", group.name()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(group.words().join(", "), Style::default().fg(color)),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Solved ").borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn render_grid<P: PuzzleService, S: ProfileStore>(
    f: &mut Frame,
    app: &App<P, S>,
    snapshot: &Snapshot,
    area: Rect,
) {
    let shaking = app.is_shaking();
    let border = if shaking { Color::Red } else { Color::Cyan };
    let block = Block::default()
        .title(if shaking { " Not a group! " } else { " Grid " })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if snapshot.words.is_empty() {
        return;
    }

    let rows = snapshot.words.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, words) in snapshot.words.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_areas[row]);

        for (col, word) in words.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            render_cell(
                f,
                word,
                snapshot.is_selected(word),
                index == app.cursor && snapshot.status == SessionStatus::InProgress,
                cells[col],
            );
        }
    }
}

fn render_cell(f: &mut Frame, word: &str, selected: bool, focused: bool, area: Rect) {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(word.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .border_style(border),
        );
    f.render_widget(cell, area);
}

fn render_mistakes(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let line = Line::from(vec![
        Span::raw("Mistakes remaining: "),
        Span::styled(
            mistake_dots(snapshot.mistakes_remaining),
            Style::default().fg(Color::LightRed),
        ),
        Span::raw(format!("   Selected: {}/4", snapshot.selection.len())),
    ]);

    let mistakes = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(mistakes, area);
}

fn render_status<P: PuzzleService, S: ProfileStore>(
    f: &mut Frame,
    app: &App<P, S>,
    snapshot: &Snapshot,
    area: Rect,
) {
    let help_text = match app.screen {
        Screen::Home => "Enter: Play | q: Quit",
        Screen::Instructions => "Enter: Let's Go! | Esc: Back | q: Quit",
        Screen::Playing if app.is_loading() => "Loading today's puzzle...",
        Screen::Playing => match snapshot.status {
            SessionStatus::InProgress if snapshot.can_submit() => {
                "Enter: Submit | Space: Toggle | s: Shuffle | d: Deselect All | Esc: Home"
            }
            SessionStatus::InProgress => {
                "Arrows: Move | Space: Toggle | s: Shuffle | d: Deselect All | Esc: Home | q: Quit"
            }
            SessionStatus::Won | SessionStatus::Lost => "Enter/b: Back to Home | q: Quit",
            SessionStatus::NotStarted => "Enter: Retry | Esc: Home | q: Quit",
            SessionStatus::Loading => "Loading today's puzzle...",
        },
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
