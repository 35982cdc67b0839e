//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::guess::{MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, Round, RoundStatus};

const CONFETTI: &str = "* . * . * . * . * . * . * . * . *";

/// Renders the round.
pub fn draw(frame: &mut Frame, round: &Round) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Info
            Constraint::Length(3), // Input
            Constraint::Length(3), // Feedback
            Constraint::Length(3), // Win / lose banner
            Constraint::Length(1), // Hint
            Constraint::Min(0),
            Constraint::Length(1), // Key help
        ])
        .split(area);

    draw_title(frame, chunks[0], round.celebration_active());
    draw_info(frame, chunks[1], round);

    if round.status() == RoundStatus::InProgress {
        draw_input(frame, chunks[2], round.guess_text());
    }

    if !round.feedback().is_empty() {
        draw_feedback(frame, chunks[3], round);
    }

    draw_banner(frame, chunks[4], round);

    if let Some(hint) = round.hint() {
        let hint = Paragraph::new(format!("Hint: {}", hint))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[5]);
    }

    let help = match round.status() {
        RoundStatus::InProgress => "Type a number, Enter to guess, Esc to quit",
        RoundStatus::Won | RoundStatus::Lost => "Enter or 'r' to play again, Esc to quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}

fn draw_title(frame: &mut Frame, area: Rect, celebrating: bool) {
    let style = if celebrating {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let title = Paragraph::new("Guess the Number")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn draw_info(frame: &mut Frame, area: Rect, round: &Round) {
    let lines = vec![
        Line::from(format!(
            "I'm thinking of a number between {} and {}",
            MIN_GUESS, MAX_GUESS
        )),
        Line::from(Span::styled(
            format!(
                "Attempts: {}/{} ({} left)",
                round.attempts_used(),
                MAX_ATTEMPTS,
                round.attempts_left()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, area: Rect, text: &str) {
    let area = center_width(area, 32);
    let input = Paragraph::new(format!("{}_", text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Your guess ({}-{})", MIN_GUESS, MAX_GUESS)),
    );
    frame.render_widget(input, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, round: &Round) {
    let style = match round.status() {
        RoundStatus::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        RoundStatus::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        RoundStatus::InProgress => Style::default().fg(Color::Yellow),
    };

    let feedback = Paragraph::new(round.feedback())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(feedback, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, round: &Round) {
    let lines = match round.status() {
        RoundStatus::InProgress => return,
        RoundStatus::Won => {
            let confetti = if round.celebration_active() {
                Line::from(Span::styled(
                    CONFETTI,
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from("")
            };
            vec![confetti, Line::from("Play Again! (Enter)")]
        }
        RoundStatus::Lost => vec![Line::from(""), Line::from("Try Again! (Enter)")],
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_width(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}
