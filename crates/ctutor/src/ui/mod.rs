//! Screen layout: title, board, status line, move list and key help.

mod board;

pub use board::{render_board, BOARD_HEIGHT, BOARD_WIDTH};

use crate::App;
use ctutor_tictactoe::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe Preview")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(24)])
        .split(chunks[1]);

    let board_block = Block::default().borders(Borders::ALL).title("Game");
    let board_area = board_block.inner(middle[0]);
    f.render_widget(board_block, middle[0]);
    render_board(f, board_area, app);

    let moves: Vec<ListItem> = app
        .history()
        .iter()
        .enumerate()
        .map(|(i, m)| ListItem::new(format!("{}. {}", i + 1, m)))
        .collect();
    let history = List::new(moves).block(Block::default().borders(Borders::ALL).title("Moves"));
    f.render_widget(history, middle[1]);

    let status_color = match app.state().status() {
        GameStatus::Won => Color::Green,
        GameStatus::Draw => Color::Yellow,
        GameStatus::Playing => Color::White,
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(Line::from(
        "1-9 play | arrows move | Enter/Space play | r reset | q quit",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}
