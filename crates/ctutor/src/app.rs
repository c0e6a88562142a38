//! Application state and logic.

use crate::config::ShellConfig;
use crate::input::move_cursor;
use crossterm::event::KeyCode;
use ctutor_tictactoe::{reset, try_apply_move, GameState, Move, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the board.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameState`] for the session; the engine only ever sees it
/// by value or by reference.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    history: Vec<Move>,
    notice: Option<String>,
    config: ShellConfig,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            state: reset(),
            cursor: Position::Center,
            history: Vec::new(),
            notice: None,
            config,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Gets the shell settings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Gets the current status message.
    ///
    /// A refused move shows its reason until the next key.
    pub fn status_message(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{} ({})", notice, self.state.status_message()),
            None => self.state.status_message(),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// A refused move leaves the game untouched and records the reason.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, pos: Position) {
        let player = self.state.current_player();
        match try_apply_move(&self.state, pos.to_index()) {
            Ok(next) => {
                self.state = next;
                self.history.push(Move::new(player, pos));
                self.notice = None;
                if self.state.status().is_terminal() {
                    info!(status = %self.state.status(), moves = self.history.len(), "Game over");
                }
            }
            Err(e) => {
                debug!(error = %e, "Move refused");
                self.notice = Some(format!("Invalid move: {}", e));
            }
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = reset();
        self.history.clear();
        self.notice = None;
        self.cursor = Position::Center;
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c.to_digit(10).and_then(|n| Position::from_index(n as usize - 1)) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
                self.notice = None;
            }
            _ => {}
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctutor_tictactoe::{GameStatus, Player, Square};

    fn app() -> App {
        App::new(ShellConfig::default())
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('1')), Control::Continue);
        assert_eq!(app.state().board().get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.status_message(), "O's turn");
        assert_eq!(app.history(), &[Move::new(Player::X, Position::TopLeft)]);
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.state().board().square(Position::TopRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_refused_move_keeps_state_and_explains() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        let before = app.state().clone();

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.state(), &before);
        assert_eq!(app.history().len(), 1);
        assert!(app.status_message().starts_with("Invalid move: Square Center"));
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.state().status(), GameStatus::Won);
        assert_eq!(app.status_message(), "Player X wins!");

        app.handle_key(KeyCode::Char('9'));
        assert!(app.status_message().contains("Game is already over"));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.state(), &GameState::new());
        assert!(app.history().is_empty());
        assert_eq!(app.status_message(), "X's turn");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
