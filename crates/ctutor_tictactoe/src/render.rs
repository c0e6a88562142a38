//! Plain-text rendering for shells that are not graphical.

use crate::{Board, GameState, GameStatus, Player, Square};

impl Board {
    /// Formats the board as three `a|b|c` rows separated by `-+-+-`.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares()[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl GameState {
    /// Status line for the preview pane.
    pub fn status_message(&self) -> String {
        match (self.status(), self.winner()) {
            (GameStatus::Won, Some(winner)) => format!("Player {} wins!", winner),
            (GameStatus::Draw, _) => "Game ended in a draw!".to_string(),
            _ => format!("{}'s turn", self.current_player()),
        }
    }
}
