//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::{self, Line, Outcome};
use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(cell: Option<Player>) -> Self {
        cell.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Player> {
    fn from(square: Square) -> Self {
        square.player()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Writes a mark. Callers check occupancy first.
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.squares[pos.to_index()] = Square::Occupied(player);
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A cell was not `X`, `O`, `_`, `.` or `-`.
    #[display("Invalid cell {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells such as `"XX_OO____"`. Whitespace and `|`/`/`
    /// separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '_' | '.' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    Playing,
    /// Game ended in a win.
    Won,
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Complete game state.
///
/// Owned by the caller and threaded through [`crate::apply_move`]; the engine
/// keeps no state of its own.
///
/// Deserializing reads only `board` and `currentPlayer` and re-derives the
/// rest, so a loaded state always agrees with its board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "GameStateRecord")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Player>,
    /// `[]` when there is no winner.
    #[serde(serialize_with = "serialize_line")]
    pub(crate) winning_line: Option<Line>,
}

/// The stored fields a [`GameState`] is rebuilt from.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRecord {
    board: Board,
    current_player: Player,
}

impl From<GameStateRecord> for GameState {
    fn from(record: GameStateRecord) -> Self {
        GameState::from_board(record.board, record.current_player)
    }
}

fn serialize_line<S: Serializer>(line: &Option<Line>, serializer: S) -> Result<S::Ok, S::Error> {
    let cells: &[usize] = match line {
        Some(line) => &line[..],
        None => &[],
    };
    cells.serialize(serializer)
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Playing,
            winner: None,
            winning_line: None,
        }
    }

    /// Resumes a game from an arbitrary board.
    ///
    /// Status, winner and winning line are derived from the board.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            ..Self::new()
        };
        state.settle();
        state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the winning triple, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the open positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Re-derives status, winner and winning line from the board.
    pub(crate) fn settle(&mut self) {
        match rules::outcome(&self.board) {
            Some(Outcome::Winner { player, line }) => {
                self.status = GameStatus::Won;
                self.winner = Some(player);
                self.winning_line = Some(line);
            }
            Some(Outcome::Draw) => {
                self.status = GameStatus::Draw;
                self.winner = None;
                self.winning_line = None;
            }
            None => {
                self.status = GameStatus::Playing;
                self.winner = None;
                self.winning_line = None;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
