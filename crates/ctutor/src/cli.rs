//! Command-line interface for ctutor.

use clap::{Parser, Subcommand};
use ctutor_tictactoe::{Board, Player, Position};
use std::path::PathBuf;

/// ctutor - tic-tac-toe preview pane for the C practice exercise
#[derive(Parser, Debug)]
#[command(name = "ctutor")]
#[command(about = "Play the C practice exercise's tic-tac-toe board in a terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to ./ctutor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on an interactive board (1-9 or arrows + Enter, r to reset, q to quit)
    Play,

    /// Apply a sequence of moves and print the resulting board
    Replay {
        /// Moves as cell numbers 1-9 or labels such as "center" or "top-left"
        moves: Vec<Position>,

        /// Start from this board instead of an empty one, e.g. "XX_OO____"
        #[arg(long)]
        board: Option<Board>,

        /// Player to move on the starting board
        #[arg(long, default_value = "x")]
        to_move: Player,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["ctutor", "replay", "5", "top-left", "9", "--json"]).unwrap();
        match cli.command {
            Command::Replay {
                moves,
                board,
                to_move,
                json,
            } => {
                assert_eq!(
                    moves,
                    vec![Position::Center, Position::TopLeft, Position::BottomRight]
                );
                assert!(board.is_none());
                assert_eq!(to_move, Player::X);
                assert!(json);
            }
            Command::Play => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_parse_replay_from_board() {
        let cli = Cli::try_parse_from([
            "ctutor", "replay", "--board", "XX_OO____", "--to-move", "o", "6",
        ])
        .unwrap();
        let Command::Replay { board, to_move, .. } = cli.command else {
            panic!("Expected replay");
        };
        assert_eq!(board.unwrap().filled(), 4);
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn test_rejects_bad_move() {
        assert!(Cli::try_parse_from(["ctutor", "replay", "10"]).is_err());
        assert!(Cli::try_parse_from(["ctutor", "replay", "sideways"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ctutor", "play", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Command::Play));
    }
}
