//! Property tests over arbitrary move sequences.

use ctutor_tictactoe::{
    apply_move, reset, try_apply_move, GameState, GameStatus, Player, Square, LINES,
};
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..20)
}

proptest! {
    #[test]
    fn occupied_squares_are_never_overwritten(seq in moves()) {
        let mut game = reset();
        for index in seq {
            let before = game.clone();
            game = apply_move(game, index);
            for (was, now) in before.board().squares().iter().zip(game.board().squares()) {
                if *was != Square::Empty {
                    prop_assert_eq!(was, now);
                }
            }
        }
    }

    #[test]
    fn players_alternate_until_terminal(seq in moves()) {
        let mut game = reset();
        let mut accepted: Vec<Player> = Vec::new();
        for index in seq {
            let mover = game.current_player();
            if let Ok(next) = try_apply_move(&game, index) {
                accepted.push(mover);
                game = next;
            }
        }
        for (i, player) in accepted.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(*player, expected);
        }
    }

    #[test]
    fn terminal_states_are_final(seq in moves(), extra in 0usize..12) {
        let mut game = reset();
        for index in seq {
            game = apply_move(game, index);
        }
        if game.status() != GameStatus::Playing {
            prop_assert_eq!(apply_move(game.clone(), extra), game);
        }
    }

    #[test]
    fn winning_line_is_a_fixed_triple(seq in moves()) {
        let mut game: GameState = reset();
        for index in seq {
            game = apply_move(game, index);
        }
        match game.status() {
            GameStatus::Won => {
                let line = game.winning_line().expect("won game has a line");
                prop_assert!(LINES.contains(&line));
                let winner = game.winner().expect("won game has a winner");
                prop_assert_eq!(winner, game.current_player());
                for i in line {
                    prop_assert_eq!(game.board().get(i), Some(Square::Occupied(winner)));
                }
            }
            GameStatus::Draw | GameStatus::Playing => {
                prop_assert_eq!(game.winning_line(), None);
                prop_assert_eq!(game.winner(), None);
            }
        }
    }
}
