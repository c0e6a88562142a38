//! JSON shape of the game state handed to UI shells.

use ctutor_tictactoe::{apply_move, reset, GameState, GameStatus, Player};
use serde_json::json;

#[test]
fn test_fresh_state_json() {
    let value = serde_json::to_value(reset()).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "currentPlayer": "X",
            "status": "playing",
            "winner": null,
            "winningLine": [],
        })
    );
}

#[test]
fn test_won_state_json_round_trips() {
    let mut game = reset();
    for index in [0, 3, 1, 4, 2] {
        game = apply_move(game, index);
    }

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["board"][0], "X");
    assert_eq!(value["board"][3], "O");
    assert_eq!(value["status"], "won");
    assert_eq!(value["winningLine"], json!([0, 1, 2]));

    let back: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(back, game);
    assert_eq!(back.status(), GameStatus::Won);
}

#[test]
fn test_loaded_state_is_rederived_from_board() {
    // Stored status says the game is still on, but X already holds the top row.
    let value = json!({
        "board": ["X", "X", "X", null, null, null, null, null, null],
        "currentPlayer": "O",
        "status": "playing",
        "winner": null,
        "winningLine": [],
    });

    let state: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.winning_line(), Some([0, 1, 2]));

    let after = apply_move(state.clone(), 3);
    assert_eq!(after, state);
}

#[test]
fn test_loaded_state_ignores_stale_winner() {
    let value = json!({
        "board": ["X", "O", null, null, null, null, null, null, null],
        "currentPlayer": "X",
        "status": "won",
        "winner": "O",
        "winningLine": [3, 4, 5],
    });

    let state: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.winner(), None);
    assert_eq!(state.winning_line(), None);

    let after = apply_move(state, 4);
    assert_eq!(after.current_player(), Player::O);
}
