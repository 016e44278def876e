//! End-to-end games driven through the public `GameState` contract.

use connect_n::game::{Cell, GameOutcome, GameState, HorizontalScan, Player};

fn name(player: Option<&Player>) -> Option<&str> {
    player.map(Player::name)
}

#[test]
fn test_fresh_state_is_empty() {
    for (width, height) in [(1, 1), (7, 6), (3, 9)] {
        let state = GameState::new(width, height, 4, ["Ann", "Bob"]).unwrap();
        for x in 0..width {
            for y in 0..height {
                assert_eq!(state.cell_at(x, y), None);
            }
        }
        assert!(!state.is_board_full());
    }
    assert!(GameState::new(0, 5, 4, ["Ann"]).unwrap().is_board_full());
}

#[test]
fn test_vertical_four_wins_for_ann() {
    let mut state = GameState::new(7, 6, 4, ["Ann", "Bob"]).unwrap();
    for col in [0, 1, 0, 2, 0, 3] {
        assert!(state.play(col));
    }
    assert!(!state.is_game_over(), "three stacked tokens are not a win");

    assert!(state.play(0));
    assert!(state.is_game_over());
    assert_eq!(name(state.winner()), Some("Ann"));
    for y in 0..4 {
        assert_eq!(name(state.cell_at(0, y)), Some("Ann"));
    }
}

#[test]
fn test_alternating_single_row_is_a_tie() {
    let mut state = GameState::new(4, 1, 4, ["X", "Y"]).unwrap();
    for col in 0..4 {
        assert!(state.play(col));
    }
    assert!(state.is_board_full());
    assert_eq!(state.winner(), None);
    assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    assert_eq!(state.render(), "XYXY\n");
}

#[test]
fn test_single_move_cell_at() {
    let mut state = GameState::new(5, 4, 3, ["Ann", "Bob"]).unwrap();
    assert!(state.play(0));
    for x in 0..5 {
        for y in 0..4 {
            let expected = if (x, y) == (0, 0) { Some("Ann") } else { None };
            assert_eq!(name(state.cell_at(x, y)), expected);
        }
    }
}

#[test]
fn test_filling_every_column_fills_board() {
    let mut state = GameState::new(5, 3, 9, ["Ann", "Bob", "Cy"]).unwrap();
    let mut placed = 0;
    for col in 0..5 {
        while !state.is_column_full(col) {
            let before = state.board().occupied();
            let expected_next = state.players()[(placed + 1) % 3].name().to_string();
            assert!(state.play(col));
            placed += 1;
            assert_eq!(state.board().occupied(), before + 1);
            assert_eq!(state.current_player().name(), expected_next);
        }
        assert!(!state.play(col));
    }
    assert!(state.is_board_full());
    assert!(state.legal_columns().is_empty());
}

#[test]
fn test_tokens_obey_gravity() {
    let mut state = GameState::new(4, 4, 4, ["Ann", "Bob"]).unwrap();
    for col in [2, 2, 1, 2, 3, 1] {
        assert!(state.play(col));
    }
    let board = state.board();
    for col in 0..4 {
        for row in 1..4 {
            if !board.get(row - 1, col).is_empty() {
                assert_ne!(board.get(row, col), Cell::Empty);
            }
        }
    }
}

#[test]
fn test_three_players_diagonal() {
    // Cy completes a north-east diagonal from the bottom-left corner.
    let mut state = GameState::new(5, 5, 3, ["Ann", "Bob", "Cy"]).unwrap();
    for col in [1, 2, 0, 2, 4, 1, 3, 4] {
        assert!(state.play(col));
    }
    assert!(!state.is_game_over());
    assert!(state.play(2));
    assert!(state.is_game_over());
    assert_eq!(name(state.winner()), Some("Cy"));
}

#[test]
fn test_horizontal_scan_selection() {
    let state = GameState::new(3, 3, 3, ["Ann", "Bob"]).unwrap();
    assert_eq!(state.horizontal_scan(), HorizontalScan::BottomRow);
    let state = state.with_horizontal_scan(HorizontalScan::CandidateRow);
    assert_eq!(state.horizontal_scan(), HorizontalScan::CandidateRow);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_is_column_full_out_of_range() {
    let state = GameState::new(7, 6, 4, ["Ann", "Bob"]).unwrap();
    state.is_column_full(7);
}
