//! Integration tests for the rules layer: captures, self-capture, ko and
//! game termination, driven through coordinate strings the way a game
//! record would read.

use std::rc::Rc;

use tengen::board::{Move, Player, Point, parse_coord};
use tengen::position::{Position, apply_move};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Apply a sequence of coordinate-string moves to a fresh board of the
/// given size. Moves alternate between Black and White; "pass" passes.
fn setup_position(size: usize, moves: &[&str]) -> Rc<Position> {
    let mut pos = Position::new_game(size);
    for coord in moves {
        let mv = parse_coord(coord).unwrap_or_else(|| panic!("bad coordinate {coord}"));
        assert!(pos.is_valid_move(mv), "setup move {coord} is not legal");
        pos = apply_move(&pos, mv);
    }
    pos
}

fn pt(row: usize, col: usize) -> Point {
    Point::new(row, col)
}

// =============================================================================
// Stone placement and capture
// =============================================================================

#[test]
fn test_first_stone_has_four_liberties() {
    // Empty 9x9 board, Black plays (3,3).
    let pos = setup_position(9, &["C3"]);
    assert_eq!(pos.board().get(pt(3, 3)), Some(Player::Black));
    let group = pos.board().get_group(pt(3, 3)).unwrap();
    assert_eq!(group.num_liberties(), 4);
}

#[test]
fn test_surrounding_a_stone_captures_it() {
    // White takes all four liberties of a lone black stone; the fourth
    // surrounding play removes it.
    let pos = setup_position(
        9,
        &[
            "C3", // Black, the stone to die
            "C2", // White below
            "H8", // Black elsewhere
            "C4", // White above
            "H7", // Black elsewhere
            "B3", // White left
            "H6", // Black elsewhere
        ],
    );
    assert_eq!(pos.board().get(pt(3, 3)), Some(Player::Black));
    let doomed = pos.board().get_group(pt(3, 3)).unwrap();
    assert_eq!(doomed.num_liberties(), 1);

    let pos = apply_move(&pos, parse_coord("D3").unwrap());
    assert_eq!(pos.board().get(pt(3, 3)), None);

    // Every white neighbor group regained the freed point as a liberty.
    for neighbor in [pt(2, 3), pt(4, 3), pt(3, 2), pt(3, 4)] {
        let group = pos.board().get_group(neighbor).unwrap();
        assert_eq!(group.color(), Player::White);
        assert!(group.liberties().contains(&pt(3, 3)));
    }
}

#[test]
fn test_one_play_can_capture_two_groups() {
    // Two separate white stones in atari on the 1-1 corner; Black's play
    // at (1,1) has no empty neighbor of its own, so its legality depends
    // on both captures being resolved before the liberty check.
    let pos = setup_position(
        9,
        &[
            "C1", // Black
            "B1", // White, first victim
            "B2", // Black
            "A2", // White, second victim
            "A3", // Black
            "F6", // White elsewhere
        ],
    );
    assert_eq!(pos.next_player(), Player::Black);
    let capture = Move::Play(pt(1, 1));
    assert!(pos.is_valid_move(capture));

    let pos = apply_move(&pos, capture);
    assert_eq!(pos.board().get(pt(1, 2)), None);
    assert_eq!(pos.board().get(pt(2, 1)), None);
    let capturer = pos.board().get_group(pt(1, 1)).unwrap();
    assert_eq!(capturer.color(), Player::Black);
    assert_eq!(capturer.num_liberties(), 2);
}

// =============================================================================
// Self-capture
// =============================================================================

#[test]
fn test_self_capture_is_rejected() {
    // Black surrounds the corner; White may not play into it.
    let pos = setup_position(9, &["A2", "G7", "B1", "G6"]);
    assert_eq!(pos.next_player(), Player::Black);
    let pos = apply_move(&pos, Move::Pass);

    let corner = Move::Play(pt(1, 1));
    assert!(pos.is_move_self_capture(Player::White, corner));
    assert!(!pos.is_valid_move(corner));
    assert!(!pos.legal_moves().contains(&corner));
}

#[test]
fn test_capturing_play_is_not_self_capture() {
    // The same corner, but with the surrounding black group itself in
    // atari: White's corner play captures first and lives.
    let pos = setup_position(
        9,
        &[
            "A2", // Black
            "A3", // White
            "B1", // Black
            "C1", // White
            "G7", // Black elsewhere
            "B2", // White, black corner group now in atari at A1
            "G6", // Black elsewhere
        ],
    );
    assert_eq!(pos.next_player(), Player::White);
    let corner = Move::Play(pt(1, 1));
    assert!(!pos.is_move_self_capture(Player::White, corner));
    assert!(pos.is_valid_move(corner));

    let pos = apply_move(&pos, corner);
    assert_eq!(pos.board().get(pt(1, 2)), None);
    assert_eq!(pos.board().get(pt(2, 1)), None);
    assert_eq!(pos.board().get(pt(1, 1)), Some(Player::White));
}

// =============================================================================
// Ko
// =============================================================================

/// The classic ko shape: Black's capture at (3,3) takes the white stone at
/// (3,2); White's immediate recapture would restore the earlier situation.
fn ko_position() -> Rc<Position> {
    setup_position(
        9,
        &[
            "B2",   // Black (2,2)
            "C2",   // White (2,3)
            "A3",   // Black (3,1)
            "D3",   // White (3,4)
            "B4",   // Black (4,2)
            "C4",   // White (4,3)
            "pass", // Black
            "B3",   // White (3,2), the ko stone
        ],
    )
}

#[test]
fn test_immediate_ko_recapture_is_rejected() {
    let pos = ko_position();
    assert_eq!(pos.next_player(), Player::Black);

    // Black takes the ko.
    let take = Move::Play(pt(3, 3));
    assert!(pos.is_valid_move(take));
    let pos = apply_move(&pos, take);
    assert_eq!(pos.board().get(pt(3, 2)), None);

    // White's recapture recreates the pre-capture situation and must be
    // rejected as ko, even though it is not self-capture.
    let retake = Move::Play(pt(3, 2));
    assert!(!pos.is_move_self_capture(Player::White, retake));
    assert!(pos.does_move_violate_ko(Player::White, retake));
    assert!(!pos.is_valid_move(retake));

    // After a ko threat exchange elsewhere the recapture becomes legal:
    // the board then differs from every ancestor by the exchanged stones.
    let pos = apply_move(&pos, Move::Play(pt(9, 9)));
    let pos = apply_move(&pos, Move::Play(pt(9, 1)));
    assert!(!pos.does_move_violate_ko(Player::White, retake));
    assert!(pos.is_valid_move(retake));
}

#[test]
fn test_ko_check_ignores_pass_moves() {
    // Passing changes no stones, so the situation after a pass differs
    // from its predecessor only by the player to move; it never trips the
    // superko comparison on its own.
    let pos = setup_position(9, &["C3", "pass"]);
    assert!(!pos.does_move_violate_ko(Player::Black, Move::Play(pt(5, 5))));
    assert!(pos.is_valid_move(Move::Play(pt(5, 5))));
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_two_passes_from_a_fresh_game_end_it() {
    let pos = setup_position(9, &["pass", "pass"]);
    assert!(pos.is_over());
}

#[test]
fn test_single_pass_or_play_does_not_end_the_game() {
    assert!(!setup_position(9, &["pass"]).is_over());
    assert!(!setup_position(9, &["pass", "C3"]).is_over());
    assert!(!setup_position(9, &["C3", "pass"]).is_over());
}

#[test]
fn test_resignation_ends_the_game_immediately() {
    let pos = setup_position(9, &["C3", "resign"]);
    assert!(pos.is_over());
    assert!(!pos.is_valid_move(Move::Play(pt(5, 5))));
}

#[test]
fn test_no_moves_are_legal_after_the_game_ends() {
    let pos = setup_position(9, &["pass", "pass"]);
    assert!(pos.legal_moves().is_empty());
    assert!(!pos.is_valid_move(Move::Pass));
    assert!(!pos.is_valid_move(Move::Resign));
}
