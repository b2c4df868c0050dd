use std::str::FromStr;
use aechess::board::{Castlings, Color, Piece, State};
use aechess::hash::zobrist::{compute_hash, xor_castling_rights_delta, zobrist_keys};
use aechess::square::Square;

fn sq(s: &str) -> Square {
    Square::from_str(s).unwrap()
}

fn kings() -> State {
    let mut state = State::empty();
    state.board[sq("e1").index()] = Piece::WHITE_KING;
    state.board[sq("e8").index()] = Piece::BLACK_KING;
    state
}

#[test]
fn state_hash_matches_free_function() {
    let state = kings();
    assert_eq!(state.zobrist(), compute_hash(&state));
}

#[test]
fn empty_board_white_to_move_hashes_to_zero() {
    assert_eq!(State::empty().zobrist(), 0);
}

#[test]
fn side_to_move_changes_hash() {
    let white = kings();
    let mut black = white;
    black.turn_to_move = Color::Black;
    assert_ne!(white.zobrist(), black.zobrist());
    assert_eq!(white.zobrist() ^ zobrist_keys().side_to_move, black.zobrist());
}

#[test]
fn castling_rights_change_hash() {
    let none = kings();
    let mut some = none;
    some.castlings = Castlings::WHITE_KINGSIDE | Castlings::BLACK_QUEENSIDE;
    assert_ne!(none.zobrist(), some.zobrist());
}

#[test]
fn incremental_castling_update_matches_full_recompute() {
    let mut state = kings();
    state.castlings = Castlings::ALL;
    let mut hash = state.zobrist();

    // white loses both rights, as after a king move
    let old = state.castlings;
    state.castlings.remove(Castlings::of(Color::White));
    xor_castling_rights_delta(&mut hash, zobrist_keys(), old, state.castlings);

    assert_eq!(hash, state.zobrist());
}

#[test]
fn incremental_piece_update_matches_full_recompute() {
    let keys = zobrist_keys();
    let mut state = kings();
    let mut hash = state.zobrist();

    // king e1 -> e2
    state.board[sq("e1").index()] = Piece::NONE;
    state.board[sq("e2").index()] = Piece::WHITE_KING;
    hash ^= keys.piece_key(Piece::WHITE_KING, sq("e1"));
    hash ^= keys.piece_key(Piece::WHITE_KING, sq("e2"));

    assert_eq!(hash, state.zobrist());
}

#[test]
fn same_pieces_on_swapped_squares_differ() {
    let a = kings();
    let mut b = State::empty();
    b.board[sq("e8").index()] = Piece::WHITE_KING;
    b.board[sq("e1").index()] = Piece::BLACK_KING;
    assert_ne!(a.zobrist(), b.zobrist());
}
