// src/hash/zobrist.rs

use crate::board::castle_bits::*;
use crate::board::{Color, Piece, State};
use crate::square::{SQUARE_COUNT, Square};
use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use tracing::debug;

#[cfg(feature = "deterministic_zobrist")]
const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

fn make_zobrist_rng() -> StdRng {
    #[cfg(feature = "deterministic_zobrist")]
    {
        StdRng::seed_from_u64(ZOBRIST_SEED)
    }
    #[cfg(not(feature = "deterministic_zobrist"))]
    {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        StdRng::from_seed(seed)
    }
}

pub struct ZobristKeys {
    /// [color][kind][square] with {White=0, Black=1} and {P,R,N,B,Q,K}={0..5}
    pub piece: [[[u64; SQUARE_COUNT]; 6]; 2],
    pub side_to_move: u64,
    /// [0]=K, [1]=Q, [2]=k, [3]=q
    pub castling: [u64; 4],
}

const CASTLING_ORDER: [CastleBits; 4] = [CASTLE_WK, CASTLE_WQ, CASTLE_BK, CASTLE_BQ];

impl ZobristKeys {
    /// Key of a real piece on a legal square; 0 for the empty sentinel and
    /// half-formed codes, so XOR-ing them is a no-op.
    #[inline]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        if !piece.is_real() {
            return 0;
        }
        let ci = piece.color() as usize - Color::White as usize;
        let ki = piece.kind() as usize - 1;
        self.piece[ci][ki][sq.index()]
    }
}

#[inline]
pub fn xor_castling_rights_delta(
    hash: &mut u64,
    keys: &ZobristKeys,
    old: Castlings,
    new_: Castlings,
) {
    let d = old.bits() ^ new_.bits();
    for (i, flag) in CASTLING_ORDER.iter().enumerate() {
        if d & flag != 0 {
            *hash ^= keys.castling[i];
        }
    }
}

/// Full hash of a snapshot. Move appliers that update incrementally must
/// always agree with this.
pub fn compute_hash(state: &State) -> u64 {
    let keys = zobrist_keys();
    let mut hash = 0;

    for (sq, piece) in state.pieces() {
        hash ^= keys.piece_key(piece, sq);
    }

    // Only when Black is to move
    if state.turn_to_move == Color::Black {
        hash ^= keys.side_to_move;
    }

    xor_castling_rights_delta(&mut hash, keys, Castlings::NONE, state.castlings);
    hash
}

// Global keys, initialized on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| {
        let keys = generate_zobrist_keys_with_rng(make_zobrist_rng());
        debug!(
            deterministic = cfg!(feature = "deterministic_zobrist"),
            "zobrist keys initialised"
        );
        keys
    })
}

fn generate_zobrist_keys_with_rng(mut rng: StdRng) -> ZobristKeys {
    #[inline]
    fn non_zero(r: &mut StdRng) -> u64 {
        // a zero key would make its feature invisible to the hash
        let mut v = r.next_u64();
        while v == 0 {
            v = r.next_u64();
        }
        v
    }

    let mut keys = ZobristKeys {
        piece: [[[0u64; SQUARE_COUNT]; 6]; 2],
        side_to_move: 0,
        castling: [0u64; 4],
    };

    for by_kind in keys.piece.iter_mut() {
        for by_square in by_kind.iter_mut() {
            for key in by_square.iter_mut() {
                *key = non_zero(&mut rng);
            }
        }
    }

    for key in keys.castling.iter_mut() {
        *key = non_zero(&mut rng);
    }

    keys.side_to_move = non_zero(&mut rng);

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_non_zero() {
        let keys = zobrist_keys();
        assert!(keys.piece.iter().flatten().flatten().all(|&k| k != 0));
        assert!(keys.castling.iter().all(|&k| k != 0));
        assert_ne!(keys.side_to_move, 0);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_zobrist_keys_with_rng(StdRng::seed_from_u64(7));
        let b = generate_zobrist_keys_with_rng(StdRng::seed_from_u64(7));
        assert_eq!(a.piece, b.piece);
        assert_eq!(a.castling, b.castling);
        assert_eq!(a.side_to_move, b.side_to_move);
    }

    #[test]
    fn empty_sentinel_has_no_key() {
        let keys = zobrist_keys();
        assert_eq!(keys.piece_key(Piece::NONE, Square::new(0, 0)), 0);
    }
}
