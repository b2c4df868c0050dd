use super::{Castlings, Color, Piece};
use crate::square::{SQUARE_COUNT, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Position snapshot: 64 cells, side to move, castling rights.
///
/// Built and advanced by the move applier; this layer only fixes the shape.
/// Cells are indexed by [`Square::index`] (a1 = 0, h8 = 63); empty cells hold
/// [`Piece::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    #[serde(with = "board_cells")]
    pub board: [Piece; SQUARE_COUNT],
    pub turn_to_move: Color,
    pub castlings: Castlings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no side to move")]
    NoSideToMove,
    #[error("{square} holds half-formed piece code {:#04x}", .piece.raw())]
    HalfFormedPiece { square: Square, piece: Piece },
}

impl State {
    /// No pieces, no castling rights, White to move.
    pub const fn empty() -> Self {
        State {
            board: [Piece::NONE; SQUARE_COUNT],
            turn_to_move: Color::White,
            castlings: Castlings::NONE,
        }
    }

    pub const fn new(
        board: [Piece; SQUARE_COUNT],
        turn_to_move: Color,
        castlings: Castlings,
    ) -> Self {
        State {
            board,
            turn_to_move,
            castlings,
        }
    }

    /// Piece on a legal square.
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board[sq.index()]
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_none())
            .map(|(i, &piece)| (Square::from_index(i), piece))
    }

    /// Check what a live game requires of a snapshot: a side to move, and
    /// every cell either empty or holding both a kind and a color.
    pub fn validate(&self) -> Result<(), StateError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(%err, "state failed validation");
        }
        result
    }

    fn check(&self) -> Result<(), StateError> {
        if self.turn_to_move == Color::NoColor {
            return Err(StateError::NoSideToMove);
        }
        match self.pieces().find(|(_, piece)| !piece.is_real()) {
            Some((square, piece)) => Err(StateError::HalfFormedPiece { square, piece }),
            None => Ok(()),
        }
    }

    /// Full Zobrist hash of this snapshot.
    pub fn zobrist(&self) -> u64 {
        crate::hash::zobrist::compute_hash(self)
    }
}

impl Default for State {
    fn default() -> Self {
        State::empty()
    }
}

/// Diagram with rank 8 on top, then side to move and castling rights.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                write!(f, " {}", self.piece_at(Square::new(file, rank)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(
            f,
            "{:?} to move, castling {}",
            self.turn_to_move, self.castlings
        )
    }
}

// serde only derives arrays up to 32 elements
mod board_cells {
    use super::{Piece, SQUARE_COUNT};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        board: &[Piece; SQUARE_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(board.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[Piece; SQUARE_COUNT], D::Error> {
        let cells = Vec::<Piece>::deserialize(deserializer)?;
        let len = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"64 board cells"))
    }
}
