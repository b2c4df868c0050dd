//! Board coordinates.
//!
//! A [`Square`] is a plain (file, rank) pair and may lie off the board; that is
//! what lets slide loops step past the edge and then stop. [`square_legal`] is
//! the single validity gate. Everything that turns a square into a board index
//! assumes the gate has already been passed.

use crate::guard::precondition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_SIZE: i8 = 8;
pub const SQUARE_COUNT: usize = 64;

/// File (a..h = 0..7) and rank (1..8 = 0..7). Range is not enforced.
///
/// Coordinates are `i8`. Narrowing a wider integer with `as` wraps, so an
/// off-board value such as 264 or 256 can land back on the board (as 8 or 0).
/// Use [`Square::from_coords`] for coordinates that arrive as `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("square must be two characters like \"e4\", got {0:?}")]
    Length(String),
    #[error("file must be a..h, got {0:?}")]
    File(char),
    #[error("rank must be 1..8, got {0:?}")]
    Rank(char),
}

/// True iff both coordinates lie in `0..8`.
#[inline(always)]
pub const fn square_legal(sq: Square) -> bool {
    sq.file >= 0 && sq.file < BOARD_SIZE && sq.rank >= 0 && sq.rank < BOARD_SIZE
}

/// `rank * 8 + file`, computed unconditionally.
///
/// The result is meaningless (negative, or 64 and above) for a square that
/// fails [`square_legal`].
#[inline(always)]
pub const fn square_index(sq: Square) -> i32 {
    ((sq.rank as i32) << 3) + sq.file as i32
}

impl Square {
    #[inline(always)]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// Narrow `i32` coordinates without wrapping. `None` when either one does
    /// not fit in `i8`; the square returned may still be off the board.
    pub fn from_coords(file: i32, rank: i32) -> Option<Self> {
        let file = i8::try_from(file).ok()?;
        let rank = i8::try_from(rank).ok()?;
        Some(Square { file, rank })
    }

    /// Square for a linear index in `0..64`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        precondition!(index < SQUARE_COUNT, "square index {index} out of range");
        Square {
            file: (index % 8) as i8,
            rank: (index / 8) as i8,
        }
    }

    #[inline(always)]
    pub const fn is_legal(self) -> bool {
        square_legal(self)
    }

    /// Board index of a legal square. Calling this on an illegal square is a
    /// caller bug; it is only caught by debug builds or the `paranoid` feature.
    #[inline(always)]
    pub fn index(self) -> usize {
        precondition!(square_legal(self), "index of off-board square {:?}", self);
        square_index(self) as usize
    }

    #[inline]
    pub fn checked_index(self) -> Option<usize> {
        square_legal(self).then(|| square_index(self) as usize)
    }

    /// Step by a file/rank delta. The result may be off the board.
    #[inline(always)]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Self {
        Square {
            file: self.file.saturating_add(file_delta),
            rank: self.rank.saturating_add(rank_delta),
        }
    }

    /// All 64 legal squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_legal() {
            return write!(f, "({}, {})", self.file, self.rank);
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::Length(s.to_string()));
        };
        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ParseSquareError::Rank(rank));
        }
        Ok(Square {
            file: (file as u8 - b'a') as i8,
            rank: (rank as u8 - b'1') as i8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_from_index_agree_on_every_square() {
        for (i, sq) in Square::all().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i), sq);
        }
    }

    #[test]
    fn checked_index_rejects_edges() {
        assert_eq!(Square::new(-1, 0).checked_index(), None);
        assert_eq!(Square::new(0, 8).checked_index(), None);
        assert_eq!(Square::new(7, 7).checked_index(), Some(63));
    }

    #[test]
    fn offset_saturates_instead_of_wrapping() {
        let far = Square::new(i8::MAX, 0).offset(1, 0);
        assert_eq!(far.file, i8::MAX);
        assert!(!far.is_legal());
    }

    #[test]
    fn display_off_board_square() {
        assert_eq!(Square::new(8, -1).to_string(), "(8, -1)");
    }

    #[test]
    fn from_coords_never_wraps_onto_the_board() {
        assert_eq!(Square::from_coords(264, 0), None);
        assert_eq!(Square::from_coords(3, 256), None);
        assert_eq!(Square::from_coords(-129, 0), None);
        assert_eq!(Square::from_coords(4, 3), Some(Square::new(4, 3)));

        let edge = Square::from_coords(8, -1).unwrap();
        assert!(!square_legal(edge));
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "paranoid"))]
    #[should_panic(expected = "off-board square")]
    fn index_of_off_board_square_is_caught() {
        Square::new(8, 0).index();
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "paranoid"))]
    #[should_panic(expected = "out of range")]
    fn from_index_past_the_board_is_caught() {
        Square::from_index(SQUARE_COUNT);
    }

    #[test]
    #[cfg(not(any(debug_assertions, feature = "paranoid")))]
    fn index_is_unchecked_in_release() {
        assert_eq!(Square::new(8, 0).index(), 8);
    }
}
