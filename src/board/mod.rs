pub mod castle_bits;
mod glyphs;
pub mod state;

pub use castle_bits::*;
pub use glyphs::InvalidPieceGlyph;
pub use state::{State, StateError};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Piece code layout: bits 0-2 kind, bits 3-4 color, bits 5-7 always zero.
const KIND_MASK: u8 = 0b0_0111;
const COLOR_MASK: u8 = 0b1_1000;
const COLOR_SHIFT: u8 = 3;
const RESERVED_MASK: u8 = !(KIND_MASK | COLOR_MASK);

/// Side of a piece, or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[default]
    NoColor = 0,
    White = 1,
    Black = 2,
}

/// Role of a piece independent of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    NoKind = 0,
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

/// A kind and a color packed into one byte.
///
/// The zero byte is [`Piece::NONE`], the content of an empty square. Only
/// [`make_piece`] (and the validating `TryFrom<u8>`) build values, so the
/// reserved patterns (kind 7, color 3, bits 5-7) never occur.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Piece(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid piece code {0:#04x}")]
pub struct InvalidPieceCode(pub u8);

impl Color {
    pub const ALL: [Color; 3] = [Color::NoColor, Color::White, Color::Black];

    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::NoColor => Color::NoColor,
        }
    }

    /// The color as it sits inside a piece code (pre-shifted into bits 3-4).
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        (self as u8) << COLOR_SHIFT
    }

    #[inline(always)]
    const fn from_piece_code(code: u8) -> Self {
        match (code & COLOR_MASK) >> COLOR_SHIFT {
            0 => Color::NoColor,
            1 => Color::White,
            2 => Color::Black,
            _ => panic!("reserved color bits in piece code"),
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::NoKind,
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to.
    pub const PROMOTION_TARGETS: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ];

    /// Decode the low three bits. Bit pattern 7 is reserved.
    #[inline(always)]
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & KIND_MASK {
            0 => PieceKind::NoKind,
            1 => PieceKind::Pawn,
            2 => PieceKind::Rook,
            3 => PieceKind::Knight,
            4 => PieceKind::Bishop,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => panic!("reserved kind bits"),
        }
    }

    #[inline(always)]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen
        )
    }
}

impl Piece {
    pub const NONE: Piece = make_piece(PieceKind::NoKind, Color::NoColor);

    pub const WHITE_PAWN: Piece = make_piece(PieceKind::Pawn, Color::White);
    pub const WHITE_ROOK: Piece = make_piece(PieceKind::Rook, Color::White);
    pub const WHITE_KNIGHT: Piece = make_piece(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = make_piece(PieceKind::Bishop, Color::White);
    pub const WHITE_QUEEN: Piece = make_piece(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = make_piece(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = make_piece(PieceKind::Pawn, Color::Black);
    pub const BLACK_ROOK: Piece = make_piece(PieceKind::Rook, Color::Black);
    pub const BLACK_KNIGHT: Piece = make_piece(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = make_piece(PieceKind::Bishop, Color::Black);
    pub const BLACK_QUEEN: Piece = make_piece(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = make_piece(PieceKind::King, Color::Black);

    #[inline(always)]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        make_piece(kind, color)
    }

    #[inline(always)]
    pub const fn kind(self) -> PieceKind {
        kind_of(self)
    }

    #[inline(always)]
    pub const fn color(self) -> Color {
        color_of(self)
    }

    #[inline(always)]
    pub const fn separate(self) -> (PieceKind, Color) {
        separate(self)
    }

    /// Raw one-byte code.
    #[inline(always)]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True for the empty-square sentinel.
    #[inline(always)]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// True when both a kind and a color are present.
    #[inline(always)]
    pub const fn is_real(self) -> bool {
        self.0 & KIND_MASK != 0 && self.0 & COLOR_MASK != 0
    }
}

impl TryFrom<u8> for Piece {
    type Error = InvalidPieceCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let reserved_kind = code & KIND_MASK == KIND_MASK;
        let reserved_color = code & COLOR_MASK == COLOR_MASK;
        if code & RESERVED_MASK != 0 || reserved_kind || reserved_color {
            return Err(InvalidPieceCode(code));
        }
        Ok(Piece(code))
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece.0
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("kind", &self.kind())
            .field("color", &self.color())
            .finish()
    }
}

/// White ↔ Black; `NoColor` stays `NoColor`.
#[inline(always)]
pub const fn opposite_color(color: Color) -> Color {
    color.opposite()
}

#[inline(always)]
pub const fn color_of(piece: Piece) -> Color {
    Color::from_piece_code(piece.0)
}

#[inline(always)]
pub const fn kind_of(piece: Piece) -> PieceKind {
    PieceKind::from_bits(piece.0)
}

/// Pack a kind and a color into a piece code.
#[inline(always)]
pub const fn make_piece(kind: PieceKind, color: Color) -> Piece {
    Piece(color.bits() | kind as u8)
}

/// Inverse of [`make_piece`].
#[inline(always)]
pub const fn separate(piece: Piece) -> (PieceKind, Color) {
    (kind_of(piece), color_of(piece))
}

#[cfg(test)]
mod tests;
