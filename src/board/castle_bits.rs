// src/board/castle_bits.rs

use super::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, Not};
use thiserror::Error;

/// Underlying bit type for castling rights.
pub type CastleBits = u8;

pub const CASTLE_WK: CastleBits = 0b0001;
pub const CASTLE_WQ: CastleBits = 0b0010;
pub const CASTLE_BK: CastleBits = 0b0100;
pub const CASTLE_BQ: CastleBits = 0b1000;
pub const CASTLE_ALL: CastleBits = CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ;

/// Castling rights still granted by game history (not whether castling is
/// currently legal). Every combination of the four flags is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Castlings(CastleBits);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("castling rights use only the low four bits, got {0:#06b}")]
pub struct InvalidCastlingBits(pub u8);

impl Castlings {
    pub const NONE: Castlings = Castlings(0);
    pub const WHITE_KINGSIDE: Castlings = Castlings(CASTLE_WK);
    pub const WHITE_QUEENSIDE: Castlings = Castlings(CASTLE_WQ);
    pub const BLACK_KINGSIDE: Castlings = Castlings(CASTLE_BK);
    pub const BLACK_QUEENSIDE: Castlings = Castlings(CASTLE_BQ);
    pub const ALL: Castlings = Castlings(CASTLE_ALL);

    #[inline(always)]
    pub const fn bits(self) -> CastleBits {
        self.0
    }

    #[inline(always)]
    pub const fn contains(self, other: Castlings) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn insert(&mut self, other: Castlings) {
        self.0 |= other.0;
    }

    #[inline(always)]
    pub fn remove(&mut self, other: Castlings) {
        self.0 &= !other.0;
    }

    /// Kingside flag of `color`; empty for `NoColor`.
    pub const fn kingside(color: Color) -> Castlings {
        match color {
            Color::White => Castlings::WHITE_KINGSIDE,
            Color::Black => Castlings::BLACK_KINGSIDE,
            Color::NoColor => Castlings::NONE,
        }
    }

    /// Queenside flag of `color`; empty for `NoColor`.
    pub const fn queenside(color: Color) -> Castlings {
        match color {
            Color::White => Castlings::WHITE_QUEENSIDE,
            Color::Black => Castlings::BLACK_QUEENSIDE,
            Color::NoColor => Castlings::NONE,
        }
    }

    /// Both flags of `color`.
    pub const fn of(color: Color) -> Castlings {
        Castlings(Self::kingside(color).0 | Self::queenside(color).0)
    }
}

impl TryFrom<u8> for Castlings {
    type Error = InvalidCastlingBits;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits & !CASTLE_ALL != 0 {
            return Err(InvalidCastlingBits(bits));
        }
        Ok(Castlings(bits))
    }
}

impl From<Castlings> for u8 {
    fn from(rights: Castlings) -> u8 {
        rights.0
    }
}

impl BitOr for Castlings {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Castlings(self.0 | rhs.0)
    }
}

impl Not for Castlings {
    type Output = Self;

    fn not(self) -> Self {
        Castlings(!self.0 & CASTLE_ALL)
    }
}

/// `KQkq` order, `-` when no rights remain.
impl fmt::Display for Castlings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, glyph) in [
            (CASTLE_WK, 'K'),
            (CASTLE_WQ, 'Q'),
            (CASTLE_BK, 'k'),
            (CASTLE_BQ, 'q'),
        ] {
            if self.0 & flag != 0 {
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
