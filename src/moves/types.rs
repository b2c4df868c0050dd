use crate::board::{Color, Piece, PieceKind};
use crate::guard::precondition;
use crate::square::Square;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Upper bound on moves in any chess position, with headroom.
pub const MAX_MOVES: usize = 256;

/// Fixed-capacity move buffer for generators; no heap allocation per node.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

// Move flag encoding (one byte)
// Bits 0-2: special move type, at most one set (1=castling, 2=en passant, 4=promotion)
// Bits 3-5: promoted piece kind, only with the promotion bit
const SPECIAL_MASK: u8 = 0b0000_0111;
const PROMOTED_SHIFT: u8 = 3;

/// Flag byte of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoveFlags(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move flags {0:#010b}")]
pub struct InvalidMoveFlags(pub u8);

impl MoveFlags {
    pub const STANDARD: MoveFlags = MoveFlags(0);
    pub const CASTLING: MoveFlags = MoveFlags(1 << 0);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 1);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 2);

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn is_castling(self) -> bool {
        self.0 & Self::CASTLING.0 != 0
    }

    #[inline(always)]
    pub const fn is_en_passant(self) -> bool {
        self.0 & Self::EN_PASSANT.0 != 0
    }

    #[inline(always)]
    pub const fn is_promotion(self) -> bool {
        self.0 & Self::PROMOTION.0 != 0
    }

    /// Bits 3 and up read as a piece kind. `NoKind` unless this is a promotion.
    #[inline(always)]
    pub const fn promoted_kind(self) -> PieceKind {
        PieceKind::from_bits(self.0 >> PROMOTED_SHIFT)
    }
}

/// Promotion flags carrying `kind` above the special-move bits.
///
/// `kind` must be Rook, Knight, Bishop or Queen. The check runs only in debug
/// builds or with the `paranoid` feature. Otherwise an illegal kind is packed
/// as-is, and the resulting byte is one `MoveFlags::try_from` rejects, so such
/// a move fails to deserialize.
#[inline(always)]
pub fn make_promotion(kind: PieceKind) -> MoveFlags {
    precondition!(
        kind.is_promotion_target(),
        "cannot promote to {:?}",
        kind
    );
    MoveFlags(((kind as u8) << PROMOTED_SHIFT) | MoveFlags::PROMOTION.0)
}

impl TryFrom<u8> for MoveFlags {
    type Error = InvalidMoveFlags;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        let special = bits & SPECIAL_MASK;
        let upper = bits >> PROMOTED_SHIFT;
        let valid = match special {
            0 | 1 | 2 => upper == 0,
            4 => upper <= PieceKind::King as u8
                && PieceKind::from_bits(upper).is_promotion_target(),
            _ => false,
        };
        if valid {
            Ok(MoveFlags(bits))
        } else {
            Err(InvalidMoveFlags(bits))
        }
    }
}

impl From<MoveFlags> for u8 {
    fn from(flags: MoveFlags) -> u8 {
        flags.0
    }
}

/// Tagged view of the flag byte. A move is in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveKind {
    #[default]
    Standard,
    Castling,
    EnPassant,
    Promotion(PieceKind),
}

impl From<MoveKind> for MoveFlags {
    fn from(kind: MoveKind) -> Self {
        match kind {
            MoveKind::Standard => MoveFlags::STANDARD,
            MoveKind::Castling => MoveFlags::CASTLING,
            MoveKind::EnPassant => MoveFlags::EN_PASSANT,
            MoveKind::Promotion(piece) => make_promotion(piece),
        }
    }
}

impl From<MoveFlags> for MoveKind {
    fn from(flags: MoveFlags) -> Self {
        if flags.is_promotion() {
            MoveKind::Promotion(flags.promoted_kind())
        } else if flags.is_castling() {
            MoveKind::Castling
        } else if flags.is_en_passant() {
            MoveKind::EnPassant
        } else {
            MoveKind::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    flags: MoveFlags,
}

impl Move {
    #[inline(always)]
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            flags: kind.into(),
        }
    }

    /// Build from an already-validated flag byte.
    #[inline(always)]
    pub const fn with_flags(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move { from, to, flags }
    }

    #[inline(always)]
    pub const fn standard(from: Square, to: Square) -> Self {
        Self::with_flags(from, to, MoveFlags::STANDARD)
    }

    /// King move of a castle; the rook's relocation is up to the move applier.
    #[inline(always)]
    pub const fn castling(from: Square, to: Square) -> Self {
        Self::with_flags(from, to, MoveFlags::CASTLING)
    }

    #[inline(always)]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self::with_flags(from, to, MoveFlags::EN_PASSANT)
    }

    /// Same precondition on `kind` as [`make_promotion`].
    #[inline(always)]
    pub fn promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self::with_flags(from, to, make_promotion(kind))
    }

    #[inline(always)]
    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.flags.into()
    }

    #[inline(always)]
    pub const fn is_castling(&self) -> bool {
        self.flags.is_castling()
    }

    #[inline(always)]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.is_en_passant()
    }

    #[inline(always)]
    pub const fn is_promotion(&self) -> bool {
        self.flags.is_promotion()
    }

    /// Promoted kind, read without looking at the promotion flag.
    /// Only meaningful when [`Move::is_promotion`] holds.
    #[inline(always)]
    pub const fn promoted_kind(&self) -> PieceKind {
        self.flags.promoted_kind()
    }

    #[inline(always)]
    pub const fn promotion_kind(&self) -> Option<PieceKind> {
        if self.is_promotion() {
            Some(self.promoted_kind())
        } else {
            None
        }
    }

    #[inline(always)]
    pub const fn is_standard(&self) -> bool {
        self.flags.0 == MoveFlags::STANDARD.0
    }

    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;

        // Lowercase promotion letter, UCI style
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", Piece::new(kind, Color::Black).to_char())?;
        }

        if f.alternate() {
            match self.kind() {
                MoveKind::Castling => write!(f, " (castle)")?,
                MoveKind::EnPassant => write!(f, " (ep)")?,
                MoveKind::Standard | MoveKind::Promotion(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_fits_in_five_bytes() {
        assert_eq!(std::mem::size_of::<MoveFlags>(), 1);
        assert_eq!(std::mem::size_of::<Move>(), 5);
    }

    #[test]
    fn promotion_flag_layout() {
        assert_eq!(make_promotion(PieceKind::Queen).bits(), (5 << 3) | 0b100);
        assert_eq!(make_promotion(PieceKind::Rook).bits(), (2 << 3) | 0b100);
    }

    #[test]
    fn move_list_holds_a_full_position() {
        let mut list = MoveList::new();
        list.push(Move::standard(Square::new(4, 1), Square::new(4, 3)));
        list.push(Move::castling(Square::new(4, 0), Square::new(6, 0)));
        assert_eq!(list.capacity(), MAX_MOVES);
        assert_eq!(list.iter().filter(|m| m.is_castling()).count(), 1);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "paranoid"))]
    #[should_panic(expected = "cannot promote to King")]
    fn promotion_to_king_is_caught() {
        make_promotion(PieceKind::King);
    }

    #[test]
    #[cfg(not(any(debug_assertions, feature = "paranoid")))]
    fn unchecked_promotion_to_no_kind_does_not_decode() {
        let mv = Move::promotion(Square::new(0, 6), Square::new(0, 7), PieceKind::NoKind);
        assert_eq!(mv.flags().bits(), 0b100);
        assert_eq!(MoveFlags::try_from(0b100u8), Err(InvalidMoveFlags(0b100)));
    }
}
