// O(1) glyph <-> piece maps. Uppercase = White, lowercase = Black, '.' = empty.

use super::Piece;
use std::fmt;
use thiserror::Error;

const UNKNOWN_GLYPH: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no piece is drawn as {0:?}")]
pub struct InvalidPieceGlyph(pub char);

const GLYPHS: [(char, Piece); 13] = [
    ('.', Piece::NONE),
    ('P', Piece::WHITE_PAWN),
    ('R', Piece::WHITE_ROOK),
    ('N', Piece::WHITE_KNIGHT),
    ('B', Piece::WHITE_BISHOP),
    ('Q', Piece::WHITE_QUEEN),
    ('K', Piece::WHITE_KING),
    ('p', Piece::BLACK_PAWN),
    ('r', Piece::BLACK_ROOK),
    ('n', Piece::BLACK_KNIGHT),
    ('b', Piece::BLACK_BISHOP),
    ('q', Piece::BLACK_QUEEN),
    ('k', Piece::BLACK_KING),
];

const CHAR_TO_PIECE: [Option<Piece>; 128] = {
    let mut table: [Option<Piece>; 128] = [None; 128];
    let mut i = 0;
    while i < GLYPHS.len() {
        let (glyph, piece) = GLYPHS[i];
        table[glyph as usize] = Some(piece);
        i += 1;
    }
    table
};

// Indexed by raw piece code (5 significant bits).
const PIECE_TO_CHAR: [char; 32] = {
    let mut table = [UNKNOWN_GLYPH; 32];
    let mut i = 0;
    while i < GLYPHS.len() {
        let (glyph, piece) = GLYPHS[i];
        table[piece.raw() as usize] = glyph;
        i += 1;
    }
    table
};

impl Piece {
    /// Board-diagram glyph. Half-formed codes (a kind without a color or the
    /// reverse) draw as `?`.
    #[inline]
    pub fn to_char(self) -> char {
        PIECE_TO_CHAR[self.raw() as usize]
    }
}

impl TryFrom<char> for Piece {
    type Error = InvalidPieceGlyph;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        if !glyph.is_ascii() {
            return Err(InvalidPieceGlyph(glyph));
        }
        CHAR_TO_PIECE[glyph as usize].ok_or(InvalidPieceGlyph(glyph))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
