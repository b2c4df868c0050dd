use super::*;

#[test]
fn piece_fits_in_one_byte() {
    assert_eq!(std::mem::size_of::<Piece>(), 1);
}

#[test]
fn color_bits_are_pre_shifted() {
    assert_eq!(Color::NoColor.bits(), 0);
    assert_eq!(Color::White.bits(), 0b01000);
    assert_eq!(Color::Black.bits(), 0b10000);
}

#[test]
fn kind_and_color_masks_match_raw_code() {
    for kind in PieceKind::ALL {
        for color in Color::ALL {
            let piece = make_piece(kind, color);
            assert_eq!(kind_of(piece) as u8, piece.raw() & 0b111);
            assert_eq!(color_of(piece).bits(), piece.raw() & 0b11000);
        }
    }
}

#[test]
fn named_constants_match_packing() {
    assert_eq!(Piece::NONE.raw(), 0);
    assert_eq!(Piece::WHITE_PAWN.raw(), 0b01_001);
    assert_eq!(Piece::WHITE_KING.raw(), 0b01_110);
    assert_eq!(Piece::BLACK_ROOK.raw(), 0b10_010);
    assert_eq!(Piece::BLACK_QUEEN.raw(), 0b10_101);
}

#[test]
fn real_pieces_need_kind_and_color() {
    assert!(Piece::BLACK_KNIGHT.is_real());
    assert!(!Piece::NONE.is_real());
    assert!(!make_piece(PieceKind::NoKind, Color::Black).is_real());
    assert!(!make_piece(PieceKind::Bishop, Color::NoColor).is_real());
}

#[test]
fn not_operator_flips_side() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!Color::NoColor, Color::NoColor);
}

#[test]
fn debug_shows_decoded_fields() {
    let text = format!("{:?}", Piece::WHITE_QUEEN);
    assert_eq!(text, "Piece { kind: Queen, color: White }");
}
