use super::*;

#[test]
fn side_mapping_is_total() {
    assert_eq!(Piece::Empty.side(), None);
    assert_eq!(Piece::Attacker.side(), Some(Side::Attacker));
    assert_eq!(Piece::Defender.side(), Some(Side::Defender));
    assert_eq!(Piece::King.side(), Some(Side::Defender));
}

#[test]
fn opponent_round_trip() {
    assert_eq!(Side::Attacker.opponent(), Side::Defender);
    assert_eq!(Side::Defender.opponent().opponent(), Side::Defender);
}

#[test]
fn piece_char_round_trip() {
    for piece in [Piece::Empty, Piece::Attacker, Piece::Defender, Piece::King] {
        assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
    }
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn move_display() {
    let mv = Move::new(Square::at(0, 0), Square::at(0, 3));
    assert_eq!(mv.to_string(), "a1-a4");
    let mv = Move::new(Square::at(4, 4), Square::at(8, 4));
    assert_eq!(mv.to_string(), "e5-i5");
}
