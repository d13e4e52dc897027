use masterdrez::core::{
    apply_move, generate, place, Board, Color, Loc, OccupiedPolicy, PieceKind, START_FEN,
};

#[test]
fn test_king_walk_from_fresh_board() {
    let board = place(generate()).unwrap();

    let home = Loc::new(8, 15);
    let king = *board.get_piece(&home).unwrap();
    assert_eq!((king.color, king.kind), (Color::White, PieceKind::King));

    let target = Loc::new(5, 5);
    assert!(target.is_playable());
    assert!(board.get_piece(&target).is_none());

    let (next, outcome) = apply_move(&board, &king, target).unwrap();

    assert_eq!(outcome.from, Some(home));
    assert_eq!(next.get_piece(&target), Some(&king));
    assert!(next.get_piece(&home).is_none());
    assert_eq!(next.piece_count(), 64);

    let untouched = board.pieces().filter(|(loc, _)| *loc != home);
    let mut count = 0;
    for (loc, piece) in untouched {
        assert_eq!(next.get_piece(&loc), Some(piece), "{} changed", loc);
        count += 1;
    }
    assert_eq!(count, 63);
}

#[test]
fn test_overwrite_drops_the_occupant() {
    let mut board = Board::start().unwrap();
    let rook = *board.get_piece(&Loc::new(0, 4)).unwrap();
    let victim = *board.get_piece(&Loc::new(14, 4)).unwrap();

    let outcome = board
        .move_piece_with(&rook, Loc::new(14, 4), OccupiedPolicy::Overwrite)
        .unwrap();

    assert_eq!(outcome.displaced, Some(victim));
    assert_eq!(board.find_piece(&victim), None);
    assert_eq!(board.piece_count(), 63);
    board.validate().unwrap();
}

#[test]
fn test_round_trip_through_notation_after_moves() {
    let mut board = Board::from_fen(START_FEN).unwrap();
    let moves = [
        (Loc::new(4, 14), Loc::new(4, 12)),
        (Loc::new(1, 7), Loc::new(3, 7)),
        (Loc::new(10, 0), Loc::new(9, 2)),
        (Loc::new(14, 9), Loc::new(12, 9)),
    ];

    for (from, to) in moves {
        let piece = *board.piece_at(&from).unwrap();
        board.move_piece(&piece, to).unwrap();
    }

    let fen = board.to_fen();
    assert_ne!(fen, START_FEN);
    assert_eq!(Board::from_fen(&fen).unwrap().to_fen(), fen);
}
