use super::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn session_from(fen: &str, side: Color) -> GameSession {
    GameSession::from_board(
        Board::from_fen(fen).unwrap(),
        side,
        GameMode::HumanVsHuman,
        Difficulty::Beginner,
    )
}

#[test]
fn test_new_session() {
    let s = GameSession::new(GameMode::HumanVsAi, Difficulty::Expert);
    assert_eq!(s.status(), GameStatus::AwaitingMove(Color::White));
    assert_eq!(s.board(), &Board::startpos());
    assert!(s.captured_by(Color::White).is_empty());
    assert!(s.captured_by(Color::Black).is_empty());
    assert_eq!(s.difficulty(), Difficulty::Expert);
    assert!(!s.engine_to_move());
}

#[test]
fn test_opening_pawn_push() {
    let mut s = GameSession::new(GameMode::HumanVsHuman, Difficulty::Beginner);
    let from = Square::new(4, 6).unwrap();
    let to = Square::new(4, 4).unwrap();
    assert!(s.legal_destinations(from).contains(&to));

    let outcome = s.apply_move(from, to);
    assert_eq!(
        outcome,
        MoveOutcome {
            accepted: true,
            captured: None,
            terminal: None
        }
    );
    assert_eq!(s.side_to_move(), Some(Color::Black));
    assert!(s.board().piece_at(from).is_none());
    assert_eq!(s.history(), &[Move::new(from, to)]);
}

#[test]
fn test_rejections_leave_session_untouched() {
    let mut s = GameSession::new(GameMode::HumanVsHuman, Difficulty::Beginner);
    let before = s.board().clone();

    // empty source
    assert_eq!(s.try_move(sq("e4"), sq("e5")), Err(MoveError::EmptySquare(sq("e4"))));
    assert!(!s.apply_move(sq("e4"), sq("e5")).accepted);

    // opponent's piece
    assert!(matches!(
        s.try_move(sq("e7"), sq("e5")),
        Err(MoveError::NotYourPiece { .. })
    ));

    // not a generated destination
    assert_eq!(
        s.try_move(sq("e2"), sq("e5")),
        Err(MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5")
        })
    );

    // off the board
    assert!(!s.apply_move_xy((4, 6), (4, 8)).accepted);
    assert!(!s.apply_move_xy((-1, 6), (4, 4)).accepted);

    assert_eq!(s.board(), &before);
    assert_eq!(s.side_to_move(), Some(Color::White));
    assert!(s.history().is_empty());
}

#[test]
fn test_pointer_coordinates() {
    let mut s = GameSession::new(GameMode::HumanVsHuman, Difficulty::Beginner);
    assert!(s.apply_move_xy((4, 6), (4, 4)).accepted);
}

#[test]
fn test_capture_is_recorded() {
    let mut s = session_from("4k3/8/8/3p4/4P3/8/8/4K3", Color::White);
    let outcome = s.apply_move(sq("e4"), sq("d5"));
    let pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_eq!(outcome.captured, Some(pawn));
    assert_eq!(outcome.terminal, None);
    assert_eq!(s.captured_by(Color::White), &[pawn]);
    assert_eq!(s.captured_symbols(Color::White, GlyphSet::Classic), vec!["♟"]);
}

#[test]
fn test_king_capture_ends_game() {
    let mut s = session_from("4k3/8/8/8/8/8/8/4R2K", Color::White);
    let outcome = s.apply_move(sq("e1"), sq("e8"));
    assert!(outcome.accepted);
    assert_eq!(outcome.terminal, Some(Color::White));
    assert_eq!(outcome.captured, Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(s.status(), GameStatus::Won(Color::White));
    assert_eq!(s.winner(), Some(Color::White));
    assert!(s.is_terminal());
    assert_eq!(s.side_to_move(), None);

    // nothing moves after the king is gone
    assert_eq!(s.try_move(sq("h1"), sq("h2")), Err(MoveError::GameOver));
    assert!(!s.apply_move(sq("h1"), sq("h2")).accepted);
}

#[test]
fn test_king_may_step_into_attack() {
    // no check rule: the king may walk onto the rook's file
    let mut s = session_from("4r2k/8/8/8/8/8/8/4K3", Color::White);
    assert!(s.apply_move(sq("e1"), sq("d2")).accepted);
    let mut s = session_from("4r2k/8/8/8/8/8/8/3K4", Color::White);
    assert!(s.apply_move(sq("d1"), sq("e2")).accepted);

    // and Black takes it
    let outcome = s.apply_move(sq("e8"), sq("e2"));
    assert_eq!(outcome.terminal, Some(Color::Black));
    assert_eq!(s.winner(), Some(Color::Black));
}

#[test]
fn test_side_without_moves_draws() {
    // Black's only pawn is jammed against White's pawn
    let mut s = session_from("8/8/8/8/8/4p3/4P3/K7", Color::White);
    let outcome = s.apply_move(sq("a1"), sq("a2"));
    assert!(outcome.accepted);
    assert_eq!(s.status(), GameStatus::Drawn);
    assert!(s.is_terminal());
    assert_eq!(s.winner(), None);
}

#[test]
fn test_engine_turn_detection() {
    let mut s = GameSession::new(GameMode::HumanVsAi, Difficulty::Beginner);
    assert!(s.apply_move(sq("e2"), sq("e4")).accepted);
    assert!(s.engine_to_move());

    let mut s = GameSession::new(GameMode::HumanVsHuman, Difficulty::Beginner);
    assert!(s.apply_move(sq("e2"), sq("e4")).accepted);
    assert!(!s.engine_to_move());
}
