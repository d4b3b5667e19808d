use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    for d in Difficulty::ALL {
        assert_eq!(evaluate(&Board::startpos(), d), 0, "{d}");
    }
}

#[test]
fn test_beginner_counts_material_only() {
    // extra white queen
    let b = board("4k3/8/8/8/8/8/8/Q3K3");
    assert_eq!(evaluate(&b, Difficulty::Beginner), 900);

    // black is a rook and a knight up, position is irrelevant
    let b = board("rn2k3/8/8/8/8/8/8/4K3");
    assert_eq!(evaluate(&b, Difficulty::Beginner), -800);
    let b = board("4k3/8/8/3n4/8/8/8/r3K3");
    assert_eq!(evaluate(&b, Difficulty::Beginner), -800);
}

#[test]
fn test_kings_are_worth_nothing() {
    let b = board("8/8/8/8/8/8/8/4K3");
    assert_eq!(evaluate(&b, Difficulty::Beginner), 0);
}

#[test]
fn test_intermediate_adds_piece_square_tables() {
    let white = board("8/8/8/8/4N3/8/8/8");
    assert_eq!(evaluate(&white, Difficulty::Beginner), 300);
    assert_eq!(evaluate(&white, Difficulty::Intermediate), 330);

    // black knight on e5 mirrors to the same table entry
    let black = board("8/8/8/4n3/8/8/8/8");
    assert_eq!(evaluate(&black, Difficulty::Intermediate), -330);

    // a knight in the corner is worth less than in the middle
    let corner = board("8/8/8/8/8/8/8/N7");
    assert_eq!(evaluate(&corner, Difficulty::Intermediate), 250);

    // rooks have no table
    let rook = board("8/8/8/8/4R3/8/8/8");
    assert_eq!(evaluate(&rook, Difficulty::Intermediate), 500);
}

#[test]
fn test_advanced_central_pawns_score_higher() {
    let home = evaluate(&board("8/8/8/8/8/8/4P3/8"), Difficulty::Intermediate);
    let advanced = evaluate(&board("8/8/8/4P3/8/8/8/8"), Difficulty::Intermediate);
    let edge = evaluate(&board("8/8/8/P7/8/8/8/8"), Difficulty::Intermediate);
    assert!(advanced > home);
    assert!(advanced > edge);
}

#[test]
fn test_expert_strategic_terms() {
    // 300 material + 30 table + 30 center + 8 * 5 mobility + 20 development
    let b = board("8/8/8/8/4N3/8/8/8");
    assert_eq!(evaluate(&b, Difficulty::Expert), 420);
}

#[test]
fn test_expert_penalizes_central_king() {
    // e4: 30 center + 40 mobility - 30 penalty
    let central = board("8/8/8/8/4K3/8/8/8");
    assert_eq!(evaluate(&central, Difficulty::Expert), 40);

    // a1: 15 mobility, no penalty on the edge ring
    let corner = board("8/8/8/8/8/8/8/K7");
    assert_eq!(evaluate(&corner, Difficulty::Expert), 15);

    // below expert the king contributes nothing
    assert_eq!(evaluate(&central, Difficulty::Intermediate), 0);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        "4k3/8/8/8/8/8/8/Q3K3",
    ];
    for fen in fens {
        let b = board(fen);
        let flipped = b.color_flipped();
        for d in Difficulty::ALL {
            assert_eq!(evaluate(&b, d), -evaluate(&flipped, d), "{fen} at {d}");
        }
    }
}
