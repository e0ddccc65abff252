//! Integration tests for the PAWNWAR solver
//!
//! Tests the full stack: board files, move generation, tree expansion and
//! alpha-beta search

use std::path::PathBuf;

use pawnwar_core::{
    apply_move, diagonal_point, evaluate_terminal, forward_point, generate_moves, legal_moves,
    load_board, load_board_or_default, parse_board, AlphaBetaSearch, Board, Cell, GameNode, Move,
    Point, SearchConfig, Side, TraceRecorder, BLACK_WIN, CELLS, UNDECIDED, WHITE_WIN,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn p(row: i8, col: i8) -> Point {
    Point::new(row, col)
}

fn board(text: &str) -> Board {
    parse_board(text).unwrap()
}

/// Three pieces a side, two empty rows between them
fn three_a_side() -> Board {
    board("XXX\nBBB\nXXX\nXXX\nWWW\nXXX")
}

/// Random mid-game board with no piece on either goal row
fn random_board(rng: &mut ChaCha8Rng) -> Board {
    let mut board = Board::empty();
    for row in 1..5 {
        for col in 0..3 {
            let cell = match rng.gen_range(0..4) {
                0 => Cell::White,
                1 => Cell::Black,
                _ => Cell::Empty,
            };
            board = board.with(p(row, col), cell);
        }
    }
    board
}

fn temp_board_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pawnwar-{}-{}.txt", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// BOARD PROPERTIES
// ============================================================================

#[test]
fn test_cell_counts_always_cover_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let b = random_board(&mut rng);
        let total = b.count_pieces(Side::White) + b.count_pieces(Side::Black) + b.count(Cell::Empty);
        assert_eq!(total, CELLS);
    }
}

#[test]
fn test_generated_moves_stay_on_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..200 {
        let b = random_board(&mut rng);
        for side in [Side::White, Side::Black] {
            for from in b.pieces(side) {
                for to in generate_moves(&b, from, side) {
                    assert!(to.is_on_board(), "{from} -> {to} left the board");
                    assert_ne!(b.get(to), Some(Cell::from(side)), "{from} -> {to} self-capture");
                    assert_eq!(to.row - from.row, side.forward());
                    assert!((to.col - from.col).abs() <= 1);
                }
            }
        }
    }
}

#[test]
fn test_apply_move_piece_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..100 {
        let b = random_board(&mut rng);
        for side in [Side::White, Side::Black] {
            let opponent = side.opponent();
            for mv in legal_moves(&b, side) {
                let captured = b.get(mv.to) == Some(Cell::from(opponent));
                let next = apply_move(&b, mv.from, mv.to, side).unwrap();

                assert_eq!(next.count_pieces(side), b.count_pieces(side));
                let expected = b.count_pieces(opponent) - usize::from(captured);
                assert_eq!(next.count_pieces(opponent), expected);

                if !captured {
                    let rebuilt = b.with(mv.from, Cell::Empty).with(mv.to, Cell::from(side));
                    assert_eq!(next, rebuilt);
                }
            }
        }
    }
}

#[test]
fn test_terminal_evaluation_is_stable() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..100 {
        let b = random_board(&mut rng);
        assert_eq!(evaluate_terminal(&b), evaluate_terminal(&b));
        assert!([WHITE_WIN, UNDECIDED, BLACK_WIN].contains(&evaluate_terminal(&b)));
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_white_on_goal_row_wins_without_expansion() {
    let b = Board::standard().with(p(0, 0), Cell::White);
    assert_eq!(evaluate_terminal(&b), WHITE_WIN);

    let mut root = GameNode::root(b);
    let outcome = AlphaBetaSearch::default().solve_node(&mut root).unwrap();
    assert_eq!(outcome.value, WHITE_WIN);
    assert_eq!(outcome.stats.expansions, 0);
    assert!(root.children().is_empty());
}

#[test]
fn test_no_black_pieces_is_white_win() {
    let b = board("XXX\nXXX\nXWX\nXXX\nXXX\nXXX");
    assert_eq!(evaluate_terminal(&b), WHITE_WIN);
    for side in [Side::White, Side::Black] {
        let mut root = GameNode::new(b, side);
        let outcome = AlphaBetaSearch::default().solve_node(&mut root).unwrap();
        assert_eq!(outcome.value, WHITE_WIN);
    }
}

#[test]
fn test_forward_blocked_by_own_piece() {
    let b = Board::empty()
        .with(p(5, 1), Cell::White)
        .with(p(4, 1), Cell::White)
        .with(p(4, 0), Cell::Black);
    assert_eq!(forward_point(&b, p(5, 1), Side::White), None);
    // Left diagonal captures, right diagonal is empty
    assert_eq!(diagonal_point(&b, p(5, 1), Side::White, true), Some(p(4, 0)));
    assert_eq!(diagonal_point(&b, p(5, 1), Side::White, false), Some(p(4, 2)));
    assert_eq!(generate_moves(&b, p(5, 1), Side::White), vec![p(4, 0), p(4, 2)]);
}

#[test]
fn test_left_diagonal_from_column_zero() {
    for b in [Board::empty(), Board::standard(), three_a_side()] {
        for row in 1..6 {
            assert_eq!(diagonal_point(&b, p(row, 0), Side::White, true), None);
        }
    }
}

#[test]
fn test_three_a_side_search() {
    let outcome = AlphaBetaSearch::default().solve(three_a_side()).unwrap();

    assert_eq!(outcome.value, WHITE_WIN);
    assert_eq!(outcome.best_move, Some(Move::new(p(4, 0), p(3, 0))));
    assert_eq!(outcome.stats.nodes_visited, 14652);
    assert_eq!(outcome.stats.max_depth, 16);
    assert_eq!(outcome.stats.stalled_nodes, 0);
}

#[test]
fn test_two_a_side_search() {
    let b = board("XXX\nBXB\nXXX\nXXX\nWXW\nXXX");
    let outcome = AlphaBetaSearch::default().solve(b).unwrap();

    assert_eq!(outcome.value, WHITE_WIN);
    assert_eq!(outcome.best_move, Some(Move::new(p(4, 0), p(3, 1))));
    assert_eq!(outcome.stats.nodes_visited, 1074);
}

#[test]
fn test_losing_root_reports_last_move() {
    // White starts from its back row and loses every line
    let b = board("XXX\nBBB\nXXX\nXXX\nXXX\nWWW");
    let outcome = AlphaBetaSearch::default().solve(b).unwrap();

    assert_eq!(outcome.value, BLACK_WIN);
    assert_eq!(outcome.best_move, Some(Move::new(p(5, 2), p(4, 2))));
    assert_eq!(outcome.stats.nodes_visited, 294_992);
}

#[test]
fn test_retained_and_discarded_trees_agree() {
    let b = board("XXX\nBXB\nXXX\nXXX\nWXW\nXXX");

    let mut kept = GameNode::root(b);
    let retained = AlphaBetaSearch::new(SearchConfig::retaining())
        .solve_node(&mut kept)
        .unwrap();
    let discarded = AlphaBetaSearch::default().solve(b).unwrap();

    assert_eq!(retained, discarded);
    assert_eq!(kept.best_child().and_then(GameNode::last_move), retained.best_move);
}

#[test]
fn test_black_root_never_records_move() {
    // Same position with Black to move: Black wins, but the root decision is
    // only ever recorded for White
    let mut root = GameNode::new(three_a_side(), Side::Black);
    let outcome = AlphaBetaSearch::default().solve_node(&mut root).unwrap();

    assert_eq!(outcome.value, BLACK_WIN);
    assert_eq!(outcome.stats.nodes_visited, 12_466);
    assert_eq!(outcome.best_move, None);
    assert_eq!(root.best_child_index(), None);
}

#[test]
fn test_trace_matches_stats() {
    let mut recorder = TraceRecorder::new();
    let outcome = AlphaBetaSearch::with_observer(SearchConfig::default(), &mut recorder)
        .solve(three_a_side())
        .unwrap();

    // Every visited node except the root is reported once by its parent
    assert_eq!(recorder.events().len() as u64, outcome.stats.nodes_visited - 1);
    assert_eq!(recorder.cutoffs().count() as u64, outcome.stats.cutoffs);
    let root_events: Vec<_> = recorder.events().iter().filter(|e| e.depth == 1).collect();
    assert!(root_events.iter().all(|e| e.side == Side::White));
    assert_eq!(root_events[0].mv, Move::new(p(4, 0), p(3, 0)));
}

/// Full solve of the standard start. Takes a long time; run with
/// `cargo test --release -- --ignored`.
///
/// A memoized solver with the same move order finds all seven White openings
/// winning, so the first child, searched with an open window, is kept.
#[test]
#[ignore]
fn test_standard_board_white_wins() {
    let outcome = AlphaBetaSearch::default().solve(Board::standard()).unwrap();

    assert_eq!(outcome.value, WHITE_WIN);
    let mv = outcome.best_move.unwrap();
    assert_eq!(mv.from.row, 4);
    assert_eq!(mv.to.row, 3);
    assert!((mv.to.col - mv.from.col).abs() <= 1);
    assert_eq!(mv, Move::new(p(4, 0), p(3, 0)));
}

// ============================================================================
// BOARD FILES
// ============================================================================

#[test]
fn test_load_board_file() {
    let path = temp_board_file("valid", "XXX\nBBB\nXXX\nXXX\nWWW\nXXX\n");
    let loaded = load_board(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, three_a_side());
}

#[test]
fn test_short_file_falls_back_to_standard() {
    let path = temp_board_file("short", "BBB\nBBB\nXXX\n");
    let loaded = load_board_or_default(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, Board::standard());
}

#[test]
fn test_missing_file_falls_back_to_standard() {
    let path = std::env::temp_dir().join("pawnwar-no-such-board.txt");
    assert!(load_board(&path).is_err());
    assert_eq!(load_board_or_default(&path), Board::standard());
}
