//! Search engine behavior: optimality, pruning transparency, error cases.

use strictly_minimax::{
    Algorithm, AlphaBeta, Board, GameErrorKind, Memoized, Minimax, Move, Player, Search,
    best_move, reachable_boards,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_completes_winning_row() {
    // X: (0,0) (0,1); O: (1,0) (1,1); X to move.
    let board = board("XX./OO./...");
    let mv = best_move(&board).unwrap();
    assert_eq!(mv, Move::new(0, 2));
    assert_eq!(board.apply(mv).unwrap().utility(), Some(1));
}

#[test]
fn test_every_algorithm_completes_winning_row() {
    let board = board("XX./OO./...");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Memoized] {
        let mut search = algorithm.searcher();
        assert_eq!(search.best_move(&board).unwrap(), Move::new(0, 2));
    }
}

#[test]
fn test_o_wins_instead_of_blocking() {
    // O can win on the middle row before X completes the top row.
    let board = board("XX./OO./X..");
    let result = AlphaBeta::new().search(&board).unwrap();
    assert_eq!(result.best_move, Some(Move::new(1, 2)));
    assert_eq!(result.value, -1);
}

#[test]
fn test_best_move_on_terminal_board_fails() {
    for board in reachable_boards().into_iter().filter(Board::is_terminal) {
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Memoized] {
            let err = algorithm.searcher().best_move(&board).unwrap_err();
            assert_eq!(err.kind(), &GameErrorKind::TerminalState);
        }
    }
}

#[test]
fn test_search_on_terminal_board_returns_utility() {
    let board = board("OOO/XX./X.X");
    let result = Minimax::new().search(&board).unwrap();
    assert_eq!(result.value, -1);
    assert_eq!(result.best_move, None);
}

#[test]
fn test_invalid_board_is_rejected() {
    let bad = board("XXX/X../...");
    let err = AlphaBeta::new().search(&bad).unwrap_err();
    assert_eq!(
        err.kind(),
        &GameErrorKind::InvalidState {
            x_count: 4,
            o_count: 0
        }
    );

    let err = best_move(&board("OO./.../...")).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InvalidState { .. }));
}

#[test]
fn test_invalid_terminal_board_reports_invalid_state() {
    let bad = board("XXX/XXX/...");
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Memoized] {
        let err = algorithm.searcher().best_move(&bad).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidState {
                x_count: 6,
                o_count: 0
            }
        );
    }
}

#[test]
fn test_pruning_never_changes_the_value() {
    let mut reference = Memoized::new();
    let mut pruned = AlphaBeta::new();
    let mut full = Minimax::new();

    for board in reachable_boards() {
        let expected = reference.search(&board).unwrap();
        let ab = pruned.search(&board).unwrap();
        assert_eq!(ab.value, expected.value, "board {}", board.notation());

        if board.count(Player::X) + board.count(Player::O) >= 2 {
            let mm = full.search(&board).unwrap();
            assert_eq!(mm.value, ab.value, "board {}", board.notation());
            assert!(ab.stats.nodes <= mm.stats.nodes);
        }
    }
}

#[test]
fn test_selected_moves_are_optimal() {
    let mut reference = Memoized::new();

    for board in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        let value = reference.search(&board).unwrap().value;
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Memoized] {
            let mv = algorithm.searcher().best_move(&board).unwrap();
            let child = board.apply(mv).unwrap();
            assert_eq!(
                reference.search(&child).unwrap().value,
                value,
                "{} chose a suboptimal move on {}",
                algorithm,
                board.notation()
            );
        }
    }
}

#[test]
fn test_alpha_beta_picks_the_same_move_as_minimax() {
    let mut pruned = AlphaBeta::new();
    let mut full = Minimax::new();

    for board in reachable_boards()
        .into_iter()
        .filter(|b| !b.is_terminal() && b.count(Player::X) + b.count(Player::O) >= 2)
    {
        assert_eq!(
            pruned.best_move(&board).unwrap(),
            full.best_move(&board).unwrap(),
            "board {}",
            board.notation()
        );
    }
}

#[test]
fn test_tie_break_is_first_in_row_major_order() {
    // Every opening move draws, so the first one is chosen.
    assert_eq!(best_move(&Board::initial()).unwrap(), Move::new(0, 0));
    assert_eq!(
        Minimax::new().best_move(&Board::initial()).unwrap(),
        Move::new(0, 0)
    );
}

#[test]
fn test_repeated_searches_are_deterministic() {
    let board = board("X../.O./...");
    let first = AlphaBeta::new().search(&board).unwrap();
    let second = AlphaBeta::new().search(&board).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_self_play_is_a_draw() {
    for algorithm in [Algorithm::AlphaBeta, Algorithm::Memoized] {
        let mut search = algorithm.searcher();
        let mut board = Board::initial();
        while !board.is_terminal() {
            let mv = search.best_move(&board).unwrap();
            board = board.apply(mv).unwrap();
        }
        assert_eq!(board.utility(), Some(0), "{} lost a game to itself", algorithm);
    }
}

/// Plays `search` as `side` against every possible sequence of opponent
/// moves and returns the worst utility reached from `side`'s point of view.
fn worst_case(search: &mut dyn Search, board: Board, side: Player) -> i32 {
    if let Some(utility) = board.utility() {
        return if side.is_maximizing() { utility } else { -utility };
    }

    if board.next_player().unwrap() == side {
        let mv = search.best_move(&board).unwrap();
        worst_case(search, board.apply(mv).unwrap(), side)
    } else {
        board
            .legal_moves()
            .into_iter()
            .map(|mv| worst_case(search, board.apply(mv).unwrap(), side))
            .min()
            .unwrap()
    }
}

#[test]
fn test_engine_never_loses() {
    let mut search = Memoized::new();
    assert_eq!(worst_case(&mut search, Board::initial(), Player::X), 0);
    assert_eq!(worst_case(&mut search, Board::initial(), Player::O), 0);
}
