//! 困难模式完美对弈测试
//!
//! 穷举玩家的所有走法序列，困难 AI 不能输；
//! 两个困难 AI 对弈必为和棋。

use tictactoe_ai::{choose_ai_move, DifficultyPolicy, SearchEngine};
use tictactoe_core::{Board, Difficulty, GameOutcome, GameSession, Mark};

/// 穷举：玩家在每个局面尝试每个空格，AI 按困难策略应对
fn explore(session: &GameSession, policy: &mut DifficultyPolicy, games: &mut usize) {
    match session.outcome() {
        GameOutcome::InProgress => {}
        GameOutcome::Win(mark) => {
            assert_eq!(
                mark,
                session.ai_mark(),
                "AI lost: {}",
                tictactoe_core::Notation::to_string(session.board())
            );
            *games += 1;
            return;
        }
        GameOutcome::Draw => {
            *games += 1;
            return;
        }
    }

    if session.is_ai_turn() {
        let mut next = session.clone();
        let mv = policy
            .choose_ai_move(next.board(), next.ai_mark())
            .expect("board is not full");
        next.play_ai(mv).unwrap();
        explore(&next, policy, games);
    } else {
        for mv in session.board().available_moves() {
            let mut next = session.clone();
            next.play_human(mv).unwrap();
            explore(&next, policy, games);
        }
    }
}

#[test]
fn hard_ai_never_loses_as_o() {
    let mut policy = DifficultyPolicy::with_seed(Difficulty::Hard, 0);
    let mut games = 0;
    explore(&GameSession::new(Mark::X, Difficulty::Hard), &mut policy, &mut games);
    assert!(games > 0);
}

#[test]
fn hard_ai_never_loses_as_x() {
    let mut policy = DifficultyPolicy::with_seed(Difficulty::Hard, 0);
    let mut games = 0;
    explore(&GameSession::new(Mark::O, Difficulty::Hard), &mut policy, &mut games);
    assert!(games > 0);
}

#[test]
fn medium_ai_never_loses_as_o() {
    // 中等模式开局只占中心或角，之后完整搜索，同样不会输
    for seed in 0..5 {
        let mut policy = DifficultyPolicy::with_seed(Difficulty::Medium, seed);
        let mut games = 0;
        explore(&GameSession::new(Mark::X, Difficulty::Medium), &mut policy, &mut games);
        assert!(games > 0);
    }
}

#[test]
fn hard_self_play_is_draw() {
    let mut board = Board::new();
    let mut mark = Mark::X;

    while !board.outcome().is_over() {
        let mv = choose_ai_move(&board, mark, Difficulty::Hard).unwrap();
        assert!(board.apply_move(mv, mark));
        mark = mark.opponent();
    }

    assert_eq!(board.outcome(), GameOutcome::Draw);
}

#[test]
fn search_engine_reports_draw_on_full_board() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(board.is_full());
    for index in 0..9 {
        assert!(!board.is_winning_move(index, board.get(index).unwrap()));
    }

    let mut engine = SearchEngine::new(board, Mark::O);
    assert_eq!(engine.best_move(true), (0, None));
}
