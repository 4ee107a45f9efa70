//! 人机对局会话
//!
//! 持有棋盘、双方标记和难度，负责轮次与结果判定

use tracing::{debug, info};

use crate::board::Board;
use crate::constants::CELL_COUNT;
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::types::{Difficulty, GameOutcome};

/// 对局会话
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human: Mark,
    difficulty: Difficulty,
    current_turn: Mark,
    moves_played: usize,
}

impl GameSession {
    /// 创建新对局，AI 使用另一个标记
    pub fn new(human: Mark, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            human,
            difficulty,
            current_turn: Mark::X,
            moves_played: 0,
        }
    }

    /// 棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 玩家标记
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    /// AI 标记
    pub fn ai_mark(&self) -> Mark {
        self.human.opponent()
    }

    /// 难度
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 当前走子方
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// 是否轮到 AI
    pub fn is_ai_turn(&self) -> bool {
        !self.outcome().is_over() && self.current_turn == self.ai_mark()
    }

    /// 当前结果，每次由棋盘推导
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// 已走步数
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// 当前走子方落子
    pub fn play(&mut self, index: usize) -> Result<GameOutcome> {
        if index >= CELL_COUNT {
            return Err(GameError::OutOfRange { index });
        }
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }

        let mark = self.current_turn;
        if !self.board.apply_move(index, mark) {
            return Err(GameError::OccupiedCell { index });
        }
        self.moves_played += 1;
        debug!("{} 落子于 {}", mark, index);

        // 只有刚落下的一子可能构成三连
        let outcome = if self.board.is_winning_move(index, mark) {
            GameOutcome::Win(mark)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };

        if outcome.is_over() {
            info!("对局结束: {:?}，共 {} 步", outcome, self.moves_played);
        } else {
            self.current_turn = mark.opponent();
        }

        Ok(outcome)
    }

    /// 玩家落子
    pub fn play_human(&mut self, index: usize) -> Result<GameOutcome> {
        self.play_as(self.human, index)
    }

    /// AI 落子
    pub fn play_ai(&mut self, index: usize) -> Result<GameOutcome> {
        self.play_as(self.ai_mark(), index)
    }

    fn play_as(&mut self, mark: Mark, index: usize) -> Result<GameOutcome> {
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != mark {
            return Err(GameError::NotYourTurn);
        }
        self.play(index)
    }

    /// 再来一局：清空棋盘，保留标记和难度
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::X;
        self.moves_played = 0;
        info!("新对局开始，玩家: {}，难度: {:?}", self.human, self.difficulty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        let session = GameSession::new(Mark::O, Difficulty::Hard);
        assert_eq!(session.current_turn(), Mark::X);
        assert_eq!(session.ai_mark(), Mark::X);
        assert!(session.is_ai_turn());

        let session = GameSession::new(Mark::X, Difficulty::Hard);
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Mark::X, Difficulty::Medium);
        assert_eq!(session.play_human(4), Ok(GameOutcome::InProgress));
        assert_eq!(session.current_turn(), Mark::O);
        assert_eq!(session.play_human(0), Err(GameError::NotYourTurn));
        assert_eq!(session.play_ai(0), Ok(GameOutcome::InProgress));
        assert_eq!(session.current_turn(), Mark::X);
        assert_eq!(session.moves_played(), 2);
    }

    #[test]
    fn test_rejects_bad_moves_without_mutation() {
        let mut session = GameSession::new(Mark::X, Difficulty::Easy);
        session.play(4).unwrap();
        let before = session.board().clone();

        assert_eq!(session.play(4), Err(GameError::OccupiedCell { index: 4 }));
        assert_eq!(session.play(9), Err(GameError::OutOfRange { index: 9 }));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_turn(), Mark::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut session = GameSession::new(Mark::X, Difficulty::Hard);
        for index in [0, 3, 1, 4] {
            assert_eq!(session.play(index), Ok(GameOutcome::InProgress));
        }
        assert_eq!(session.play(2), Ok(GameOutcome::Win(Mark::X)));
        assert_eq!(session.outcome(), GameOutcome::Win(Mark::X));
        assert!(!session.is_ai_turn());
        assert_eq!(session.play(5), Err(GameError::GameOver));
        assert_eq!(session.play_ai(5), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut session = GameSession::new(Mark::X, Difficulty::Hard);
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(session.play(index), Ok(GameOutcome::InProgress));
        }
        assert_eq!(session.play(8), Ok(GameOutcome::Draw));
    }

    #[test]
    fn test_reset_keeps_setup() {
        let mut session = GameSession::new(Mark::O, Difficulty::Easy);
        session.play(0).unwrap();
        session.play(4).unwrap();
        session.reset();

        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_turn(), Mark::X);
        assert_eq!(session.human_mark(), Mark::O);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_outcome_follows_board() {
        let mut session = GameSession::new(Mark::X, Difficulty::Hard);
        for index in [0, 3, 1, 4, 2] {
            let outcome = session.play(index).unwrap();
            assert_eq!(outcome, session.outcome());
            assert_eq!(session.outcome(), session.board().outcome());
        }
        assert_eq!(session.outcome(), GameOutcome::Win(Mark::X));

        // 结果不单独缓存：棋盘清空后立即变回进行中
        session.board.reset();
        assert_eq!(session.outcome(), GameOutcome::InProgress);
    }
}
