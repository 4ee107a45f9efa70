//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    OccupiedCell { index: usize },

    /// 格子编号超出范围
    #[error("Cell index out of range: {index} (expected 0-8)")]
    OutOfRange { index: usize },

    /// 棋盘已满，无处可走
    #[error("No available move on a full board")]
    NoAvailableMove,

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘表示
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 无效的标记
    #[error("Invalid mark: {input:?} (expected X or O)")]
    InvalidMark { input: String },

    /// 无效的难度
    #[error("Invalid difficulty: {input:?}")]
    InvalidDifficulty { input: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
