//! 对局结果与难度

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::mark::Mark;

/// 对局结果（由棋盘推导，不单独存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// 进行中
    InProgress,
    /// 一方三连获胜
    Win(Mark),
    /// 棋盘已满且无人获胜
    Draw,
}

impl GameOutcome {
    /// 对局是否已结束
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// 简单：30% 概率搜索，搜索内部还会随机走子
    Easy,
    /// 中等：开局走中心/角，残局完整搜索
    #[default]
    Medium,
    /// 困难：始终完整搜索
    Hard,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty {
                input: s.to_string(),
            }),
        }
    }
}
