//! 难度配置

use serde::{Deserialize, Serialize};
use tictactoe_core::Difficulty;

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 每回合调用完整搜索的概率，否则随机走子
    pub search_probability: f64,
    /// 空格数大于该值时使用开局走法（中心 → 角 → 随机）
    pub opening_threshold: Option<usize>,
    /// 搜索内部每个节点提前返回随机走法的概率
    pub node_noise: f64,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                search_probability: 0.3,
                opening_threshold: None,
                node_noise: 0.5,
            },
            Difficulty::Medium => Self {
                difficulty,
                search_probability: 1.0,
                opening_threshold: Some(6),
                node_noise: 0.0,
            },
            Difficulty::Hard => Self {
                difficulty,
                search_probability: 1.0,
                opening_threshold: None,
                node_noise: 0.0,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}
