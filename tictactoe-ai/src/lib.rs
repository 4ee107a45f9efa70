//! 井字棋 AI 引擎
//!
//! 包含:
//! - Minimax + Alpha-Beta 搜索（单棋盘落子/撤销）
//! - 难度配置
//! - 难度策略（开局走法、随机弱化）

mod config;
mod policy;
mod search;

pub use config::AiConfig;
pub use policy::{choose_ai_move, DifficultyPolicy};
pub use search::{SearchEngine, LOSS_SCORE, WIN_SCORE};

// 重导出 Difficulty 以便外部使用
pub use tictactoe_core::Difficulty;
