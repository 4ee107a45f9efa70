//! 井字棋核心规则库
//!
//! 包含:
//! - 棋盘状态（落子、撤销、胜负判定）
//! - 棋子标记、对局结果、难度等核心数据结构
//! - 错误类型
//! - 棋盘文本表示法
//! - 人机对局会话

mod board;
mod constants;
mod error;
mod game;
mod mark;
mod notation;
mod types;

pub use board::{Board, Placement};
pub use constants::*;
pub use error::{GameError, Result};
pub use game::GameSession;
pub use mark::Mark;
pub use notation::Notation;
pub use types::{Difficulty, GameOutcome};
