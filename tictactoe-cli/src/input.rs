//! 输入解析

use thiserror::Error;
use tictactoe_core::{Difficulty, Mark, CELL_COUNT};

/// 走子输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// 落子到指定格
    Move(usize),
    /// 退出游戏
    Quit,
}

/// 输入错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("请输入 0-8 之间的数字，或输入 q 退出")]
    NotANumber,

    #[error("无效的位置 {0}，请输入 0-8 之间的数字")]
    OutOfRange(usize),
}

/// 解析走子输入：`0`-`8`，或 `q`/`quit`/`exit`
pub fn parse_move_input(line: &str) -> Result<MoveInput, InputError> {
    let line = line.trim();
    if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(MoveInput::Quit);
    }

    let index: usize = line.parse().map_err(|_| InputError::NotANumber)?;
    if index >= CELL_COUNT {
        return Err(InputError::OutOfRange(index));
    }
    Ok(MoveInput::Move(index))
}

/// 解析 y/n
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// 解析难度选择，空输入使用默认值
pub fn parse_difficulty_choice(line: &str, default: Difficulty) -> Option<Difficulty> {
    if line.trim().is_empty() {
        return Some(default);
    }
    line.parse().ok()
}

/// 解析标记选择，空输入使用默认值
pub fn parse_mark_choice(line: &str, default: Mark) -> Option<Mark> {
    if line.trim().is_empty() {
        return Some(default);
    }
    line.parse().ok()
}
