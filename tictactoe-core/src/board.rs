//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{ANTI_DIAGONAL, BOARD_SIZE, CELL_COUNT, LINES, MAIN_DIAGONAL};
use crate::mark::Mark;
use crate::types::GameOutcome;

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col，`None` 表示空格
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 获取指定格子的标记
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 检查格子是否为空（越界视为不可用）
    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// 所有空格，升序
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// 已落子的格子数
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// 落子
    ///
    /// 目标格非空（或越界）时返回 `false`，棋盘不变。
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty_cell(index) {
            return false;
        }
        self.cells[index] = Some(mark);
        true
    }

    /// 撤销：把格子恢复为空
    pub fn undo(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    /// 落子并返回守卫，守卫释放时自动撤销
    ///
    /// 目标格非空时返回 `None`。
    pub fn place(&mut self, index: usize, mark: Mark) -> Option<Placement<'_>> {
        if self.apply_move(index, mark) {
            Some(Placement {
                board: self,
                index,
                mark,
            })
        } else {
            None
        }
    }

    /// 检查刚落下的一子是否构成三连
    ///
    /// 只检查经过 `index` 的行、列，以及（仅角和中心）两条对角线。
    /// 边格 1、3、5、7 不在任何对角线上，直接跳过对角线检查。
    pub fn is_winning_move(&self, index: usize, mark: Mark) -> bool {
        if index >= CELL_COUNT {
            return false;
        }

        let row = index / BOARD_SIZE;
        let row_start = row * BOARD_SIZE;
        if (row_start..row_start + BOARD_SIZE).all(|i| self.cells[i] == Some(mark)) {
            return true;
        }

        let col = index % BOARD_SIZE;
        if (0..BOARD_SIZE).all(|r| self.cells[col + r * BOARD_SIZE] == Some(mark)) {
            return true;
        }

        // 只有角和中心在对角线上
        index % 2 == 0
            && (self.line_is(&MAIN_DIAGONAL, mark) || self.line_is(&ANTI_DIAGONAL, mark))
    }

    /// 全盘扫描获胜方
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            self.line_is(line, first).then_some(first)
        })
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// 当前对局结果
    pub fn outcome(&self) -> GameOutcome {
        if let Some(mark) = self.winner() {
            GameOutcome::Win(mark)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// 清空棋盘
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// 所有格子
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    fn line_is(&self, line: &[usize; 3], mark: Mark) -> bool {
        line.iter().all(|&i| self.cells[i] == Some(mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// 一次尚未撤销的落子
///
/// 解引用为棋盘本身，`Drop` 时把该格恢复为空。
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
    mark: Mark,
}

impl Placement<'_> {
    /// 落子位置
    pub fn index(&self) -> usize {
        self.index
    }

    /// 落子标记
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// 这一子是否获胜
    pub fn is_winning(&self) -> bool {
        self.board.is_winning_move(self.index, self.mark)
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo(self.index);
    }
}
