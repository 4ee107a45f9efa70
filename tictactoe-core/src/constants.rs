//! 棋盘常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 中心格
pub const CENTER: usize = 4;

/// 四个角
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 所有连线（3 行、3 列、2 条对角线）
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 主对角线
pub const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];

/// 副对角线
pub const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];
