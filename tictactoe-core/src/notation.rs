//! 棋盘文本表示法
//!
//! 紧凑格式：按索引顺序的 9 个字符，`X`/`O` 为棋子，`.`、`-`、`_` 或空格为空格子。
//! 空格占一个格子；行分隔符 `/`、制表符与换行会被忽略。
//!
//! 示例：`XX./OO./...`

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::GameError;
use crate::mark::Mark;

/// 棋盘网格的行分隔线
const ROW_SEPARATOR: &str = "---------";

/// 文本表示法处理
pub struct Notation;

impl Notation {
    /// 解析紧凑格式
    pub fn parse(text: &str) -> Result<Board, GameError> {
        let mut board = Board::new();
        let mut index = 0usize;

        for c in text.chars() {
            if matches!(c, '/' | '\t' | '\n' | '\r') {
                continue;
            }

            if index >= CELL_COUNT {
                return Err(GameError::InvalidNotation {
                    reason: format!("More than {} cells", CELL_COUNT),
                });
            }

            match c {
                '.' | '-' | '_' | ' ' => {}
                _ => {
                    let mark = Mark::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {:?}", c),
                    })?;
                    board.apply_move(index, mark);
                }
            }
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} cells, got {}", CELL_COUNT, index),
            });
        }

        Ok(board)
    }

    /// 生成紧凑格式（行之间用 `/` 分隔）
    pub fn to_string(board: &Board) -> String {
        let mut result = String::with_capacity(CELL_COUNT + BOARD_SIZE - 1);
        for (index, cell) in board.cells().iter().enumerate() {
            if index > 0 && index % BOARD_SIZE == 0 {
                result.push('/');
            }
            result.push(cell.map_or('.', |mark| mark.to_char()));
        }
        result
    }

    /// 格子编号参考图
    pub fn position_guide() -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                (row * BOARD_SIZE..(row + 1) * BOARD_SIZE)
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();
        rows.join("\n")
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::parse(s)
    }
}

/// 按原样的 3 行网格显示
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (row * BOARD_SIZE..(row + 1) * BOARD_SIZE)
                .map(|i| self.get(i).map_or(' ', |mark| mark.to_char()).to_string())
                .collect();
            write!(f, "{}", line.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                write!(f, "\n{}\n", ROW_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let board = Notation::parse("XX./OO./...").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::X));
        assert_eq!(board.get(2), None);
        assert_eq!(board.get(3), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.available_moves(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_lowercase_and_blanks() {
        let board: Board = "x o\n o \n  x".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(2), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.get(8), Some(Mark::X));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_tabs_separate_but_spaces_are_cells() {
        let board = Notation::parse("X.O\t.X.\tO.X").unwrap();
        assert_eq!(Notation::to_string(&board), "X.O/.X./O.X");

        // 空格是空格子，多出的空格会超出 9 格
        let board = Notation::parse("X  \t O \t  O").unwrap();
        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 7]);
        assert!(Notation::parse("X . O . . . . . .").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Notation::parse("XX"),
            Err(GameError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Notation::parse(".........."),
            Err(GameError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Notation::parse("XXZ......"),
            Err(GameError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_to_string() {
        let board = Notation::parse("X.O.X.O.X").unwrap();
        assert_eq!(Notation::to_string(&board), "X.O/.X./O.X");
        assert_eq!(Notation::parse(&Notation::to_string(&board)).unwrap(), board);
    }

    #[test]
    fn test_display_grid() {
        let board = Notation::parse("X.O......").unwrap();
        let expected = "X |   | O\n---------\n  |   |  \n---------\n  |   |  ";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_position_guide() {
        assert_eq!(Notation::position_guide(), "0 | 1 | 2\n3 | 4 | 5\n6 | 7 | 8");
    }
}
