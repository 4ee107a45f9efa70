//! 文本界面渲染

use tictactoe_core::{GameSession, Mark, Notation};

/// ANSI 清屏并把光标移到左上角
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// 棋盘缩进
const INDENT: &str = "          ";

pub const HUMAN_WIN_BANNER: &str = "恭喜！你赢了！";
pub const AI_WIN_BANNER: &str = "AI 获胜！下次好运！";
pub const DRAW_BANNER: &str = "平局！好棋！";

/// 每行加缩进
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// 欢迎界面
pub fn welcome() -> String {
    format!(
        "\n{rule}\n         欢迎来到井字棋！\n{rule}\n\n\
         规则:\n\
         - 横、竖或斜连成三个即获胜\n\
         - X 总是先手\n\
         - 输入数字 0-8 落子\n\
         - 输入 q、quit 或 exit 退出\n\n\
         格子编号:\n{guide}\n",
        rule = rule(50),
        guide = indent(&Notation::position_guide()),
    )
}

/// 对局画面：标题、双方信息、棋盘与编号参考
pub fn game_screen(session: &GameSession) -> String {
    format!(
        "\n{rule}\n      井字棋\n{rule}\n\n你: {human} | AI: {ai}\n难度: {difficulty}\n\n当前棋盘:\n\n{board}\n\n格子编号:\n{guide}\n",
        rule = rule(30),
        human = session.human_mark(),
        ai = session.ai_mark(),
        difficulty = session.difficulty(),
        board = indent(&session.board().to_string()),
        guide = indent(&Notation::position_guide()),
    )
}

/// 终局横幅
pub fn result_banner(winner: Option<Mark>, human: Mark) -> String {
    let message = match winner {
        Some(mark) if mark == human => HUMAN_WIN_BANNER,
        Some(_) => AI_WIN_BANNER,
        None => DRAW_BANNER,
    };
    format!("\n{rule}\n   {message}\n{rule}\n", rule = rule(40))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Difficulty;

    #[test]
    fn test_game_screen_shows_marks_and_board() {
        let mut session = GameSession::new(Mark::O, Difficulty::Hard);
        session.play(4).unwrap();
        let screen = game_screen(&session);
        assert!(screen.contains("你: O | AI: X"));
        assert!(screen.contains("困难"));
        assert!(screen.contains(&format!("{}  | X |  ", INDENT)));
        assert!(screen.contains(&format!("{}0 | 1 | 2", INDENT)));
    }

    #[test]
    fn test_result_banner() {
        assert!(result_banner(Some(Mark::X), Mark::X).contains(HUMAN_WIN_BANNER));
        assert!(result_banner(Some(Mark::O), Mark::X).contains(AI_WIN_BANNER));
        assert!(result_banner(None, Mark::X).contains(DRAW_BANNER));
    }

    #[test]
    fn test_welcome_lists_positions() {
        let text = welcome();
        assert!(text.contains("X 总是先手"));
        assert!(text.contains("6 | 7 | 8"));
    }
}
