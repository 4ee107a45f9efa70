//! 人机对局主循环
//!
//! 欢迎 → 设置 → 对局 → 再来一局。读写通过泛型 `BufRead`/`Write`，便于测试。

use std::io::{BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use tictactoe_ai::DifficultyPolicy;
use tictactoe_core::{Difficulty, GameError, GameOutcome, GameSession, Mark};
use tracing::{debug, info, warn};

use crate::input::{
    parse_difficulty_choice, parse_mark_choice, parse_move_input, parse_yes_no, MoveInput,
};
use crate::settings::Settings;
use crate::ui;

/// 一局结束后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Finished,
    Quit,
}

/// 终端应用
pub struct App<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// 取回输出（测试用）
    pub fn into_output(self) -> W {
        self.output
    }

    /// 运行直到玩家退出或输入结束
    pub fn run(&mut self) -> Result<()> {
        self.clear()?;
        write!(self.output, "{}", ui::welcome())?;

        let Some((difficulty, human)) = self.setup()? else {
            return self.farewell();
        };

        let mut session = GameSession::new(human, difficulty);
        let mut policy = DifficultyPolicy::from_difficulty(difficulty);
        info!("新对局: 玩家 {}，难度 {:?}", human, difficulty);

        loop {
            if self.play_game(&mut session, &mut policy)? == Flow::Quit {
                return self.farewell();
            }

            if !self.ask_play_again()? {
                return self.farewell();
            }
            session.reset();
        }
    }

    /// 选择难度和标记；输入结束返回 `None`
    fn setup(&mut self) -> Result<Option<(Difficulty, Mark)>> {
        writeln!(self.output, "\n游戏设置:\n{}", "-".repeat(20))?;

        let difficulty = loop {
            writeln!(self.output, "\n选择难度:")?;
            writeln!(self.output, "1. 简单（AI 多数随机走子）")?;
            writeln!(self.output, "2. 中等（AI 使用基本策略）")?;
            writeln!(self.output, "3. 困难（AI 使用完整搜索）")?;
            let Some(line) = self.prompt(&format!(
                "\n输入选择 (1-3) [默认: {}]: ",
                self.settings.difficulty
            ))?
            else {
                return Ok(None);
            };
            match parse_difficulty_choice(&line, self.settings.difficulty) {
                Some(difficulty) => break difficulty,
                None => writeln!(self.output, "无效选择，请输入 1、2 或 3。")?,
            }
        };

        let human = loop {
            let Some(line) = self.prompt(&format!(
                "\n你想执 X 还是 O？（X 总是先手）[默认: {}]: ",
                self.settings.human_mark
            ))?
            else {
                return Ok(None);
            };
            match parse_mark_choice(&line, self.settings.human_mark) {
                Some(mark) => break mark,
                None => writeln!(self.output, "无效选择，请输入 X 或 O。")?,
            }
        };

        writeln!(self.output, "\n你执 {}，AI 执 {}", human, human.opponent())?;
        if human == Mark::X {
            writeln!(self.output, "你先走。")?;
        } else {
            writeln!(self.output, "AI（执 X）先走。")?;
        }

        self.remember(difficulty, human);
        Ok(Some((difficulty, human)))
    }

    /// 记住本次选择，保存失败只记录日志
    fn remember(&mut self, difficulty: Difficulty, human: Mark) {
        if self.settings.difficulty == difficulty && self.settings.human_mark == human {
            return;
        }
        self.settings.difficulty = difficulty;
        self.settings.human_mark = human;
        if let Err(e) = self.settings.save() {
            warn!("保存设置失败: {:#}", e);
        }
    }

    /// 进行一局
    fn play_game(&mut self, session: &mut GameSession, policy: &mut DifficultyPolicy) -> Result<Flow> {
        loop {
            self.clear()?;
            write!(self.output, "{}", ui::game_screen(session))?;

            if session.is_ai_turn() {
                self.ai_turn(session, policy)?;
            } else {
                writeln!(self.output, "\n轮到你了 ({})", session.human_mark())?;
                let Some(index) = self.read_human_move(session)? else {
                    return Ok(Flow::Quit);
                };
                session
                    .play_human(index)
                    .context("玩家走子被拒绝")?;
            }

            let outcome = session.outcome();
            if outcome.is_over() {
                self.clear()?;
                write!(self.output, "{}", ui::game_screen(session))?;
                write!(
                    self.output,
                    "{}",
                    ui::result_banner(outcome.winner(), session.human_mark())
                )?;
                return Ok(Flow::Finished);
            }
        }
    }

    /// AI 回合
    fn ai_turn(&mut self, session: &mut GameSession, policy: &mut DifficultyPolicy) -> Result<()> {
        writeln!(self.output, "\nAI 回合 ({})", session.ai_mark())?;
        writeln!(self.output, "思考中...")?;
        self.output.flush()?;

        let delay = self.settings.think_delay(&mut rand::thread_rng());
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let index = policy
            .choose_ai_move(session.board(), session.ai_mark())
            .ok_or(GameError::NoAvailableMove)?;
        let outcome: GameOutcome = session.play_ai(index)?;
        debug!("AI 走 {}，结果 {:?}", index, outcome);
        writeln!(self.output, "AI 选择了位置 {}", index)?;
        Ok(())
    }

    /// 读取玩家走法直到合法；退出或输入结束返回 `None`
    fn read_human_move(&mut self, session: &GameSession) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt("输入你的走法 (0-8): ")? else {
                return Ok(None);
            };
            match parse_move_input(&line) {
                Ok(MoveInput::Quit) => return Ok(None),
                Ok(MoveInput::Move(index)) if session.board().is_empty_cell(index) => {
                    return Ok(Some(index));
                }
                Ok(MoveInput::Move(_)) => {
                    writeln!(self.output, "该位置已被占用，请换一个。")?;
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.prompt("\n再来一局？(y/n): ")? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "请输入 y 或 n。")?,
            }
        }
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\n感谢游玩，再见！")?;
        self.output.flush()?;
        Ok(())
    }

    /// 打印提示并读取一行；输入结束返回 `None`
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("读取输入失败")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        if self.settings.clear_screen {
            write!(self.output, "{}", ui::CLEAR_SCREEN)?;
        }
        Ok(())
    }
}
