//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝。整棵树共用一块可变棋盘，
//! 每个分支通过 [`Board::place`] 落子，守卫释放时撤销。

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tictactoe_core::{Board, Mark};
use tracing::{debug, trace};

/// AI 获胜的基础分，实际得分为 `WIN_SCORE - depth`
pub const WIN_SCORE: i32 = 10;

/// 玩家获胜的基础分，实际得分为 `depth + LOSS_SCORE`
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// 节点级随机弱化
struct Noise<'r> {
    probability: f64,
    rng: &'r mut dyn RngCore,
}

/// 递归过程中除棋盘外的状态
struct SearchContext<'r> {
    ai: Mark,
    noise: Option<Noise<'r>>,
    nodes_searched: u64,
}

/// 搜索引擎
///
/// AI 为最大化方，玩家为最小化方。
pub struct SearchEngine<'r> {
    board: Board,
    ctx: SearchContext<'r>,
}

impl<'r> SearchEngine<'r> {
    /// 创建搜索引擎，`ai` 为最大化方标记
    pub fn new(board: Board, ai: Mark) -> Self {
        Self {
            board,
            ctx: SearchContext {
                ai,
                noise: None,
                nodes_searched: 0,
            },
        }
    }

    /// 开启节点级随机弱化：每个非终局节点以 `probability` 概率直接返回 0 分和随机走法
    pub fn with_noise(mut self, probability: f64, rng: &'r mut dyn RngCore) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        self.ctx.noise = (probability > 0.0).then_some(Noise { probability, rng });
        self
    }

    /// 搜索最佳走法，返回 `(分数, 走法)`
    ///
    /// 根节点 alpha = -∞，beta = +∞，depth = 0。棋盘已满或已分胜负时走法为 `None`。
    pub fn best_move(&mut self, maximizing: bool) -> (i32, Option<usize>) {
        self.ctx.nodes_searched = 0;
        let Self { board, ctx } = self;
        let (score, best) = ctx.minimax(board, None, 0, maximizing, i32::MIN, i32::MAX);

        debug!(
            "搜索完成: score={}, move={:?}, nodes={}",
            score, best, ctx.nodes_searched
        );
        (score, best)
    }

    /// 搜索使用的棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 取回棋盘
    pub fn into_board(self) -> Board {
        self.board
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.ctx.nodes_searched
    }
}

impl SearchContext<'_> {
    /// 终局评分：AI 胜 `10 - depth`，玩家胜 `depth - 10`，满盘 0
    fn terminal_score(&self, board: &Board, last: Option<usize>, depth: i32) -> Option<i32> {
        // 只看刚落下的一子；根节点没有上一手，退回全盘扫描
        let winner = match last {
            Some(index) => board
                .get(index)
                .filter(|&mark| board.is_winning_move(index, mark)),
            None => board.winner(),
        };

        match winner {
            Some(mark) if mark == self.ai => Some(WIN_SCORE - depth),
            Some(_) => Some(depth + LOSS_SCORE),
            None if board.is_full() => Some(0),
            None => None,
        }
    }

    /// 节点级随机弱化
    fn noisy_shortcut(&mut self, board: &Board) -> Option<usize> {
        let noise = self.noise.as_mut()?;
        if !noise.rng.gen_bool(noise.probability) {
            return None;
        }
        board.available_moves().choose(&mut *noise.rng).copied()
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        last: Option<usize>,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        self.nodes_searched += 1;

        if let Some(score) = self.terminal_score(board, last, depth) {
            return (score, None);
        }

        if let Some(random_move) = self.noisy_shortcut(board) {
            trace!("depth {} 随机走法 {}", depth, random_move);
            return (0, Some(random_move));
        }

        let mark = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in board.available_moves() {
            let Some(mut placed) = board.place(mv, mark) else {
                continue;
            };
            let (score, _) = self.minimax(&mut placed, Some(mv), depth + 1, !maximizing, alpha, beta);
            // placed 在这里释放，撤销落子
            drop(placed);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}
