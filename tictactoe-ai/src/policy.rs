//! 难度策略
//!
//! 每个 AI 回合包装搜索引擎：
//! - 困难：始终完整搜索
//! - 中等：开局（空格多于 6 个）走中心 → 随机角 → 随机格，之后完整搜索
//! - 简单：30% 概率搜索（搜索内部每个节点 50% 概率随机走子），否则随机走子

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{Board, Difficulty, Mark, CENTER, CORNERS};
use tracing::{debug, info};

use crate::config::AiConfig;
use crate::search::SearchEngine;

/// 难度策略
pub struct DifficultyPolicy {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl DifficultyPolicy {
    /// 创建新的策略（随机数种子取自系统熵）
    pub fn new(config: AiConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 固定种子，便于复现
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(
            AiConfig::from_difficulty(difficulty),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    pub fn with_rng(config: AiConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 选择 AI 走法
    ///
    /// 棋盘已满时返回 `None`（调用方不应在满盘时请求走法）。
    pub fn choose_ai_move(&mut self, board: &Board, ai_mark: Mark) -> Option<usize> {
        self.nodes_searched = 0;

        let available = board.available_moves();
        if available.is_empty() {
            return None;
        }

        if let Some(threshold) = self.config.opening_threshold {
            if available.len() > threshold {
                let mv = self.opening_move(&available);
                debug!("开局走法: {:?}", mv);
                return mv;
            }
        }

        let p = self.config.search_probability;
        if p < 1.0 && !self.rng.gen_bool(p.clamp(0.0, 1.0)) {
            let mv = available.choose(&mut self.rng).copied();
            debug!("随机走法: {:?}", mv);
            return mv;
        }

        self.best_move(board, ai_mark, &available)
    }

    /// 调用搜索，搜索无结果时退回随机走法
    fn best_move(&mut self, board: &Board, ai_mark: Mark, available: &[usize]) -> Option<usize> {
        let (score, mv) = {
            let mut engine = SearchEngine::new(board.clone(), ai_mark);
            if self.config.node_noise > 0.0 {
                engine = engine.with_noise(self.config.node_noise, &mut self.rng);
            }
            let result = engine.best_move(true);
            self.nodes_searched = engine.nodes_searched();
            result
        };

        info!(
            "AI 搜索: 难度 {:?}, 分数 {}, 走法 {:?}, 节点 {}",
            self.config.difficulty, score, mv, self.nodes_searched
        );

        mv.or_else(|| available.choose(&mut self.rng).copied())
    }

    /// 中心 → 随机空角 → 随机空格
    fn opening_move(&mut self, available: &[usize]) -> Option<usize> {
        if available.contains(&CENTER) {
            return Some(CENTER);
        }

        let corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|corner| available.contains(corner))
            .collect();
        if let Some(&corner) = corners.choose(&mut self.rng) {
            return Some(corner);
        }

        available.choose(&mut self.rng).copied()
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

/// 一次性选择 AI 走法
pub fn choose_ai_move(board: &Board, ai_mark: Mark, difficulty: Difficulty) -> Option<usize> {
    DifficultyPolicy::from_difficulty(difficulty).choose_ai_move(board, ai_mark)
}
