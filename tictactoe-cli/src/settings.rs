//! 设置模块
//!
//! 记住上次选择的难度和标记，持久化为 JSON

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Difficulty, Mark};

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 默认难度
    pub difficulty: Difficulty,
    /// 玩家默认标记
    pub human_mark: Mark,
    /// AI 走子前的固定停顿（毫秒）
    pub ai_delay_ms: u64,
    /// 在固定停顿之上追加的随机停顿上限（毫秒）
    pub ai_jitter_ms: u64,
    /// 每次刷新前清屏
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            human_mark: Mark::X,
            ai_delay_ms: 500,
            ai_jitter_ms: 1000,
            clear_screen: true,
        }
    }
}

impl Settings {
    /// 设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置，失败时使用默认设置
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("首次运行，尚无井字棋设置 {:?}", path);
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("读取井字棋设置 {:?} 出错: {}，沿用默认难度与标记", path, e);
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("井字棋设置 {:?} 无法解析: {}，沿用默认难度与标记", path, e);
            Self::default()
        })
    }

    /// AI 思考停顿：固定部分加 `[0, ai_jitter_ms]` 内的随机部分
    pub fn think_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter = if self.ai_jitter_ms > 0 {
            rng.gen_range(0..=self.ai_jitter_ms)
        } else {
            0
        };
        Duration::from_millis(self.ai_delay_ms.saturating_add(jitter))
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
