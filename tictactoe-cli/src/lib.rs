//! 井字棋终端客户端
//!
//! 包含:
//! - 设置持久化
//! - 输入解析
//! - 文本界面渲染
//! - 人机对局主循环

pub mod app;
pub mod input;
pub mod settings;
pub mod ui;

pub use app::App;
pub use settings::Settings;
