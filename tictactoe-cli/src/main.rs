use std::io;

use anyhow::Result;
use tictactoe_cli::{App, Settings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，避免与棋盘混在一起）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tictactoe_cli=info".parse()?))
        .init();

    info!("井字棋启动中...");

    let settings = Settings::load();
    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), settings);
    app.run()?;

    info!("已退出");
    Ok(())
}
