//! Low-Code Showcase TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)，展示状态本身由 `lowcode-showcase-core` 的 `ViewState` 持有
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与翻译加载 (`backend/`)
//!
//! 启动顺序：
//!
//! ```text
//! load config -> init logging -> build translation table
//!     -> tokio runtime + highlight timer -> init_terminal -> app::run -> restore_terminal
//! ```

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use lowcode_showcase_core::{content, HighlightTimer};

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config = LocalConfigService::from_env().load()?;

    // 2. 初始化日志（写入文件，不干扰终端画面）
    init_logging(&config);
    tracing::info!("Starting lowcode-showcase");

    // 3. 构建翻译表
    let translations = backend::load_translations(&config);

    // 4. 高亮定时器运行在 tokio 运行时上
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to build tokio runtime")?;

    let mut timer = config.highlight.enabled.then(|| {
        HighlightTimer::spawn(
            runtime.handle(),
            config.highlight,
            content::workflow_step_count(),
        )
    });

    // 5. 创建应用实例
    let mut app = model::App::new(translations, config.language(), config.theme);

    // 6. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, timer.as_mut());

    // 7. 停止定时器，恢复终端（无论成功失败都执行）
    if let Some(timer) = timer.as_mut() {
        timer.stop();
    }
    restore_terminal(&mut terminal)?;

    tracing::info!("lowcode-showcase exited");
    result
}
