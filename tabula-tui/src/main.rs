//! Tabula TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网络请求与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     load config             // 配置文件 + 环境变量
//!     runtime + channel       // 后台请求在 tokio 运行时上执行，结果经 channel 送回
//!     navigate(start_route)   // 进入启动页面，触发首次加载
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     save theme              // 主题有变化时写回配置
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use tabula_core::types::Route;
use tokio::sync::mpsc;

use backend::{ApiService, ConfigService, JsonConfigService};
use model::{App, Page};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::{current_theme, set_theme_index};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let log_file = init_logging()?;
    tracing::info!(
        "Tabula {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    );

    // 2. 配置
    let config_service = JsonConfigService::with_default_path();
    let mut config = config_service.load()?;
    tracing::info!("Config loaded from {}", config_service.path().display());
    set_theme_index(config.theme.index());

    // 3. 运行时与消息通道
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = ApiService::new(&config, runtime.handle().clone(), tx)?;

    // 4. 应用实例，进入启动页面
    let mut app = App::new(config.page_size);
    update::navigate(&mut app, Page::from(Route::parse(&config.start_route)));

    // 5. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);
    restore_terminal(&mut terminal)?;

    backend.shutdown();

    // 6. 保存主题
    let theme = current_theme();
    if theme != config.theme {
        config.theme = theme;
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to save theme: {e:#}");
        }
    }

    tracing::info!("Tabula exiting");
    result
}
