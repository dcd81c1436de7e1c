//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI，同时记录屏幕区域
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务送回的结果
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);
//!         update::update(&mut app , msg)
//!     }
//!     for cmd in app.take_commands() {                // 执行 update 产生的副作用
//!         backend.execute(cmd)
//!     }
//!     app.notifications.prune(now)                    // 丢弃过期提示
//! }

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::ApiService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &ApiService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 执行副作用
        for command in app.take_commands() {
            backend.execute(command);
        }

        app.notifications.prune(Utc::now());
    }

    Ok(())
}
