//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 按键、鼠标点击、后台请求完成，都先被翻译成 Message，
//! Update 层只认识 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage，以及后台请求结果 FetchOutcome
//!         mod command;        // Update 层发出的副作用请求（Command）
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//! 数据流：
//!
//!     crossterm Event ──▶ event::handle_event ──▶ AppMessage ──▶ update::update
//!                                                      ▲               │
//!                                                      │               ▼
//!                              tokio 任务完成 ── mpsc ──┘        Vec<Command>
//!                                                                      │
//!                                                   backend::ApiService::execute
//!
//!     Command 是 Update 层唯一的出口：Update 不直接发起网络请求，
//!     只把 “要做什么” 记录下来，由主循环交给 Backend 执行。
//!

mod app;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::{AppMessage, FetchOutcome, FetchTarget};
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
