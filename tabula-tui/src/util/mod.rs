//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：终端的初始化与恢复、日志初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 日志（写入文件，不写终端）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!         1. 启用原始模式（Raw Mode）：按键立即生效、不回显
//!         2. 进入备用屏幕（Alternate Screen）：退出后恢复原有内容
//!         3. 开启鼠标捕获：点击遮罩关闭弹窗
//!
//!     恢复终端按相反顺序执行。无论 app::run 成功与否都必须调用，
//!     否则终端会保持在原始模式。
//!
//!     日志：
//!         TUI 占用了整个终端，日志只能写入文件：
//!             {data_local_dir}/tabula/tabula.log
//!         过滤级别由 RUST_LOG 控制，默认 info。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
