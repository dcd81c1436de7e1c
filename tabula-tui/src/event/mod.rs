//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!
//!     · handle_event    事件分发
//!
//!         Event::Key(KeyEvent)          键盘事件（只处理 Press）
//!         Event::Mouse(MouseEvent)      左键按下 → AppMessage::Click
//!         Event::Resize(..)             下一帧自动重绘
//!
//!         键盘事件判断顺序：
//!             - 有弹窗打开时，只处理弹窗按键（Esc 关闭最上层，Enter 在外层弹窗中打开内层）
//!             - 全局快捷键
//!             - 焦点位于导航面板 → handle_navigation_keys
//!             - 焦点位于内容面板 → handle_content_keys（列表页 / 联系表单 / 其他）
//!
//!
//!     全局快捷键：
//!         Alt+q / Ctrl+c   退出
//!         Alt+h / ?        帮助
//!         Alt+r / F5       刷新当前页面
//!         Alt+t            切换主题
//!         Esc              关闭弹窗 / 返回上一页
//!         Tab              切换焦点面板
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
