//!
//! src/view/mod.rs
//! View 层：把 Model 渲染成终端画面
//!
//! View 层只读 App，不修改任何状态（视口尺寸由主循环在绘制前记录）。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 / 内容 + 状态栏，弹窗在最上层
//!         pub mod theme;      // 深色 / 浅色配色
//!         mod components;     // 导航栏、状态栏、表格、弹窗
//!         mod pages;          // 各页面内容
//!
//!
//!     ┌──────────────────────────── 标题栏 ─────────────────────────────┐
//!     ├──────────┬──────────────────────────────────────────────────────┤
//!     │          │                                                      │
//!     │  导航    │                 页面内容（表格 / 表单）               │
//!     │  20%     │                      80%                             │
//!     │          │                                                      │
//!     ├──────────┴──────────────────────────────────────────────────────┤
//!     │ 快捷键提示 │ 状态消息                              最新提示（toast） │
//!     └─────────────────────────────────────────────────────────────────┘
//!
//!     有弹窗打开时，背景整体变暗，弹窗自底向上依次绘制。
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
