//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 相当于门牌号（由 `tabula_core::types::Route` 转换而来），
//!     state/ 是房间里的内容：列表视图、详情视图、表单和弹窗。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub focus: FocusPanel,
//!             pub navigation: NavigationState,
//!             pub current_page: Page,
//!             pub status_message: Option<String>,
//!
//!             pub notifications: NotificationQueue,   // 右下角提示
//!             pub scroll_lock: ScrollLock,            // 弹窗打开时背景不可滚动
//!             pub help: Overlay<()>,
//!
//!             // 各页面状态
//!             pub home, features, users, posts, post_detail, contact,
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个弹窗都是其所属页面状态里的一个 `Overlay` 槽位。
//!     打开时从 `App::scroll_lock` 取得一个引用计数，关闭时归还；
//!     只要还有任意一个弹窗开着，背景列表就不响应滚动与翻页。
//!
//!     `App::topmost_overlay()` 给出最上层的弹窗，Esc 和点击遮罩都只关闭它。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use page::Page;
pub use state::{
    ContactField, ContactForm, ContactState, ContactSubmission, FeaturesState, HomeState,
    OverlayId, PostDetailState, PostsState, UsersState,
};
