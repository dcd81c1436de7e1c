//! 页面状态模块
//!
//! 定义各个页面的状态数据结构。列表与详情的加载状态机来自 `tabula_core`，
//! 这里只负责把它们和各页面的弹窗组合在一起。

mod contact;
mod features;
mod home;
mod posts;
mod users;

pub use contact::{ContactField, ContactForm, ContactState, ContactSubmission};
pub use features::{FEATURES, FeaturesState};
pub use home::HomeState;
pub use posts::{PostDetailState, PostsState};
pub use users::UsersState;

/// 可见弹窗的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayId {
    /// 帮助（全局）
    Help,
    /// 首页弹窗
    HomeModal,
    /// 功能介绍页弹窗
    FeaturesModal,
    /// 嵌套弹窗：外层
    NestedOuter,
    /// 嵌套弹窗：内层
    NestedInner,
    /// 用户详情
    UserDetails,
    /// 文章列表页弹窗
    PostsModal,
    /// 文章详情页弹窗
    DetailsModal,
    /// 联系页弹窗
    ContactModal,
}

impl OverlayId {
    /// 弹窗标题
    pub fn title(self) -> &'static str {
        match self {
            OverlayId::Help => "Help",
            OverlayId::HomeModal => "Home Modal",
            OverlayId::FeaturesModal => "Features Modal",
            OverlayId::NestedOuter => "Outer Modal",
            OverlayId::NestedInner => "Inner Modal",
            OverlayId::UserDetails => "User Details",
            OverlayId::PostsModal => "Posts Modal",
            OverlayId::DetailsModal => "Details Modal",
            OverlayId::ContactModal => "Contact Modal",
        }
    }
}
