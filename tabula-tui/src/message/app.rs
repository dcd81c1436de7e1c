//! 应用主消息

use tabula_client::Record;
use tabula_core::{CoreResult, DetailTicket, RequestTicket};

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 列表请求属于哪个视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// 首页的文章预加载
    HomePosts,
    /// 用户列表
    Users,
    /// 文章列表
    Posts,
}

/// 后台请求的结果
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// 集合请求
    List {
        target: FetchTarget,
        ticket: RequestTicket,
        result: CoreResult<Vec<Record>>,
        /// 请求结束后会话缓存里该资源的记录数
        cached: usize,
    },
    /// 单条记录请求（文章详情）
    Detail {
        ticket: DetailTicket,
        result: CoreResult<Record>,
    },
}

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回上一页
    GoBack,

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 鼠标左键点击（列, 行）
    Click { column: u16, row: u16 },

    /// 后台请求完成
    Fetched(FetchOutcome),

    /// 联系表单提交完成
    ContactSubmitted,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
