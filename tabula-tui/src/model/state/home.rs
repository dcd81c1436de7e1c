//! 首页状态

use tabula_client::Resource;
use tabula_core::{ListView, Overlay};

/// 首页状态
///
/// 首页负责预加载文章集合（写入会话缓存），并演示单层与嵌套弹窗。
#[derive(Debug)]
pub struct HomeState {
    /// 文章预加载（只使用其加载状态）
    pub posts: ListView,
    /// "Home Modal"
    pub modal: Overlay<()>,
    /// 嵌套弹窗：外层
    pub nested_outer: Overlay<()>,
    /// 嵌套弹窗：内层（只能在外层打开时打开）
    pub nested_inner: Overlay<()>,
    /// 会话缓存中的文章数
    pub cached_posts: usize,
}

impl HomeState {
    pub fn new(page_size: usize) -> Self {
        Self {
            posts: ListView::new(Resource::Posts, page_size),
            modal: Overlay::new(),
            nested_outer: Overlay::new(),
            nested_inner: Overlay::new(),
            cached_posts: 0,
        }
    }
}
