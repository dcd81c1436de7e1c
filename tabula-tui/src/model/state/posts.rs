//! 文章页面状态

use tabula_client::Resource;
use tabula_core::{DetailView, ListView, Overlay};

/// 文章列表页面状态
#[derive(Debug)]
pub struct PostsState {
    /// 分页列表
    pub list: ListView,
    /// "Posts Modal"
    pub modal: Overlay<()>,
}

impl PostsState {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListView::new(Resource::Posts, page_size),
            modal: Overlay::new(),
        }
    }
}

/// 文章详情页面状态
#[derive(Debug)]
pub struct PostDetailState {
    pub view: DetailView,
    /// "Details Modal"
    pub modal: Overlay<()>,
}

impl PostDetailState {
    pub fn new() -> Self {
        Self {
            view: DetailView::new(Resource::Posts),
            modal: Overlay::new(),
        }
    }
}

impl Default for PostDetailState {
    fn default() -> Self {
        Self::new()
    }
}
