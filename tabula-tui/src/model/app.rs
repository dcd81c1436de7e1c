//! 应用主状态结构

use ratatui::layout::Rect;
use tabula_core::types::{NotificationQueue, NotificationStatus};
use tabula_core::{Overlay, ScrollLock};

use super::{
    ContactState, FeaturesState, FocusPanel, HomeState, NavigationState, OverlayId, Page,
    PostDetailState, PostsState, UsersState,
};
use crate::message::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 提示队列（自动过期）
    pub notifications: NotificationQueue,

    /// 背景滚动锁，所有弹窗共享
    pub scroll_lock: ScrollLock,

    /// 帮助弹窗
    pub help: Overlay<()>,

    /// 最近一次绘制的终端区域（用于鼠标命中判断）
    pub viewport: Rect,

    // === 各页面状态 ===
    pub home: HomeState,
    pub features: FeaturesState,
    pub users: UsersState,
    pub posts: PostsState,
    pub post_detail: PostDetailState,
    pub contact: ContactState,

    /// 待执行的副作用
    pending: Vec<Command>,
}

impl App {
    /// 创建新的应用实例（尚未进入任何页面）
    pub fn new(page_size: usize) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            notifications: NotificationQueue::new(),
            scroll_lock: ScrollLock::new(),
            help: Overlay::new(),
            viewport: Rect::default(),
            home: HomeState::new(page_size),
            features: FeaturesState::new(),
            users: UsersState::new(page_size),
            posts: PostsState::new(page_size),
            post_detail: PostDetailState::new(),
            contact: ContactState::new(),
            pending: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 推送一条提示
    pub fn notify(&mut self, status: NotificationStatus, message: impl Into<String>) {
        self.notifications.notify(status, message);
    }

    // ========== 副作用 ==========

    pub fn push_command(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// 取出并清空待执行的副作用
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    // ========== 弹窗 ==========

    /// 是否有弹窗打开（背景滚动被挂起）
    pub fn has_overlay(&self) -> bool {
        self.scroll_lock.is_suspended()
    }

    /// 当前所有打开的弹窗，自底向上
    pub fn open_overlays(&self) -> Vec<OverlayId> {
        let mut open = Vec::new();
        match self.current_page {
            Page::Home => {
                if self.home.modal.is_open() {
                    open.push(OverlayId::HomeModal);
                }
                if self.home.nested_outer.is_open() {
                    open.push(OverlayId::NestedOuter);
                }
                if self.home.nested_inner.is_open() {
                    open.push(OverlayId::NestedInner);
                }
            }
            Page::Features if self.features.modal.is_open() => {
                open.push(OverlayId::FeaturesModal);
            }
            Page::Users if self.users.detail.is_open() => open.push(OverlayId::UserDetails),
            Page::Posts if self.posts.modal.is_open() => open.push(OverlayId::PostsModal),
            Page::PostDetails { .. } if self.post_detail.modal.is_open() => {
                open.push(OverlayId::DetailsModal);
            }
            Page::Contact if self.contact.modal.is_open() => open.push(OverlayId::ContactModal),
            _ => {}
        }
        if self.help.is_open() {
            open.push(OverlayId::Help);
        }
        open
    }

    /// 最上层的弹窗
    pub fn topmost_overlay(&self) -> Option<OverlayId> {
        self.open_overlays().last().copied()
    }

    /// 关闭指定弹窗，返回是否确实关闭了
    pub fn close_overlay(&mut self, id: OverlayId) -> bool {
        match id {
            OverlayId::Help => self.help.close().is_some(),
            OverlayId::HomeModal => self.home.modal.close().is_some(),
            OverlayId::FeaturesModal => self.features.modal.close().is_some(),
            OverlayId::NestedOuter => {
                // 内层依附于外层
                self.home.nested_inner.close();
                self.home.nested_outer.close().is_some()
            }
            OverlayId::NestedInner => self.home.nested_inner.close().is_some(),
            OverlayId::UserDetails => {
                self.users.list.clear_selection();
                self.users.detail.close().is_some()
            }
            OverlayId::PostsModal => self.posts.modal.close().is_some(),
            OverlayId::DetailsModal => self.post_detail.modal.close().is_some(),
            OverlayId::ContactModal => self.contact.modal.close().is_some(),
        }
    }

    /// 关闭最上层的弹窗
    pub fn close_topmost(&mut self) -> Option<OverlayId> {
        let id = self.topmost_overlay()?;
        self.close_overlay(id).then_some(id)
    }

    /// 关闭所有弹窗（离开页面时）
    pub fn close_all_overlays(&mut self) {
        while self.close_topmost().is_some() {}
        // 不可见页面上的弹窗也一并关闭
        self.home.nested_inner.close();
        self.home.nested_outer.close();
        self.home.modal.close();
        self.features.modal.close();
        self.users.detail.close();
        self.posts.modal.close();
        self.post_detail.modal.close();
        self.contact.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_follows_nesting() {
        let mut app = App::new(10);
        let lock = app.scroll_lock.clone();
        app.home.nested_outer.open((), &lock);
        app.home.nested_inner.open((), &lock);
        assert_eq!(app.topmost_overlay(), Some(OverlayId::NestedInner));
        assert_eq!(app.scroll_lock.depth(), 2);

        assert_eq!(app.close_topmost(), Some(OverlayId::NestedInner));
        assert_eq!(app.topmost_overlay(), Some(OverlayId::NestedOuter));
        assert!(app.has_overlay());

        assert_eq!(app.close_topmost(), Some(OverlayId::NestedOuter));
        assert!(!app.has_overlay());
    }

    #[test]
    fn closing_outer_releases_inner() {
        let mut app = App::new(10);
        let lock = app.scroll_lock.clone();
        app.home.nested_outer.open((), &lock);
        app.home.nested_inner.open((), &lock);

        assert!(app.close_overlay(OverlayId::NestedOuter));
        assert!(!app.home.nested_inner.is_open());
        assert_eq!(app.scroll_lock.depth(), 0);
    }

    #[test]
    fn help_sits_above_page_overlays() {
        let mut app = App::new(10);
        let lock = app.scroll_lock.clone();
        app.home.modal.open((), &lock);
        app.help.open((), &lock);
        assert_eq!(app.open_overlays(), vec![OverlayId::HomeModal, OverlayId::Help]);

        app.close_all_overlays();
        assert!(!app.has_overlay());
    }
}
