//!
//! src/update/mod.rs
//! Update 层：消息 → 状态变更
//!
//! 唯一可以修改 Model 的地方。Update 不直接发起网络请求，
//! 而是把 `Command` 放进 `App` 的待办队列，由主循环交给 Backend 执行：
//!
//!     AppMessage ──▶ update() ──▶ 修改 App
//!                                   └──▶ app.push_command(Command::...)
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容面板：列表光标、翻页、表单、打开弹窗
//!         mod modal;          // 弹窗：关闭、打开内层
//!         mod navigation;     // 导航栏：选择与确认
//!
//!
//! 页面切换（navigate）：
//!     1. 关闭所有弹窗（归还滚动锁）
//!     2. 卸载旧页面的视图，旧请求的结果此后都会被丢弃
//!     3. 挂载新页面的视图，产生新的请求票据并发出 FetchCollection / FetchRecord
//!
//! 请求结果（Fetched）：
//!     票据过期 → 丢弃；
//!     失败 → 视图进入 Errored，同时推送一条错误提示。
//!

mod content;
mod modal;
mod navigation;

use tabula_client::Resource;
use tabula_core::types::NotificationStatus;
use tabula_core::{CachePolicy, RequestTicket};

use crate::message::{AppMessage, Command, FetchOutcome, FetchTarget};
use crate::model::{App, Page};
use crate::view::layout::modal_rect;
use crate::view::theme::{current_theme, set_theme_index};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.has_overlay() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭最上层弹窗
            if app.close_topmost().is_some() {
                app.clear_status();
            } else if app.current_page.is_detail_page() {
                if let Some(parent) = app.current_page.parent() {
                    navigate(app, parent);
                }
            }
        }

        AppMessage::Refresh => {
            refresh(app);
        }

        AppMessage::ShowHelp => {
            let lock = app.scroll_lock.clone();
            app.help.open((), &lock);
        }

        AppMessage::ToggleTheme => {
            let theme = current_theme().toggle();
            set_theme_index(theme.index());
            app.notify(NotificationStatus::Info, format!("Theme: {}", theme.label()));
        }

        AppMessage::Click { column, row } => {
            handle_click(app, column, row);
        }

        AppMessage::Fetched(outcome) => {
            apply_fetch(app, outcome);
        }

        AppMessage::ContactSubmitted => {
            app.contact.submitting = false;
            app.contact.form.reset();
            app.clear_status();
            app.notify(NotificationStatus::Success, "Message submitted. Thank you!");
        }

        AppMessage::Noop => {}
    }
}

/// 切换到指定页面
pub fn navigate(app: &mut App, page: Page) {
    app.close_all_overlays();
    leave(app);

    log::debug!("Navigating to {}", page.route());
    app.navigation.sync_with(&page);
    app.current_page = page;
    app.clear_status();

    enter(app);
}

/// 卸载当前页面的视图
fn leave(app: &mut App) {
    match app.current_page {
        Page::Home => app.home.posts.unmount(),
        Page::Users => app.users.list.unmount(),
        Page::Posts => app.posts.list.unmount(),
        Page::PostDetails { .. } => app.post_detail.view.unmount(),
        Page::Features | Page::Contact | Page::NotFound { .. } => {}
    }
}

/// 挂载当前页面的视图并发出首次请求
fn enter(app: &mut App) {
    match app.current_page {
        Page::Home => {
            let ticket = app.home.posts.mount();
            fetch_collection(app, FetchTarget::HomePosts, ticket, CachePolicy::Session);
        }
        Page::Users => {
            let ticket = app.users.list.mount();
            fetch_collection(app, FetchTarget::Users, ticket, CachePolicy::Bypass);
        }
        Page::Posts => {
            let ticket = app.posts.list.mount();
            fetch_collection(app, FetchTarget::Posts, ticket, CachePolicy::Session);
        }
        Page::PostDetails { id } => {
            let ticket = app.post_detail.view.load(id);
            app.push_command(Command::FetchRecord {
                resource: Resource::Posts,
                ticket,
            });
        }
        Page::Features | Page::Contact | Page::NotFound { .. } => {}
    }
}

/// 手动刷新：总是重新请求
fn refresh(app: &mut App) {
    match app.current_page {
        Page::Home => {
            if let Some(ticket) = app.home.posts.refresh() {
                fetch_collection(app, FetchTarget::HomePosts, ticket, CachePolicy::Reload);
            }
        }
        Page::Users => {
            if let Some(ticket) = app.users.list.refresh() {
                fetch_collection(app, FetchTarget::Users, ticket, CachePolicy::Bypass);
            }
        }
        Page::Posts => {
            if let Some(ticket) = app.posts.list.refresh() {
                fetch_collection(app, FetchTarget::Posts, ticket, CachePolicy::Reload);
            }
        }
        Page::PostDetails { .. } => {
            if let Some(ticket) = app.post_detail.view.refresh() {
                app.push_command(Command::FetchRecord {
                    resource: Resource::Posts,
                    ticket,
                });
            }
        }
        Page::Features | Page::Contact | Page::NotFound { .. } => return,
    }
    app.set_status("Refreshing...");
}

/// 发出集合请求
pub(crate) fn fetch_collection(
    app: &mut App,
    target: FetchTarget,
    ticket: RequestTicket,
    policy: CachePolicy,
) {
    let resource = match target {
        FetchTarget::HomePosts | FetchTarget::Posts => Resource::Posts,
        FetchTarget::Users => Resource::Users,
    };
    app.push_command(Command::FetchCollection {
        target,
        resource,
        ticket,
        policy,
    });
}

/// 点击遮罩（最上层弹窗之外）关闭该弹窗
fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(id) = app.topmost_overlay() else {
        return;
    };
    let area = modal_rect(id, app.viewport);
    let inside = column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height);
    if !inside {
        app.close_overlay(id);
    }
}

/// 应用后台请求结果
fn apply_fetch(app: &mut App, outcome: FetchOutcome) {
    let failure = match outcome {
        FetchOutcome::List {
            target,
            ticket,
            result,
            cached,
        } => {
            // 缓存是共享的，过期结果也带来真实的缓存数
            if target != FetchTarget::Users {
                app.home.cached_posts = cached;
            }
            let view = match target {
                FetchTarget::HomePosts => &mut app.home.posts,
                FetchTarget::Users => &mut app.users.list,
                FetchTarget::Posts => &mut app.posts.list,
            };
            let failed = result.is_err();
            if !view.apply(ticket, result) {
                log::debug!("Discarding stale {target:?} result for page {}", ticket.page());
                return;
            }
            failed.then(|| view.error_message())
        }
        FetchOutcome::Detail { ticket, result } => {
            let view = &mut app.post_detail.view;
            if !view.apply(ticket, result) {
                log::debug!("Discarding stale detail result for id {}", ticket.id());
                return;
            }
            view.status().error().map(str::to_string)
        }
    };

    app.clear_status();
    if let Some(message) = failure {
        app.notify(NotificationStatus::Error, message);
    }
}
