//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息。弹窗打开期间背景不可交互，
//! 这里的所有消息都会被忽略。

use tabula_core::types::NotificationStatus;
use tabula_core::{CachePolicy, ListView, RequestTicket};

use super::{fetch_collection, navigate};
use crate::message::{Command, ContentMessage, FetchTarget};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    if app.has_overlay() {
        log::trace!("Ignoring {msg:?} while an overlay is open");
        return;
    }

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            if let Some(list) = current_list(app) {
                list.cursor_up();
            } else if app.current_page == Page::Contact {
                app.contact.form.prev_field();
            }
        }
        ContentMessage::SelectNext => {
            if let Some(list) = current_list(app) {
                list.cursor_down();
            } else if app.current_page == Page::Contact {
                app.contact.form.next_field();
            }
        }
        ContentMessage::SelectFirst => {
            if let Some(list) = current_list(app) {
                list.cursor_first();
            }
        }
        ContentMessage::SelectLast => {
            if let Some(list) = current_list(app) {
                list.cursor_last();
            }
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
        }

        // ========== 分页 ==========
        ContentMessage::PreviousPage => {
            change_page(app, ListView::previous_page);
        }
        ContentMessage::NextPage => {
            change_page(app, ListView::next_page);
        }
        ContentMessage::GoToPage(n) => {
            change_page(app, |list| list.change_page(n));
        }

        // ========== 弹窗 ==========
        ContentMessage::OpenModal => {
            handle_open_modal(app);
        }
        ContentMessage::OpenNestedModal => {
            if app.current_page == Page::Home {
                let lock = app.scroll_lock.clone();
                app.home.nested_outer.open((), &lock);
            }
        }

        // ========== 联系表单 ==========
        ContentMessage::Input(c) => {
            if let Some(form) = editable_form(app) {
                form.input(c);
            }
        }
        ContentMessage::Backspace => {
            if let Some(form) = editable_form(app) {
                form.backspace();
            }
        }
        ContentMessage::NextField => {
            if let Some(form) = editable_form(app) {
                form.next_field();
            }
        }
        ContentMessage::PrevField => {
            if let Some(form) = editable_form(app) {
                form.prev_field();
            }
        }
        ContentMessage::Submit => {
            handle_submit(app);
        }
    }
}

/// 当前页面的分页列表
fn current_list(app: &mut App) -> Option<&mut ListView> {
    match app.current_page {
        Page::Users => Some(&mut app.users.list),
        Page::Posts => Some(&mut app.posts.list),
        _ => None,
    }
}

fn editable_form(app: &mut App) -> Option<&mut crate::model::ContactForm> {
    (app.current_page == Page::Contact && !app.contact.submitting).then_some(&mut app.contact.form)
}

fn change_page(app: &mut App, step: impl FnOnce(&mut ListView) -> Option<RequestTicket>) {
    let (target, policy) = match app.current_page {
        Page::Users => (FetchTarget::Users, CachePolicy::Bypass),
        Page::Posts => (FetchTarget::Posts, CachePolicy::Session),
        _ => return,
    };
    let Some(list) = current_list(app) else {
        return;
    };
    if let Some(ticket) = step(list) {
        fetch_collection(app, target, ticket, policy);
    }
}

fn handle_confirm(app: &mut App) {
    match app.current_page {
        Page::Home | Page::Features => handle_open_modal(app),
        Page::Users => {
            let lock = app.scroll_lock.clone();
            if let Some(record) = app.users.list.select_cursor().cloned() {
                app.users.detail.open(record, &lock);
            }
        }
        Page::Posts => {
            if let Some(id) = app.posts.list.select_cursor().map(tabula_client::Record::id) {
                navigate(app, Page::PostDetails { id });
            }
        }
        Page::Contact => {
            if app.contact.form.focus == crate::model::ContactField::Message {
                handle_submit(app);
            } else if let Some(form) = editable_form(app) {
                form.next_field();
            }
        }
        Page::PostDetails { .. } | Page::NotFound { .. } => {}
    }
}

fn handle_open_modal(app: &mut App) {
    let lock = app.scroll_lock.clone();
    match app.current_page {
        Page::Home => app.home.modal.open((), &lock),
        Page::Features => app.features.modal.open((), &lock),
        Page::Posts => app.posts.modal.open((), &lock),
        Page::PostDetails { .. } => app.post_detail.modal.open((), &lock),
        Page::Contact => app.contact.modal.open((), &lock),
        Page::Users | Page::NotFound { .. } => {}
    }
}

fn handle_submit(app: &mut App) {
    if app.current_page != Page::Contact || app.contact.submitting {
        return;
    }
    match app.contact.form.submit() {
        Some(submission) => {
            app.contact.submitting = true;
            app.set_status("Submitting...");
            app.push_command(Command::SubmitContact(submission));
        }
        None => {
            let count = app.contact.form.errors.len();
            log::debug!("Contact form rejected with {count} field error(s)");
            app.notify(NotificationStatus::Error, "Please fix the highlighted fields");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, FetchOutcome};
    use crate::model::OverlayId;
    use crate::update as app_update;
    use serde_json::json;
    use tabula_client::Record;

    fn loaded_users(n: u64) -> App {
        let mut app = App::new(10);
        app_update::navigate(&mut app, Page::Users);
        let Some(Command::FetchCollection { target, ticket, .. }) = app.take_commands().pop() else {
            panic!("users fetch expected");
        };
        let rows: Vec<Record> = (1..=n)
            .map(|id| {
                serde_json::from_value(json!({ "id": id, "name": format!("User {id}") })).unwrap()
            })
            .collect();
        app_update::update(
            &mut app,
            AppMessage::Fetched(FetchOutcome::List {
                target,
                ticket,
                result: Ok(rows),
                cached: 0,
            }),
        );
        app
    }

    #[test]
    fn user_row_opens_detail_overlay() {
        let mut app = loaded_users(3);
        update(&mut app, ContentMessage::SelectLast);
        update(&mut app, ContentMessage::Confirm);

        assert_eq!(app.topmost_overlay(), Some(OverlayId::UserDetails));
        assert_eq!(app.users.detail.content().map(Record::id), Some(3));
        assert!(app.has_overlay());
    }

    #[test]
    fn features_page_opens_its_modal_without_fetching() {
        let mut app = App::new(10);
        app_update::navigate(&mut app, Page::Features);
        assert!(app.take_commands().is_empty());

        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.topmost_overlay(), Some(OverlayId::FeaturesModal));

        app_update::update(&mut app, AppMessage::GoBack);
        assert!(!app.has_overlay());

        update(&mut app, ContentMessage::OpenModal);
        app_update::navigate(&mut app, Page::Home);
        assert!(!app.features.modal.is_open());
        assert_eq!(app.scroll_lock.depth(), 0);
    }

    #[test]
    fn digit_jump_clamps_to_last_page() {
        let mut app = loaded_users(25);
        update(&mut app, ContentMessage::GoToPage(9));
        let Some(Command::FetchCollection { ticket, .. }) = app.take_commands().pop() else {
            panic!("page fetch expected");
        };
        assert_eq!(ticket.page(), 3);
    }

    #[test]
    fn current_page_is_not_refetched() {
        let mut app = loaded_users(25);
        update(&mut app, ContentMessage::GoToPage(1));
        update(&mut app, ContentMessage::PreviousPage);
        assert!(app.take_commands().is_empty());
    }
}
