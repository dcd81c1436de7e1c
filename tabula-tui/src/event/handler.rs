//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, OverlayId, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        _ => AppMessage::Noop, // 窗口大小改变等，自动重绘
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => AppMessage::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，背景不可交互，只处理弹窗输入
    if app.has_overlay() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    let typing = app.focus.is_content() && app.current_page == Page::Contact;

    if DefaultKeymap::HELP.matches(&key)
        || (!typing && key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) || DefaultKeymap::REFRESH_F5.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::FOCUS_TOGGLE.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter 或 →: 确认选择
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::OPEN_MODAL.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenModal);
    }
    if DefaultKeymap::OPEN_NESTED.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenNestedModal);
    }

    // 根据当前页面处理特定按键
    match &app.current_page {
        Page::Users | Page::Posts => handle_list_keys(key),
        Page::Contact => handle_form_keys(key),
        Page::Home | Page::Features => match key.code {
            KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Page::PostDetails { .. } | Page::NotFound { .. } => match key.code {
            KeyCode::Backspace | KeyCode::Left => AppMessage::GoBack,
            _ => AppMessage::Noop,
        },
    }
}

/// 处理列表类页面的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 打开详情
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home / End
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // 翻页
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            AppMessage::Content(ContentMessage::PreviousPage)
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            AppMessage::Content(ContentMessage::NextPage)
        }
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map_or(AppMessage::Noop, |n| {
                AppMessage::Content(ContentMessage::GoToPage(n as usize))
            }),

        _ => AppMessage::Noop,
    }
}

/// 处理联系表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match (app.topmost_overlay(), key.code) {
        (Some(OverlayId::NestedOuter), KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::OpenInner)
        }
        (Some(_), KeyCode::Enter) => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn content_app(page: Page) -> App {
        let mut app = App::new(10);
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn page_keys_on_list_pages() {
        let app = content_app(Page::Posts);
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Content(ContentMessage::GoToPage(3))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageDown), &app),
            AppMessage::Content(ContentMessage::NextPage)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('h')), &app),
            AppMessage::Content(ContentMessage::PreviousPage)
        ));
    }

    #[test]
    fn digits_are_typed_into_contact_form() {
        let app = content_app(Page::Contact);
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Content(ContentMessage::Input('3'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::Content(ContentMessage::Input('?'))
        ));
    }

    #[test]
    fn open_overlay_swallows_background_keys() {
        let mut app = content_app(Page::Posts);
        let lock = app.scroll_lock.clone();
        app.posts.modal.open((), &lock);

        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn enter_in_outer_modal_opens_inner() {
        let mut app = content_app(Page::Home);
        let lock = app.scroll_lock.clone();
        app.home.nested_outer.open((), &lock);
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::OpenInner)
        ));
    }

    #[test]
    fn left_click_becomes_click_message() {
        let app = App::new(10);
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(
            handle_event(event, &app),
            AppMessage::Click { column: 4, row: 7 }
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new(10);
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
