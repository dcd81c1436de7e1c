//! 导航更新逻辑

use super::navigate;
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                navigate(app, id.page());
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    #[test]
    fn confirm_switches_page_and_keeps_highlight() {
        let mut app = App::new(10);
        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Contact);
        assert_eq!(app.navigation.selected, app.navigation.items.len() - 1);

        update(&mut app, NavigationMessage::SelectFirst);
        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Features);
        assert!(app.take_commands().is_empty());

        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Users);
    }
}
