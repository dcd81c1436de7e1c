//! 用户列表页面视图

use ratatui::{layout::Rect, Frame};

use crate::model::App;
use crate::view::components::table::{self, USER_COLUMNS};

/// 渲染用户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    table::render(&app.users.list, &USER_COLUMNS, frame, area, app.focus.is_content());
}
