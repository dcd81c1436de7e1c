//! 文章列表页面视图

use ratatui::{layout::Rect, Frame};

use crate::model::App;
use crate::view::components::table::{self, POST_COLUMNS};

/// 渲染文章列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    table::render(&app.posts.list, &POST_COLUMNS, frame, area, app.focus.is_content());
}
