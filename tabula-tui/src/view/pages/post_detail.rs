//! 文章详情页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use tabula_client::Record;
use tabula_core::LoadStatus;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染文章详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let view = &app.post_detail.view;

    let lines = match (view.status(), view.record()) {
        (LoadStatus::Loaded, Some(post)) => post_lines(post),
        (LoadStatus::Errored(message), _) => vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Style::default().fg(colors().error)),
            Line::from(""),
            Line::styled("  Alt+r retry · Esc back", Styles::muted()),
        ],
        _ => vec![Line::from(""), Line::styled("  Loading post…", Styles::muted())],
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn post_lines(post: &Record) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", post.text("title")), Styles::title()),
        Line::styled(
            format!("  Post #{} · user {}", post.id(), post.text("userId")),
            Styles::muted(),
        ),
        Line::from(""),
    ];
    // 正文按原始换行分行
    let body = Style::default().fg(colors().fg);
    lines.extend(
        post.text("body")
            .lines()
            .map(|line| Line::styled(format!("  {line}"), body)),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled("  Esc back · Alt+m modal", Styles::muted()));
    lines
}
