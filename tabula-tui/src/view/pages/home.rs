//! 首页视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tabula_core::LoadStatus;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let posts_line = match app.home.posts.status() {
        LoadStatus::Idle | LoadStatus::Loading => {
            Line::styled("  Loading posts...", Styles::muted())
        }
        LoadStatus::Errored(_) => Line::styled(
            format!("  {}", app.home.posts.error_message()),
            Style::default().fg(c.error),
        ),
        LoadStatus::Loaded => Line::from(vec![
            Span::styled("  Cached posts in store: ", Style::default().fg(c.fg)),
            Span::styled(app.home.cached_posts.to_string(), Style::default().fg(c.success)),
        ]),
    };

    let hint = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Styles::hint_key()),
            Span::styled(desc, Styles::hint_desc()),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled("  Welcome to Tabula", Styles::title()),
        Line::styled(
            "  Browse users and posts, try the modals, send a message.",
            Styles::muted(),
        ),
        Line::from(""),
        posts_line,
        Line::from(""),
        hint("Enter", "Open example modal"),
        hint("Alt+m", "Open example modal"),
        hint("Alt+n", "Open nested modal"),
        hint("?", "Keyboard shortcuts"),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
