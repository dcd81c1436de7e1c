//! 未知路由页面

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::{colors, Styles};

/// 渲染 404 页面
pub fn render(path: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(
            "  404 · Page not found",
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("  No page is registered at {path}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("  Press Esc to return home", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
