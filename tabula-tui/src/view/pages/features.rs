//! 功能介绍页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::state::FEATURES;
use crate::view::theme::{colors, Styles};

/// 渲染功能列表
pub fn render(frame: &mut Frame, area: Rect) {
    let c = colors();

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Features", Styles::title()),
            Span::styled("    Alt+m", Styles::hint_key()),
            Span::styled(" open modal", Styles::hint_desc()),
        ]),
        Line::from(""),
    ];

    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", feature.icon), Style::default().fg(c.highlight)),
            Span::styled(feature.title, Styles::title()),
        ]));
        lines.push(Line::styled(format!("    {}", feature.description), Styles::muted()));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
