//! 底部状态栏组件

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tabula_core::types::NotificationStatus;

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 最新的提示显示在右侧
    let toast = app.notifications.latest(Utc::now()).map(|n| {
        let c = colors();
        let (icon, color) = match n.status {
            NotificationStatus::Success => ("✓", c.success),
            NotificationStatus::Info => ("ℹ", Color::White),
            NotificationStatus::Error => ("✗", c.error),
        };
        Line::from(Span::styled(
            format!(" {icon} {} ", n.message),
            Style::default()
                .bg(Color::Black)
                .fg(color)
                .add_modifier(Modifier::BOLD),
        ))
    });

    let toast_width = toast
        .as_ref()
        .map_or(0, |line| u16::try_from(line.width()).unwrap_or(u16::MAX));
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(toast_width)])
        .split(area);

    // 快捷键提示
    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), parts[0]);

    if let Some(line) = toast {
        frame.render_widget(Paragraph::new(line).style(Styles::statusbar()), parts[1]);
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.has_overlay() {
        hints.push(("Esc", "Close"));
        hints.push(("Click", "Outside to close"));
        return hints;
    }

    hints.push(("Tab", "Switch Panels"));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {
                hints.push(("Enter/Alt+m", "Modal"));
                hints.push(("Alt+n", "Nested"));
            }
            Page::Features => {
                hints.push(("Enter/Alt+m", "Modal"));
            }
            Page::Users => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→/1-9", "Page"));
                hints.push(("Enter", "Details"));
            }
            Page::Posts => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→/1-9", "Page"));
                hints.push(("Enter", "Open"));
                hints.push(("Alt+m", "Modal"));
            }
            Page::PostDetails { .. } | Page::NotFound { .. } => {
                hints.push(("Esc", "Back"));
                hints.push(("Alt+m", "Modal"));
            }
            Page::Contact => {
                hints.push(("↑↓", "Field"));
                hints.push(("Alt+s", "Submit"));
                hints.push(("Alt+m", "Modal"));
            }
        },
    }

    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}
