//! 弹窗组件
//!
//! 弹窗自底向上绘制，每画一层之前先把下面的内容压暗（遮罩）。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tabula_client::Record;

use crate::model::{App, OverlayId};
use crate::view::layout::modal_rect;
use crate::view::theme::{colors, Styles};

/// 渲染所有打开的弹窗
pub fn render(app: &App, frame: &mut Frame) {
    for id in app.open_overlays() {
        render_backdrop(frame);
        match id {
            OverlayId::Help => render_help(frame),
            OverlayId::UserDetails => {
                if let Some(user) = app.users.detail.content() {
                    render_user_details(frame, user);
                }
            }
            OverlayId::NestedOuter => render_message(
                frame,
                id,
                &[
                    "This modal contains another modal to test nested behavior.",
                    "",
                    "Press Enter to open the inner modal.",
                ],
            ),
            OverlayId::HomeModal => {
                render_message(frame, id, &["Example modal opened from the Home page."]);
            }
            OverlayId::FeaturesModal => {
                render_message(frame, id, &["Modal on the Features page."]);
            }
            OverlayId::NestedInner => {
                render_message(frame, id, &["Nested content inside the inner modal."]);
            }
            OverlayId::PostsModal => render_message(frame, id, &["Modal on the Posts page."]),
            OverlayId::DetailsModal => {
                render_message(frame, id, &["Modal on the Post Details page."]);
            }
            OverlayId::ContactModal => render_message(frame, id, &["Modal on the Contact page."]),
        }
    }
}

/// 遮罩：压暗整个屏幕
fn render_backdrop(frame: &mut Frame) {
    let area = frame.area();
    frame
        .buffer_mut()
        .set_style(area, Style::default().fg(colors().backdrop));
}

/// 清空区域并画出弹窗边框，返回内容区域
fn modal_frame(frame: &mut Frame, id: OverlayId) -> Rect {
    let c = colors();
    let area = modal_rect(id, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", id.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.modal_bg).fg(c.fg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 左右留白
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

fn close_hint() -> Line<'static> {
    Line::styled("Esc or click outside to close", Styles::muted())
}

/// 纯文本弹窗
fn render_message(frame: &mut Frame, id: OverlayId, text: &[&str]) {
    let inner = modal_frame(frame, id);

    let mut lines: Vec<Line> = text.iter().map(|t| Line::from(*t)).collect();
    lines.push(Line::from(""));
    lines.push(close_hint());

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 用户详情弹窗
fn render_user_details(frame: &mut Frame, user: &Record) {
    let inner = modal_frame(frame, OverlayId::UserDetails);
    let c = colors();

    let label =
        |text: &'static str| Span::styled(format!("{text:<10}"), Style::default().fg(c.muted));
    let value = |path: &str| Span::styled(user.text(path), Style::default().fg(c.fg));

    let address = ["address.street", "address.suite", "address.city", "address.zipcode"]
        .iter()
        .map(|path| user.text(path))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from(Span::styled(
            user.text("name"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("Name"), value("name")]),
        Line::from(vec![label("Username"), value("username")]),
        Line::from(vec![label("Email"), value("email")]),
        Line::from(vec![label("Phone"), value("phone")]),
        Line::from(vec![label("Website"), value("website")]),
        Line::from(vec![label("Company"), value("company.name")]),
        Line::from(vec![label("Address"), Span::styled(address, Style::default().fg(c.fg))]),
        Line::from(""),
        close_hint(),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let inner = modal_frame(frame, OverlayId::Help);

    let section = |text: &'static str| {
        Line::styled(text, Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD))
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section("Global shortcuts"),
        entry("Tab", "Switch panel"),
        entry("↑↓ / jk", "Move up/down"),
        entry("Enter", "Confirm / open"),
        entry("Esc", "Close overlay / back"),
        entry("Alt+r / F5", "Refresh"),
        entry("Alt+t", "Toggle theme"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        section("Lists"),
        entry("←→ / hl", "Previous / next page"),
        entry("PgUp PgDn", "Previous / next page"),
        entry("1-9", "Jump to page"),
        Line::from(""),
        section("Pages"),
        entry("Alt+m", "Open page modal"),
        entry("Alt+n", "Nested modal (Home)"),
        entry("Alt+s", "Submit contact form"),
        Line::from(""),
        close_hint(),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
