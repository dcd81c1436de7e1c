//! 联系表单页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::{App, ContactField};
use crate::view::theme::{colors, Styles};

/// 渲染联系表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.contact.form;
    let editing = app.focus.is_content() && !app.contact.submitting;

    let mut lines = vec![
        Line::from(""),
        Line::styled("  Contact", Styles::title()),
        Line::from(""),
    ];

    for field in ContactField::ALL {
        let focused = editing && form.focus == field;
        let label_style = if focused {
            Style::default().fg(c.highlight)
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(format!("  {field}"), label_style));

        let value = form.value(field);
        let mut spans = vec![Span::styled(
            if focused { "  ▶ " } else { "    " },
            Style::default().fg(c.highlight),
        )];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), Styles::muted()));
        } else {
            spans.push(Span::styled(value.to_string(), Style::default().fg(c.fg)));
        }
        if focused {
            spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        lines.push(Line::from(spans));

        match form.error_for(field) {
            Some(message) => lines.push(Line::styled(
                format!("    {message}"),
                Style::default().fg(c.error),
            )),
            None => lines.push(Line::from("")),
        }
    }

    if app.contact.submitting {
        lines.push(Line::styled("  Submitting...", Style::default().fg(c.warning)));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  Alt+s", Styles::hint_key()),
            Span::styled(" submit  ", Styles::hint_desc()),
            Span::styled("↑↓", Styles::hint_key()),
            Span::styled(" switch field  ", Styles::hint_desc()),
            Span::styled("Alt+m", Styles::hint_key()),
            Span::styled(" modal", Styles::hint_desc()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
