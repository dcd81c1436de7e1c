//! 分页表格组件
//!
//! 渲染 `ListView` 的当前页：序号列 + 数据列，下方一行分页控制。
//! 内容区宽度小于 `COMPACT_BREAKPOINT` 时只显示精简列。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tabula_core::{ListView, LoadStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::theme::{colors, Styles};

/// 窄屏阈值（列）
pub const COMPACT_BREAKPOINT: u16 = 80;

const SERIAL_WIDTH: u16 = 5;
const COLUMN_SPACING: u16 = 1;

/// 表格列
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// 记录字段路径，如 `address.city`
    pub path: &'static str,
    /// 占剩余宽度的百分比
    pub percent: u16,
}

/// 完整列集与窄屏列集
#[derive(Debug, Clone, Copy)]
pub struct ColumnManifest {
    pub columns: &'static [Column],
    pub compact: &'static [Column],
}

impl ColumnManifest {
    /// 按可用宽度选择列集
    pub fn for_width(&self, width: u16) -> &'static [Column] {
        if width < COMPACT_BREAKPOINT {
            self.compact
        } else {
            self.columns
        }
    }
}

pub const USER_COLUMNS: ColumnManifest = ColumnManifest {
    columns: &[
        Column {
            header: "Name",
            path: "name",
            percent: 25,
        },
        Column {
            header: "Email",
            path: "email",
            percent: 30,
        },
        Column {
            header: "Phone",
            path: "phone",
            percent: 25,
        },
        Column {
            header: "City",
            path: "address.city",
            percent: 20,
        },
    ],
    compact: &[
        Column {
            header: "Name",
            path: "name",
            percent: 45,
        },
        Column {
            header: "Email",
            path: "email",
            percent: 55,
        },
    ],
};

pub const POST_COLUMNS: ColumnManifest = ColumnManifest {
    columns: &[
        Column {
            header: "Title",
            path: "title",
            percent: 40,
        },
        Column {
            header: "Body",
            path: "body",
            percent: 60,
        },
    ],
    compact: &[Column {
        header: "Title",
        path: "title",
        percent: 100,
    }],
};

/// 按显示宽度截断，超出部分以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    // 多行正文压成一行
    let text = text.replace('\n', " ");
    if text.width() <= max_width {
        return text;
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// 列宽（字符数）
fn column_widths(columns: &[Column], width: u16) -> Vec<u16> {
    let count = u16::try_from(columns.len()).unwrap_or(u16::MAX);
    let available = width
        .saturating_sub(SERIAL_WIDTH)
        .saturating_sub(COLUMN_SPACING.saturating_mul(count));
    columns
        .iter()
        .map(|col| {
            let w = u32::from(available) * u32::from(col.percent) / 100;
            u16::try_from(w).unwrap_or(available).max(1)
        })
        .collect()
}

/// 渲染表格
pub fn render(
    list: &ListView,
    manifest: &ColumnManifest,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    if list.rows().is_empty() {
        render_placeholder(list, frame, layout[0]);
    } else {
        render_rows(list, manifest, frame, layout[0], focused);
    }
    render_page_controls(list, frame, layout[1]);
}

/// 空数据占位
fn render_placeholder(list: &ListView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let (text, style) = match list.status() {
        LoadStatus::Idle | LoadStatus::Loading => ("Loading…".to_string(), Styles::muted()),
        LoadStatus::Errored(message) => (message.clone(), Style::default().fg(c.error)),
        LoadStatus::Loaded => ("No records".to_string(), Styles::muted()),
    };

    if area.height == 0 {
        return;
    }
    let line_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        line_area,
    );
}

fn render_rows(
    list: &ListView,
    manifest: &ColumnManifest,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) {
    let c = colors();
    let columns = manifest.for_width(area.width);
    let widths = column_widths(columns, area.width);
    let page = list.page();

    let header = Row::new(
        std::iter::once(Cell::from("#")).chain(columns.iter().map(|col| Cell::from(col.header))),
    )
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD));

    let rows = list.rows().iter().enumerate().map(|(i, record)| {
        let serial = Cell::from(page.serial_number(i).to_string()).style(Styles::muted());
        let cells = columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| Cell::from(truncate(&record.text(col.path), usize::from(*w))));
        Row::new(std::iter::once(serial).chain(cells))
    });

    let constraints = std::iter::once(Constraint::Length(SERIAL_WIDTH))
        .chain(widths.iter().map(|w| Constraint::Length(*w)));

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(highlight)
        .highlight_symbol("▶");

    let mut state = TableState::default();
    state.select(Some(list.cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 分页控制行：‹ prev  1 [2] 3  next ›   共 N 条
fn render_page_controls(list: &ListView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let page = list.page();
    if page.total_pages == 0 {
        return;
    }

    let enabled = Style::default().fg(c.fg);
    let disabled = Styles::muted();

    let mut spans = vec![Span::styled(
        "‹ prev ",
        if page.has_previous() { enabled } else { disabled },
    )];
    for n in page.page_numbers() {
        if n == list.requested_page() {
            spans.push(Span::styled(
                format!("[{n}]"),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {n} "), enabled));
        }
    }
    spans.push(Span::styled(
        " next ›",
        if page.has_next() { enabled } else { disabled },
    ));
    spans.push(Span::styled(format!("   {} total", page.total), disabled));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use tabula_client::{Record, Resource};
    use tabula_core::CoreError;

    fn user(id: u64) -> Record {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("User {id}"),
            "email": format!("user{id}@example.com"),
            "phone": format!("555-01{id:02}"),
            "address": { "city": "Gotham" },
        }))
        .unwrap()
    }

    /// 已加载第 `page` 页的用户列表（共 25 条，每页 10 条）
    fn users_on_page(page: usize) -> ListView {
        let mut list = ListView::new(Resource::Users, 10);
        let all: Vec<Record> = (1..=25).map(user).collect();
        let ticket = list.mount();
        assert!(list.apply(ticket, Ok(all.clone())));
        if let Some(ticket) = list.change_page(page) {
            assert!(list.apply(ticket, Ok(all)));
        }
        list
    }

    fn draw(list: &ListView, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(list, &USER_COLUMNS, frame, frame.area(), true))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen(list: &ListView, width: u16) -> String {
        draw(list, width, 16).join("\n")
    }

    #[test]
    fn placeholder_follows_load_status() {
        let mut list = ListView::new(Resource::Users, 10);
        let ticket = list.mount();
        assert!(screen(&list, 100).contains("Loading…"));

        assert!(list.apply(ticket, Err(CoreError::NetworkError("HTTP 500".into()))));
        let errored = screen(&list, 100);
        assert!(errored.contains("Failed to load users"));
        assert!(!errored.contains("HTTP 500"));

        let ticket = list.refresh().unwrap();
        assert!(list.apply(ticket, Ok(Vec::new())));
        let empty = screen(&list, 100);
        assert!(empty.contains("No records"));
        assert!(!empty.contains("Loading…"));
    }

    #[test]
    fn narrow_render_drops_columns_but_keeps_serials() {
        let list = users_on_page(2);
        assert_eq!(list.page().current_page, 2);

        let narrow = draw(&list, 79, 16);
        let wide = draw(&list, 100, 16);

        let narrow_text = narrow.join("\n");
        assert!(narrow_text.contains("Name") && narrow_text.contains("Email"));
        assert!(!narrow_text.contains("Phone") && !narrow_text.contains("City"));

        let wide_text = wide.join("\n");
        assert!(wide_text.contains("Phone") && wide_text.contains("City"));

        for lines in [&narrow, &wide] {
            let first_row = lines
                .iter()
                .find(|line| line.contains("User 11"))
                .expect("first row of page 2");
            let serial = first_row.trim_start_matches('▶').trim_start();
            assert!(serial.starts_with("11 "), "row was {first_row:?}");
            assert!(!lines.iter().any(|line| line.contains("User 10 ")));
        }
        assert!(wide_text.contains("[2]"));
    }

    #[test]
    fn compact_columns_below_breakpoint() {
        assert_eq!(USER_COLUMNS.for_width(79).len(), 2);
        assert_eq!(USER_COLUMNS.for_width(80).len(), 4);
        assert_eq!(POST_COLUMNS.for_width(40)[0].header, "Title");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        // 全角字符占两列
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
        assert_eq!(truncate("line one\nline two", 40), "line one line two");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn column_widths_fill_available_space() {
        let widths = column_widths(USER_COLUMNS.columns, 105);
        let total: u16 = widths.iter().sum();
        assert!(total <= 105 - SERIAL_WIDTH);
        assert!(widths.iter().all(|w| *w > 0));
    }
}
