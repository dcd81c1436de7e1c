//! 左侧菜单
//!
//! 光标行由 `ListState` 高亮；当前所在页面另外用 `●` 标出，
//! 这样在详情页时也能看出属于哪个列表。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::{App, NavItem};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_navigation();

    let block = Block::default()
        .title(" Menu ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .map(|item| menu_item(app, item))
        .collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().highlight)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn menu_item<'a>(app: &App, item: &'a NavItem) -> ListItem<'a> {
    let c = colors();
    let page = item.id.page();
    let active = page == app.current_page
        || (app.current_page.is_detail_page() && app.current_page.parent() == Some(page));
    let marker = if active { "● " } else { "  " };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(c.highlight)),
        Span::styled(format!("{} {}", item.icon, item.label), Style::default().fg(c.fg)),
    ]))
}
