//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, OverlayId, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Tabula v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let title = match &app.current_page {
        Page::PostDetails { id } => format!(" {} #{id} ", app.current_page.title()),
        page => format!(" {} ", page.title()),
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()))
        .style(Style::default().bg(colors().bg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::Features => pages::features::render(frame, inner_area),
        Page::Users => pages::users::render(app, frame, inner_area),
        Page::Posts => pages::posts::render(app, frame, inner_area),
        Page::PostDetails { .. } => pages::post_detail::render(app, frame, inner_area),
        Page::Contact => pages::contact::render(app, frame, inner_area),
        Page::NotFound { path } => pages::not_found::render(path, frame, inner_area),
    }
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗在屏幕上的区域（绘制与鼠标命中判断共用）
pub fn modal_rect(id: OverlayId, area: Rect) -> Rect {
    let (width, height) = match id {
        OverlayId::Help => (58, 24),
        OverlayId::UserDetails => (62, 17),
        OverlayId::NestedOuter => (64, 11),
        OverlayId::NestedInner => (46, 7),
        OverlayId::HomeModal
        | OverlayId::FeaturesModal
        | OverlayId::PostsModal
        | OverlayId::DetailsModal
        | OverlayId::ContactModal => (52, 7),
    };
    centered_rect(width, height, area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_page_title_and_menu() {
        let mut app = App::new(10);
        app.current_page = Page::Contact;
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Tabula v"));
        assert!(screen.contains(" Menu "));
        assert!(screen.contains("Email"));
    }

    #[test]
    fn renders_feature_list() {
        let mut app = App::new(10);
        app.current_page = Page::Features;
        let screen = draw(&app, 100, 30);
        assert!(screen.contains(" Features "));
        assert!(screen.contains("Session Store"));
        assert!(screen.contains("Paginated Tables"));
    }

    #[test]
    fn renders_not_found_path() {
        let mut app = App::new(10);
        app.current_page = Page::NotFound {
            path: "/nope".to_string(),
        };
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Page not found"));
        assert!(screen.contains("/nope"));
    }

    #[test]
    fn open_modal_is_drawn_on_top() {
        let mut app = App::new(10);
        let lock = app.scroll_lock.clone();
        app.home.modal.open((), &lock);
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Home Modal"));
        assert!(screen.contains("Esc or click outside to close"));
    }

    #[test]
    fn inner_modal_sits_inside_outer() {
        let area = Rect::new(0, 0, 120, 40);
        let outer = modal_rect(OverlayId::NestedOuter, area);
        let inner = modal_rect(OverlayId::NestedInner, area);
        assert!(outer.contains(inner.as_position()));
        assert!(inner.width < outer.width);
    }

    #[test]
    fn modal_never_exceeds_screen() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = modal_rect(OverlayId::Help, area);
        assert!(rect.width <= 30 && rect.height <= 10);
    }
}
