//! 主题和样式定义
//!
//! 当前主题保存在一个原子变量里，渲染代码随时通过 `colors()` 读取，
//! 不需要把主题传进每个组件。

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// 当前主题索引（见 `Theme::index`）
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 切换全局主题
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::Relaxed);
}

/// 当前主题
pub fn current_theme() -> Theme {
    Theme::from_index(CURRENT_THEME.load(Ordering::Relaxed))
}

/// 配色方案
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 未知索引按浅色处理
    fn from_index(index: u8) -> Self {
        if index == Theme::Dark as u8 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn palette(self) -> ThemeColors {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

/// 当前主题的颜色
pub fn colors() -> ThemeColors {
    current_theme().palette()
}

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 内容区背景
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏、表头、当前页码
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub modal_bg: Color,
    /// 遮罩下的文字颜色
    pub backdrop: Color,
}

const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(22, 24, 29),
    fg: Color::Rgb(220, 223, 228),
    border: Color::Rgb(60, 64, 72),
    border_focused: Color::Rgb(86, 182, 194),
    highlight: Color::Rgb(86, 182, 194),
    selected_bg: Color::Rgb(40, 70, 84),
    selected_fg: Color::White,
    success: Color::Rgb(152, 195, 121),
    warning: Color::Rgb(229, 192, 123),
    error: Color::Rgb(224, 108, 117),
    muted: Color::Rgb(120, 126, 138),
    modal_bg: Color::Rgb(33, 37, 43),
    backdrop: Color::Rgb(68, 72, 80),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(250, 250, 248),
    fg: Color::Rgb(40, 44, 52),
    border: Color::Rgb(200, 202, 206),
    border_focused: Color::Rgb(1, 132, 188),
    highlight: Color::Rgb(1, 132, 188),
    selected_bg: Color::Rgb(208, 232, 244),
    selected_fg: Color::Black,
    success: Color::Rgb(80, 161, 79),
    warning: Color::Rgb(193, 132, 1),
    error: Color::Rgb(202, 18, 67),
    muted: Color::Rgb(140, 142, 148),
    modal_bg: Color::White,
    backdrop: Color::Rgb(196, 198, 202),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框，获得焦点时高亮
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 光标行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 底部状态栏
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.selected_bg).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().fg)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }
}
