//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Features,
    Users,
    Posts,
    Contact,
}

impl NavItemId {
    /// 导航项对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Home => Page::Home,
            NavItemId::Features => Page::Features,
            NavItemId::Users => Page::Users,
            NavItemId::Posts => Page::Posts,
            NavItemId::Contact => Page::Contact,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    label: "Home",
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Features,
                    label: "Features",
                    icon: "★",
                },
                NavItem {
                    id: NavItemId::Users,
                    label: "Users",
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Posts,
                    label: "Posts",
                    icon: "≡",
                },
                NavItem {
                    id: NavItemId::Contact,
                    label: "Contact",
                    icon: "✉",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }

    /// 让高亮跟随当前页面（详情页高亮其所属列表）
    pub fn sync_with(&mut self, page: &Page) {
        let id = match page {
            Page::Home | Page::NotFound { .. } => NavItemId::Home,
            Page::Features => NavItemId::Features,
            Page::Users => NavItemId::Users,
            Page::Posts | Page::PostDetails { .. } => NavItemId::Posts,
            Page::Contact => NavItemId::Contact,
        };
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
