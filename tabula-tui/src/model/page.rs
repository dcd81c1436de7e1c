//! 页面状态定义

use tabula_core::types::Route;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 功能介绍
    Features,
    /// 用户列表
    Users,
    /// 文章列表
    Posts,
    /// 文章详情
    PostDetails { id: u64 },
    /// 联系表单
    Contact,
    /// 未知路由
    NotFound { path: String },
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Users => "Users",
            Page::Posts => "Posts",
            Page::PostDetails { .. } => "Post Details",
            Page::Contact => "Contact",
            Page::NotFound { .. } => "Not Found",
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::PostDetails { .. } | Page::NotFound { .. })
    }

    /// 对应的路由
    pub fn route(&self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::Features => Route::Features,
            Page::Users => Route::Users,
            Page::Posts => Route::Posts,
            Page::PostDetails { id } => Route::PostDetails { id: *id },
            Page::Contact => Route::Contact,
            Page::NotFound { path } => Route::NotFound { path: path.clone() },
        }
    }

    /// 返回上一级页面
    pub fn parent(&self) -> Option<Page> {
        self.route().parent().map(Page::from)
    }
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Features => Page::Features,
            Route::Users => Page::Users,
            Route::Posts => Page::Posts,
            Route::PostDetails { id } => Page::PostDetails { id },
            Route::Contact => Page::Contact,
            Route::NotFound { path } => Page::NotFound { path },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_from_path() {
        assert_eq!(Page::from(Route::parse("/posts/3")), Page::PostDetails { id: 3 });
        assert_eq!(Page::from(Route::parse("/users")), Page::Users);
        assert_eq!(Page::from(Route::parse("/features")), Page::Features);
        assert!(matches!(Page::from(Route::parse("/nope")), Page::NotFound { .. }));
    }

    #[test]
    fn detail_page_goes_back_to_list() {
        assert_eq!(Page::PostDetails { id: 3 }.parent(), Some(Page::Posts));
        assert_eq!(Page::Contact.parent(), Some(Page::Home));
        assert_eq!(Page::Home.parent(), None);
    }
}
