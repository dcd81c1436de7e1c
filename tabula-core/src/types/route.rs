//! 路由表

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application route.
///
/// Paths mirror the web layout of the demo app: `/`, `/features`, `/users`,
/// `/posts`, `/posts/:id`, `/contact`. Anything else resolves to [`Route::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "camelCase")]
pub enum Route {
    #[default]
    Home,
    Features,
    Users,
    Posts,
    PostDetails { id: u64 },
    Contact,
    NotFound { path: String },
}

impl Route {
    /// 解析路径
    ///
    /// Trailing slashes are ignored and a leading slash is optional.
    /// `/posts/:id` only matches when `id` is a positive integer.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["features"] => Self::Features,
            ["users"] => Self::Users,
            ["posts"] => Self::Posts,
            ["posts", id] => match id.parse::<u64>() {
                Ok(id) if id > 0 => Self::PostDetails { id },
                _ => Self::not_found(trimmed),
            },
            ["contact"] => Self::Contact,
            _ => Self::not_found(trimmed),
        }
    }

    fn not_found(path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self::NotFound { path }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Features => "/features".to_string(),
            Self::Users => "/users".to_string(),
            Self::Posts => "/posts".to_string(),
            Self::PostDetails { id } => format!("/posts/{id}"),
            Self::Contact => "/contact".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Route a user lands on via "back" from here.
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::PostDetails { .. } => Some(Self::Posts),
            Self::Home => None,
            _ => Some(Self::Home),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/features"), Route::Features);
        assert_eq!(Route::parse("/users"), Route::Users);
        assert_eq!(Route::parse("/posts/"), Route::Posts);
        assert_eq!(Route::parse("contact"), Route::Contact);
        assert_eq!(Route::parse("/posts/42"), Route::PostDetails { id: 42 });
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/admin"),
            Route::NotFound {
                path: "/admin".into()
            }
        );
        assert_eq!(
            Route::parse("posts/abc"),
            Route::NotFound {
                path: "/posts/abc".into()
            }
        );
        assert!(matches!(Route::parse("/posts/0"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("/posts/1/edit"), Route::NotFound { .. }));
    }

    #[test]
    fn path_round_trips_through_parse() {
        for route in [
            Route::Home,
            Route::Features,
            Route::Users,
            Route::Posts,
            Route::PostDetails { id: 7 },
            Route::Contact,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn post_details_goes_back_to_posts() {
        assert_eq!(Route::PostDetails { id: 3 }.parent(), Some(Route::Posts));
        assert_eq!(Route::Users.parent(), Some(Route::Home));
        assert_eq!(Route::Features.parent(), Some(Route::Home));
        assert_eq!(Route::Home.parent(), None);
    }
}
