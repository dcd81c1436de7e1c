//! 功能介绍页面状态

use tabula_core::Overlay;

/// 一项功能介绍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// 功能列表（按显示顺序）
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "◆",
        title: "Session Store",
        description: "Typed slices over a shared session store.",
    },
    Feature {
        icon: "◐",
        title: "Themes",
        description: "Dark and light palettes, Alt+t to switch.",
    },
    Feature {
        icon: "✓",
        title: "Form Validation",
        description: "Field-level errors on the contact form.",
    },
    Feature {
        icon: "!",
        title: "Notifications",
        description: "Short-lived toasts in the status bar.",
    },
    Feature {
        icon: "⇄",
        title: "HTTP Client",
        description: "reqwest client with bearer token support.",
    },
    Feature {
        icon: "▦",
        title: "Paginated Tables",
        description: "Client-side paging with compact columns.",
    },
];

/// 功能介绍页面状态
#[derive(Debug, Default)]
pub struct FeaturesState {
    /// "Features Modal"
    pub modal: Overlay<()>,
}

impl FeaturesState {
    pub fn new() -> Self {
        Self::default()
    }
}
