//! View state machines
//!
//! Each list or detail view owns a small state machine:
//!
//! ```text
//! Idle ──mount/load──▶ Loading ──Ok──▶ Loaded
//!                         │   ▲           │
//!                         Err └─change_page/refresh
//!                         ▼
//!                      Errored
//! ```
//!
//! Every fetch is issued against a ticket. Results carrying a ticket from an
//! older generation, or arriving after the view was unmounted, are dropped.

mod detail_view;
mod list_view;
mod overlay;

pub use detail_view::{DetailTicket, DetailView};
pub use list_view::{ListView, RequestTicket};
pub use overlay::{Overlay, ScrollGuard, ScrollLock};

use serde::Serialize;

/// Load status of a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Carries the user-facing message for this view.
    Errored(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }
}
