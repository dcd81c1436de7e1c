//! 类型定义模块

mod notification;
mod pagination;
mod route;

pub use notification::{
    NOTIFICATION_TTL_SECS, Notification, NotificationQueue, NotificationStatus,
};
pub use pagination::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageResult, paginate, serial_number,
};
pub use route::Route;

// Re-export client 库的公共类型
pub use tabula_client::{Address, Company, Post, Record, Resource, User};
