//! 页面视图

pub mod contact;
pub mod features;
pub mod home;
pub mod not_found;
pub mod post_detail;
pub mod posts;
pub mod users;
