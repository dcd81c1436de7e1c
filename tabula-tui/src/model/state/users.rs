//! 用户列表页面状态

use tabula_client::{Record, Resource};
use tabula_core::{ListView, Overlay};

/// 用户列表页面状态
#[derive(Debug)]
pub struct UsersState {
    /// 分页列表
    pub list: ListView,
    /// "User Details" 弹窗，内容为选中的用户
    pub detail: Overlay<Record>,
}

impl UsersState {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListView::new(Resource::Users, page_size),
            detail: Overlay::new(),
        }
    }
}
