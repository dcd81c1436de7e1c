//! 副作用请求

use tabula_client::Resource;
use tabula_core::{CachePolicy, DetailTicket, RequestTicket};

use super::FetchTarget;
use crate::model::state::ContactSubmission;

/// Update 层产生、由 Backend 执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 拉取整个集合，完成后回送 `FetchOutcome::List`
    FetchCollection {
        target: FetchTarget,
        resource: Resource,
        ticket: RequestTicket,
        policy: CachePolicy,
    },
    /// 拉取单条记录，完成后回送 `FetchOutcome::Detail`
    FetchRecord {
        resource: Resource,
        ticket: DetailTicket,
    },
    /// 提交联系表单
    SubmitContact(ContactSubmission),
}
