//! 业务逻辑服务层

mod collection_service;
mod session_service;

pub use collection_service::{CachePolicy, CollectionService};
pub use session_service::{AuthSlice, CollectionCache};

use std::sync::Arc;

use crate::traits::{RecordSource, SessionStore};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入数据源与会话存储实现。
pub struct ServiceContext {
    /// 远端数据源
    pub source: Arc<dyn RecordSource>,
    /// 会话存储
    pub store: Arc<dyn SessionStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>, store: Arc<dyn SessionStore>) -> Self {
        Self { source, store }
    }

    /// 集合缓存切片
    pub fn collection_cache(&self) -> CollectionCache {
        CollectionCache::new(Arc::clone(&self.store))
    }

    /// 认证切片
    pub fn auth(&self) -> AuthSlice {
        AuthSlice::new(Arc::clone(&self.store))
    }
}
