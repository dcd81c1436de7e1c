//! 集合加载服务

use std::sync::Arc;

use tabula_client::{Record, Resource};

use crate::error::CoreResult;
use crate::services::{CollectionCache, ServiceContext};

/// Whether a collection load may be served from the session cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Use the cached collection if one is present and non-empty; otherwise
    /// fetch and cache the result.
    #[default]
    Session,
    /// Always fetch, then replace the cached collection (manual refresh).
    Reload,
    /// Always fetch; the cache is neither read nor written.
    Bypass,
}

/// 集合加载服务
pub struct CollectionService {
    ctx: Arc<ServiceContext>,
    cache: CollectionCache,
}

impl CollectionService {
    /// 创建集合服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let cache = ctx.collection_cache();
        Self { ctx, cache }
    }

    /// 加载整个集合
    pub async fn load_collection(
        &self,
        resource: Resource,
        policy: CachePolicy,
    ) -> CoreResult<Vec<Record>> {
        if policy == CachePolicy::Session {
            match self.cache.get(resource) {
                Ok(Some(records)) if !records.is_empty() => {
                    log::debug!("Serving {resource} from session cache ({} items)", records.len());
                    return Ok(records);
                }
                Ok(_) => {}
                Err(e) => log::warn!("Ignoring unreadable {resource} cache: {e}"),
            }
        }

        let records = self.ctx.source.fetch_collection(resource).await?;
        log::info!("Fetched {} {resource}", records.len());

        if policy != CachePolicy::Bypass {
            // 缓存写入失败不影响本次结果
            if let Err(e) = self.cache.put(resource, &records) {
                log::warn!("Failed to cache {resource}: {e}");
            }
        }
        Ok(records)
    }

    /// 按 id 加载单条记录（不走缓存）
    pub async fn load_record(&self, resource: Resource, id: u64) -> CoreResult<Record> {
        Ok(self.ctx.source.fetch_by_id(resource, id).await?)
    }

    /// Number of records currently cached for `resource`.
    pub fn cached_count(&self, resource: Resource) -> usize {
        self.cache.len(resource)
    }
}
