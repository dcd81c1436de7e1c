//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use tabula_client::{ClientError, Record, RecordSource, Resource};
use tokio::sync::Notify;

use crate::services::ServiceContext;
use crate::traits::InMemorySessionStore;

// ===== Record factories =====

/// 构造一条同时具备 user 与 post 字段的记录
pub fn record(id: u64) -> Record {
    serde_json::from_value(json!({
        "id": id,
        "userId": 1,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
        "phone": "1-770-736-8031",
        "website": "example.org",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "company": { "name": "Romaguera-Crona" },
        "title": format!("Post {id}"),
        "body": "quia et suscipit",
    }))
    .unwrap_or_else(|e| panic!("invalid test record: {e}"))
}

/// id 为 1..=n 的记录
pub fn records(n: u64) -> Vec<Record> {
    (1..=n).map(record).collect()
}

// ===== MockRecordSource =====

pub struct MockRecordSource {
    collections: HashMap<Resource, Vec<Record>>,
    /// 如果 Some，所有请求都返回此错误
    failure: Mutex<Option<ClientError>>,
    /// 如果 Some，下一次集合请求会等待该通知
    gate: Mutex<Option<Arc<Notify>>>,
    collection_calls: AtomicUsize,
    record_calls: AtomicUsize,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self {
            collections: HashMap::new(),
            failure: Mutex::new(None),
            gate: Mutex::new(None),
            collection_calls: AtomicUsize::new(0),
            record_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, resource: Resource, records: Vec<Record>) -> Self {
        self.collections.insert(resource, records);
        self
    }

    pub fn fail_with(&self, err: ClientError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
    }

    /// 挂起下一次集合请求，直到返回的 `Notify` 被触发
    pub fn hold_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&gate));
        gate
    }

    pub fn collection_calls(&self) -> usize {
        self.collection_calls.load(Ordering::SeqCst)
    }

    pub fn record_calls(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    fn failure(&self) -> Option<ClientError> {
        self.failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn fetch_collection(&self, resource: Resource) -> tabula_client::Result<Vec<Record>> {
        self.collection_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(err) = self.failure() {
            return Err(err);
        }
        Ok(self.collections.get(&resource).cloned().unwrap_or_default())
    }

    async fn fetch_by_id(&self, resource: Resource, id: u64) -> tabula_client::Result<Record> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.collections
            .get(&resource)
            .and_then(|items| items.iter().find(|r| r.id() == id))
            .cloned()
            .ok_or(ClientError::NotFound { resource, id })
    }
}

// ===== Factory =====

/// 创建使用内存会话存储的测试上下文
pub fn create_test_context(source: Arc<MockRecordSource>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        source,
        Arc::new(InMemorySessionStore::new()),
    ))
}
