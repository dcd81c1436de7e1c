//! API 服务
//!
//! 把 Update 层产生的 `Command` 变成后台任务

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tabula_client::{ApiClient, ClientConfig};
use tabula_core::{
    AuthSlice, CollectionService, InMemorySessionStore, ServiceContext, SessionStore,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::AppConfig;
use crate::message::{AppMessage, Command, FetchOutcome};

/// 模拟表单提交的网络往返
const CONTACT_SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// TUI 的 API 服务
pub struct ApiService {
    runtime: Handle,
    collections: Arc<CollectionService>,
    store: Arc<dyn SessionStore>,
    tx: UnboundedSender<AppMessage>,
}

impl ApiService {
    /// 创建 API 服务实例
    pub fn new(
        config: &AppConfig,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Result<Self> {
        // 1. 会话存储（进程内，退出即清空）
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

        // 2. 令牌：配置中的 token 写入会话，请求时从会话读取
        let auth = AuthSlice::new(Arc::clone(&store));
        if let Some(token) = &config.token {
            auth.set(token).context("storing auth token")?;
        }

        // 3. HTTP 客户端
        let client = ApiClient::with_token_provider(
            ClientConfig {
                base_url: config.base_url.clone(),
                ..ClientConfig::default()
            },
            Arc::new(auth),
        )
        .context("building API client")?;
        log::info!("API base URL: {}", client.base_url());

        // 4. 服务
        let ctx = Arc::new(ServiceContext::new(Arc::new(client), Arc::clone(&store)));
        let collections = Arc::new(CollectionService::new(ctx));

        Ok(Self {
            runtime,
            collections,
            store,
            tx,
        })
    }

    /// 执行一个副作用
    pub fn execute(&self, command: Command) {
        log::debug!("Executing {command:?}");
        let tx = self.tx.clone();

        match command {
            Command::FetchCollection {
                target,
                resource,
                ticket,
                policy,
            } => {
                let collections = Arc::clone(&self.collections);
                self.runtime.spawn(async move {
                    let result = collections.load_collection(resource, policy).await;
                    let cached = collections.cached_count(resource);
                    send(
                        &tx,
                        AppMessage::Fetched(FetchOutcome::List {
                            target,
                            ticket,
                            result,
                            cached,
                        }),
                    );
                });
            }

            Command::FetchRecord { resource, ticket } => {
                let collections = Arc::clone(&self.collections);
                self.runtime.spawn(async move {
                    let result = collections.load_record(resource, ticket.id()).await;
                    send(&tx, AppMessage::Fetched(FetchOutcome::Detail { ticket, result }));
                });
            }

            Command::SubmitContact(submission) => {
                self.runtime.spawn(async move {
                    tokio::time::sleep(CONTACT_SUBMIT_DELAY).await;
                    log::info!("Contact message from {} <{}>", submission.name, submission.email);
                    send(&tx, AppMessage::ContactSubmitted);
                });
            }
        }
    }

    /// 退出时清空会话
    pub fn shutdown(&self) {
        if let Err(e) = self.store.clear() {
            e.log("Clearing session store");
        }
    }
}

fn send(tx: &UnboundedSender<AppMessage>, msg: AppMessage) {
    // 接收端已关闭说明主循环已退出
    if tx.send(msg).is_err() {
        log::debug!("UI loop gone, dropping background result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactSubmission;
    use tokio::sync::mpsc;

    #[test]
    fn contact_submission_reports_back() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = ApiService::new(&AppConfig::default(), runtime.handle().clone(), tx).unwrap();

        service.execute(Command::SubmitContact(ContactSubmission {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            message: "Hello from the terminal".into(),
        }));

        let msg = runtime.block_on(async {
            tokio::time::timeout(Duration::from_secs(5), rx.recv()).await
        });
        assert!(matches!(msg, Ok(Some(AppMessage::ContactSubmitted))));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let config = AppConfig {
            base_url: "not a url".into(),
            ..AppConfig::default()
        };
        assert!(ApiService::new(&config, runtime.handle().clone(), tx).is_err());
    }
}
