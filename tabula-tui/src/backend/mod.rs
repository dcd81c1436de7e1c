//!
//! src/backend/mod.rs
//! Backend 层：与 tabula-core / tabula-client 的桥梁
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod api_service;        // 执行 Command：在 tokio 上发起请求，结果经 mpsc 回送
//!         mod config_service;     // 配置文件加载与保存
//!
//!
//!     依赖组装（ApiService::new）：
//!
//!         InMemorySessionStore ──┬──▶ AuthSlice ──(TokenProvider)──▶ ApiClient
//!                                │                                       │
//!                                └──────────▶ ServiceContext ◀───────────┘
//!                                                   │
//!                                                   ▼
//!                                           CollectionService
//!
//!     主循环是同步的，Backend 持有 tokio 运行时的 Handle，
//!     每个 Command 被 spawn 成一个任务，完成后发送 AppMessage。
//!

mod api_service;
mod config_service;

pub use api_service::ApiService;
pub use config_service::{AppConfig, ConfigService, JsonConfigService};
