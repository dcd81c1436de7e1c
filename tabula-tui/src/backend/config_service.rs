//! 配置服务
//!
//! 配置文件位于 `{config_dir}/tabula/config.json`，不存在时使用默认值。
//! 环境变量优先级高于配置文件：
//!     - `TABULA_BASE_URL`
//!     - `TABULA_TOKEN`
//!     - `TABULA_PAGE_SIZE`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tabula_client::DEFAULT_BASE_URL;
use tabula_core::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// API 根地址
    pub base_url: String,
    /// 每页行数
    pub page_size: usize,
    /// 启动时打开的路由，例如 `/users`
    pub start_route: String,
    /// 主题
    pub theme: Theme,
    /// Bearer 令牌（可选）
    pub token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            start_route: "/".to_string(),
            theme: Theme::Dark,
            token: None,
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    ///
    /// `lookup` 通常为 `std::env::var`，测试中可替换。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("TABULA_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(token) = lookup("TABULA_TOKEN") {
            self.token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Some(raw) = lookup("TABULA_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) => self.page_size = size,
                Err(e) => log::warn!("Ignoring TABULA_PAGE_SIZE={raw:?}: {e}"),
            }
        }
        self.normalize();
    }

    /// 页大小限制在 `1..=MAX_PAGE_SIZE`
    fn normalize(&mut self) {
        self.page_size = PageRequest::new(1, self.page_size)
            .validated(MAX_PAGE_SIZE)
            .page_size;
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 平台默认路径下的配置服务
    pub fn with_default_path() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join("tabula").join("config.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = if self.path.exists() {
            let text = fs::read_to_string(&self.path)
                .with_context(|| format!("reading {}", self.path.display()))?;
            serde_json::from_str::<AppConfig>(&text)
                .with_context(|| format!("parsing {}", self.path.display()))?
        } else {
            log::info!("No config at {}, using defaults", self.path.display());
            AppConfig::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
