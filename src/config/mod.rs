#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const BASE_URL_ENV: &str = "BACKEND_URL";

/// Explicit backend settings handed to [`HttpBackend`](crate::adapters::HttpBackend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Resolve against the process environment (`BACKEND_URL`).
    pub fn from_sources(flag: Option<String>, file: Option<&toml_config::TomlConfig>) -> Self {
        Self::resolve(flag, file, std::env::var(BASE_URL_ENV).ok())
    }

    /// 優先順序：命令列旗標 > 設定檔 > 環境變數 > 預設值。空字串視為未設定。
    pub fn resolve(
        flag: Option<String>,
        file: Option<&toml_config::TomlConfig>,
        env: Option<String>,
    ) -> Self {
        let from_file = file.and_then(|f| f.backend.base_url.clone());
        let base_url = [flag, from_file, env]
            .into_iter()
            .flatten()
            .find(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = file
            .and_then(|f| f.backend.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            base_url: normalize_base_url(&base_url),
            timeout_seconds,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}
