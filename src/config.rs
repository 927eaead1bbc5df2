use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// `API_BASE` 環境変数は設定ファイルより優先
pub const API_BASE_ENV: &str = "API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.override_api_base(std::env::var(API_BASE_ENV).ok().as_deref());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConsoleError::Config("找不到主目录".into()))?;
        Ok(home.join(".config").join("costchecker").join("config.json"))
    }

    /// 空文字は無視
    pub fn override_api_base(&mut self, value: Option<&str>) {
        if let Some(base) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.api_base = base.to_string();
        }
    }

    pub fn set_api_base(&mut self, base: &str) -> Result<()> {
        let base = base.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConsoleError::Config(format!(
                "API地址必须以 http:// 或 https:// 开头: {}",
                base
            )));
        }
        self.api_base = base.trim_end_matches('/').to_string();
        Ok(())
    }
}
