use crate::error::{GenfarmError, Result};
use genfarm_common::ServiceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "GENFARM_SUPABASE_URL";
pub const ENV_API_KEY: &str = "GENFARM_SUPABASE_PUBLISHABLE_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
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

    /// 読めない設定ファイルは警告して既定値から始める（`config` での上書き用）
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("設定ファイルを読めないため既定値を使用 {}: {}", path.display(), e);
            Self::default()
        })
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
            .ok_or_else(|| GenfarmError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("genfarm").join("config.json"))
    }

    pub fn get_base_url(&self) -> Result<String> {
        resolve(std::env::var(ENV_BASE_URL).ok(), self.base_url.clone())
            .ok_or(GenfarmError::MissingBaseUrl)
    }

    pub fn get_api_key(&self) -> Result<String> {
        resolve(std::env::var(ENV_API_KEY).ok(), self.api_key.clone())
            .ok_or(GenfarmError::MissingApiKey)
    }

    /// 環境変数を優先して接続先を組み立てる
    pub fn service(&self) -> Result<ServiceConfig> {
        Ok(ServiceConfig::new(self.get_base_url()?, self.get_api_key()?)?)
    }

    pub fn set_base_url(&mut self, url: String) {
        self.base_url = Some(url.trim().trim_end_matches('/').to_string());
    }

    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key.trim().to_string());
    }

    /// 表示用（先頭4文字以外を伏せる）
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                let head: String = key.chars().take(4).collect();
                format!("{}…", head)
            }
            _ => "未設定".to_string(),
        }
    }
}

/// 空文字は未設定として扱い、環境変数 → 設定ファイルの順に採用
fn resolve(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or(file_value.filter(|v| !v.trim().is_empty()))
}
