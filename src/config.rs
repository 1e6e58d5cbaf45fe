//! CLI configuration
//!
//! Stored as JSON at `~/.config/processos/config.json`. The environment
//! variables `PROCESSOS_API_URL` and `PROCESSOS_API_TOKEN` take precedence
//! over the file when building the request context.

use crate::error::{DashboardError, Result};
use processos_common::{RequestContext, DEFAULT_BASE_URL, DEFAULT_ROWS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_API_URL: &str = "PROCESSOS_API_URL";
pub const ENV_API_TOKEN: &str = "PROCESSOS_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: u64,
    pub rows_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: None,
            timeout_seconds: 30,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Read `path`, falling back to defaults when it does not exist
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
            .ok_or_else(|| DashboardError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("processos").join("config.json"))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let ctx = RequestContext::new(url, None);
        ctx.validate()?;
        self.base_url = ctx.base_url;
        Ok(())
    }

    pub fn set_token(&mut self, token: String) {
        let token = token.trim().to_string();
        self.token = (!token.is_empty()).then_some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Context for API calls, environment first
    pub fn request_context(&self) -> RequestContext {
        let base_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone());
        let token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.token.clone());
        RequestContext::new(base_url, token)
    }
}
