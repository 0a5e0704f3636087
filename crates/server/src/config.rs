//! 服务端配置。

use std::path::Path;

use anyhow::Context;
use judge_client::JudgeConfig;
use serde::Deserialize;

type Result<T> = anyhow::Result<T>;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
    #[serde(default)]
    pub judge: JudgeConfig,
}

impl ServerConfig {
    /// 读取配置文件（不存在时使用默认值），再应用环境变量覆盖。
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        Ok(config.with_overrides_from(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(port) = lookup("PORT").filter(|port| !port.trim().is_empty()) {
            self.bind_addr = format!("0.0.0.0:{}", port.trim());
        }
        self.judge = self.judge.with_overrides_from(lookup);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_origin: default_cors_origin(),
            judge: JudgeConfig::default(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_cors_origin() -> String {
    "http://localhost:5173".to_string()
}
