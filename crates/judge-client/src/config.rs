use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use jisi_code_core::domain::SubmissionLimits;
use serde::Deserialize;

use crate::error::JudgeError;
use crate::poller::PollingPolicy;

type Result<T> = anyhow::Result<T>;

pub const API_URL_ENV: &str = "JUDGE0_API_URL";
pub const API_KEY_ENV: &str = "JUDGE0_API_KEY";

/// 评测服务客户端配置。
#[derive(Clone, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub limits: SubmissionLimits,
    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PollingConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl JudgeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize judge config")
    }

    /// 使用 `JUDGE0_API_URL` / `JUDGE0_API_KEY` 环境变量覆盖配置。
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// 使用任意查找函数覆盖配置，空值会被忽略。
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_blank(API_URL_ENV) {
            self.base_url = url;
        }
        if let Some(key) = non_blank(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        self
    }

    /// 启动时校验配置，缺少凭证属于致命错误。
    pub fn validate(&self) -> std::result::Result<(), JudgeError> {
        if self.api_key().is_none() {
            return Err(JudgeError::Configuration(format!(
                "未配置评测服务 API Key ({API_KEY_ENV})"
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(JudgeError::Configuration("base_url 不能为空".to_string()));
        }
        if self.polling.max_attempts == 0 {
            return Err(JudgeError::Configuration(
                "polling.max_attempts 必须大于 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn polling_policy(&self) -> PollingPolicy {
        PollingPolicy::new(
            self.polling.max_attempts,
            Duration::from_millis(self.polling.interval_ms),
        )
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_host: default_api_host(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            limits: SubmissionLimits::default(),
            polling: PollingConfig::default(),
        }
    }
}

impl fmt::Debug for JudgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JudgeConfig")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("limits", &self.limits)
            .field("polling", &self.polling)
            .finish()
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://judge0-ce.p.rapidapi.com".to_string()
}

fn default_api_host() -> String {
    "judge0-ce.p.rapidapi.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    10
}

fn default_interval_ms() -> u64 {
    2_000
}
