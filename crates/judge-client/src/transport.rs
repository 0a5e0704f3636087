//! 评测服务传输层。
//!
//! `JudgeTransport` 是提交与轮询共用的可注入客户端，
//! 生产环境使用基于 `reqwest` 的 `HttpTransport`，测试中替换为脚本化实现。

use async_trait::async_trait;
use jisi_code_core::domain::{SubmissionLimits, SubmissionRequest, SubmissionToken};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::JudgeConfig;
use crate::error::{JudgeError, TransportError};

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// 创建提交时发送的请求体。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub source_code: String,
    pub language_id: u32,
    pub stdin: String,
    /// 始终为 `null`，评测服务不做答案比对。
    pub expected_output: Option<String>,
    pub cpu_time_limit: f64,
    pub memory_limit: u64,
}

impl SubmissionPayload {
    pub fn new(request: &SubmissionRequest, limits: SubmissionLimits) -> Self {
        Self {
            source_code: request.source_code().to_string(),
            language_id: request.language_id().value(),
            stdin: request.stdin().to_string(),
            expected_output: None,
            cpu_time_limit: limits.cpu_time_limit,
            memory_limit: limits.memory_limit,
        }
    }
}

/// 创建提交的响应。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionCreated {
    #[serde(default)]
    pub token: Option<String>,
}

/// 评测服务传输抽象。
#[async_trait]
pub trait JudgeTransport: Send + Sync {
    /// 创建一次远程提交。
    async fn create_submission(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionCreated, TransportError>;

    /// 按 token 查询提交状态，返回评测服务的原始 JSON 对象。
    async fn fetch_submission(&self, token: &SubmissionToken) -> Result<Value, TransportError>;
}

/// 基于 `reqwest` 的 HTTP 传输实现。
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(config: &JudgeConfig) -> Result<Self, JudgeError> {
        config.validate()?;
        let api_key = config
            .api_key()
            .ok_or_else(|| JudgeError::Configuration("未配置评测服务 API Key".to_string()))?
            .to_string();

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| JudgeError::Configuration(format!("无法创建 HTTP 客户端: {err}")))?;

        Ok(Self::with_client(client, config, api_key))
    }

    /// 使用外部构造的 `reqwest::Client`。
    pub fn with_client(client: Client, config: &JudgeConfig, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_host: config.api_host.clone(),
            api_key: api_key.into(),
        }
    }

    fn create_request(&self, payload: &SubmissionPayload) -> RequestBuilder {
        self.authorized(self.client.post(format!("{}/submissions", self.base_url)))
            .json(payload)
    }

    fn fetch_request(&self, token: &SubmissionToken) -> RequestBuilder {
        self.authorized(
            self.client
                .get(format!("{}/submissions/{}", self.base_url, token.as_str())),
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
    }

    fn ensure_success(response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl JudgeTransport for HttpTransport {
    async fn create_submission(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionCreated, TransportError> {
        let response = Self::ensure_success(self.create_request(payload).send().await?)?;
        let created: SubmissionCreated = response.json().await?;
        debug!(token = ?created.token, "submission response received");
        Ok(created)
    }

    async fn fetch_submission(&self, token: &SubmissionToken) -> Result<Value, TransportError> {
        let response = Self::ensure_success(self.fetch_request(token).send().await?)?;
        Ok(response.json().await?)
    }
}
