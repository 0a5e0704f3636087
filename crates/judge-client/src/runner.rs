use std::sync::Arc;

use jisi_code_core::domain::{LanguageId, SubmissionRequest};
use tracing::info;

use crate::{
    Delay, HttpTransport, JudgeConfig, JudgeTransport, PollingPolicy, Result, ResultPoller,
    SubmissionDispatcher, SubmissionOutcome, TokioDelay,
};

/// 代码执行入口：提交到评测服务并轮询出结果。
///
/// 每次调用相互独立，可在同一个实例上并发执行。
pub struct CodeRunner {
    dispatcher: SubmissionDispatcher,
    poller: ResultPoller,
}

impl CodeRunner {
    /// 校验配置并组装提交器与轮询器。
    pub fn new(
        config: &JudgeConfig,
        transport: Arc<dyn JudgeTransport>,
        delay: Arc<dyn Delay>,
    ) -> Result<Self> {
        config.validate()?;

        let policy = config.polling_policy();
        info!(
            base_url = %config.base_url,
            max_attempts = policy.max_attempts,
            interval = ?policy.interval,
            "initializing code runner"
        );

        Ok(Self {
            dispatcher: SubmissionDispatcher::new(transport.clone(), config.limits),
            poller: ResultPoller::new(transport, delay, policy),
        })
    }

    /// 使用 HTTP 传输与 tokio 定时器创建实例。
    pub fn from_config(config: &JudgeConfig) -> Result<Self> {
        let transport: Arc<dyn JudgeTransport> = Arc::new(HttpTransport::new(config)?);
        Self::new(config, transport, Arc::new(TokioDelay))
    }

    pub async fn execute(
        &self,
        source_code: &str,
        language_id: u32,
        stdin: Option<&str>,
    ) -> Result<SubmissionOutcome> {
        let language_id = LanguageId::new(language_id)?;
        let request = SubmissionRequest::new(source_code, language_id, stdin.map(str::to_owned))?;
        self.execute_request(&request).await
    }

    #[tracing::instrument(skip_all, fields(language_id = %request.language_id()))]
    pub async fn execute_request(&self, request: &SubmissionRequest) -> Result<SubmissionOutcome> {
        let token = self.dispatcher.dispatch(request).await?;
        let outcome = self.poller.poll(&token).await?;

        info!(
            token = %token,
            status_id = ?outcome.status_id(),
            accepted = outcome.is_accepted(),
            "execution finished"
        );
        Ok(outcome)
    }

    pub fn policy(&self) -> PollingPolicy {
        self.poller.policy()
    }
}
