use std::sync::Arc;
use std::time::Duration;

use jisi_code_core::domain::{JudgeStatus, SubmissionToken};
use tracing::{debug, info, warn};

use crate::delay::Delay;
use crate::error::{JudgeError, Result, TransportError};
use crate::outcome::{self, AcceptedResult, SubmissionOutcome};
use crate::transport::JudgeTransport;

/// 轮询预算与间隔。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    /// 总轮询次数，包含首次查询。
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollingPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// 最坏情况下的等待总时长，不含网络耗时。
    pub fn worst_case_wait(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self::new(10, Duration::from_secs(2))
    }
}

enum PollState {
    Pending(JudgeStatus),
    Terminal(SubmissionOutcome),
}

/// 以固定间隔查询提交状态，直到出现终态或预算耗尽。
pub struct ResultPoller {
    transport: Arc<dyn JudgeTransport>,
    delay: Arc<dyn Delay>,
    policy: PollingPolicy,
}

impl ResultPoller {
    pub fn new(
        transport: Arc<dyn JudgeTransport>,
        delay: Arc<dyn Delay>,
        policy: PollingPolicy,
    ) -> Self {
        Self {
            transport,
            delay,
            policy,
        }
    }

    pub fn policy(&self) -> PollingPolicy {
        self.policy
    }

    /// 轮询直到终态。
    ///
    /// 单次查询失败不会中断循环，但会消耗预算；若最后一次查询失败，
    /// 该错误作为 `PollingExhausted` 的原因返回。
    #[tracing::instrument(skip_all, fields(token = %token))]
    pub async fn poll(&self, token: &SubmissionToken) -> Result<SubmissionOutcome> {
        let max_attempts = self.policy.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.poll_once(token).await {
                Ok(PollState::Terminal(outcome)) => {
                    info!(
                        attempt,
                        status_id = ?outcome.status_id(),
                        "submission reached terminal status"
                    );
                    return Ok(outcome);
                }
                Ok(PollState::Pending(status)) => {
                    debug!(attempt, status = status.description(), "submission still pending");
                    last_error = None;
                }
                Err(err) => {
                    warn!(attempt, error = %err, "poll attempt failed");
                    last_error = Some(err);
                }
            }

            if attempt < max_attempts {
                self.delay.wait(self.policy.interval).await;
            }
        }

        warn!(attempts = max_attempts, "polling budget exhausted");
        Err(JudgeError::PollingExhausted {
            attempts: max_attempts,
            last_error,
        })
    }

    async fn poll_once(
        &self,
        token: &SubmissionToken,
    ) -> std::result::Result<PollState, TransportError> {
        let raw = self.transport.fetch_submission(token).await?;
        let status = outcome::status_id(&raw)
            .map(JudgeStatus::from_id)
            .ok_or(TransportError::MissingStatus)?;

        if status.is_pending() {
            return Ok(PollState::Pending(status));
        }
        if status.is_accepted() {
            let result = AcceptedResult::from_value(&raw);
            return Ok(PollState::Terminal(SubmissionOutcome::Accepted(result)));
        }
        Ok(PollState::Terminal(SubmissionOutcome::Finished(raw)))
    }
}
