use std::sync::Arc;

use jisi_code_core::domain::{SubmissionLimits, SubmissionRequest, SubmissionToken};
use tracing::{info, warn};

use crate::error::{JudgeError, Result, TransportError};
use crate::transport::{JudgeTransport, SubmissionPayload};

/// 把执行请求转换为一次远程提交，不做重试。
pub struct SubmissionDispatcher {
    transport: Arc<dyn JudgeTransport>,
    limits: SubmissionLimits,
}

impl SubmissionDispatcher {
    pub fn new(transport: Arc<dyn JudgeTransport>, limits: SubmissionLimits) -> Self {
        Self { transport, limits }
    }

    pub fn limits(&self) -> SubmissionLimits {
        self.limits
    }

    #[tracing::instrument(skip_all, fields(language_id = %request.language_id()))]
    pub async fn dispatch(&self, request: &SubmissionRequest) -> Result<SubmissionToken> {
        let payload = SubmissionPayload::new(request, self.limits);

        let created = self
            .transport
            .create_submission(&payload)
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to create submission");
                JudgeError::DispatchFailed(err)
            })?;

        let token = created
            .token
            .and_then(|token| SubmissionToken::new(token).ok())
            .ok_or_else(|| {
                warn!("submission response did not contain a token");
                JudgeError::DispatchFailed(TransportError::MissingToken)
            })?;

        info!(token = %token, "submission created");
        Ok(token)
    }
}
