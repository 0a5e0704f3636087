//! 代码运行 API。
//!
//! 前端编辑器通过该接口把代码交给评测服务执行。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jisi_code_api_types::{ErrorResponse, RunCodeRequest, RunCodeResponse};
use judge_client::JudgeError;
use tracing::{error, info, warn};

use super::state::AppState;

/// 运行代码并返回评测结果。
pub async fn run_code(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RunCodeRequest>, JsonRejection>,
) -> Result<Json<RunCodeResponse>, ApiError> {
    let Json(request) = payload?;
    info!(
        language_id = ?request.language_id,
        has_source_code = request.source_code.is_some(),
        "run-code request"
    );

    let (source_code, language_id, stdin) = request
        .required_fields()
        .ok_or_else(|| ApiError::bad_request(RunCodeRequest::MISSING_FIELDS))?;

    let outcome = state
        .runner
        .execute(source_code, language_id, Some(stdin))
        .await?;

    let success = outcome.is_accepted();
    Ok(Json(RunCodeResponse::new(success, outcome.into_value())))
}

/// API 错误类型。
#[derive(Debug)]
pub struct ApiError {
    message: String,
    status: StatusCode,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), "run-code 请求体无法解析");
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<JudgeError> for ApiError {
    fn from(err: JudgeError) -> Self {
        error!(error = %err, "run-code failed");
        let status = match err {
            JudgeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError {
            message: err.to_string(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
