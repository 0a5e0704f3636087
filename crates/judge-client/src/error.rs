use jisi_code_core::domain::DomainError;
use thiserror::Error;

/// 单次与评测服务交互时的失败原因。
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP 状态异常: {0}")]
    Status(u16),

    #[error("响应中缺少 token")]
    MissingToken,

    #[error("响应中缺少 status.id")]
    MissingStatus,
}

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("配置错误: {0}")]
    Configuration(String),

    #[error("请求无效: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("提交失败: {0}")]
    DispatchFailed(#[source] TransportError),

    #[error("轮询次数已用尽: {attempts} 次内未获得最终结果{}", last_error_suffix(.last_error))]
    PollingExhausted {
        attempts: u32,
        #[source]
        last_error: Option<TransportError>,
    },
}

fn last_error_suffix(last_error: &Option<TransportError>) -> String {
    match last_error {
        Some(err) => format!(" (最后一次错误: {err})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, JudgeError>;
