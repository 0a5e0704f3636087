//! 评测结果的两种形态。
//!
//! 通过 (`status.id == 3`) 时返回字段固定的 [`AcceptedResult`]，
//! 其他终态原样返回评测服务的 JSON 对象。

use jisi_code_core::domain::JudgeStatus;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusInfo {
    pub id: u32,
    pub description: String,
}

/// 通过时的规范化结果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedResult {
    pub status: StatusInfo,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    /// 运行时间（秒）。评测服务以十进制字符串返回。
    pub time: Option<f64>,
    /// 内存占用（KB）。
    pub memory: Option<u64>,
}

impl AcceptedResult {
    /// 从原始响应中取出六个字段，任何字段格式异常都只会得到 `None`/默认值。
    pub fn from_value(raw: &Value) -> Self {
        let status = raw.get("status");
        Self {
            status: StatusInfo {
                id: status_id(raw).unwrap_or(JudgeStatus::ACCEPTED_ID),
                description: status
                    .and_then(|status| status.get("description"))
                    .and_then(Value::as_str)
                    .unwrap_or_else(|| JudgeStatus::Accepted.description())
                    .to_string(),
            },
            stdout: text_field(raw, "stdout"),
            stderr: text_field(raw, "stderr"),
            compile_output: text_field(raw, "compile_output"),
            time: seconds_field(raw.get("time")),
            memory: kilobytes_field(raw.get("memory")),
        }
    }
}

/// 轮询得到的最终结果。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionOutcome {
    Accepted(AcceptedResult),
    /// 非通过终态，评测服务原始响应。
    Finished(Value),
}

impl SubmissionOutcome {
    pub fn status_id(&self) -> Option<u32> {
        match self {
            Self::Accepted(result) => Some(result.status.id),
            Self::Finished(raw) => status_id(raw),
        }
    }

    pub fn status(&self) -> Option<JudgeStatus> {
        self.status_id().map(JudgeStatus::from_id)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Accepted(result) => json!({
                "status": {
                    "id": result.status.id,
                    "description": result.status.description,
                },
                "stdout": result.stdout,
                "stderr": result.stderr,
                "compile_output": result.compile_output,
                "time": result.time,
                "memory": result.memory,
            }),
            Self::Finished(raw) => raw,
        }
    }
}

/// 读取 `status.id`，缺失或非整数时返回 `None`。
pub fn status_id(raw: &Value) -> Option<u32> {
    raw.get("status")?
        .get("id")?
        .as_u64()
        .and_then(|id| u32::try_from(id).ok())
}

fn text_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn seconds_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn kilobytes_field(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|kb| *kb >= 0.0)
                .map(|kb| kb.round() as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn accepted_raw() -> Value {
        json!({
            "token": "abc",
            "status": { "id": 3, "description": "Accepted" },
            "stdout": "hello\n",
            "stderr": null,
            "compile_output": null,
            "message": null,
            "time": "0.012",
            "memory": 3104,
            "wall_time": "0.05",
            "exit_code": 0
        })
    }

    #[test]
    fn accepted_result_keeps_only_normalized_fields() {
        let result = AcceptedResult::from_value(&accepted_raw());
        let value = SubmissionOutcome::Accepted(result).into_value();

        let mut keys: Vec<&str> = value
            .as_object()
            .expect("value should be an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["compile_output", "memory", "status", "stderr", "stdout", "time"]
        );
        assert_eq!(value["stdout"], "hello\n");
        assert_eq!(value["time"], 0.012);
        assert_eq!(value["memory"], 3104);
    }

    #[test]
    fn serialized_accepted_matches_into_value() {
        let result = AcceptedResult::from_value(&accepted_raw());
        let outcome = SubmissionOutcome::Accepted(result);

        let serialized = serde_json::to_value(&outcome).expect("outcome should serialize");
        assert_eq!(serialized, outcome.into_value());
    }

    #[test]
    fn numeric_time_and_missing_fields_are_tolerated() {
        let result = AcceptedResult::from_value(&json!({
            "status": { "id": 3 },
            "time": 1.5,
            "memory": 2048.4
        }));

        assert_eq!(result.status.description, "Accepted");
        assert_eq!(result.time, Some(1.5));
        assert_eq!(result.memory, Some(2048));
        assert_eq!(result.stdout, None);
    }

    #[test]
    fn malformed_fields_fall_back_instead_of_failing() {
        let result = AcceptedResult::from_value(&json!({
            "status": { "id": 3, "description": null },
            "stdout": 42,
            "stderr": ["not", "text"],
            "time": "fast",
            "memory": -1
        }));

        assert_eq!(result.status.id, 3);
        assert_eq!(result.status.description, "Accepted");
        assert_eq!(result.stdout, None);
        assert_eq!(result.stderr, None);
        assert_eq!(result.time, None);
        assert_eq!(result.memory, None);
    }

    #[test]
    fn finished_outcome_is_raw() {
        let raw = json!({
            "status": { "id": 6, "description": "Compilation Error" },
            "compile_output": "error: expected ';'",
            "token": "abc"
        });
        let outcome = SubmissionOutcome::Finished(raw.clone());

        assert_eq!(outcome.status_id(), Some(6));
        assert_eq!(outcome.status(), Some(JudgeStatus::CompilationError));
        assert!(!outcome.is_accepted());
        assert_eq!(serde_json::to_value(&outcome).expect("serialize"), raw);
        assert_eq!(outcome.into_value(), raw);
    }

    #[test]
    fn status_id_requires_integer() {
        assert_eq!(status_id(&json!({ "status": { "id": 2 } })), Some(2));
        assert_eq!(status_id(&json!({ "status": { "id": "2" } })), None);
        assert_eq!(status_id(&json!({ "status": null })), None);
        assert_eq!(status_id(&json!({})), None);
    }
}
