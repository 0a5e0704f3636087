use serde::{Deserialize, Serialize};

use super::{DomainError, LanguageId};

/// One code-execution request. Built per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    source_code: String,
    language_id: LanguageId,
    stdin: String,
}

impl SubmissionRequest {
    pub fn new(
        source_code: impl Into<String>,
        language_id: LanguageId,
        stdin: Option<String>,
    ) -> Result<Self, DomainError> {
        let source_code = source_code.into();
        if source_code.trim().is_empty() {
            return Err(DomainError::EmptySourceCode);
        }

        Ok(Self {
            source_code,
            language_id,
            stdin: stdin.unwrap_or_default(),
        })
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn language_id(&self) -> LanguageId {
        self.language_id
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }
}

/// Resource ceilings sent with every submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmissionLimits {
    /// CPU time ceiling in seconds.
    #[serde(default = "default_cpu_time_limit")]
    pub cpu_time_limit: f64,
    /// Memory ceiling in kilobytes.
    #[serde(default = "default_memory_limit")]
    pub memory_limit: u64,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            cpu_time_limit: default_cpu_time_limit(),
            memory_limit: default_memory_limit(),
        }
    }
}

fn default_cpu_time_limit() -> f64 {
    2.0
}

fn default_memory_limit() -> u64 {
    128_000
}
