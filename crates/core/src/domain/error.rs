use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("source code must not be empty")]
    EmptySourceCode,
    #[error("invalid language id: {0}. language id must be positive")]
    InvalidLanguageId(u32),
    #[error("submission token must not be empty")]
    EmptyToken,
}
