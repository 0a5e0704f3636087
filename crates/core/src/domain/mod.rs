mod error;
mod language;
mod request;
mod submission_status;
mod token;

pub use error::DomainError;
pub use language::{Language, LanguageId};
pub use request::{SubmissionLimits, SubmissionRequest};
pub use submission_status::JudgeStatus;
pub use token::SubmissionToken;
