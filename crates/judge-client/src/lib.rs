pub mod config;
pub mod delay;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod poller;
pub mod runner;
pub mod transport;

pub use config::{JudgeConfig, PollingConfig};
pub use delay::{Delay, TokioDelay};
pub use dispatcher::SubmissionDispatcher;
pub use error::{JudgeError, Result, TransportError};
pub use outcome::{AcceptedResult, StatusInfo, SubmissionOutcome};
pub use poller::{PollingPolicy, ResultPoller};
pub use runner::CodeRunner;
pub use transport::{HttpTransport, JudgeTransport, SubmissionCreated, SubmissionPayload};
