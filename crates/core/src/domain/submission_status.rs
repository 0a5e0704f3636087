/// Status vocabulary reported by the judge, keyed by `status.id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JudgeStatus {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeErrorSigsegv,
    RuntimeErrorSigxfsz,
    RuntimeErrorSigfpe,
    RuntimeErrorSigabrt,
    RuntimeErrorNzec,
    RuntimeErrorOther,
    InternalError,
    ExecFormatError,
    Unknown(u32),
}

impl JudgeStatus {
    pub const ACCEPTED_ID: u32 = 3;

    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Self::InQueue,
            2 => Self::Processing,
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            5 => Self::TimeLimitExceeded,
            6 => Self::CompilationError,
            7 => Self::RuntimeErrorSigsegv,
            8 => Self::RuntimeErrorSigxfsz,
            9 => Self::RuntimeErrorSigfpe,
            10 => Self::RuntimeErrorSigabrt,
            11 => Self::RuntimeErrorNzec,
            12 => Self::RuntimeErrorOther,
            13 => Self::InternalError,
            14 => Self::ExecFormatError,
            other => Self::Unknown(other),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Self::InQueue => 1,
            Self::Processing => 2,
            Self::Accepted => 3,
            Self::WrongAnswer => 4,
            Self::TimeLimitExceeded => 5,
            Self::CompilationError => 6,
            Self::RuntimeErrorSigsegv => 7,
            Self::RuntimeErrorSigxfsz => 8,
            Self::RuntimeErrorSigfpe => 9,
            Self::RuntimeErrorSigabrt => 10,
            Self::RuntimeErrorNzec => 11,
            Self::RuntimeErrorOther => 12,
            Self::InternalError => 13,
            Self::ExecFormatError => 14,
            Self::Unknown(id) => id,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::InQueue => "In Queue",
            Self::Processing => "Processing",
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::CompilationError => "Compilation Error",
            Self::RuntimeErrorSigsegv => "Runtime Error (SIGSEGV)",
            Self::RuntimeErrorSigxfsz => "Runtime Error (SIGXFSZ)",
            Self::RuntimeErrorSigfpe => "Runtime Error (SIGFPE)",
            Self::RuntimeErrorSigabrt => "Runtime Error (SIGABRT)",
            Self::RuntimeErrorNzec => "Runtime Error (NZEC)",
            Self::RuntimeErrorOther => "Runtime Error (Other)",
            Self::InternalError => "Internal Error",
            Self::ExecFormatError => "Exec Format Error",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Queued or still running on the judge; everything else is terminal.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::InQueue | Self::Processing)
    }

    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

impl From<u32> for JudgeStatus {
    fn from(value: u32) -> Self {
        Self::from_id(value)
    }
}
