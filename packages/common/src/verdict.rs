use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Judge-assigned outcome of a single submission, as reported by Codeforces.
///
/// Values outside the known vocabulary are kept verbatim in [`Verdict::Other`]
/// so that decoding a submission never fails on a verdict string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    /// Judging failed on the judge side.
    Failed,
    /// All tests passed.
    Ok,
    /// Partial score.
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    /// Solution was hacked during the contest.
    Challenged,
    /// Submission was skipped by the judge, typically after a plagiarism check.
    Skipped,
    /// Still being judged.
    Testing,
    Rejected,
    /// A verdict string this crate does not know about.
    Other(String),
}

impl Verdict {
    /// The skip sentinel used by the suspicious-contest rule.
    pub const SKIP: Verdict = Verdict::Skipped;

    /// Returns true if the judge skipped this submission.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// All verdicts in the known vocabulary.
    pub const KNOWN: &'static [Verdict] = &[
        Self::Failed,
        Self::Ok,
        Self::Partial,
        Self::CompilationError,
        Self::RuntimeError,
        Self::WrongAnswer,
        Self::PresentationError,
        Self::TimeLimitExceeded,
        Self::MemoryLimitExceeded,
        Self::IdlenessLimitExceeded,
        Self::SecurityViolated,
        Self::Crashed,
        Self::InputPreparationCrashed,
        Self::Challenged,
        Self::Skipped,
        Self::Testing,
        Self::Rejected,
    ];

    /// Returns the wire representation (SCREAMING_SNAKE_CASE).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Failed => "FAILED",
            Self::Ok => "OK",
            Self::Partial => "PARTIAL",
            Self::CompilationError => "COMPILATION_ERROR",
            Self::RuntimeError => "RUNTIME_ERROR",
            Self::WrongAnswer => "WRONG_ANSWER",
            Self::PresentationError => "PRESENTATION_ERROR",
            Self::TimeLimitExceeded => "TIME_LIMIT_EXCEEDED",
            Self::MemoryLimitExceeded => "MEMORY_LIMIT_EXCEEDED",
            Self::IdlenessLimitExceeded => "IDLENESS_LIMIT_EXCEEDED",
            Self::SecurityViolated => "SECURITY_VIOLATED",
            Self::Crashed => "CRASHED",
            Self::InputPreparationCrashed => "INPUT_PREPARATION_CRASHED",
            Self::Challenged => "CHALLENGED",
            Self::Skipped => "SKIPPED",
            Self::Testing => "TESTING",
            Self::Rejected => "REJECTED",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "FAILED" => Self::Failed,
            "OK" => Self::Ok,
            "PARTIAL" => Self::Partial,
            "COMPILATION_ERROR" => Self::CompilationError,
            "RUNTIME_ERROR" => Self::RuntimeError,
            "WRONG_ANSWER" => Self::WrongAnswer,
            "PRESENTATION_ERROR" => Self::PresentationError,
            "TIME_LIMIT_EXCEEDED" => Self::TimeLimitExceeded,
            "MEMORY_LIMIT_EXCEEDED" => Self::MemoryLimitExceeded,
            "IDLENESS_LIMIT_EXCEEDED" => Self::IdlenessLimitExceeded,
            "SECURITY_VIOLATED" => Self::SecurityViolated,
            "CRASHED" => Self::Crashed,
            "INPUT_PREPARATION_CRASHED" => Self::InputPreparationCrashed,
            "CHALLENGED" => Self::Challenged,
            "SKIPPED" => Self::Skipped,
            "TESTING" => Self::Testing,
            "REJECTED" => Self::Rejected,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for Verdict {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Verdict {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Verdict> for String {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}
