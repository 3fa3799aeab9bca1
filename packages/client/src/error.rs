use thiserror::Error;

/// Failure to obtain a user's submissions from the upstream source.
///
/// Presentation layers report every variant as the same generic failure;
/// the variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}{}", comment_suffix(.comment))]
    Status { status: u16, comment: Option<String> },

    #[error("Upstream reported failure: {comment}")]
    Api { comment: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing the result list")]
    MissingResult,
}

fn comment_suffix(comment: &Option<String>) -> String {
    comment
        .as_deref()
        .map(|c| format!(": {c}"))
        .unwrap_or_default()
}

impl FetchError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::Transport(e) if e.is_timeout() => "TIMEOUT",
            FetchError::Transport(_) => "TRANSPORT_ERROR",
            FetchError::Status { .. } => "UPSTREAM_STATUS",
            FetchError::Api { .. } => "UPSTREAM_FAILED",
            FetchError::Decode(_) => "DECODE_ERROR",
            FetchError::MissingResult => "MISSING_RESULT",
        }
    }
}

/// Failure of a single check performed through a session.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("A check is already in progress")]
    InProgress,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
