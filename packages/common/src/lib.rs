pub mod config;
pub mod contest;
pub mod detector;
pub mod handle;
pub mod submission;
pub mod verdict;

pub use config::SourceAppConfig;
pub use contest::{ContestId, ContestKey};
pub use detector::{ContestGroups, DetectionResult, FlaggedContest, detect};
pub use handle::{Handle, HandleError};
pub use submission::Submission;
pub use verdict::Verdict;

/// Text shown to the user for every fetch failure, whatever its cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";
