pub mod codeforces;
pub mod error;
pub mod session;
pub mod source;

pub use codeforces::CodeforcesSource;
pub use error::{CheckError, FetchError, Result};
pub use session::{CheckSession, FailureNotifier, LoadingGuard, LogNotifier};
pub use source::SubmissionSource;
