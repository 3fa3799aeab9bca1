use async_trait::async_trait;
use common::{Handle, Submission};

use crate::error::Result;

/// Anything that can list the submissions made by one user.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Fetch the full submission history for `handle`.
    async fn fetch_submissions(&self, handle: &Handle) -> Result<Vec<Submission>>;
}
