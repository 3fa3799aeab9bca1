//! Per-interaction check state.
//!
//! A [`CheckSession`] owns the loading flag and the most recent result for one
//! user-facing session. Only one check runs at a time; the flag is released by
//! [`LoadingGuard`] on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use common::{DetectionResult, Handle, detect};
use tracing::{info, warn};

use crate::error::{CheckError, FetchError};
use crate::source::SubmissionSource;

/// Receives fetch failures so the presentation layer can show them to the user.
pub trait FailureNotifier: Send + Sync {
    fn notify_failure(&self, handle: &Handle, error: &FetchError);
}

/// Notifier that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl FailureNotifier for LogNotifier {
    fn notify_failure(&self, handle: &Handle, error: &FetchError) {
        warn!(handle = %handle, code = error.code(), error = %error, "Check failed");
    }
}

/// Holds the loading flag for the duration of one check.
pub struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Session-scoped context: the submission source, the loading flag and the
/// last detection result.
pub struct CheckSession {
    source: Arc<dyn SubmissionSource>,
    notifier: Arc<dyn FailureNotifier>,
    loading: AtomicBool,
    last_result: Mutex<Option<DetectionResult>>,
}

impl CheckSession {
    pub fn new(source: Arc<dyn SubmissionSource>, notifier: Arc<dyn FailureNotifier>) -> Self {
        Self {
            source,
            notifier,
            loading: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    /// Fetch `handle`'s submissions and run detection.
    ///
    /// The previous result is cleared before fetching. On failure the notifier
    /// is called once and no result is stored.
    pub async fn check(&self, handle: &Handle) -> Result<DetectionResult, CheckError> {
        let Some(_loading) = LoadingGuard::acquire(&self.loading) else {
            return Err(CheckError::InProgress);
        };
        self.store(None);

        let submissions = match self.source.fetch_submissions(handle).await {
            Ok(submissions) => submissions,
            Err(e) => {
                self.notifier.notify_failure(handle, &e);
                return Err(CheckError::Fetch(e));
            }
        };

        let result = detect(&submissions);
        info!(
            handle = %handle,
            submissions = result.submissions_checked,
            contests = result.contests_checked,
            flagged = result.flagged_contest_ids.len(),
            "Check complete"
        );

        self.store(Some(result.clone()));
        Ok(result)
    }

    /// True while a check is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Result of the last successful check, if the last check succeeded.
    pub fn last_result(&self) -> Option<DetectionResult> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, result: Option<DetectionResult>) {
        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = result;
    }
}
