use serde::{Deserialize, Serialize};

use crate::contest::{ContestId, ContestKey};
use crate::verdict::Verdict;

/// One submission record for a single user.
///
/// Only `contest_id` and `verdict` take part in detection; the remaining
/// fields are carried for reporting. Either may be absent in upstream data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Upstream submission id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Contest the submission was made in.
    #[serde(default)]
    pub contest_id: Option<ContestId>,
    /// Problem index within the contest (e.g. "A", "B1").
    #[serde(default)]
    pub problem_index: Option<String>,
    /// Judge verdict. Absent while the submission is queued.
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

impl Submission {
    /// Create a submission with only the fields detection looks at.
    pub fn new(contest_id: impl Into<ContestId>, verdict: impl Into<Verdict>) -> Self {
        Self {
            id: None,
            contest_id: Some(contest_id.into()),
            problem_index: None,
            verdict: Some(verdict.into()),
        }
    }

    /// Key this submission is grouped under.
    pub fn contest_key(&self) -> ContestKey {
        ContestKey::from(self.contest_id.clone())
    }
}
