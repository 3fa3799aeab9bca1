use chrono::{DateTime, Utc};
use common::{ContestKey, DetectionResult, FlaggedContest, Handle};
use serde::Serialize;

/// A contest in which every submission was skipped.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FlaggedContestResponse {
    /// Contest id, or `null` for submissions made outside any contest.
    #[schema(example = "1900")]
    pub contest_id: Option<String>,
    /// Number of skipped submissions in the contest.
    #[schema(example = 3)]
    pub skipped_submissions: usize,
}

impl From<FlaggedContest> for FlaggedContestResponse {
    fn from(contest: FlaggedContest) -> Self {
        Self {
            contest_id: contest_id_string(&contest.contest_id),
            skipped_submissions: contest.skipped_submissions,
        }
    }
}

/// Detection outcome for one handle.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CheckResponse {
    #[schema(example = "tourist")]
    pub handle: String,
    /// True iff at least one contest was flagged.
    pub is_flagged: bool,
    /// Flagged contest ids in ascending order.
    pub flagged_contest_ids: Vec<Option<String>>,
    pub flagged_contests: Vec<FlaggedContestResponse>,
    pub contests_checked: usize,
    pub submissions_checked: usize,
    pub checked_at: DateTime<Utc>,
}

impl CheckResponse {
    pub fn new(handle: &Handle, result: DetectionResult) -> Self {
        Self {
            handle: handle.to_string(),
            is_flagged: result.is_flagged,
            flagged_contest_ids: result
                .flagged_contest_ids
                .iter()
                .map(contest_id_string)
                .collect(),
            flagged_contests: result
                .flagged_contests
                .into_iter()
                .map(FlaggedContestResponse::from)
                .collect(),
            contests_checked: result.contests_checked,
            submissions_checked: result.submissions_checked,
            checked_at: Utc::now(),
        }
    }
}

fn contest_id_string(key: &ContestKey) -> Option<String> {
    key.contest_id().map(|id| id.to_string())
}
