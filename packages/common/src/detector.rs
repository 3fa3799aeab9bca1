//! Suspicious-contest detection.
//!
//! A contest is flagged when every submission the user made in it was
//! skipped by the judge. A single skipped submission on its own is enough.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::contest::ContestKey;
use crate::submission::Submission;
use crate::verdict::Verdict;

/// Verdicts grouped by contest, in the order the contests were first seen.
#[derive(Debug, Clone, Default)]
pub struct ContestGroups {
    index: HashMap<ContestKey, usize>,
    groups: Vec<(ContestKey, Vec<Option<Verdict>>)>,
}

impl ContestGroups {
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut groups = Self::default();
        for submission in submissions {
            groups.push(submission.contest_key(), submission.verdict.clone());
        }
        groups
    }

    fn push(&mut self, key: ContestKey, verdict: Option<Verdict>) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.groups.push((key.clone(), Vec::new()));
                self.index.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].1.push(verdict);
    }

    /// Verdicts recorded for `key`, in encounter order.
    pub fn get(&self, key: &ContestKey) -> Option<&[Option<Verdict>]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContestKey, &[Option<Verdict>])> {
        self.groups
            .iter()
            .map(|(key, verdicts)| (key, verdicts.as_slice()))
    }

    /// Number of distinct contests.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Returns true if `verdicts` is non-empty and every entry is the skip sentinel.
///
/// A missing verdict never matches.
pub fn is_all_skipped(verdicts: &[Option<Verdict>]) -> bool {
    !verdicts.is_empty()
        && verdicts
            .iter()
            .all(|v| v.as_ref().is_some_and(Verdict::is_skipped))
}

/// A contest that met the all-skipped rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedContest {
    pub contest_id: ContestKey,
    /// Number of skipped submissions in the contest.
    pub skipped_submissions: usize,
}

/// Outcome of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    /// True iff at least one contest was flagged.
    pub is_flagged: bool,
    /// Contests whose submissions were all skipped.
    pub flagged_contest_ids: BTreeSet<ContestKey>,
    /// Flagged contests with their submission counts, ordered by contest.
    pub flagged_contests: Vec<FlaggedContest>,
    /// Number of distinct contests examined.
    pub contests_checked: usize,
    /// Number of submissions examined.
    pub submissions_checked: usize,
}

/// Group `submissions` by contest and flag every contest in which all
/// verdicts are `SKIPPED`.
pub fn detect(submissions: &[Submission]) -> DetectionResult {
    let groups = ContestGroups::from_submissions(submissions);

    let mut flagged_contests: Vec<FlaggedContest> = groups
        .iter()
        .filter(|(_, verdicts)| is_all_skipped(verdicts))
        .map(|(key, verdicts)| FlaggedContest {
            contest_id: key.clone(),
            skipped_submissions: verdicts.len(),
        })
        .collect();
    flagged_contests.sort_by(|a, b| a.contest_id.cmp(&b.contest_id));

    let flagged_contest_ids: BTreeSet<ContestKey> = flagged_contests
        .iter()
        .map(|c| c.contest_id.clone())
        .collect();

    DetectionResult {
        is_flagged: !flagged_contest_ids.is_empty(),
        flagged_contest_ids,
        flagged_contests,
        contests_checked: groups.len(),
        submissions_checked: submissions.len(),
    }
}
