//! Codeforces `user.status` client.

use std::time::Duration;

use async_trait::async_trait;
use common::{ContestId, Handle, SourceAppConfig, Submission, Verdict};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{FetchError, Result};
use crate::source::SubmissionSource;

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
enum ApiStatus {
    Ok,
    Failed,
}

/// Envelope every Codeforces API method responds with.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    status: ApiStatus,
    comment: Option<String>,
    result: Option<Vec<RawSubmission>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    id: Option<i64>,
    contest_id: Option<i64>,
    problem: Option<RawProblem>,
    verdict: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProblem {
    index: Option<String>,
}

impl From<RawSubmission> for Submission {
    fn from(raw: RawSubmission) -> Self {
        Submission {
            id: raw.id,
            contest_id: raw.contest_id.map(ContestId::from),
            problem_index: raw.problem.and_then(|p| p.index),
            verdict: raw.verdict.map(Verdict::from),
        }
    }
}

/// Turn an HTTP status and raw body into submissions.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<Vec<Submission>> {
    let envelope: ApiEnvelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(FetchError::Status {
                status: status.as_u16(),
                comment: None,
            });
        }
        Err(e) => return Err(FetchError::Decode(e)),
    };

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            comment: envelope.comment,
        });
    }

    match envelope.status {
        ApiStatus::Failed => Err(FetchError::Api {
            comment: envelope.comment.unwrap_or_default(),
        }),
        ApiStatus::Ok => {
            let records = envelope.result.ok_or(FetchError::MissingResult)?;
            Ok(records.into_iter().map(Submission::from).collect())
        }
    }
}

/// [`SubmissionSource`] backed by the public Codeforces API.
#[derive(Debug, Clone)]
pub struct CodeforcesSource {
    http: Client,
    base_url: String,
}

impl CodeforcesSource {
    pub fn new(config: &SourceAppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_status_url(&self) -> String {
        format!("{}/user.status", self.base_url)
    }
}

#[async_trait]
impl SubmissionSource for CodeforcesSource {
    #[instrument(skip_all, fields(handle = %handle))]
    async fn fetch_submissions(&self, handle: &Handle) -> Result<Vec<Submission>> {
        let response = self
            .http
            .get(self.user_status_url())
            .query(&[("handle", handle.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // Failures are logged by whoever presents them.
        let submissions = decode_response(status, &body)?;
        debug!(count = submissions.len(), "Fetched submissions");
        Ok(submissions)
    }
}
