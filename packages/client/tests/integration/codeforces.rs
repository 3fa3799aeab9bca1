use std::time::Duration;

use axum::http::StatusCode;
use client::{CodeforcesSource, FetchError, SubmissionSource};
use common::{ContestId, Handle, SourceAppConfig, Verdict};
use serde_json::json;

use tracing::Level;

use crate::support::{FakeUpstream, LogCapture, Reply};

fn source_for(upstream: &FakeUpstream) -> CodeforcesSource {
    CodeforcesSource::new(&SourceAppConfig {
        base_url: upstream.base_url(),
        timeout_secs: 1,
        ..Default::default()
    })
    .expect("Failed to build source")
}

fn handle(raw: &str) -> Handle {
    Handle::parse(raw).unwrap()
}

#[tokio::test]
async fn fetches_and_decodes_submissions() {
    let upstream = FakeUpstream::spawn(Reply::ok(json!([
        {"id": 10, "contestId": 1900, "problem": {"index": "A"}, "verdict": "SKIPPED"},
        {"id": 11, "contestId": 1901, "problem": {"index": "C"}, "verdict": "WRONG_ANSWER"},
    ])))
    .await;

    let subs = source_for(&upstream)
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap();

    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].contest_id, Some(ContestId::from("1900")));
    assert_eq!(subs[0].verdict, Some(Verdict::Skipped));
    assert_eq!(subs[1].problem_index.as_deref(), Some("C"));
}

#[tokio::test]
async fn sends_handle_as_query_parameter() {
    let upstream = FakeUpstream::spawn(Reply::ok(json!([]))).await;

    source_for(&upstream)
        .fetch_submissions(&handle("a.b-c_d"))
        .await
        .unwrap();

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].get("handle").map(String::as_str), Some("a.b-c_d"));
    assert!(!requests[0].contains_key("count"));
}

#[tokio::test]
async fn unknown_handle_surfaces_as_status_error() {
    let upstream = FakeUpstream::spawn(Reply::failed(
        StatusCode::BAD_REQUEST,
        "handle: User with handle nobody123 not found",
    ))
    .await;

    let err = source_for(&upstream)
        .fetch_submissions(&handle("nobody123"))
        .await
        .unwrap_err();

    match err {
        FetchError::Status { status, comment } => {
            assert_eq!(status, 400);
            assert!(comment.unwrap().contains("not found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_envelope_with_ok_status_is_api_error() {
    let upstream =
        FakeUpstream::spawn(Reply::failed(StatusCode::OK, "Call limit exceeded")).await;

    let err = source_for(&upstream)
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "UPSTREAM_FAILED");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let upstream = FakeUpstream::spawn(Reply::raw(StatusCode::OK, "{\"status\": 1}")).await;

    let err = source_for(&upstream)
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let upstream =
        FakeUpstream::spawn(Reply::ok(json!([])).delayed(Duration::from_secs(3))).await;

    let err = source_for(&upstream)
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "TIMEOUT");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    let source = CodeforcesSource::new(&SourceAppConfig {
        base_url: "http://127.0.0.1:1/api".into(),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap();

    let err = source
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn failures_are_returned_without_warning_logs() {
    let logs = LogCapture::default();
    let _guard = logs.install(Level::WARN);

    let upstream = FakeUpstream::spawn(Reply::raw(StatusCode::OK, "not json")).await;
    let decode = source_for(&upstream)
        .fetch_submissions(&handle("tourist"))
        .await
        .unwrap_err();
    let unreachable = CodeforcesSource::new(&SourceAppConfig {
        base_url: "http://127.0.0.1:1/api".into(),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap()
    .fetch_submissions(&handle("tourist"))
    .await
    .unwrap_err();

    assert_eq!(decode.code(), "DECODE_ERROR");
    assert_eq!(unreachable.code(), "TRANSPORT_ERROR");
    assert_eq!(logs.text(), "");
}
