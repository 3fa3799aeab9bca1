use std::sync::Arc;
use std::time::Duration;

use common::{Handle, Submission};
use server::config::CorsConfig;
use tokio::sync::Notify;

use crate::support::{Behavior, TestApp, routes};

mod successful_checks {
    use super::*;

    #[tokio::test]
    async fn flags_all_skipped_contest() {
        let app = TestApp::spawn(Behavior::Return(vec![
            Submission::new("101", "SKIPPED"),
            Submission::new("202", "SKIPPED"),
            Submission::new("202", "WRONG_ANSWER"),
        ]))
        .await;

        let res = app.get(&routes::check("suspect")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["handle"], "suspect");
        assert_eq!(res.body["is_flagged"], true);
        assert_eq!(res.body["flagged_contest_ids"], serde_json::json!(["101"]));
        assert_eq!(res.body["flagged_contests"][0]["contest_id"], "101");
        assert_eq!(res.body["flagged_contests"][0]["skipped_submissions"], 1);
        assert_eq!(res.body["contests_checked"], 2);
        assert_eq!(res.body["submissions_checked"], 3);
        assert!(res.body["checked_at"].is_string());
    }

    #[tokio::test]
    async fn clean_user_is_not_flagged() {
        let app = TestApp::spawn(Behavior::Return(vec![
            Submission::new("5", "OK"),
            Submission::new("5", "WRONG_ANSWER"),
        ]))
        .await;

        let res = app.get(&routes::check("tourist")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["is_flagged"], false);
        assert_eq!(res.body["flagged_contest_ids"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn user_without_submissions_is_clean() {
        let app = TestApp::spawn(Behavior::Return(vec![])).await;

        let res = app.get(&routes::check("newcomer")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["is_flagged"], false);
        assert_eq!(res.body["contests_checked"], 0);
    }

    #[tokio::test]
    async fn flagged_ids_are_sorted_numerically() {
        let app = TestApp::spawn(Behavior::Return(vec![
            Submission::new("101", "SKIPPED"),
            Submission::new("9", "SKIPPED"),
            Submission::new("10", "OK"),
        ]))
        .await;

        let res = app.get(&routes::check("suspect")).await;

        assert_eq!(res.body["flagged_contest_ids"], serde_json::json!(["9", "101"]));
    }

    #[tokio::test]
    async fn missing_contest_id_is_reported_as_null() {
        let app = TestApp::spawn(Behavior::Return(vec![Submission {
            id: Some(1),
            contest_id: None,
            problem_index: Some("A".into()),
            verdict: Some("SKIPPED".into()),
        }]))
        .await;

        let res = app.get(&routes::check("suspect")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["flagged_contest_ids"], serde_json::json!([null]));
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn invalid_handle_is_rejected_without_fetching() {
        let app = TestApp::spawn(Behavior::Return(vec![])).await;

        let res = app.get(&routes::check("bad%20handle")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(app.source_calls(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_is_generic_bad_gateway() {
        let app = TestApp::spawn(Behavior::Fail).await;

        let res = app.get(&routes::check("tourist")).await;

        assert_eq!(res.status, 502);
        assert_eq!(res.body["code"], "FETCH_FAILED");
        assert_eq!(res.body["message"], common::FETCH_FAILED_MESSAGE);
        assert_eq!(app.source_calls(), 1);
        assert!(app.in_flight.is_empty());
    }

    #[tokio::test]
    async fn concurrent_check_for_same_handle_conflicts() {
        let gate = Arc::new(Notify::new());
        let app = Arc::new(
            TestApp::spawn(Behavior::Gated(
                gate.clone(),
                vec![Submission::new("1", "SKIPPED")],
            ))
            .await,
        );

        let first = {
            let app = app.clone();
            tokio::spawn(async move { app.get(&routes::check("tourist")).await })
        };

        let handle = Handle::parse("tourist").unwrap();
        for _ in 0..100 {
            if app.in_flight.is_checking(&handle) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(app.in_flight.is_checking(&handle));

        let second = app.get(&routes::check("TOURIST")).await;
        assert_eq!(second.status, 409);
        assert_eq!(second.body["code"], "CHECK_IN_PROGRESS");

        gate.notify_one();
        let first = first.await.unwrap();
        assert_eq!(first.status, 200);
        assert_eq!(first.body["is_flagged"], true);
        assert!(app.in_flight.is_empty());
    }
}

mod cors {
    use super::*;

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let app = TestApp::spawn_with_cors(
            Behavior::Return(vec![]),
            CorsConfig {
                allow_origins: vec!["http://localhost:5173".into()],
                max_age: 600,
            },
        )
        .await;

        let res = app
            .client
            .get(app.url(&routes::check("tourist")))
            .header("Origin", "http://localhost:5173")
            .send()
            .await
            .unwrap();

        assert_eq!(
            res.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }
}
