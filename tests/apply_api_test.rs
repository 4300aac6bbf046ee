mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, send, setup_app, upload};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn plan_then_send_end_to_end() {
    let app = setup_app();
    let content = vec![7u8; 120_000];
    let resume = upload(&app, "cv.pdf", "application/pdf", &content).await;
    assert_eq!(resume["size"], 120_000);
    let resume_id = resume["id"].as_str().unwrap();

    let resp = send(
        &app,
        post_json(
            "/apply/plan",
            &json!({
                "boards": ["LinkedIn", "Indeed"],
                "resume_id": resume_id,
                "daily_cap": 10,
                "time_window_start": 9,
                "time_window_end": 9
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let plans = body_json(resp).await;
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 2);
    for (plan, board) in plans.iter().zip(["LinkedIn", "Indeed"]) {
        assert_eq!(plan["board"], board);
        assert_eq!(plan["planned_time"], "09:00");
        assert_eq!(plan["status"], "planned");
        assert_eq!(plan["resume_id"], resume_id);
        assert_eq!(plan["match_score"], 70);
    }

    let ids: Vec<&str> = plans.iter().map(|p| p["id"].as_str().unwrap()).collect();
    let resp = send(&app, post_json("/apply/send", &json!({ "application_ids": ids }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let sent = body_json(resp).await;
    let sent = sent.as_array().unwrap();
    assert_eq!(sent.len(), 2);
    for (submission, plan_id) in sent.iter().zip(&ids) {
        assert_eq!(submission["status"], "sent");
        assert_eq!(submission["application_id"], *plan_id);
        assert_eq!(submission["resume_id"], resume_id);
        assert!(submission["sent_at"].is_string());
    }

    let listed = body_json(send(&app, get("/apply/sent")).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], sent[1]["id"]);
    assert_eq!(listed[1]["id"], sent[0]["id"]);
}

#[tokio::test]
async fn boards_beyond_the_cap_are_dropped() {
    let app = setup_app();
    let resume = upload(&app, "cv.txt", "text/plain", b"resume").await;

    let resp = send(
        &app,
        post_json(
            "/apply/plan",
            &json!({
                "boards": ["A", "B", "C", "D"],
                "resume_id": resume["id"],
                "daily_cap": 3,
                "time_window_start": 10,
                "time_window_end": 11
            }),
        ),
    )
    .await;
    let plans = body_json(resp).await;
    let times: Vec<&str> = plans
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["planned_time"].as_str().unwrap())
        .collect();
    assert_eq!(times, vec!["10:00", "11:00", "10:00"]);
}

#[tokio::test]
async fn plan_rejects_bad_resume_ids() {
    let app = setup_app();

    let resp = send(
        &app,
        post_json("/apply/plan", &json!({"boards": ["A"], "resume_id": "nope"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(
        &app,
        post_json(
            "/apply/plan",
            &json!({"boards": ["A"], "resume_id": Uuid::new_v4().to_string()}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_plan_payloads_are_bad_requests() {
    let app = setup_app();
    let resume = upload(&app, "cv.pdf", "application/pdf", b"%PDF").await;
    let resume_id = resume["id"].as_str().unwrap();

    for payload in [
        json!({"resume_id": resume_id}),
        json!({"boards": [1, 2], "resume_id": resume_id}),
        json!({"boards": "LinkedIn", "resume_id": resume_id}),
        json!({"boards": ["LinkedIn"], "resume_id": resume_id, "daily_cap": "ten"}),
        json!(["LinkedIn"]),
    ] {
        let resp = send(&app, post_json("/apply/plan", &payload)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
        let body = body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn send_skips_invalid_ids_and_allows_duplicates() {
    let app = setup_app();
    let resume = upload(&app, "cv.txt", "text/plain", b"resume").await;
    let plans = body_json(
        send(
            &app,
            post_json(
                "/apply/plan",
                &json!({"boards": ["LinkedIn"], "resume_id": resume["id"]}),
            ),
        )
        .await,
    )
    .await;
    let plan_id = plans[0]["id"].as_str().unwrap();

    let body = json!({ "application_ids": ["garbage", plan_id] });
    let first = body_json(send(&app, post_json("/apply/send", &body)).await).await;
    assert_eq!(first.as_array().unwrap().len(), 1);
    assert_eq!(first[0]["application_id"], plan_id);

    let second = body_json(send(&app, post_json("/apply/send", &body)).await).await;
    assert_eq!(second.as_array().unwrap().len(), 1);
    assert_ne!(first[0]["id"], second[0]["id"]);

    let listed = body_json(send(&app, get("/apply/sent")).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn send_report_lists_every_id() {
    let app = setup_app();
    let missing = Uuid::new_v4().to_string();
    let resp = send(
        &app,
        post_json(
            "/apply/send/report",
            &json!({ "application_ids": ["bad", missing] }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let report = body_json(resp).await;
    assert_eq!(
        report,
        json!([
            {"outcome": "skipped", "application_id": "bad", "reason": "invalid_id"},
            {"outcome": "skipped", "application_id": missing, "reason": "plan_not_found"}
        ])
    );
}

#[tokio::test]
async fn send_requires_a_list() {
    let app = setup_app();
    let resp = send(
        &app,
        post_json("/apply/send", &json!({ "application_ids": "abc" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(&app, post_json("/apply/send", &json!({}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn diagnostics_routes_respond() {
    let app = setup_app();

    let root = body_json(send(&app, get("/")).await).await;
    assert_eq!(root["message"], "AutoApply Backend Running");

    let health = body_json(send(&app, get("/health")).await).await;
    assert_eq!(health["status"], "ok");

    upload(&app, "cv.txt", "text/plain", b"resume").await;
    let status = body_json(send(&app, get("/test")).await).await;
    assert_eq!(status["database"], "connected");
    assert_eq!(status["collections"], json!(["resume"]));

    let resp = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/apply/plan"].is_object());
}
