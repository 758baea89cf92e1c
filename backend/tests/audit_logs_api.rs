use axum::http::StatusCode;
use serde_json::{json, Value};

mod support;

use support::{app, get, post_json, seeded_state, ADMIN_TOKEN};

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|e| e["id"].as_u64().unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn list_is_newest_first() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/audit-logs").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(response.body["total"], 8);
}

#[tokio::test]
async fn new_entries_appear_at_the_top() {
    let state = seeded_state();
    let app = app(&state);

    post_json(&app, "/api/todos", Some(ADMIN_TOKEN), json!({"title": "新規"})).await;

    let response = get(&app, "/api/audit-logs?pageSize=1").await;
    assert_eq!(ids(&response.body), vec![9]);
    assert_eq!(response.body["items"][0]["action"], "todo.created");
    assert_eq!(response.body["items"][0]["targetType"], "todo");
    assert_eq!(response.body["total"], 9);
}

#[tokio::test]
async fn filters_by_action_actor_and_target_type() {
    let state = seeded_state();
    let app = app(&state);

    let created = get(&app, "/api/audit-logs?action=user.created").await;
    assert_eq!(ids(&created.body), vec![3, 2, 1]);

    let by_actor = get(&app, "/api/audit-logs?actorId=2").await;
    assert_eq!(ids(&by_actor.body), vec![5]);

    let sessions = get(&app, "/api/audit-logs?targetType=session").await;
    assert_eq!(ids(&sessions.body), vec![7]);

    let combined = get(&app, "/api/audit-logs?targetType=todo&actorId=1").await;
    assert_eq!(ids(&combined.body), vec![6, 4]);
}

#[tokio::test]
async fn rejects_unknown_filter_values() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/audit-logs?action=user.renamed").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = get(&app, "/api/audit-logs?targetType=group").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fetch_single_entry() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/audit-logs/7").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["action"], "auth.login");
    assert_eq!(response.body["actorName"], "佐藤一郎");

    let missing = get(&app, "/api/audit-logs/70").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "ログが見つかりません");
}
