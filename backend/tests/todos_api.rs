use axum::http::StatusCode;
use serde_json::{json, Value};

mod support;

use support::{
    app, audit_len, delete, get, last_audit_action, post_json, put_json, seeded_state,
    ADMIN_TOKEN,
};

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|t| t["id"].as_u64().unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn list_todos_filters_conjunctively() {
    let state = seeded_state();
    let app = app(&state);

    let pending = get(&app, "/api/todos?status=pending").await;
    assert_eq!(ids(&pending.body), vec![2, 4, 6]);

    let pending_low = get(&app, "/api/todos?status=pending&priority=low").await;
    assert_eq!(ids(&pending_low.body), vec![4, 6]);

    let assigned = get(&app, "/api/todos?assigneeId=2&status=in_progress").await;
    assert_eq!(ids(&assigned.body), vec![1]);
}

#[tokio::test]
async fn list_todos_text_search_covers_description() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/todos?q=q4").await;
    assert_eq!(ids(&response.body), vec![1]);
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn list_todos_rejects_unknown_enum_values() {
    let state = seeded_state();
    let app = app(&state);

    for uri in [
        "/api/todos?status=archived",
        "/api/todos?priority=urgent",
        "/api/todos?assigneeId=me",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn create_todo_defaults_to_pending_medium() {
    let state = seeded_state();
    let app = app(&state);

    let response = post_json(&app, "/api/todos", Some(ADMIN_TOKEN), json!({"title": "x"})).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 7);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["priority"], "medium");
    assert!(response.body.get("assigneeId").is_none());
    assert_eq!(last_audit_action(&state).await.as_deref(), Some("todo.created"));
}

#[tokio::test]
async fn create_todo_ignores_requested_status() {
    let state = seeded_state();
    let app = app(&state);

    let response = post_json(
        &app,
        "/api/todos",
        None,
        json!({"title": "y", "status": "done", "priority": "high", "assigneeId": 99}),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["priority"], "high");
    assert_eq!(response.body["assigneeId"], 99);
}

#[tokio::test]
async fn create_todo_requires_title() {
    let state = seeded_state();
    let app = app(&state);
    let before = audit_len(&state).await;

    let empty = post_json(&app, "/api/todos", None, json!({"title": ""})).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let missing = post_json(&app, "/api/todos", None, json!({"priority": "low"})).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    assert_eq!(audit_len(&state).await, before);
    assert_eq!(state.store.read().await.counters.next_todo_id, 7);
}

#[tokio::test]
async fn completing_a_todo_records_completed_once() {
    let state = seeded_state();
    let app = app(&state);

    let response = put_json(&app, "/api/todos/2", Some(ADMIN_TOKEN), json!({"status": "done"})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "done");

    {
        let store = state.store.read().await;
        let completed: Vec<_> = store
            .audit_logs
            .iter()
            .filter(|e| e.action.as_str() == "todo.completed" && e.target_id == 2)
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].details, "ToDo「新人研修資料準備」を完了しました");
    }

    let again = put_json(&app, "/api/todos/2", Some(ADMIN_TOKEN), json!({"status": "done"})).await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(last_audit_action(&state).await.as_deref(), Some("todo.updated"));
}

#[tokio::test]
async fn update_todo_distinguishes_null_from_absent_assignee() {
    let state = seeded_state();
    let app = app(&state);

    let unchanged = put_json(&app, "/api/todos/1", None, json!({"title": "改題"})).await;
    assert_eq!(unchanged.body["assigneeId"], 2);
    assert_eq!(unchanged.body["title"], "改題");

    let cleared = put_json(&app, "/api/todos/1", None, json!({"assigneeId": null})).await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body.get("assigneeId").is_none());
    assert_eq!(cleared.body["title"], "改題");
}

#[tokio::test]
async fn update_todo_rejects_empty_title() {
    let state = seeded_state();
    let app = app(&state);

    let response = put_json(&app, "/api/todos/1", None, json!({"title": ""})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_todo_keeps_ids_monotonic() {
    let state = seeded_state();
    let app = app(&state);

    let removed = delete(&app, "/api/todos/6", None).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body["message"], "ToDoを削除しました");
    assert_eq!(last_audit_action(&state).await.as_deref(), Some("todo.deleted"));

    let missing = get(&app, "/api/todos/6").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let created = post_json(&app, "/api/todos", None, json!({"title": "next"})).await;
    assert_eq!(created.body["id"], 7);
}

#[tokio::test]
async fn deleting_an_assignee_leaves_todo_reference_dangling() {
    let state = seeded_state();
    let app = app(&state);

    let response = delete(&app, "/api/users/5", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let todo = get(&app, "/api/todos/6").await;
    assert_eq!(todo.status, StatusCode::OK);
    assert_eq!(todo.body["assigneeId"], 5);
}
