use axum::http::StatusCode;
use serde_json::{json, Value};

mod support;

use support::{
    app, audit_len, delete, get, last_audit_action, post_json, put_json, seeded_state,
    ADMIN_TOKEN,
};

fn usernames(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|u| u["username"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn list_users_returns_envelope_with_defaults() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/users").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["pageSize"], 20);
    assert_eq!(
        usernames(&response.body),
        vec!["admin", "tanaka", "suzuki", "sato", "yamada"]
    );
    for item in response.body["items"].as_array().unwrap() {
        assert!(item.get("password").is_none());
    }
}

#[tokio::test]
async fn list_users_filters_by_role_and_text() {
    let state = seeded_state();
    let app = app(&state);

    let admins = get(&app, "/api/users?role=admin").await;
    assert_eq!(usernames(&admins.body), vec!["admin", "sato"]);

    let by_name = get(&app, "/api/users?q=%E7%94%B0%E4%B8%AD").await;
    assert_eq!(usernames(&by_name.body), vec!["tanaka"]);

    let by_email = get(&app, "/api/users?q=YAMADA%40").await;
    assert_eq!(usernames(&by_email.body), vec!["yamada"]);

    let empty_q = get(&app, "/api/users?q=").await;
    assert_eq!(empty_q.body["total"], 5);
}

#[tokio::test]
async fn list_users_paginates_and_reports_total() {
    let state = seeded_state();
    let app = app(&state);

    let page_two = get(&app, "/api/users?page=2&pageSize=2").await;
    assert_eq!(page_two.body["total"], 5);
    assert_eq!(usernames(&page_two.body), vec!["suzuki", "sato"]);

    let beyond = get(&app, "/api/users?page=9&pageSize=2").await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert_eq!(beyond.body["total"], 5);
    assert!(beyond.body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn large_page_size_returns_everything() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/users?pageSize=500").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pageSize"], 500);
    assert_eq!(response.body["total"], 5);
    assert_eq!(usernames(&response.body).len(), 5);
}

#[tokio::test]
async fn list_users_rejects_malformed_query() {
    let state = seeded_state();
    let app = app(&state);

    for uri in [
        "/api/users?page=0",
        "/api/users?pageSize=abc",
        "/api/users?pageSize=0",
        "/api/users?role=owner",
        "/api/users?page=-1",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.body["code"], 400, "{uri}");
    }
}

#[tokio::test]
async fn create_user_returns_201_and_records_audit() {
    let state = seeded_state();
    let app = app(&state);

    let response = post_json(
        &app,
        "/api/users",
        Some(ADMIN_TOKEN),
        json!({
            "username": "kimura",
            "email": "kimura@example.com",
            "role": "member",
            "displayName": "木村",
            "password": "pass"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 6);
    assert!(response.body.get("password").is_none());
    assert_eq!(response.body["createdAt"], response.body["updatedAt"]);

    let store = state.store.read().await;
    let entry = store.audit_logs.last().unwrap();
    assert_eq!(entry.action.as_str(), "user.created");
    assert_eq!(entry.actor_id.get(), 1);
    assert_eq!(entry.actor_name, "管理者");
    assert_eq!(entry.target_id, 6);
    assert_eq!(entry.details, "ユーザー「木村」を作成しました");
}

#[tokio::test]
async fn duplicate_username_conflicts_without_consuming_an_id() {
    let state = seeded_state();
    let app = app(&state);
    let before = audit_len(&state).await;

    let response = post_json(
        &app,
        "/api/users",
        Some(ADMIN_TOKEN),
        json!({
            "username": "tanaka",
            "email": "other@example.com",
            "role": "member",
            "displayName": "別の田中",
            "password": "pass"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["code"], 409);
    assert_eq!(audit_len(&state).await, before);
    assert_eq!(state.store.read().await.counters.next_user_id, 6);

    let next = post_json(
        &app,
        "/api/users",
        Some(ADMIN_TOKEN),
        json!({
            "username": "ito",
            "email": "ito@example.com",
            "role": "admin",
            "displayName": "伊藤",
            "password": "pass"
        }),
    )
    .await;
    assert_eq!(next.body["id"], 6);
}

#[tokio::test]
async fn create_user_accepts_punctuated_usernames() {
    let state = seeded_state();
    let app = app(&state);

    for (username, email) in [("john.doe", "john@example.com"), ("user-1", "user1@example.com")] {
        let response = post_json(
            &app,
            "/api/users",
            Some(ADMIN_TOKEN),
            json!({
                "username": username,
                "email": email,
                "role": "member",
                "displayName": "John",
                "password": "pass"
            }),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED, "{username}");
        assert_eq!(response.body["username"], username);
    }
}

#[tokio::test]
async fn create_user_validates_payload() {
    let state = seeded_state();
    let app = app(&state);

    let response = post_json(
        &app,
        "/api/users",
        None,
        json!({
            "username": "bad",
            "email": "not-an-email",
            "role": "member",
            "displayName": "",
            "password": "abc"
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);

    let missing_role = post_json(
        &app,
        "/api/users",
        None,
        json!({
            "username": "bad",
            "email": "bad@example.com",
            "displayName": "Bad",
            "password": "abcd"
        }),
    )
    .await;
    assert_eq!(missing_role.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutation_without_token_is_attributed_to_system() {
    let state = seeded_state();
    let app = app(&state);

    let response = put_json(&app, "/api/users/2", None, json!({"displayName": "田中次郎"})).await;
    assert_eq!(response.status, StatusCode::OK);

    let store = state.store.read().await;
    let entry = store.audit_logs.last().unwrap();
    assert_eq!(entry.actor_id.get(), 0);
    assert_eq!(entry.actor_name, "system");
    assert_eq!(entry.details, "ユーザー「田中次郎」の情報を更新しました");
}

#[tokio::test]
async fn update_user_applies_only_present_fields() {
    let state = seeded_state();
    let app = app(&state);
    let original = get(&app, "/api/users/3").await.body;

    let response = put_json(
        &app,
        "/api/users/3",
        Some(ADMIN_TOKEN),
        json!({"role": "admin"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "admin");
    assert_eq!(response.body["email"], original["email"]);
    assert_eq!(response.body["displayName"], original["displayName"]);
    assert_eq!(response.body["createdAt"], original["createdAt"]);
    assert_ne!(response.body["updatedAt"], original["updatedAt"]);
    assert_eq!(last_audit_action(&state).await.as_deref(), Some("user.updated"));
}

#[tokio::test]
async fn update_missing_user_is_not_found_and_not_audited() {
    let state = seeded_state();
    let app = app(&state);
    let before = audit_len(&state).await;

    let response = put_json(&app, "/api/users/77", None, json!({"role": "admin"})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(audit_len(&state).await, before);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let state = seeded_state();
    let app = app(&state);

    let response = delete(&app, "/api/users/5", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "ユーザーを削除しました");
    assert_eq!(last_audit_action(&state).await.as_deref(), Some("user.deleted"));

    let response = get(&app, "/api/users/5").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], 404);

    let again = delete(&app, "/api/users/5", Some(ADMIN_TOKEN)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_validation_error() {
    let state = seeded_state();
    let app = app(&state);

    let response = get(&app, "/api/users/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 400);
}
