use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    middleware::Bearer,
    models::{
        audit_log::AuditAction,
        todo::{CreateTodo, Todo, TodoPriority, TodoStatus, UpdateTodo},
        MessageResponse, Page,
    },
    repositories::{todo as todo_repo, PageRequest, TodoFilters},
    services::{
        audit_log::{self, AuditEvent},
        todo_transition::audit_action_for,
    },
    state::AppState,
    types::{TodoId, UserId},
    validation::{ApiPath, ApiQuery, ValidatedJson},
};

const TODO_NOT_FOUND: &str = "ToDoが見つかりません";

#[derive(Debug, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TodoListQuery {
    /// Case-insensitive match on title or description.
    pub q: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub assignee_id: Option<UserId>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

fn not_found() -> AppError {
    AppError::NotFound(TODO_NOT_FOUND.to_string())
}

pub async fn list_todos(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<TodoListQuery>,
) -> Result<Json<Page<Todo>>, AppError> {
    let page = PageRequest::resolve(q.page, q.page_size, &state.config)?;
    let filters = TodoFilters {
        q: None,
        status: q.status,
        priority: q.priority,
        assignee_id: q.assignee_id,
    }
    .with_query(q.q.as_deref());

    let store = state.store.read().await;
    let result = todo_repo::list_todos(&store, &filters, page);
    Ok(Json(result.map(Todo::clone)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TodoId>,
) -> Result<Json<Todo>, AppError> {
    let store = state.store.read().await;
    let todo = todo_repo::find_todo(&store, id).ok_or_else(not_found)?;
    Ok(Json(todo.clone()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    bearer: Bearer,
    ValidatedJson(payload): ValidatedJson<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let mut store = state.store.write().await;
    let actor = bearer.actor(&store);

    let id = store.counters.allocate_todo_id();
    let todo = Todo::new(id, payload, Utc::now());
    let event = AuditEvent::for_todo(AuditAction::TodoCreated, &todo);

    todo_repo::insert_todo(&mut store, todo.clone());
    audit_log::record(&mut store, &actor, event);

    tracing::info!(todo_id = %id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    bearer: Bearer,
    ApiPath(id): ApiPath<TodoId>,
    ValidatedJson(payload): ValidatedJson<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let mut store = state.store.write().await;
    let actor = bearer.actor(&store);

    let todo = todo_repo::find_todo_mut(&mut store, id).ok_or_else(not_found)?;
    let action = audit_action_for(todo.status, payload.status);
    todo.apply(payload, Utc::now());
    let updated = todo.clone();

    audit_log::record(
        &mut store,
        &actor,
        AuditEvent::for_todo(action, &updated),
    );

    tracing::debug!(todo_id = %id, action = action.as_str(), "todo updated");
    Ok(Json(updated))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    bearer: Bearer,
    ApiPath(id): ApiPath<TodoId>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut store = state.store.write().await;
    let actor = bearer.actor(&store);

    let removed = todo_repo::remove_todo(&mut store, id).ok_or_else(not_found)?;
    audit_log::record(
        &mut store,
        &actor,
        AuditEvent::for_todo(AuditAction::TodoDeleted, &removed),
    );

    Ok(Json(MessageResponse::new("ToDoを削除しました")))
}
