use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    middleware::Bearer,
    models::{
        audit_log::AuditAction,
        user::{CreateUser, UpdateUser, User, UserResponse, UserRole},
        MessageResponse, Page,
    },
    repositories::{user as user_repo, PageRequest, UserFilters},
    services::audit_log::{self, AuditEvent},
    state::AppState,
    types::UserId,
    validation::{ApiPath, ApiQuery, ValidatedJson},
};

const USER_NOT_FOUND: &str = "ユーザーが見つかりません";

#[derive(Debug, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Case-insensitive match on username, display name or email.
    pub q: Option<String>,
    pub role: Option<UserRole>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<UserListQuery>,
) -> Result<Json<Page<UserResponse>>, AppError> {
    let page = PageRequest::resolve(q.page, q.page_size, &state.config)?;
    let filters = UserFilters::new(q.q.as_deref(), q.role);

    let store = state.store.read().await;
    let result = user_repo::list_users(&store, &filters, page);
    Ok(Json(result.map(UserResponse::from)))
}

pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<UserResponse>, AppError> {
    let store = state.store.read().await;
    let user = user_repo::find_user(&store, id).ok_or_else(not_found)?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    bearer: Bearer,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let mut store = state.store.write().await;

    if user_repo::username_exists(&store, &payload.username) {
        return Err(AppError::Conflict(
            "このユーザー名は既に使用されています".to_string(),
        ));
    }

    let actor = bearer.actor(&store);
    let id = store.counters.allocate_user_id();
    let user = User::new(id, payload, Utc::now());
    let response = UserResponse::from(&user);
    let event = AuditEvent::for_user(AuditAction::UserCreated, &user);

    user_repo::insert_user(&mut store, user);
    audit_log::record(&mut store, &actor, event);

    tracing::info!(user_id = %id, username = %response.username, "user created");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_user(
    State(state): State<AppState>,
    bearer: Bearer,
    ApiPath(id): ApiPath<UserId>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> Result<Json<UserResponse>, AppError> {
    let mut store = state.store.write().await;
    let actor = bearer.actor(&store);

    let user = user_repo::find_user_mut(&mut store, id).ok_or_else(not_found)?;
    user.apply(payload, Utc::now());
    let response = UserResponse::from(&*user);
    let event = AuditEvent::for_user(AuditAction::UserUpdated, user);

    audit_log::record(&mut store, &actor, event);
    Ok(Json(response))
}

pub async fn delete_user(
    State(state): State<AppState>,
    bearer: Bearer,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut store = state.store.write().await;
    let actor = bearer.actor(&store);

    let removed = user_repo::remove_user(&mut store, id).ok_or_else(not_found)?;
    audit_log::record(
        &mut store,
        &actor,
        AuditEvent::for_user(AuditAction::UserDeleted, &removed),
    );

    tracing::info!(user_id = %id, "user deleted");
    Ok(Json(MessageResponse::new("ユーザーを削除しました")))
}
