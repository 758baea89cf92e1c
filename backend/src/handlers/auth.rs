use axum::{extract::State, Json};

use crate::{
    error::AppError,
    middleware::Bearer,
    models::{
        audit_log::AuditAction,
        user::{LoginRequest, LoginResponse, UserResponse},
        MessageResponse,
    },
    repositories::user as user_repo,
    services::{
        audit_log::{self, AuditEvent},
        session::issue_token,
    },
    state::AppState,
    validation::ValidatedJson,
};

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let mut store = state.store.write().await;

    let user = user_repo::find_by_credentials(&store, &payload.username, &payload.password)
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(username = %payload.username, "login rejected");
            AppError::Unauthorized("ユーザー名またはパスワードが正しくありません".to_string())
        })?;

    let token = issue_token(user.id);
    let actor = Bearer::User(user.id).actor(&store);
    audit_log::record(
        &mut store,
        &actor,
        AuditEvent::for_session(AuditAction::AuthLogin, &user),
    );

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}

/// Always succeeds; only a token that resolves to a user leaves an audit entry.
pub async fn logout(State(state): State<AppState>, bearer: Bearer) -> Json<MessageResponse> {
    let mut store = state.store.write().await;

    if let Some(user) = bearer.resolve(&store).cloned() {
        let actor = bearer.actor(&store);
        audit_log::record(
            &mut store,
            &actor,
            AuditEvent::for_session(AuditAction::AuthLogout, &user),
        );
        tracing::info!(user_id = %user.id, "user logged out");
    }

    Json(MessageResponse::new("ログアウトしました"))
}

pub async fn me(
    State(state): State<AppState>,
    bearer: Bearer,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = match bearer {
        Bearer::Missing => return Err(AppError::Unauthorized("認証が必要です".to_string())),
        Bearer::Invalid => return Err(AppError::Unauthorized("無効なトークンです".to_string())),
        Bearer::User(id) => id,
    };

    let store = state.store.read().await;
    let user = user_repo::find_user(&store, user_id)
        .ok_or_else(|| AppError::Unauthorized("ユーザーが見つかりません".to_string()))?;
    Ok(Json(UserResponse::from(user)))
}
