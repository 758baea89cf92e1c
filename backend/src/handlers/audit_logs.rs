use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    models::{
        audit_log::{AuditAction, AuditLogEntry, AuditTargetType},
        Page,
    },
    repositories::{audit_log as audit_log_repo, AuditLogFilters, PageRequest},
    state::AppState,
    types::{AuditLogId, UserId},
    validation::{ApiPath, ApiQuery},
};

#[derive(Debug, Default, Deserialize, Serialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuditLogListQuery {
    pub action: Option<AuditAction>,
    pub actor_id: Option<UserId>,
    pub target_type: Option<AuditTargetType>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl AuditLogListQuery {
    fn filters(&self) -> AuditLogFilters {
        AuditLogFilters {
            action: self.action,
            actor_id: self.actor_id,
            target_type: self.target_type,
        }
    }
}

/// Newest entries first.
pub async fn list_audit_logs(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<AuditLogListQuery>,
) -> Result<Json<Page<AuditLogEntry>>, AppError> {
    let page = PageRequest::resolve(q.page, q.page_size, &state.config)?;
    let filters = q.filters();

    let store = state.store.read().await;
    let result = audit_log_repo::list_audit_logs(&store, &filters, page);
    Ok(Json(result.map(AuditLogEntry::clone)))
}

pub async fn get_audit_log_detail(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<AuditLogId>,
) -> Result<Json<AuditLogEntry>, AppError> {
    let store = state.store.read().await;
    let entry = audit_log_repo::fetch_audit_log(&store, id)
        .ok_or_else(|| AppError::NotFound("ログが見つかりません".into()))?;
    Ok(Json(entry.clone()))
}
