use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, AuditAction, AuditLogEntry, AuditTargetType, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AuditAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<AuditTargetType>,
    pub page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl ApiClient {
    pub async fn list_audit_logs(
        &self,
        query: &AuditLogListQuery,
    ) -> Result<Page<AuditLogEntry>, ApiError> {
        let url = self.endpoint("/audit-logs").await;
        self.send_json(self.http().get(url).query(query)).await
    }

    pub async fn get_audit_log(&self, id: u64) -> Result<AuditLogEntry, ApiError> {
        let url = self.endpoint(&format!("/audit-logs/{}", id)).await;
        self.send_json(self.http().get(url)).await
    }
}
