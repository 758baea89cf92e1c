use crate::{
    api::{ApiClient, ApiError, AuditLogEntry, Page},
    state::{auth::use_api_client, search::AuditLogSearch},
};

/// Audit entries are append-only, so this side only reads.
#[derive(Clone)]
pub struct AuditLogsRepository {
    client: ApiClient,
}

impl AuditLogsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new(use_api_client())
    }

    pub async fn list(&self, search: AuditLogSearch) -> Result<Page<AuditLogEntry>, ApiError> {
        self.client.list_audit_logs(&search.to_list_query()).await
    }

    pub async fn get(&self, id: u64) -> Result<AuditLogEntry, ApiError> {
        self.client.get_audit_log(id).await
    }
}
