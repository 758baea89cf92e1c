//! Dashboard aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::audit_log::{AuditAction, AuditLogEntry};
use crate::types::AuditLogId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserStats {
    pub total: u64,
    pub admins: u64,
    pub members: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub done: u64,
}

/// Trimmed audit entry for the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: AuditLogId,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub actor_name: String,
    pub details: String,
}

impl From<&AuditLogEntry> for RecentActivity {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            action: entry.action,
            actor_name: entry.actor_name.clone(),
            details: entry.details.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub users: UserStats,
    pub todos: TodoStats,
    /// Newest first.
    pub recent_activity: Vec<RecentActivity>,
}
