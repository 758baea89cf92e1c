//! Append-only audit trail records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{AuditLogId, UserId};

/// State-changing action captured by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AuditAction {
    #[serde(rename = "user.created")]
    UserCreated,
    #[serde(rename = "user.updated")]
    UserUpdated,
    #[serde(rename = "user.deleted")]
    UserDeleted,
    #[serde(rename = "todo.created")]
    TodoCreated,
    #[serde(rename = "todo.updated")]
    TodoUpdated,
    #[serde(rename = "todo.completed")]
    TodoCompleted,
    #[serde(rename = "todo.deleted")]
    TodoDeleted,
    #[serde(rename = "auth.login")]
    AuthLogin,
    #[serde(rename = "auth.logout")]
    AuthLogout,
}

impl AuditAction {
    pub const ALL: [AuditAction; 9] = [
        AuditAction::UserCreated,
        AuditAction::UserUpdated,
        AuditAction::UserDeleted,
        AuditAction::TodoCreated,
        AuditAction::TodoUpdated,
        AuditAction::TodoCompleted,
        AuditAction::TodoDeleted,
        AuditAction::AuthLogin,
        AuditAction::AuthLogout,
    ];

    /// Dotted wire name, e.g. `todo.completed`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::UserCreated => "user.created",
            AuditAction::UserUpdated => "user.updated",
            AuditAction::UserDeleted => "user.deleted",
            AuditAction::TodoCreated => "todo.created",
            AuditAction::TodoUpdated => "todo.updated",
            AuditAction::TodoCompleted => "todo.completed",
            AuditAction::TodoDeleted => "todo.deleted",
            AuditAction::AuthLogin => "auth.login",
            AuditAction::AuthLogout => "auth.logout",
        }
    }

    /// Human-readable label shown in lists and filters.
    pub fn label(&self) -> &'static str {
        match self {
            AuditAction::UserCreated => "ユーザー作成",
            AuditAction::UserUpdated => "ユーザー更新",
            AuditAction::UserDeleted => "ユーザー削除",
            AuditAction::TodoCreated => "ToDo作成",
            AuditAction::TodoUpdated => "ToDo更新",
            AuditAction::TodoCompleted => "ToDo完了",
            AuditAction::TodoDeleted => "ToDo削除",
            AuditAction::AuthLogin => "ログイン",
            AuditAction::AuthLogout => "ログアウト",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditTargetType {
    User,
    Todo,
    Session,
}

/// Who performed an audited action, captured at the time it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub name: String,
}

impl Actor {
    /// Id used when a mutation arrives without a resolvable bearer token.
    pub const SYSTEM_ID: UserId = UserId::new(0);

    pub fn system() -> Self {
        Self {
            id: Self::SYSTEM_ID,
            name: "system".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: AuditLogId,
    /// Assigned when the entry is appended.
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub actor_id: UserId,
    /// Snapshot of the actor's display name; later renames do not touch it.
    pub actor_name: String,
    pub target_type: AuditTargetType,
    pub target_id: u64,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wire_names_round_trip_through_serde() {
        for action in AuditAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(serde_json::from_str::<AuditAction>("\"todo.archived\"").is_err());
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = AuditAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), AuditAction::ALL.len());
    }

    #[test]
    fn system_actor_uses_reserved_id() {
        let actor = Actor::system();
        assert_eq!(actor.id.get(), 0);
        assert_eq!(actor.name, "system");
    }
}
