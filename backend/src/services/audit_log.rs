//! Audit recorder: every successful mutation appends exactly one entry.

use chrono::{DateTime, Utc};

use crate::{
    models::{
        audit_log::{Actor, AuditAction, AuditLogEntry, AuditTargetType},
        todo::Todo,
        user::User,
    },
    store::Store,
};

/// What happened, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub target_type: AuditTargetType,
    pub target_id: u64,
    pub details: String,
}

impl AuditEvent {
    /// Event for a user mutation. `action` must be one of the `user.*` actions.
    pub fn for_user(action: AuditAction, user: &User) -> Self {
        Self {
            action,
            target_type: AuditTargetType::User,
            target_id: user.id.get(),
            details: describe(action, &user.display_name),
        }
    }

    /// Event for a todo mutation. `action` must be one of the `todo.*` actions.
    pub fn for_todo(action: AuditAction, todo: &Todo) -> Self {
        Self {
            action,
            target_type: AuditTargetType::Todo,
            target_id: todo.id.get(),
            details: describe(action, &todo.title),
        }
    }

    /// Login or logout of `user`; the session target id is the user id.
    pub fn for_session(action: AuditAction, user: &User) -> Self {
        Self {
            action,
            target_type: AuditTargetType::Session,
            target_id: user.id.get(),
            details: describe(action, &user.display_name),
        }
    }
}

/// Human-readable details text for an action on the named subject.
pub fn describe(action: AuditAction, subject: &str) -> String {
    match action {
        AuditAction::UserCreated => format!("ユーザー「{subject}」を作成しました"),
        AuditAction::UserUpdated => format!("ユーザー「{subject}」の情報を更新しました"),
        AuditAction::UserDeleted => format!("ユーザー「{subject}」を削除しました"),
        AuditAction::TodoCreated => format!("ToDo「{subject}」を作成しました"),
        AuditAction::TodoUpdated => format!("ToDo「{subject}」を更新しました"),
        AuditAction::TodoCompleted => format!("ToDo「{subject}」を完了しました"),
        AuditAction::TodoDeleted => format!("ToDo「{subject}」を削除しました"),
        AuditAction::AuthLogin => format!("{subject}がログインしました"),
        AuditAction::AuthLogout => format!("{subject}がログアウトしました"),
    }
}

/// Appends an entry stamped with the current time and returns a copy of it.
pub fn record(store: &mut Store, actor: &Actor, event: AuditEvent) -> AuditLogEntry {
    record_at(store, actor, event, Utc::now())
}

pub fn record_at(
    store: &mut Store,
    actor: &Actor,
    event: AuditEvent,
    timestamp: DateTime<Utc>,
) -> AuditLogEntry {
    let entry = AuditLogEntry {
        id: store.counters.allocate_audit_log_id(),
        timestamp,
        action: event.action,
        actor_id: actor.id,
        actor_name: actor.name.clone(),
        target_type: event.target_type,
        target_id: event.target_id,
        details: event.details,
    };

    tracing::info!(
        target: "audit_log",
        audit_log_id = %entry.id,
        action = entry.action.as_str(),
        actor_id = %entry.actor_id,
        target_id = entry.target_id,
        "audit entry recorded"
    );

    store.audit_logs.push(entry.clone());
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn actor() -> Actor {
        Actor {
            id: UserId::new(1),
            name: "管理者".into(),
        }
    }

    #[test]
    fn record_assigns_sequential_ids_and_appends() {
        let mut store = Store::empty();
        let event = AuditEvent {
            action: AuditAction::TodoDeleted,
            target_type: AuditTargetType::Todo,
            target_id: 3,
            details: describe(AuditAction::TodoDeleted, "掃除"),
        };

        let first = record(&mut store, &actor(), event.clone());
        let second = record(&mut store, &Actor::system(), event);

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(store.audit_logs.len(), 2);
        assert_eq!(store.audit_logs[0], first);
        assert_eq!(second.actor_name, "system");
        assert_eq!(first.details, "ToDo「掃除」を削除しました");
    }

    #[test]
    fn record_keeps_counter_monotonic_on_seeded_store() {
        let mut store = Store::seeded(Utc::now());
        let entry = record(
            &mut store,
            &actor(),
            AuditEvent {
                action: AuditAction::AuthLogout,
                target_type: AuditTargetType::Session,
                target_id: 1,
                details: describe(AuditAction::AuthLogout, "管理者"),
            },
        );
        assert_eq!(entry.id.get(), 9);
        assert_eq!(entry.details, "管理者がログアウトしました");
    }

    #[test]
    fn describe_covers_update_wording() {
        assert_eq!(
            describe(AuditAction::UserUpdated, "田中太郎"),
            "ユーザー「田中太郎」の情報を更新しました"
        );
        assert_eq!(
            describe(AuditAction::TodoCompleted, "報告"),
            "ToDo「報告」を完了しました"
        );
    }
}
