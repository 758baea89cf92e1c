#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        AuditAction, AuditLogEntry, AuditTargetType, Todo, TodoPriority, TodoStatus, User,
        UserRole,
    };
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            role: UserRole::Admin,
            display_name: "管理者".into(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn member_user(id: u64, username: &str, display_name: &str) -> User {
        User {
            id,
            username: username.into(),
            email: format!("{username}@example.com"),
            role: UserRole::Member,
            display_name: display_name.into(),
            ..admin_user()
        }
    }

    pub fn sample_todo(id: u64, title: &str, status: TodoStatus) -> Todo {
        Todo {
            id,
            title: title.into(),
            description: None,
            assignee_id: Some(2),
            status,
            priority: TodoPriority::Medium,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    pub fn sample_audit_log(id: u64, action: AuditAction) -> AuditLogEntry {
        AuditLogEntry {
            id,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 3, 9, 0, 0).unwrap(),
            action,
            actor_id: 1,
            actor_name: "管理者".into(),
            target_type: AuditTargetType::Todo,
            target_id: 4,
            details: "ToDo「資料作成」を完了しました".into(),
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
