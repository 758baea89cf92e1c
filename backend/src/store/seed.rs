use chrono::{DateTime, Duration, Utc};

use crate::{
    models::{
        audit_log::{AuditAction, AuditLogEntry, AuditTargetType},
        todo::{Todo, TodoPriority, TodoStatus},
        user::{User, UserRole},
    },
    types::{AuditLogId, TodoId, UserId},
};

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

fn user(
    now: DateTime<Utc>,
    id: u64,
    username: &str,
    role: UserRole,
    display_name: &str,
    password: &str,
    (created, updated): (i64, i64),
) -> User {
    User {
        id: UserId::new(id),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role,
        display_name: display_name.to_string(),
        password: password.to_string(),
        created_at: days_ago(now, created),
        updated_at: days_ago(now, updated),
    }
}

pub(super) fn users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        user(now, 1, "admin", UserRole::Admin, "管理者", "admin", (90, 10)),
        user(now, 2, "tanaka", UserRole::Member, "田中太郎", "password", (60, 5)),
        user(now, 3, "suzuki", UserRole::Member, "鈴木花子", "password", (45, 3)),
        user(now, 4, "sato", UserRole::Admin, "佐藤一郎", "password", (30, 1)),
        user(now, 5, "yamada", UserRole::Member, "山田美咲", "password", (15, 0)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn todo(
    now: DateTime<Utc>,
    id: u64,
    title: &str,
    description: &str,
    assignee: u64,
    status: TodoStatus,
    priority: TodoPriority,
    (created, updated): (i64, i64),
) -> Todo {
    Todo {
        id: TodoId::new(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        assignee_id: Some(UserId::new(assignee)),
        status,
        priority,
        created_at: days_ago(now, created),
        updated_at: days_ago(now, updated),
    }
}

pub(super) fn todos(now: DateTime<Utc>) -> Vec<Todo> {
    use TodoPriority::*;
    use TodoStatus::*;

    vec![
        todo(
            now,
            1,
            "四半期レポート作成",
            "Q4の売上レポートを作成し、経営会議で発表する",
            2,
            InProgress,
            High,
            (14, 2),
        ),
        todo(
            now,
            2,
            "新人研修資料準備",
            "4月入社の新人向け研修資料を準備する",
            3,
            Pending,
            Medium,
            (10, 10),
        ),
        todo(
            now,
            3,
            "サーバーメンテナンス",
            "本番サーバーの定期メンテナンスを実施",
            1,
            Done,
            High,
            (20, 5),
        ),
        todo(
            now,
            4,
            "顧客ミーティング議事録",
            "先週の顧客ミーティングの議事録を作成して共有する",
            2,
            Pending,
            Low,
            (7, 7),
        ),
        todo(
            now,
            5,
            "セキュリティ監査対応",
            "外部監査チームからの指摘事項に対応する",
            4,
            InProgress,
            High,
            (12, 1),
        ),
        todo(
            now,
            6,
            "社内Wiki更新",
            "開発チームのWikiページを最新の情報に更新する",
            5,
            Pending,
            Low,
            (3, 3),
        ),
    ]
}

pub(super) fn audit_logs(now: DateTime<Utc>) -> Vec<AuditLogEntry> {
    let entry = |id: u64,
                 days: i64,
                 action: AuditAction,
                 (actor_id, actor_name): (u64, &str),
                 target_type: AuditTargetType,
                 target_id: u64,
                 details: &str| AuditLogEntry {
        id: AuditLogId::new(id),
        timestamp: days_ago(now, days),
        action,
        actor_id: UserId::new(actor_id),
        actor_name: actor_name.to_string(),
        target_type,
        target_id,
        details: details.to_string(),
    };
    let admin = (1, "管理者");

    vec![
        entry(
            1,
            90,
            AuditAction::UserCreated,
            admin,
            AuditTargetType::User,
            1,
            "ユーザー「管理者」を作成しました",
        ),
        entry(
            2,
            60,
            AuditAction::UserCreated,
            admin,
            AuditTargetType::User,
            2,
            "ユーザー「田中太郎」を作成しました",
        ),
        entry(
            3,
            45,
            AuditAction::UserCreated,
            admin,
            AuditTargetType::User,
            3,
            "ユーザー「鈴木花子」を作成しました",
        ),
        entry(
            4,
            20,
            AuditAction::TodoCreated,
            admin,
            AuditTargetType::Todo,
            3,
            "ToDo「サーバーメンテナンス」を作成しました",
        ),
        entry(
            5,
            14,
            AuditAction::TodoCreated,
            (2, "田中太郎"),
            AuditTargetType::Todo,
            1,
            "ToDo「四半期レポート作成」を作成しました",
        ),
        entry(
            6,
            5,
            AuditAction::TodoCompleted,
            admin,
            AuditTargetType::Todo,
            3,
            "ToDo「サーバーメンテナンス」を完了しました",
        ),
        entry(
            7,
            3,
            AuditAction::AuthLogin,
            (4, "佐藤一郎"),
            AuditTargetType::Session,
            4,
            "佐藤一郎がログインしました",
        ),
        entry(
            8,
            1,
            AuditAction::UserUpdated,
            admin,
            AuditTargetType::User,
            4,
            "ユーザー「佐藤一郎」の情報を更新しました",
        ),
    ]
}
