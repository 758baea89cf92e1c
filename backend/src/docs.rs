#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{
        audit_logs::AuditLogListQuery, health::HealthResponse, todos::TodoListQuery,
        users::UserListQuery,
    },
    models::{
        audit_log::{AuditAction, AuditLogEntry, AuditTargetType},
        stats::{RecentActivity, Stats, TodoStats, UserStats},
        todo::{CreateTodo, Todo, TodoPriority, TodoStatus, UpdateTodo},
        user::{CreateUser, LoginRequest, LoginResponse, UpdateUser, UserResponse, UserRole},
        MessageResponse, Page,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        logout_doc,
        me_doc,
        list_users_doc,
        create_user_doc,
        get_user_doc,
        update_user_doc,
        delete_user_doc,
        list_todos_doc,
        create_todo_doc,
        get_todo_doc,
        update_todo_doc,
        delete_todo_doc,
        list_audit_logs_doc,
        get_audit_log_doc,
        stats_doc,
        health_doc
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            HealthResponse,
            // auth & users
            LoginRequest,
            LoginResponse,
            UserRole,
            UserResponse,
            CreateUser,
            UpdateUser,
            UserListQuery,
            // todos
            Todo,
            TodoStatus,
            TodoPriority,
            CreateTodo,
            UpdateTodo,
            TodoListQuery,
            // audit trail
            AuditAction,
            AuditTargetType,
            AuditLogEntry,
            AuditLogListQuery,
            // dashboard
            Stats,
            UserStats,
            TodoStats,
            RecentActivity
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "ログイン・ログアウト・セッション確認"),
        (name = "Users", description = "ユーザー管理 API"),
        (name = "Todos", description = "ToDo 管理 API"),
        (name = "AuditLogs", description = "監査ログ API"),
        (name = "Stats", description = "ダッシュボード統計"),
        (name = "Health", description = "死活監視")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("mock-token-<userId>".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "ログイン成功", body = LoginResponse),
        (status = 400, description = "入力不備", body = ErrorResponse),
        (status = 401, description = "認証失敗", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "ログアウト", body = MessageResponse)),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "ログイン中のユーザー", body = UserResponse),
        (status = 401, description = "未認証", body = ErrorResponse)
    ),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/users",
    params(UserListQuery),
    responses(
        (status = 200, description = "ユーザー一覧", body = Page<UserResponse>),
        (status = 400, description = "不正なクエリ", body = ErrorResponse)
    ),
    tag = "Users"
)]
fn list_users_doc() {}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "作成されたユーザー", body = UserResponse),
        (status = 400, description = "入力不備", body = ErrorResponse),
        (status = 409, description = "ユーザー名重複", body = ErrorResponse)
    ),
    tag = "Users"
)]
fn create_user_doc() {}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "ユーザー ID")),
    responses(
        (status = 200, description = "ユーザー", body = UserResponse),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Users"
)]
fn get_user_doc() {}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "ユーザー ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "更新後のユーザー", body = UserResponse),
        (status = 400, description = "入力不備", body = ErrorResponse),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Users"
)]
fn update_user_doc() {}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "ユーザー ID")),
    responses(
        (status = 200, description = "削除完了", body = MessageResponse),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Users"
)]
fn delete_user_doc() {}

#[utoipa::path(
    get,
    path = "/api/todos",
    params(TodoListQuery),
    responses(
        (status = 200, description = "ToDo 一覧", body = Page<Todo>),
        (status = 400, description = "不正なクエリ", body = ErrorResponse)
    ),
    tag = "Todos"
)]
fn list_todos_doc() {}

#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "作成された ToDo", body = Todo),
        (status = 400, description = "入力不備", body = ErrorResponse)
    ),
    tag = "Todos"
)]
fn create_todo_doc() {}

#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = u64, Path, description = "ToDo ID")),
    responses(
        (status = 200, description = "ToDo", body = Todo),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Todos"
)]
fn get_todo_doc() {}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(("id" = u64, Path, description = "ToDo ID")),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "更新後の ToDo", body = Todo),
        (status = 400, description = "入力不備", body = ErrorResponse),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Todos"
)]
fn update_todo_doc() {}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = u64, Path, description = "ToDo ID")),
    responses(
        (status = 200, description = "削除完了", body = MessageResponse),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "Todos"
)]
fn delete_todo_doc() {}

#[utoipa::path(
    get,
    path = "/api/audit-logs",
    params(AuditLogListQuery),
    responses(
        (status = 200, description = "監査ログ一覧 (新しい順)", body = Page<AuditLogEntry>),
        (status = 400, description = "不正なクエリ", body = ErrorResponse)
    ),
    tag = "AuditLogs"
)]
fn list_audit_logs_doc() {}

#[utoipa::path(
    get,
    path = "/api/audit-logs/{id}",
    params(("id" = u64, Path, description = "監査ログ ID")),
    responses(
        (status = 200, description = "監査ログ", body = AuditLogEntry),
        (status = 404, description = "存在しない", body = ErrorResponse)
    ),
    tag = "AuditLogs"
)]
fn get_audit_log_doc() {}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "統計情報", body = Stats)),
    tag = "Stats"
)]
fn stats_doc() {}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "稼働中", body = HealthResponse)),
    tag = "Health",
    security(())
)]
fn health_doc() {}
