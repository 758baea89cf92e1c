use leptos::*;
use leptos_meta::{provide_meta_context, Html, Title};
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, layout::APP_NAME, toast::ToastHost},
    pages::{
        audit_logs::{AuditLogDetailPage, AuditLogsIndex, AuditLogsPage},
        dashboard::DashboardPage,
        login::LoginPage,
        todos::{TodoCreatePage, TodoDetailPage, TodosIndex, TodosPage},
        users::{UserCreatePage, UserDetailPage, UsersIndex, UsersPage},
    },
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/users",
    "/users/new",
    "/users/:id",
    "/todos",
    "/todos/new",
    "/todos/:id",
    "/audit-logs",
    "/audit-logs/:id",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/users",
    "/users/new",
    "/users/:id",
    "/todos",
    "/todos/new",
    "/todos/:id",
    "/audit-logs",
    "/audit-logs/:id",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_toasts();
    provide_meta_context();
    view! {
        <Html lang="ja" />
        <Title text=APP_NAME />
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path="/login" view=LoginPage />
                <Route path="/dashboard" view=ProtectedDashboard />
                <Route path="/users" view=ProtectedUsers>
                    <Route path="" view=UsersIndex />
                    <Route path="new" view=UserCreatePage />
                    <Route path=":id" view=UserDetailPage />
                </Route>
                <Route path="/todos" view=ProtectedTodos>
                    <Route path="" view=TodosIndex />
                    <Route path="new" view=TodoCreatePage />
                    <Route path=":id" view=TodoDetailPage />
                </Route>
                <Route path="/audit-logs" view=ProtectedAuditLogs>
                    <Route path="" view=AuditLogsIndex />
                    <Route path=":id" view=AuditLogDetailPage />
                </Route>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireAuth><UsersPage/></RequireAuth> }
}

#[component]
fn ProtectedTodos() -> impl IntoView {
    view! { <RequireAuth><TodosPage/></RequireAuth> }
}

#[component]
fn ProtectedAuditLogs() -> impl IntoView {
    view! { <RequireAuth><AuditLogsPage/></RequireAuth> }
}
