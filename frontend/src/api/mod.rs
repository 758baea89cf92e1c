mod audit_logs;
mod auth;
pub mod client;
mod stats;
mod todos;
pub mod types;
mod users;

pub use audit_logs::AuditLogListQuery;
pub use client::*;
pub use todos::TodoListQuery;
pub use types::*;
pub use users::UserListQuery;
