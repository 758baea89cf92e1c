pub mod id;

pub use id::{AuditLogId, TodoId, UserId};
