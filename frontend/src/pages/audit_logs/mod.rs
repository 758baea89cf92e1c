pub mod components;
pub mod panel;
pub mod repository;

pub use panel::{AuditLogDetailPage, AuditLogsIndex, AuditLogsPage};
