//! Filtering, lookup and mutation helpers over the in-memory [`Store`].
//!
//! [`Store`]: crate::store::Store

pub mod audit_log;
pub mod common;
pub mod todo;
pub mod user;

pub use audit_log::AuditLogFilters;
pub use common::{paginate, PageRequest};
pub use todo::TodoFilters;
pub use user::UserFilters;
