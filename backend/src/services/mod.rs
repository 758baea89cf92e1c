pub mod audit_log;
pub mod session;
pub mod todo_transition;
