pub mod audit_logs;
pub mod dashboard;
pub mod login;
pub mod todos;
pub mod users;
