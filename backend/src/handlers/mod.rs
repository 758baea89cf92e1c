pub mod audit_logs;
pub mod auth;
pub mod health;
pub mod stats;
pub mod todos;
pub mod users;
