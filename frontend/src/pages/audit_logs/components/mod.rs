use crate::api::{AuditAction, AuditTargetType};

pub mod detail;
pub mod list_header;
pub mod list_pane;

/// `(value, label)` pairs for the action filter.
pub fn action_options() -> Vec<(String, String)> {
    AuditAction::ALL
        .iter()
        .map(|action| (action.as_str().to_string(), action.label().to_string()))
        .collect()
}

pub fn target_type_options() -> Vec<(String, String)> {
    AuditTargetType::ALL
        .iter()
        .map(|target| (target.as_str().to_string(), target.label().to_string()))
        .collect()
}
