//! Which audit action a todo update records.

use crate::models::{audit_log::AuditAction, todo::TodoStatus};

/// `(from, to, action)`. Only entering `done` from another status counts as
/// completion; every other pair is a plain update.
const TRANSITIONS: [(TodoStatus, TodoStatus, AuditAction); 9] = [
    (TodoStatus::Pending, TodoStatus::Pending, AuditAction::TodoUpdated),
    (TodoStatus::Pending, TodoStatus::InProgress, AuditAction::TodoUpdated),
    (TodoStatus::Pending, TodoStatus::Done, AuditAction::TodoCompleted),
    (TodoStatus::InProgress, TodoStatus::Pending, AuditAction::TodoUpdated),
    (TodoStatus::InProgress, TodoStatus::InProgress, AuditAction::TodoUpdated),
    (TodoStatus::InProgress, TodoStatus::Done, AuditAction::TodoCompleted),
    (TodoStatus::Done, TodoStatus::Pending, AuditAction::TodoUpdated),
    (TodoStatus::Done, TodoStatus::InProgress, AuditAction::TodoUpdated),
    (TodoStatus::Done, TodoStatus::Done, AuditAction::TodoUpdated),
];

/// Audit action for an update that moves a todo from `previous` to
/// `requested` (`None` when the update leaves status alone).
pub fn audit_action_for(previous: TodoStatus, requested: Option<TodoStatus>) -> AuditAction {
    let Some(next) = requested else {
        return AuditAction::TodoUpdated;
    };
    TRANSITIONS
        .iter()
        .find(|(from, to, _)| *from == previous && *to == next)
        .map(|(_, _, action)| *action)
        .unwrap_or(AuditAction::TodoUpdated)
}
