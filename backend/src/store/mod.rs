//! In-memory collections backing the API.
//!
//! The store is an ordinary value owned by [`crate::state::AppState`] behind a
//! lock. Handlers take the lock for the whole read-modify-audit sequence, so a
//! request never observes another request's half-applied mutation.

use chrono::{DateTime, Utc};

use crate::{
    models::{audit_log::AuditLogEntry, todo::Todo, user::User},
    types::{AuditLogId, TodoId, UserId},
};

mod seed;

/// Monotonic id sources. Values are never handed out twice, even after the
/// record that held them is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounters {
    pub next_user_id: u64,
    pub next_todo_id: u64,
    pub next_audit_log_id: u64,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            next_user_id: 1,
            next_todo_id: 1,
            next_audit_log_id: 1,
        }
    }
}

impl IdCounters {
    /// Counters that start one above the highest id already present.
    pub fn after(users: &[User], todos: &[Todo], audit_logs: &[AuditLogEntry]) -> Self {
        let next = |max: Option<u64>| max.map_or(1, |m| m + 1);
        Self {
            next_user_id: next(users.iter().map(|u| u.id.get()).max()),
            next_todo_id: next(todos.iter().map(|t| t.id.get()).max()),
            next_audit_log_id: next(audit_logs.iter().map(|l| l.id.get()).max()),
        }
    }

    pub fn allocate_user_id(&mut self) -> UserId {
        let id = UserId::new(self.next_user_id);
        self.next_user_id += 1;
        id
    }

    pub fn allocate_todo_id(&mut self) -> TodoId {
        let id = TodoId::new(self.next_todo_id);
        self.next_todo_id += 1;
        id
    }

    pub fn allocate_audit_log_id(&mut self) -> AuditLogId {
        let id = AuditLogId::new(self.next_audit_log_id);
        self.next_audit_log_id += 1;
        id
    }
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Insertion order.
    pub users: Vec<User>,
    /// Insertion order.
    pub todos: Vec<Todo>,
    /// Append order; entries are never edited or removed.
    pub audit_logs: Vec<AuditLogEntry>,
    pub counters: IdCounters,
}

impl Store {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed data with timestamps relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let users = seed::users(now);
        let todos = seed::todos(now);
        let audit_logs = seed::audit_logs(now);
        let counters = IdCounters::after(&users, &todos, &audit_logs);
        Self {
            users,
            todos,
            audit_logs,
            counters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_counters_start_above_seed_ids() {
        let store = Store::seeded(Utc::now());
        assert_eq!(store.users.len(), 5);
        assert_eq!(store.todos.len(), 6);
        assert_eq!(store.audit_logs.len(), 8);
        assert_eq!(
            store.counters,
            IdCounters {
                next_user_id: 6,
                next_todo_id: 7,
                next_audit_log_id: 9,
            }
        );
    }

    #[test]
    fn allocation_is_monotonic() {
        let mut counters = IdCounters::default();
        let first = counters.allocate_todo_id();
        let second = counters.allocate_todo_id();
        assert!(second > first);
        assert_eq!(counters.next_todo_id, 3);
        assert_eq!(counters.next_user_id, 1);
    }

    #[test]
    fn empty_store_allocates_from_one() {
        let mut store = Store::empty();
        assert_eq!(store.counters.allocate_user_id(), UserId::new(1));
    }
}
