use std::cmp::Reverse;

use crate::{
    models::{
        audit_log::{AuditAction, AuditLogEntry, AuditTargetType},
        Page,
    },
    store::Store,
    types::{AuditLogId, UserId},
};

use super::common::{paginate, PageRequest};

#[derive(Debug, Clone, Default)]
pub struct AuditLogFilters {
    pub action: Option<AuditAction>,
    pub actor_id: Option<UserId>,
    pub target_type: Option<AuditTargetType>,
}

impl AuditLogFilters {
    pub fn matches(&self, entry: &AuditLogEntry) -> bool {
        self.action.is_none_or(|action| action == entry.action)
            && self.actor_id.is_none_or(|actor| actor == entry.actor_id)
            && self
                .target_type
                .is_none_or(|target| target == entry.target_type)
    }
}

/// All entries, newest first. Equal timestamps fall back to the higher id.
pub fn newest_first(store: &Store) -> Vec<&AuditLogEntry> {
    let mut entries: Vec<&AuditLogEntry> = store.audit_logs.iter().collect();
    entries.sort_by_key(|entry| Reverse((entry.timestamp, entry.id)));
    entries
}

pub fn list_audit_logs<'a>(
    store: &'a Store,
    filters: &AuditLogFilters,
    page: PageRequest,
) -> Page<&'a AuditLogEntry> {
    paginate(
        newest_first(store)
            .into_iter()
            .filter(|entry| filters.matches(entry)),
        page,
    )
}

pub fn fetch_audit_log(store: &Store, id: AuditLogId) -> Option<&AuditLogEntry> {
    store.audit_logs.iter().find(|entry| entry.id == id)
}

/// The `limit` most recent entries.
pub fn recent_audit_logs(store: &Store, limit: usize) -> Vec<&AuditLogEntry> {
    let mut entries = newest_first(store);
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::audit_log::Actor,
        services::audit_log::{record_at, AuditEvent},
    };
    use chrono::Utc;

    fn first_page() -> PageRequest {
        PageRequest {
            page: 1,
            page_size: 20,
        }
    }

    #[test]
    fn list_is_sorted_newest_first() {
        let store = Store::seeded(Utc::now());
        let ids: Vec<u64> = list_audit_logs(&store, &AuditLogFilters::default(), first_page())
            .items
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn equal_timestamps_prefer_higher_id() {
        let mut store = Store::empty();
        let at = Utc::now();
        for target in [1, 2] {
            record_at(
                &mut store,
                &Actor::system(),
                AuditEvent {
                    action: AuditAction::TodoDeleted,
                    target_type: AuditTargetType::Todo,
                    target_id: target,
                    details: String::new(),
                },
                at,
            );
        }
        let ids: Vec<u64> = newest_first(&store).iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn filters_narrow_by_action_and_actor() {
        let store = Store::seeded(Utc::now());
        let filters = AuditLogFilters {
            action: Some(AuditAction::UserCreated),
            actor_id: Some(UserId::new(1)),
            target_type: None,
        };
        let result = list_audit_logs(&store, &filters, first_page());
        assert_eq!(result.total, 3);

        let filters = AuditLogFilters {
            target_type: Some(AuditTargetType::Session),
            ..AuditLogFilters::default()
        };
        let result = list_audit_logs(&store, &filters, first_page());
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].actor_name, "佐藤一郎");
    }

    #[test]
    fn recent_caps_the_feed() {
        let store = Store::seeded(Utc::now());
        let recent = recent_audit_logs(&store, 3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id.get(), 8);
    }
}
