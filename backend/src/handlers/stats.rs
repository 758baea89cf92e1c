use axum::{extract::State, Json};

use crate::{
    models::{
        stats::{RecentActivity, Stats, TodoStats, UserStats},
        todo::TodoStatus,
    },
    repositories::audit_log::recent_audit_logs,
    state::AppState,
    store::Store,
};

const RECENT_ACTIVITY_LIMIT: usize = 10;

pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    let store = state.store.read().await;
    Json(compute_stats(&store))
}

pub fn compute_stats(store: &Store) -> Stats {
    let mut users = UserStats::default();
    for user in &store.users {
        users.total += 1;
        if user.is_admin() {
            users.admins += 1;
        } else {
            users.members += 1;
        }
    }

    let mut todos = TodoStats::default();
    for todo in &store.todos {
        todos.total += 1;
        match todo.status {
            TodoStatus::Pending => todos.pending += 1,
            TodoStatus::InProgress => todos.in_progress += 1,
            TodoStatus::Done => todos.done += 1,
        }
    }

    let recent_activity = recent_audit_logs(store, RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(RecentActivity::from)
        .collect();

    Stats {
        users,
        todos,
        recent_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn seeded_store_counts() {
        let stats = compute_stats(&Store::seeded(Utc::now()));
        assert_eq!(
            stats.users,
            UserStats {
                total: 5,
                admins: 2,
                members: 3,
            }
        );
        assert_eq!(
            stats.todos,
            TodoStats {
                total: 6,
                pending: 3,
                in_progress: 2,
                done: 1,
            }
        );
        assert_eq!(stats.recent_activity.len(), 8);
        assert_eq!(stats.recent_activity[0].id.get(), 8);
    }

    #[test]
    fn empty_store_is_all_zero() {
        let stats = compute_stats(&Store::empty());
        assert_eq!(stats.users, UserStats::default());
        assert_eq!(stats.todos, TodoStats::default());
        assert!(stats.recent_activity.is_empty());
    }
}
