use crate::api::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub caption: String,
}

/// The four headline cards, in display order.
pub fn stat_cards(stats: &Stats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "ユーザー数",
            value: stats.users.total,
            caption: format!("管理者 {} / メンバー {}", stats.users.admins, stats.users.members),
        },
        StatCard {
            title: "ToDo 合計",
            value: stats.todos.total,
            caption: format!("完了 {} 件", stats.todos.done),
        },
        StatCard {
            title: "進行中",
            value: stats.todos.in_progress,
            caption: "現在作業中のタスク".into(),
        },
        StatCard {
            title: "未着手",
            value: stats.todos.pending,
            caption: "未対応のタスク".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TodoStats, UserStats};

    #[test]
    fn cards_split_users_and_todos() {
        let stats = Stats {
            users: UserStats {
                total: 5,
                admins: 1,
                members: 4,
            },
            todos: TodoStats {
                total: 10,
                pending: 3,
                in_progress: 4,
                done: 3,
            },
            recent_activity: vec![],
        };
        let cards = stat_cards(&stats);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].caption, "管理者 1 / メンバー 4");
        assert_eq!(cards[1].value, 10);
        assert_eq!(cards[1].caption, "完了 3 件");
        assert_eq!((cards[2].title, cards[2].value), ("進行中", 4));
        assert_eq!((cards[3].title, cards[3].value), ("未着手", 3));
    }
}
