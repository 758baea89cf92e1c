use crate::{
    components::layout::Layout,
    pages::dashboard::{
        components::{ActivitiesSection, SummarySection},
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <div class="p-6 space-y-6">
                <h1 class="text-2xl font-bold text-fg">"ダッシュボード"</h1>
                <SummarySection stats=vm.stats_resource />
                <ActivitiesSection stats=vm.stats_resource />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Stats, TodoStats, UserStats};
    use crate::pages::dashboard::components::summary::StatCards;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_page_renders_sections() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("ダッシュボード"));
        assert!(html.contains("最近のアクティビティ"));
    }

    #[test]
    fn stat_cards_render_values() {
        let html = render_to_string(|| {
            let stats = Stats {
                users: UserStats {
                    total: 5,
                    admins: 1,
                    members: 4,
                },
                todos: TodoStats {
                    total: 8,
                    pending: 2,
                    in_progress: 3,
                    done: 3,
                },
                recent_activity: vec![],
            };
            view! { <StatCards stats=stats /> }
        });
        assert!(html.contains("ユーザー数"));
        assert!(html.contains("管理者 1 / メンバー 4"));
        assert!(html.contains("完了 3 件"));
        assert!(html.contains("現在作業中のタスク"));
    }
}
