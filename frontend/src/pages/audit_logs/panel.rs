use leptos::*;
use leptos_router::{use_location, use_params_map, Outlet};

use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        master_detail::MasterDetailLayout,
    },
    state::{
        list::{use_detail_state, use_list_state, DetailState, ListState},
        search::{selected_id_from_path, use_search_state, use_update_search, AuditLogSearch},
    },
};

use super::{
    components::{
        detail::AuditLogDetail, list_header::AuditLogListHeader, list_pane::AuditLogListPane,
    },
    repository::AuditLogsRepository,
};

const BASE_PATH: &str = "/audit-logs";

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    let repository = AuditLogsRepository::from_context();
    let search = use_search_state::<AuditLogSearch>();
    let update_search = use_update_search(search);
    let location = use_location();
    let selected = Signal::derive(move || {
        location
            .pathname
            .with(|path| selected_id_from_path(path, BASE_PATH))
    });

    let state = use_list_state(search, create_rw_signal(0), move |search: AuditLogSearch| {
        let repo = repository.clone();
        async move { repo.list(search).await }
    });
    let total = Signal::derive(move || state.with(ListState::total));

    view! {
        <Layout>
            <MasterDetailLayout
                list=view! {
                    <AuditLogListHeader search=search total=total on_update=update_search />
                    <AuditLogListPane
                        state=state
                        search=search
                        selected=selected
                        on_update=update_search
                    />
                }
                    .into_view()
                detail=view! { <Outlet /> }.into_view()
            />
        </Layout>
    }
}

#[component]
pub fn AuditLogsIndex() -> impl IntoView {
    view! {
        <EmptyState
            title="ログを選択してください"
            description="左の一覧からログを選択すると、詳細が表示されます"
        />
    }
}

#[component]
pub fn AuditLogDetailPage() -> impl IntoView {
    let repository = AuditLogsRepository::from_context();
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    });
    let state = use_detail_state(id, create_rw_signal(0), move |id| {
        let repo = repository.clone();
        async move { repo.get(id).await }
    });

    view! {
        {move || match state.get() {
            DetailState::Loading => view! { <LoadingSpinner /> }.into_view(),
            DetailState::NotFound => view! { <EmptyState title="ログが見つかりません" /> }.into_view(),
            DetailState::Failed(err) => {
                view! { <div class="p-6"><ErrorMessage message=err.message /></div> }.into_view()
            }
            DetailState::Loaded(log) => view! { <AuditLogDetail log=log /> }.into_view(),
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_at;
    use leptos_router::{Route, Router, Routes};

    fn render_logs(url: &str) -> String {
        render_at(url, move || {
            provide_auth(Some(admin_user()));
            view! {
                <Router>
                    <Routes>
                        <Route path="/audit-logs" view=AuditLogsPage>
                            <Route path="" view=AuditLogsIndex />
                            <Route path=":id" view=AuditLogDetailPage />
                        </Route>
                    </Routes>
                </Router>
            }
        })
    }

    #[test]
    fn index_renders_filters_and_placeholder() {
        let html = render_logs("http://localhost/audit-logs?action=auth.login");
        assert!(html.contains("すべてのアクション"));
        assert!(html.contains("ログを選択してください"));
    }

    #[test]
    fn detail_route_loads_or_rejects_id() {
        assert!(render_logs("http://localhost/audit-logs/3").contains("animate-spin"));
        assert!(render_logs("http://localhost/audit-logs/-1").contains("ログが見つかりません"));
    }
}
