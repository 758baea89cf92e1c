use leptos::*;

use crate::{
    api::User,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, ListSkeleton},
        pagination::Pagination,
    },
    state::{
        list::ListState,
        search::{href_with_query, to_query_string, UserSearch, UserSearchUpdate},
    },
};

#[component]
pub fn UserListPane(
    state: RwSignal<ListState<User>>,
    search: Memo<UserSearch>,
    #[prop(into)] selected: Signal<Option<u64>>,
    on_update: Callback<UserSearchUpdate>,
) -> impl IntoView {
    let page_count = Signal::derive(move || {
        state.with(|s| s.data.as_ref().map(|page| page.page_count()).unwrap_or(1))
    });

    view! {
        {move || state.with(|s| s.error.as_ref().map(|err| view! { <ErrorMessage message=err.message.clone() /> }))}
        <Show
            when=move || !state.with(ListState::is_initial_loading)
            fallback=|| view! { <ListSkeleton /> }
        >
            <div
                class="flex-1 overflow-auto transition-opacity"
                class:opacity-50=move || state.with(ListState::is_stale)
            >
                {move || {
                    let users = state.with(ListState::items);
                    if users.is_empty() {
                        return view! { <EmptyState title="ユーザーが見つかりません" /> }.into_view();
                    }
                    let query = to_query_string(&search.get());
                    users
                        .into_iter()
                        .map(|user| {
                            let id = user.id;
                            view! {
                                <a
                                    href=href_with_query(&format!("/users/{}", id), &query)
                                    class="block border-b border-border px-3 py-2.5 text-sm hover:bg-action-ghost-bg-hover"
                                    class:bg-surface-accent=move || selected.get() == Some(id)
                                    aria-current=move || (selected.get() == Some(id)).then_some("page")
                                >
                                    <div class="flex items-center justify-between gap-2">
                                        <p class="truncate font-medium text-fg">{user.display_name.clone()}</p>
                                        <span class="rounded-full bg-surface-muted px-2 text-[10px] text-fg-muted">
                                            {user.role.label()}
                                        </span>
                                    </div>
                                    <p class="truncate text-xs text-fg-muted">{user.email.clone()}</p>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Pagination
                page=Signal::derive(move || search.with(|s| s.page))
                page_count=page_count
                on_change=Callback::new(move |page| on_update.call(UserSearchUpdate::Page(page)))
            />
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, Page};
    use crate::test_support::helpers::{admin_user, member_user};
    use crate::test_support::ssr::render_to_string;

    fn render_with(state: ListState<User>, search: UserSearch, selected: Option<u64>) -> String {
        render_to_string(move || {
            let state = create_rw_signal(state);
            let search = create_memo(move |_| search.clone());
            view! {
                <UserListPane
                    state=state
                    search=search
                    selected=Signal::derive(move || selected)
                    on_update=Callback::new(|_| {})
                />
            }
        })
    }

    fn loaded(users: Vec<User>, total: u64) -> ListState<User> {
        let mut state = ListState::default();
        let ticket = state.begin();
        state.resolve(
            ticket,
            Ok(Page {
                items: users,
                total,
                page: 1,
                page_size: 20,
            }),
        );
        state
    }

    #[test]
    fn skeleton_before_first_response() {
        let html = render_with(ListState::default(), UserSearch::default(), None);
        assert!(html.contains("aria-busy=\"true\""));
    }

    #[test]
    fn rows_link_to_detail_and_keep_query() {
        let search = UserSearch {
            q: Some("ta".into()),
            ..UserSearch::default()
        };
        let state = loaded(vec![admin_user(), member_user(2, "tanaka", "田中")], 2);
        let html = render_with(state, search, Some(2));
        assert!(html.contains("href=\"/users/2?q=ta\""));
        assert!(html.contains("田中"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(!html.contains("aria-busy"));
    }

    #[test]
    fn empty_result_and_pagination() {
        let html = render_with(loaded(vec![], 0), UserSearch::default(), None);
        assert!(html.contains("ユーザーが見つかりません"));

        let users: Vec<User> = (1..=20).map(|id| member_user(id, "u", "ユーザー")).collect();
        let html = render_with(loaded(users, 45), UserSearch::default(), None);
        assert!(html.contains("1 / 3"));
    }

    #[test]
    fn page_past_the_end_keeps_the_pager() {
        let search = UserSearch {
            page: 9,
            ..UserSearch::default()
        };
        let html = render_with(loaded(vec![], 5), search, None);
        assert!(html.contains("ユーザーが見つかりません"));
        assert!(html.contains("前へ"));
        assert!(html.contains("9 / 1"));
    }

    #[test]
    fn error_is_shown_above_previous_rows() {
        let mut state = loaded(vec![admin_user()], 1);
        let ticket = state.begin();
        state.resolve(ticket, Err(ApiError::transport("サーバーに接続できません")));
        let html = render_with(state, UserSearch::default(), None);
        assert!(html.contains("サーバーに接続できません"));
        assert!(html.contains("管理者"));
    }
}
