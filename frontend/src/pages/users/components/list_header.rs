use leptos::*;

use crate::{
    api::UserRole,
    components::filters::{FilterSelect, SearchInput},
    pages::users::utils::role_options,
    state::search::{href_with_query, to_query_string, UserSearch, UserSearchUpdate},
};

#[component]
pub fn UserListHeader(
    search: Memo<UserSearch>,
    #[prop(into)] total: Signal<Option<u64>>,
    on_update: Callback<UserSearchUpdate>,
) -> impl IntoView {
    let title = move || match total.get() {
        Some(total) => format!("ユーザー ({})", total),
        None => "ユーザー".to_string(),
    };
    let new_href = move || href_with_query("/users/new", &to_query_string(&search.get()));

    view! {
        <div class="space-y-2 border-b border-border p-3">
            <div class="flex items-center gap-2">
                <h2 class="text-sm font-semibold text-fg">{title}</h2>
                <div class="flex-1"></div>
                <a
                    href=new_href
                    class="inline-flex items-center rounded-md bg-action-primary-bg px-3 py-1 text-xs font-medium text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    "+ 新規"
                </a>
            </div>
            <SearchInput
                value=Signal::derive(move || search.with(|s| s.q.clone()))
                on_commit=Callback::new(move |q| on_update.call(UserSearchUpdate::Query(q)))
            />
            <FilterSelect
                value=Signal::derive(move || search.with(|s| s.role.map(|r| r.as_str().to_string())))
                all_label="すべてのロール"
                options=role_options()
                on_change=Callback::new(move |value: Option<String>| {
                    on_update.call(UserSearchUpdate::Role(value.as_deref().and_then(UserRole::parse)))
                })
            />
        </div>
    }
}
