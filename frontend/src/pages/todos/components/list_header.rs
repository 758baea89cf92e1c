use leptos::*;

use crate::{
    api::{TodoPriority, TodoStatus},
    components::filters::{FilterSelect, SearchInput},
    pages::todos::utils::{priority_options, status_options},
    state::search::{href_with_query, to_query_string, TodoSearch, TodoSearchUpdate},
};

#[component]
pub fn TodoListHeader(
    search: Memo<TodoSearch>,
    #[prop(into)] total: Signal<Option<u64>>,
    on_update: Callback<TodoSearchUpdate>,
) -> impl IntoView {
    let title = move || match total.get() {
        Some(total) => format!("ToDo ({})", total),
        None => "ToDo".to_string(),
    };
    let new_href = move || href_with_query("/todos/new", &to_query_string(&search.get()));
    let assignee = move || search.with(|s| s.assignee_id);

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
                on_commit=Callback::new(move |q| on_update.call(TodoSearchUpdate::Query(q)))
            />
            <div class="flex gap-2">
                <FilterSelect
                    value=Signal::derive(move || search.with(|s| s.status.map(|v| v.as_str().to_string())))
                    all_label="全ステータス"
                    options=status_options()
                    on_change=Callback::new(move |value: Option<String>| {
                        on_update.call(TodoSearchUpdate::Status(value.as_deref().and_then(TodoStatus::parse)))
                    })
                />
                <FilterSelect
                    value=Signal::derive(move || search.with(|s| s.priority.map(|v| v.as_str().to_string())))
                    all_label="全優先度"
                    options=priority_options()
                    on_change=Callback::new(move |value: Option<String>| {
                        on_update.call(TodoSearchUpdate::Priority(value.as_deref().and_then(TodoPriority::parse)))
                    })
                />
            </div>
            {move || {
                assignee()
                    .map(|id| {
                        view! {
                            <button
                                type="button"
                                class="inline-flex items-center gap-1 rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg"
                                on:click=move |_| on_update.call(TodoSearchUpdate::Assignee(None))
                            >
                                {format!("担当者ID: {}", id)}
                                <span aria-hidden="true">"×"</span>
                            </button>
                        }
                    })
            }}
        </div>
    }
}
