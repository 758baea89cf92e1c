use leptos::*;

use crate::{
    api::AuditLogEntry,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, ListSkeleton},
        pagination::Pagination,
    },
    state::{
        list::ListState,
        search::{href_with_query, to_query_string, AuditLogSearch, AuditLogSearchUpdate},
    },
    utils::time::local_date,
};

#[component]
pub fn AuditLogListPane(
    state: RwSignal<ListState<AuditLogEntry>>,
    search: Memo<AuditLogSearch>,
    #[prop(into)] selected: Signal<Option<u64>>,
    on_update: Callback<AuditLogSearchUpdate>,
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
                    let logs = state.with(ListState::items);
                    if logs.is_empty() {
                        return view! { <EmptyState title="ログが見つかりません" /> }.into_view();
                    }
                    let query = to_query_string(&search.get());
                    logs.into_iter()
                        .map(|log| {
                            let id = log.id;
                            view! {
                                <a
                                    href=href_with_query(&format!("/audit-logs/{}", id), &query)
                                    class="block border-b border-border px-3 py-2.5 text-sm hover:bg-action-ghost-bg-hover"
                                    class:bg-surface-accent=move || selected.get() == Some(id)
                                    aria-current=move || (selected.get() == Some(id)).then_some("page")
                                >
                                    <p class="truncate text-xs text-fg">{log.details.clone()}</p>
                                    <div class="mt-1 flex items-center justify-between">
                                        <span class="rounded border border-border px-1.5 text-[10px] text-fg-muted">
                                            {log.action.label()}
                                        </span>
                                        <time class="text-[10px] text-fg-muted">{local_date(&log.timestamp)}</time>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Pagination
                page=Signal::derive(move || search.with(|s| s.page))
                page_count=page_count
                on_change=Callback::new(move |page| on_update.call(AuditLogSearchUpdate::Page(page)))
            />
        </Show>
    }
}
