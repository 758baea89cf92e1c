use leptos::*;

/// The pager also stays up past the last page so a stale `?page=` can be walked back.
fn pager_visible(page: u64, page_count: u64) -> bool {
    page_count > 1 || page > page_count.max(1)
}

/// Past the end, "previous" lands on the last existing page.
fn previous_page(page: u64, page_count: u64) -> u64 {
    if page > page_count {
        page_count.max(1)
    } else {
        page.saturating_sub(1).max(1)
    }
}

/// Previous/next controls under a list pane. Emits the requested page number.
#[component]
pub fn Pagination(
    #[prop(into)] page: MaybeSignal<u64>,
    #[prop(into)] page_count: MaybeSignal<u64>,
    on_change: Callback<u64>,
) -> impl IntoView {
    let has_previous = move || page.get() > 1;
    let has_next = move || page.get() < page_count.get();

    view! {
        <Show when=move || pager_visible(page.get(), page_count.get())>
            <div class="flex items-center justify-between border-t border-border px-3 py-2 text-xs text-fg-muted">
                <button
                    type="button"
                    class="px-2 py-1 rounded hover:bg-action-ghost-bg-hover disabled:opacity-40"
                    disabled=move || !has_previous()
                    on:click=move |_| {
                        on_change.call(previous_page(page.get_untracked(), page_count.get_untracked()))
                    }
                >
                    "前へ"
                </button>
                <span>{move || format!("{} / {}", page.get(), page_count.get())}</span>
                <button
                    type="button"
                    class="px-2 py-1 rounded hover:bg-action-ghost-bg-hover disabled:opacity-40"
                    disabled=move || !has_next()
                    on:click=move |_| on_change.call(page.get_untracked() + 1)
                >
                    "次へ"
                </button>
            </div>
        </Show>
    }
}
