use leptos::*;

use crate::{
    api::{Todo, TodoPriority, TodoStatus},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, ListSkeleton},
        pagination::Pagination,
    },
    state::{
        list::ListState,
        search::{href_with_query, to_query_string, TodoSearch, TodoSearchUpdate},
    },
};

fn status_badge_class(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Pending => "border border-border text-fg-muted",
        TodoStatus::InProgress => "bg-status-info-bg text-status-info-text",
        TodoStatus::Done => "bg-status-success-bg text-status-success-text",
    }
}

fn priority_badge_class(priority: TodoPriority) -> &'static str {
    match priority {
        TodoPriority::Low => "bg-surface-muted text-fg-muted",
        TodoPriority::Medium => "bg-status-info-bg text-status-info-text",
        TodoPriority::High => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn TodoListPane(
    state: RwSignal<ListState<Todo>>,
    search: Memo<TodoSearch>,
    #[prop(into)] selected: Signal<Option<u64>>,
    on_update: Callback<TodoSearchUpdate>,
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
                    let todos = state.with(ListState::items);
                    if todos.is_empty() {
                        return view! { <EmptyState title="ToDoが見つかりません" /> }.into_view();
                    }
                    let query = to_query_string(&search.get());
                    todos
                        .into_iter()
                        .map(|todo| {
                            let id = todo.id;
                            let done = todo.status == TodoStatus::Done;
                            view! {
                                <a
                                    href=href_with_query(&format!("/todos/{}", id), &query)
                                    class="block border-b border-border px-3 py-2.5 text-sm hover:bg-action-ghost-bg-hover"
                                    class:bg-surface-accent=move || selected.get() == Some(id)
                                    aria-current=move || (selected.get() == Some(id)).then_some("page")
                                >
                                    <p
                                        class="truncate font-medium text-fg"
                                        class:line-through=done
                                        class:text-fg-muted=done
                                    >
                                        {todo.title.clone()}
                                    </p>
                                    <div class="mt-1 flex gap-1.5">
                                        <span class=format!("rounded px-1.5 text-[10px] {}", status_badge_class(todo.status))>
                                            {todo.status.label()}
                                        </span>
                                        <span class=format!("rounded px-1.5 text-[10px] {}", priority_badge_class(todo.priority))>
                                            {todo.priority.label()}
                                        </span>
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
                on_change=Callback::new(move |page| on_update.call(TodoSearchUpdate::Page(page)))
            />
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Page;
    use crate::test_support::helpers::sample_todo;
    use crate::test_support::ssr::render_to_string;

    fn render_with(todos: Vec<Todo>, search: TodoSearch) -> String {
        render_to_string(move || {
            let mut list = ListState::default();
            let ticket = list.begin();
            let total = todos.len() as u64;
            list.resolve(
                ticket,
                Ok(Page {
                    items: todos,
                    total,
                    page: 1,
                    page_size: 20,
                }),
            );
            let state = create_rw_signal(list);
            let search = create_memo(move |_| search.clone());
            view! {
                <TodoListPane
                    state=state
                    search=search
                    selected=Signal::derive(|| None)
                    on_update=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn rows_show_badges_and_strike_done() {
        let todos = vec![
            sample_todo(1, "資料作成", TodoStatus::Done),
            sample_todo(2, "レビュー", TodoStatus::InProgress),
        ];
        let search = TodoSearch {
            status: Some(TodoStatus::Done),
            ..TodoSearch::default()
        };
        let html = render_with(todos, search);
        assert!(html.contains("href=\"/todos/1?status=done\""));
        assert!(html.contains("line-through"));
        assert!(html.contains("完了"));
        assert!(html.contains("進行中"));
        assert!(html.contains("中"));
    }

    #[test]
    fn empty_list_message() {
        let html = render_with(vec![], TodoSearch::default());
        assert!(html.contains("ToDoが見つかりません"));
    }
}
