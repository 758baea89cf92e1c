use leptos::{ev, *};

use crate::{
    api::{CreateTodo, Todo, TodoPriority},
    components::forms::{SelectField, TextField, TextareaField},
    pages::todos::{
        repository::TodosRepository,
        utils::{priority_options, TodoCreateFormState, TodoFormErrors},
    },
    state::toast::use_toasts,
};

#[component]
pub fn TodoCreateForm(on_created: Callback<Todo>, on_cancel: Callback<()>) -> impl IntoView {
    let repository = TodosRepository::from_context();
    let toasts = use_toasts();

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let priority = create_rw_signal(TodoPriority::default().as_str().to_string());
    let assignee_id = create_rw_signal(String::new());
    let errors = create_rw_signal(TodoFormErrors::default());

    let submit_action = create_action(move |payload: &CreateTodo| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            match repo.create(payload).await {
                Ok(todo) => {
                    toasts.success("ToDoを作成しました");
                    on_created.call(todo);
                }
                Err(err) => {
                    log::warn!("todo create failed: {}", err);
                    toasts.error("作成に失敗しました");
                }
            }
        }
    });
    let pending = submit_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = TodoCreateFormState {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: TodoPriority::parse(&priority.get_untracked()).unwrap_or_default(),
            assignee_id: assignee_id.get_untracked(),
        };
        match form.validate() {
            Ok(payload) => {
                errors.set(TodoFormErrors::default());
                submit_action.dispatch(payload);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <div class="p-6">
            <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
                <div class="border-b border-border px-6 py-4">
                    <h2 class="text-lg font-semibold text-fg">"新規ToDo作成"</h2>
                </div>
                <form class="space-y-4 px-6 py-4" on:submit=on_submit>
                    <TextField
                        label="タイトル"
                        value=title
                        error=Signal::derive(move || errors.with(|e| e.title.clone()))
                    />
                    <TextareaField label="説明" value=description rows=3 />
                    <SelectField label="優先度" value=priority options=priority_options() />
                    <TextField
                        label="担当者ID"
                        value=assignee_id
                        placeholder="未割り当て"
                        error=Signal::derive(move || errors.with(|e| e.assignee_id.clone()))
                    />
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "作成中..." } else { "作成" }}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md border border-border px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-muted"
                            on:click=move |_| on_cancel.call(())
                        >
                            "キャンセル"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_with_medium_priority_selected() {
        let html = render_to_string(move || {
            view! { <TodoCreateForm on_created=Callback::new(|_| {}) on_cancel=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("新規ToDo作成"));
        assert!(html.contains("タイトル"));
        assert!(html.contains("説明"));
        assert!(html.contains("selected"));
    }
}
