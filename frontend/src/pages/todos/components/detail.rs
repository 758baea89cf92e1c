use leptos::{ev, *};

use crate::{
    api::{Todo, TodoPriority, TodoStatus, UpdateTodo},
    components::{
        confirm_dialog::ConfirmDialog,
        forms::{SelectField, TextField, TextareaField},
    },
    pages::todos::{
        repository::TodosRepository,
        utils::{
            delete_confirmation_message, priority_options, status_options, TodoEditFormState,
            TodoFormErrors,
        },
    },
    state::toast::use_toasts,
    utils::time::local_date,
};

#[component]
pub fn TodoDetail(todo: Todo, on_saved: Callback<Todo>, on_deleted: Callback<()>) -> impl IntoView {
    let repository = TodosRepository::from_context();
    let toasts = use_toasts();
    let todo_id = todo.id;
    let initial = TodoEditFormState::from_todo(&todo);

    let title = create_rw_signal(initial.title);
    let description = create_rw_signal(initial.description);
    let status = create_rw_signal(initial.status.as_str().to_string());
    let priority = create_rw_signal(initial.priority.as_str().to_string());
    let assignee_id = create_rw_signal(initial.assignee_id);
    let errors = create_rw_signal(TodoFormErrors::default());
    let delete_open = create_rw_signal(false);

    let repo = repository.clone();
    let save_action = create_action(move |payload: &UpdateTodo| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move {
            match repo.update(todo_id, payload).await {
                Ok(updated) => {
                    toasts.success("ToDoを更新しました");
                    on_saved.call(updated);
                }
                Err(err) => {
                    log::warn!("todo {} update failed: {}", todo_id, err);
                    toasts.error("更新に失敗しました");
                }
            }
        }
    });
    let saving = save_action.pending();

    let delete_action = create_action(move |_: &()| {
        let repo = repository.clone();
        async move {
            match repo.delete(todo_id).await {
                Ok(_) => {
                    toasts.success("ToDoを削除しました");
                    delete_open.set(false);
                    on_deleted.call(());
                }
                Err(err) => {
                    log::warn!("todo {} delete failed: {}", todo_id, err);
                    toasts.error("削除に失敗しました");
                }
            }
        }
    });
    let deleting = delete_action.pending();

    let original = store_value(todo.clone());
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let result = original.with_value(|original| {
            TodoEditFormState {
                title: title.get_untracked(),
                description: description.get_untracked(),
                status: TodoStatus::parse(&status.get_untracked()).unwrap_or(original.status),
                priority: TodoPriority::parse(&priority.get_untracked())
                    .unwrap_or(original.priority),
                assignee_id: assignee_id.get_untracked(),
            }
            .validate(original)
        });
        match result {
            Ok(payload) => {
                errors.set(TodoFormErrors::default());
                save_action.dispatch(payload);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <div class="p-6">
            <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
                <div class="flex items-center justify-between border-b border-border px-6 py-4">
                    <h2 class="text-lg font-semibold text-fg">"ToDo詳細"</h2>
                    <button
                        type="button"
                        class="rounded-md px-3 py-1 text-sm text-status-error-text hover:bg-action-ghost-bg-hover"
                        on:click=move |_| delete_open.set(true)
                    >
                        "削除"
                    </button>
                </div>
                <div class="px-6 py-4">
                    <div class="mb-4 space-y-1 text-sm text-fg-muted">
                        <p>{format!("ID: {}", todo.id)}</p>
                        <p>{format!("作成日: {}", local_date(&todo.created_at))}</p>
                    </div>
                    <form class="space-y-4" on:submit=on_submit>
                        <TextField
                            label="タイトル"
                            value=title
                            error=Signal::derive(move || errors.with(|e| e.title.clone()))
                        />
                        <TextareaField label="説明" value=description rows=3 />
                        <div class="grid grid-cols-2 gap-4">
                            <SelectField label="ステータス" value=status options=status_options() />
                            <SelectField label="優先度" value=priority options=priority_options() />
                        </div>
                        <TextField
                            label="担当者ID"
                            value=assignee_id
                            placeholder="未割り当て"
                            error=Signal::derive(move || errors.with(|e| e.assignee_id.clone()))
                        />
                        <button
                            type="submit"
                            class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "保存中..." } else { "保存" }}
                        </button>
                    </form>
                </div>
            </div>
            <ConfirmDialog
                is_open=delete_open.into()
                title="ToDoを削除".to_string()
                message=delete_confirmation_message(&todo)
                on_confirm=Callback::new(move |_| {
                    if !deleting.get_untracked() {
                        delete_action.dispatch(());
                    }
                })
                on_cancel=Callback::new(move |_| delete_open.set(false))
                pending=deleting
            />
        </div>
    }
}
