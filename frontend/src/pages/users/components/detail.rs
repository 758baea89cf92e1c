use leptos::{ev, *};

use crate::{
    api::{UpdateUser, User, UserRole},
    components::{
        confirm_dialog::ConfirmDialog,
        forms::{SelectField, TextField},
    },
    pages::users::{
        repository::UsersRepository,
        utils::{delete_confirmation_message, role_options, UserEditFormState, UserFormErrors},
    },
    state::toast::use_toasts,
    utils::time::local_date,
};

/// Edit form and delete control for one user. The form keeps its input when a save
/// fails.
#[component]
pub fn UserDetail(user: User, on_saved: Callback<User>, on_deleted: Callback<()>) -> impl IntoView {
    let repository = UsersRepository::from_context();
    let toasts = use_toasts();
    let user_id = user.id;
    let initial = UserEditFormState::from_user(&user);

    let email = create_rw_signal(initial.email);
    let display_name = create_rw_signal(initial.display_name);
    let role = create_rw_signal(initial.role.as_str().to_string());
    let errors = create_rw_signal(UserFormErrors::default());
    let delete_open = create_rw_signal(false);

    let repo = repository.clone();
    let save_action = create_action(move |payload: &UpdateUser| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move {
            match repo.update(user_id, payload).await {
                Ok(updated) => {
                    toasts.success("ユーザーを更新しました");
                    on_saved.call(updated);
                }
                Err(err) => {
                    log::warn!("user {} update failed: {}", user_id, err);
                    toasts.error("更新に失敗しました");
                }
            }
        }
    });
    let saving = save_action.pending();

    let repo = repository;
    let delete_action = create_action(move |_: &()| {
        let repo = repo.clone();
        async move {
            match repo.delete(user_id).await {
                Ok(_) => {
                    toasts.success("ユーザーを削除しました");
                    delete_open.set(false);
                    on_deleted.call(());
                }
                Err(err) => {
                    log::warn!("user {} delete failed: {}", user_id, err);
                    toasts.error("削除に失敗しました");
                }
            }
        }
    });
    let deleting = delete_action.pending();

    let fallback_role = user.role;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let form = UserEditFormState {
            email: email.get_untracked(),
            display_name: display_name.get_untracked(),
            role: UserRole::parse(&role.get_untracked()).unwrap_or(fallback_role),
        };
        match form.validate() {
            Ok(payload) => {
                errors.set(UserFormErrors::default());
                save_action.dispatch(payload);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    let todos_href = format!("/todos?assigneeId={}", user_id);

    view! {
        <div class="p-6">
            <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
                <div class="flex items-center justify-between border-b border-border px-6 py-4">
                    <h2 class="text-lg font-semibold text-fg">"ユーザー詳細"</h2>
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
                        <p>{format!("ID: {} / ユーザー名: {}", user.id, user.username)}</p>
                        <p>{format!("作成日: {}", local_date(&user.created_at))}</p>
                        <a href=todos_href class="text-action-link hover:underline">"担当ToDoを表示"</a>
                    </div>
                    <form class="space-y-4" on:submit=on_submit>
                        <TextField
                            label="表示名"
                            value=display_name
                            error=Signal::derive(move || errors.with(|e| e.display_name.clone()))
                        />
                        <TextField
                            label="メールアドレス"
                            value=email
                            input_type="email"
                            error=Signal::derive(move || errors.with(|e| e.email.clone()))
                        />
                        <SelectField label="ロール" value=role options=role_options() />
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
                title="ユーザーを削除".to_string()
                message=delete_confirmation_message(&user)
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::member_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_user_fields_and_actions() {
        let html = render_to_string(move || {
            view! {
                <UserDetail
                    user=member_user(2, "tanaka", "田中")
                    on_saved=Callback::new(|_| {})
                    on_deleted=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("ユーザー詳細"));
        assert!(html.contains("ID: 2 / ユーザー名: tanaka"));
        assert!(html.contains("tanaka@example.com"));
        assert!(html.contains("保存"));
        assert!(html.contains("/todos?assigneeId=2"));
        assert!(!html.contains("role=\"dialog\""));
    }
}
