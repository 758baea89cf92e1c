use leptos::{ev, *};

use crate::{
    api::{CreateUser, User, UserRole},
    components::forms::{SelectField, TextField},
    pages::users::{
        repository::UsersRepository,
        utils::{role_options, UserCreateFormState, UserFormErrors},
    },
    state::toast::use_toasts,
};

#[component]
pub fn UserCreateForm(on_created: Callback<User>, on_cancel: Callback<()>) -> impl IntoView {
    let repository = UsersRepository::from_context();
    let toasts = use_toasts();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let display_name = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(UserRole::Member.as_str().to_string());
    let errors = create_rw_signal(UserFormErrors::default());

    let submit_action = create_action(move |payload: &CreateUser| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move {
            match repo.create(payload).await {
                Ok(user) => {
                    toasts.success("ユーザーを作成しました");
                    on_created.call(user);
                }
                Err(err) if err.is_conflict() => {
                    toasts.error_with(
                        "作成に失敗しました",
                        "ユーザー名が既に使用されている可能性があります",
                    );
                }
                Err(err) => {
                    log::warn!("user create failed: {}", err);
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
        let form = UserCreateFormState {
            username: username.get_untracked(),
            email: email.get_untracked(),
            display_name: display_name.get_untracked(),
            password: password.get_untracked(),
            role: UserRole::parse(&role.get_untracked()).unwrap_or(UserRole::Member),
        };
        match form.validate() {
            Ok(payload) => {
                errors.set(UserFormErrors::default());
                submit_action.dispatch(payload);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <div class="p-6">
            <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
                <div class="border-b border-border px-6 py-4">
                    <h2 class="text-lg font-semibold text-fg">"新規ユーザー作成"</h2>
                </div>
                <form class="space-y-4 px-6 py-4" on:submit=on_submit>
                    <TextField
                        label="ユーザー名"
                        value=username
                        error=Signal::derive(move || errors.with(|e| e.username.clone()))
                    />
                    <TextField
                        label="メールアドレス"
                        value=email
                        input_type="email"
                        error=Signal::derive(move || errors.with(|e| e.email.clone()))
                    />
                    <TextField
                        label="表示名"
                        value=display_name
                        error=Signal::derive(move || errors.with(|e| e.display_name.clone()))
                    />
                    <TextField
                        label="パスワード"
                        value=password
                        input_type="password"
                        error=Signal::derive(move || errors.with(|e| e.password.clone()))
                    />
                    <SelectField label="ロール" value=role options=role_options() />
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
