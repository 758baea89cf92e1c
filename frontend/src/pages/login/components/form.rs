use crate::components::layout::APP_NAME;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border bg-surface text-fg rounded-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-sm w-full rounded-lg border border-border bg-surface-elevated p-8 shadow-sm space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-fg">{APP_NAME}</h2>
                    <p class="mt-2 text-sm text-fg-muted">"管理画面にログインしてください"</p>
                </div>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="block text-sm font-medium text-fg">"ユーザー名"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            autocomplete="username"
                            class=INPUT_CLASS
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"パスワード"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || error.get().map(|message| view! { <p class="text-sm text-status-error-text">{message}</p> })}
                    <button
                        type="submit"
                        class="w-full rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "ログイン中..." } else { "ログイン" }}
                    </button>
                </form>
                <p class="text-center text-xs text-fg-muted">"テスト用: admin / admin"</p>
            </div>
        </div>
    }
}
