use leptos::ev::KeyboardEvent;
use leptos::*;

/// Destructive confirmation modal. While `pending` is set both buttons are disabled and
/// the confirm label switches to its in-progress form.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let pending = Signal::derive(move || pending.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="閉じる"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| {
                        if !pending.get_untracked() {
                            on_cancel.call(())
                        }
                    }
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" && !pending.get_untracked() {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_cancel.call(())
                        >
                            "キャンセル"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || if pending.get() { "削除中..." } else { "削除" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
