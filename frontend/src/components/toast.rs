use crate::state::toast::{use_toasts, Toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();

    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("border rounded-md shadow px-4 py-3 text-sm {}", toast_class(toast.kind))
                            role="status"
                        >
                            <div class="flex items-start justify-between gap-2">
                                <p class="font-semibold">{toast.title.clone()}</p>
                                <button
                                    type="button"
                                    aria-label="閉じる"
                                    class="opacity-70 hover:opacity-100"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                            {toast
                                .description
                                .clone()
                                .map(|desc| view! { <p class="mt-1 text-xs">{desc}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
