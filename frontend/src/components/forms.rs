use leptos::*;

const INPUT_CLASS: &str = "mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
fn FieldError(error: MaybeSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! { <p class="mt-1 text-xs text-status-error-text">{message}</p> })}
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <input
                class=INPUT_CLASS
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError error=error />
        </label>
    }
}

#[component]
pub fn TextareaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <textarea
                class=INPUT_CLASS
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg">{label}</span>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected = option_value.clone();
                        view! {
                            <option value=option_value selected=move || value.get() == selected>
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
