use leptos::*;

use crate::state::debounce::{use_debounced_callback, SEARCH_DEBOUNCE_MS};

const FILTER_CLASS: &str = "h-8 w-full rounded-md border border-border bg-surface px-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

/// Sentinel option value standing for "no filter".
pub const ALL_OPTION: &str = "all";

/// Free-text filter. Keystrokes are committed once typing pauses; an empty box commits
/// `None`.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<Option<String>>,
    on_commit: Callback<Option<String>>,
    #[prop(default = "検索...")] placeholder: &'static str,
) -> impl IntoView {
    let text = create_rw_signal(value.get_untracked().unwrap_or_default());
    // Back/forward navigation rewrites the query, so follow it.
    create_effect(move |_| {
        let current = value.get().unwrap_or_default();
        if text.get_untracked() != current {
            text.set(current);
        }
    });
    let commit = use_debounced_callback(SEARCH_DEBOUNCE_MS, on_commit);

    view! {
        <div class="relative">
            <svg class="absolute left-2 top-2.5 h-3.5 w-3.5 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-4.35-4.35M11 19a8 8 0 100-16 8 8 0 000 16z" />
            </svg>
            <input
                type="search"
                class=format!("{} pl-8", FILTER_CLASS)
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    text.set(raw.clone());
                    commit.call(if raw.is_empty() { None } else { Some(raw) });
                }
            />
        </div>
    }
}

/// Select with a leading "all" entry. Changes commit immediately; picking the "all"
/// entry commits `None`.
#[component]
pub fn FilterSelect(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] all_label: String,
    options: Vec<(String, String)>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    let current = move || value.get().unwrap_or_else(|| ALL_OPTION.to_string());
    view! {
        <select
            class=FILTER_CLASS
            prop:value=current
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change.call(if raw == ALL_OPTION { None } else { Some(raw) });
            }
        >
            <option value=ALL_OPTION selected=move || current() == ALL_OPTION>{all_label}</option>
            {options
                .into_iter()
                .map(|(option_value, option_label)| {
                    let selected = option_value.clone();
                    view! {
                        <option value=option_value selected=move || current() == selected>
                            {option_label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn search_input_starts_from_committed_value() {
        let html = render_to_string(move || {
            view! {
                <SearchInput
                    value=Signal::derive(|| Some("sato".to_string()))
                    on_commit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("検索..."));
        assert!(html.contains("sato"));
    }

    #[test]
    fn filter_select_lists_all_option_first() {
        let html = render_to_string(move || {
            view! {
                <FilterSelect
                    value=Signal::derive(|| Some("done".to_string()))
                    all_label="全ステータス"
                    options=vec![
                        ("pending".to_string(), "未着手".to_string()),
                        ("done".to_string(), "完了".to_string()),
                    ]
                    on_change=Callback::new(|_| {})
                />
            }
        });
        let all = html.find("全ステータス").unwrap();
        let pending = html.find("未着手").unwrap();
        assert!(all < pending);
        assert!(html.contains("完了"));
    }
}
