use leptos::*;

use super::{action_options, target_type_options};
use crate::{
    api::{AuditAction, AuditTargetType},
    components::filters::FilterSelect,
    state::search::{AuditLogSearch, AuditLogSearchUpdate},
};

#[component]
pub fn AuditLogListHeader(
    search: Memo<AuditLogSearch>,
    #[prop(into)] total: Signal<Option<u64>>,
    on_update: Callback<AuditLogSearchUpdate>,
) -> impl IntoView {
    let title = move || match total.get() {
        Some(total) => format!("監査ログ ({})", total),
        None => "監査ログ".to_string(),
    };

    view! {
        <div class="space-y-2 border-b border-border p-3">
            <h2 class="text-sm font-semibold text-fg">{title}</h2>
            <div class="flex gap-2">
                <FilterSelect
                    value=Signal::derive(move || search.with(|s| s.action.map(|v| v.as_str().to_string())))
                    all_label="すべてのアクション"
                    options=action_options()
                    on_change=Callback::new(move |value: Option<String>| {
                        on_update.call(AuditLogSearchUpdate::Action(value.as_deref().and_then(AuditAction::parse)))
                    })
                />
                <FilterSelect
                    value=Signal::derive(move || search.with(|s| s.target_type.map(|v| v.as_str().to_string())))
                    all_label="すべての対象"
                    options=target_type_options()
                    on_change=Callback::new(move |value: Option<String>| {
                        on_update.call(AuditLogSearchUpdate::TargetType(value.as_deref().and_then(AuditTargetType::parse)))
                    })
                />
            </div>
            {move || {
                search
                    .with(|s| s.actor_id)
                    .map(|id| {
                        view! {
                            <button
                                type="button"
                                class="inline-flex items-center gap-1 rounded-full bg-surface-muted px-2 py-0.5 text-xs text-fg"
                                on:click=move |_| on_update.call(AuditLogSearchUpdate::Actor(None))
                            >
                                {format!("実行者ID: {}", id)}
                                <span aria-hidden="true">"×"</span>
                            </button>
                        }
                    })
            }}
        </div>
    }
}
