use crate::{
    api::{ApiError, RecentActivity, Stats},
    components::{empty_state::EmptyState, layout::ErrorMessage},
    utils::time::local_datetime,
};
use leptos::*;

#[component]
pub fn ActivityList(activities: Vec<RecentActivity>) -> impl IntoView {
    if activities.is_empty() {
        return view! { <EmptyState title="アクティビティはまだありません" /> }.into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {activities
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start justify-between gap-4 py-2 text-sm">
                            <div class="min-w-0">
                                <p class="truncate text-fg">{item.details}</p>
                                <p class="text-xs text-fg-muted">
                                    {format!("{} ・ {}", item.actor_name, item.action.label())}
                                </p>
                            </div>
                            <time class="shrink-0 text-xs text-fg-muted">{local_datetime(&item.timestamp)}</time>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn ActivitiesSection(stats: Resource<(), Result<Stats, ApiError>>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm space-y-4">
            <h3 class="text-base font-semibold text-fg">"最近のアクティビティ"</h3>
            {move || match stats.get() {
                None => view! { <p class="text-sm text-fg-muted">"読み込み中..."</p> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
                Some(Ok(data)) => view! { <ActivityList activities=data.recent_activity /> }.into_view(),
            }}
        </div>
    }
}
