use crate::{
    api::{ApiError, Stats},
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::utils::{stat_cards, StatCard},
};
use leptos::*;

#[component]
fn Metric(card: StatCard) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-5 shadow-sm">
            <p class="text-sm font-medium text-fg-muted">{card.title}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{card.value}</p>
            <p class="mt-1 text-xs text-fg-muted">{card.caption}</p>
        </div>
    }
}

#[component]
pub fn StatCards(stats: Stats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {stat_cards(&stats)
                .into_iter()
                .map(|card| view! { <Metric card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SummarySection(stats: Resource<(), Result<Stats, ApiError>>) -> impl IntoView {
    view! {
        {move || match stats.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
            Some(Ok(data)) => view! { <StatCards stats=data /> }.into_view(),
        }}
    }
}
