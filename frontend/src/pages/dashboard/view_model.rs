use super::repository::DashboardRepository;
use crate::api::{ApiError, Stats};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats_resource: Resource<(), Result<Stats, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let repository = DashboardRepository::from_context();
    let stats_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_stats().await }
        },
    );
    DashboardViewModel { stats_resource }
}
