use crate::{
    api::{ApiClient, ApiError, Stats},
    state::auth::use_api_client,
};

#[derive(Clone)]
pub struct DashboardRepository {
    client: ApiClient,
}

impl DashboardRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new(use_api_client())
    }

    pub async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.client.get_stats().await
    }
}
