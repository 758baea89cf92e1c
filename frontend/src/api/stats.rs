use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Stats};

impl ApiClient {
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        let url = self.endpoint("/stats").await;
        self.send_json(self.http().get(url)).await
    }
}
