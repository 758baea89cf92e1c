use crate::api::client::ApiClient;
use crate::api::types::{ApiError, LoginRequest, LoginResponse, MessageResponse, User};

impl ApiClient {
    /// Exchanges credentials for a token and persists it for subsequent requests.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response: LoginResponse = self.send_json(self.http().post(url).json(request)).await?;
        self.tokens().set(&response.token);
        Ok(response)
    }

    /// Best effort: the local token is cleared even when the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let result = self
            .send_json::<MessageResponse>(self.http().post(url))
            .await
            .map(|_| ());
        self.tokens().clear();
        if let Err(err) = &result {
            log::warn!("logout request failed: {}", err);
        }
        result
    }

    pub async fn get_me(&self) -> Result<User, ApiError> {
        let url = self.endpoint("/auth/me").await;
        self.send_json(self.http().get(url)).await
    }
}
