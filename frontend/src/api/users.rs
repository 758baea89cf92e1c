use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, CreateUser, MessageResponse, Page, UpdateUser, User, UserRole};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl ApiClient {
    pub async fn list_users(&self, query: &UserListQuery) -> Result<Page<User>, ApiError> {
        let url = self.endpoint("/users").await;
        self.send_json(self.http().get(url).query(query)).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("/users/{}", id)).await;
        self.send_json(self.http().get(url)).await
    }

    pub async fn create_user(&self, payload: &CreateUser) -> Result<User, ApiError> {
        let url = self.endpoint("/users").await;
        self.send_json(self.http().post(url).json(payload)).await
    }

    pub async fn update_user(&self, id: u64, payload: &UpdateUser) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("/users/{}", id)).await;
        self.send_json(self.http().put(url).json(payload)).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint(&format!("/users/{}", id)).await;
        self.send_json(self.http().delete(url)).await
    }
}
