use crate::{
    api::{ApiClient, ApiError, CreateUser, MessageResponse, Page, UpdateUser, User},
    state::{auth::use_api_client, search::UserSearch},
};

#[derive(Clone)]
pub struct UsersRepository {
    client: ApiClient,
}

impl UsersRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new(use_api_client())
    }

    pub async fn list(&self, search: UserSearch) -> Result<Page<User>, ApiError> {
        self.client.list_users(&search.to_list_query()).await
    }

    pub async fn get(&self, id: u64) -> Result<User, ApiError> {
        self.client.get_user(id).await
    }

    pub async fn create(&self, payload: CreateUser) -> Result<User, ApiError> {
        self.client.create_user(&payload).await
    }

    pub async fn update(&self, id: u64, payload: UpdateUser) -> Result<User, ApiError> {
        self.client.update_user(id, &payload).await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.client.delete_user(id).await
    }
}
