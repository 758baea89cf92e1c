use crate::{
    api::{ApiClient, ApiError, CreateTodo, MessageResponse, Page, Todo, UpdateTodo},
    state::{auth::use_api_client, search::TodoSearch},
};

#[derive(Clone)]
pub struct TodosRepository {
    client: ApiClient,
}

impl TodosRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new(use_api_client())
    }

    pub async fn list(&self, search: TodoSearch) -> Result<Page<Todo>, ApiError> {
        self.client.list_todos(&search.to_list_query()).await
    }

    pub async fn get(&self, id: u64) -> Result<Todo, ApiError> {
        self.client.get_todo(id).await
    }

    pub async fn create(&self, payload: CreateTodo) -> Result<Todo, ApiError> {
        self.client.create_todo(&payload).await
    }

    pub async fn update(&self, id: u64, payload: UpdateTodo) -> Result<Todo, ApiError> {
        self.client.update_todo(id, &payload).await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.client.delete_todo(id).await
    }
}
