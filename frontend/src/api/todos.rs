use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, CreateTodo, MessageResponse, Page, Todo, TodoPriority, TodoStatus, UpdateTodo,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TodoPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    pub page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl ApiClient {
    pub async fn list_todos(&self, query: &TodoListQuery) -> Result<Page<Todo>, ApiError> {
        let url = self.endpoint("/todos").await;
        self.send_json(self.http().get(url).query(query)).await
    }

    pub async fn get_todo(&self, id: u64) -> Result<Todo, ApiError> {
        let url = self.endpoint(&format!("/todos/{}", id)).await;
        self.send_json(self.http().get(url)).await
    }

    pub async fn create_todo(&self, payload: &CreateTodo) -> Result<Todo, ApiError> {
        let url = self.endpoint("/todos").await;
        self.send_json(self.http().post(url).json(payload)).await
    }

    pub async fn update_todo(&self, id: u64, payload: &UpdateTodo) -> Result<Todo, ApiError> {
        let url = self.endpoint(&format!("/todos/{}", id)).await;
        self.send_json(self.http().put(url).json(payload)).await
    }

    pub async fn delete_todo(&self, id: u64) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint(&format!("/todos/{}", id)).await;
        self.send_json(self.http().delete(url)).await
    }
}
