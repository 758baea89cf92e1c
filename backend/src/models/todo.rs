//! Todo records and their create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::deserialize_nullable;
use crate::types::{TodoId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Done,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Done => "done",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Not checked against the user collection; may dangle after a delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// New todos always start out `pending`.
pub struct CreateTodo {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<UserId>,
    /// Defaults to `medium`.
    pub priority: Option<TodoPriority>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absent leaves the assignee alone, `null` clears it.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<u64>, nullable)]
    pub assignee_id: Option<Option<UserId>>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
}

impl Todo {
    pub fn new(id: TodoId, payload: CreateTodo, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            assignee_id: payload.assignee_id,
            status: TodoStatus::Pending,
            priority: payload.priority.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `changes` and refreshes `updated_at`.
    pub fn apply(&mut self, changes: UpdateTodo, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(assignee_id) = changes.assignee_id {
            self.assignee_id = assignee_id;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        self.updated_at = now;
    }

    /// Case-insensitive substring match over title and description.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
