use crate::api::{CreateTodo, Patch, Todo, TodoPriority, TodoStatus, UpdateTodo};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFormErrors {
    pub title: Option<String>,
    pub assignee_id: Option<String>,
}

impl TodoFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.assignee_id.is_none()
    }
}

fn check_title(title: &str) -> Option<String> {
    title
        .trim()
        .is_empty()
        .then(|| "タイトルを入力してください".to_string())
}

/// Blank means unassigned.
fn parse_assignee(raw: &str) -> Result<Option<u64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| "担当者IDは数値で入力してください".to_string())
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEditFormState {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub assignee_id: String,
}

impl TodoEditFormState {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
            status: todo.status,
            priority: todo.priority,
            assignee_id: todo.assignee_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Builds the update for `original`. The assignee is only sent when it changed, and
    /// a cleared field is sent as an explicit null.
    pub fn validate(&self, original: &Todo) -> Result<UpdateTodo, TodoFormErrors> {
        let assignee = parse_assignee(&self.assignee_id);
        let errors = TodoFormErrors {
            title: check_title(&self.title),
            assignee_id: assignee.as_ref().err().cloned(),
        };
        let assignee = match assignee {
            Ok(assignee) if errors.is_empty() => assignee,
            _ => return Err(errors),
        };
        let assignee_id = match (original.assignee_id, assignee) {
            (before, after) if before == after => Patch::Keep,
            (_, None) => Patch::Clear,
            (_, Some(id)) => Patch::Set(id),
        };
        Ok(UpdateTodo {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            assignee_id,
            status: Some(self.status),
            priority: Some(self.priority),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCreateFormState {
    pub title: String,
    pub description: String,
    pub priority: TodoPriority,
    pub assignee_id: String,
}

impl TodoCreateFormState {
    pub fn validate(&self) -> Result<CreateTodo, TodoFormErrors> {
        let assignee = parse_assignee(&self.assignee_id);
        let errors = TodoFormErrors {
            title: check_title(&self.title),
            assignee_id: assignee.as_ref().err().cloned(),
        };
        match assignee {
            Ok(assignee_id) if errors.is_empty() => Ok(CreateTodo {
                title: self.title.trim().to_string(),
                description: optional_text(&self.description),
                assignee_id,
                priority: self.priority,
            }),
            _ => Err(errors),
        }
    }
}

pub fn status_options() -> Vec<(String, String)> {
    TodoStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

pub fn priority_options() -> Vec<(String, String)> {
    TodoPriority::ALL
        .iter()
        .map(|priority| (priority.as_str().to_string(), priority.label().to_string()))
        .collect()
}

pub fn delete_confirmation_message(todo: &Todo) -> String {
    format!("「{}」を削除してもよろしいですか？", todo.title)
}
