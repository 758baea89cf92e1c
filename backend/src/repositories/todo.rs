use crate::{
    models::{
        todo::{Todo, TodoPriority, TodoStatus},
        Page,
    },
    store::Store,
    types::{TodoId, UserId},
};

use super::common::{normalize_query, paginate, PageRequest};

#[derive(Debug, Clone, Default)]
pub struct TodoFilters {
    /// Lowercased free text matched against title and description.
    pub q: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub assignee_id: Option<UserId>,
}

impl TodoFilters {
    pub fn matches(&self, todo: &Todo) -> bool {
        if self.status.is_some_and(|status| status != todo.status) {
            return false;
        }
        if self.priority.is_some_and(|priority| priority != todo.priority) {
            return false;
        }
        if self.assignee_id.is_some() && self.assignee_id != todo.assignee_id {
            return false;
        }
        match &self.q {
            Some(needle) => todo.matches_text(needle),
            None => true,
        }
    }

    pub fn with_query(mut self, q: Option<&str>) -> Self {
        self.q = normalize_query(q);
        self
    }
}

pub fn list_todos<'a>(store: &'a Store, filters: &TodoFilters, page: PageRequest) -> Page<&'a Todo> {
    paginate(store.todos.iter().filter(|t| filters.matches(t)), page)
}

pub fn find_todo(store: &Store, id: TodoId) -> Option<&Todo> {
    store.todos.iter().find(|t| t.id == id)
}

pub fn find_todo_mut(store: &mut Store, id: TodoId) -> Option<&mut Todo> {
    store.todos.iter_mut().find(|t| t.id == id)
}

pub fn insert_todo(store: &mut Store, todo: Todo) {
    store.todos.push(todo);
}

pub fn remove_todo(store: &mut Store, id: TodoId) -> Option<Todo> {
    let index = store.todos.iter().position(|t| t.id == id)?;
    Some(store.todos.remove(index))
}
