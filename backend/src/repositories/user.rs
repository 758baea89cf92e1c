use crate::{
    models::{
        user::{User, UserRole},
        Page,
    },
    store::Store,
    types::UserId,
};

use super::common::{normalize_query, paginate, PageRequest};

#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    /// Lowercased free text matched against username, display name and email.
    pub q: Option<String>,
    pub role: Option<UserRole>,
}

impl UserFilters {
    pub fn new(q: Option<&str>, role: Option<UserRole>) -> Self {
        Self {
            q: normalize_query(q),
            role,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|role| role != user.role) {
            return false;
        }
        match &self.q {
            Some(needle) => user.matches_text(needle),
            None => true,
        }
    }
}

/// Users matching `filters` in insertion order, sliced to `page`.
pub fn list_users<'a>(store: &'a Store, filters: &UserFilters, page: PageRequest) -> Page<&'a User> {
    paginate(store.users.iter().filter(|u| filters.matches(u)), page)
}

pub fn find_user(store: &Store, id: UserId) -> Option<&User> {
    store.users.iter().find(|u| u.id == id)
}

pub fn find_user_mut(store: &mut Store, id: UserId) -> Option<&mut User> {
    store.users.iter_mut().find(|u| u.id == id)
}

/// Exact username and password match.
pub fn find_by_credentials<'a>(
    store: &'a Store,
    username: &str,
    password: &str,
) -> Option<&'a User> {
    store
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
}

pub fn username_exists(store: &Store, username: &str) -> bool {
    store.users.iter().any(|u| u.username == username)
}

pub fn insert_user(store: &mut Store, user: User) {
    store.users.push(user);
}

/// Removes and returns the user, or `None` when the id is unknown.
pub fn remove_user(store: &mut Store, id: UserId) -> Option<User> {
    let index = store.users.iter().position(|u| u.id == id)?;
    Some(store.users.remove(index))
}
