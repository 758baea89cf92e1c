//! URL-backed view state for the list screens.
//!
//! The query string is the only source of truth: each screen parses it into a typed
//! state, renders from that, and navigates to a new query string when a control changes.
//! Parsing never fails; anything unrecognised falls back to "absent" (or page 1).

use leptos::*;
use leptos_router::{use_location, use_navigate, use_query_map, NavigateOptions, ParamsMap};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::{
    AuditAction, AuditLogListQuery, AuditTargetType, TodoListQuery, TodoPriority, TodoStatus,
    UserListQuery, UserRole,
};

/// Rows requested per page by every list screen.
pub const PAGE_SIZE: u64 = 20;

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub trait SearchState: Clone + Default + PartialEq + 'static {
    type Update: Clone + 'static;

    /// Query keys this state understands, in serialization order.
    const KEYS: &'static [&'static str];

    fn parse<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>;

    /// Present fields in `KEYS` order; `page` is included only when it is not 1.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;

    fn apply(&self, update: Self::Update) -> Self;

    fn page(&self) -> u64;
}

pub fn to_query_string<S: SearchState>(state: &S) -> String {
    state
        .to_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(&value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins a path and a serialized state, omitting the `?` when nothing is set.
pub fn href_with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

pub fn parse_query_string<S: SearchState>(raw: &str) -> S {
    let decoded: Vec<(String, String)> = raw
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect();
    S::parse(decoded.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

pub fn parse_params<S: SearchState>(params: &ParamsMap) -> S {
    S::parse(
        S::KEYS
            .iter()
            .filter_map(|key| params.get(key).map(|value| (*key, value.as_str()))),
    )
}

/// Current view state, re-parsed whenever the query string changes.
pub fn use_search_state<S: SearchState>() -> Memo<S> {
    let query = use_query_map();
    create_memo(move |_| query.with(|params| parse_params::<S>(params)))
}

/// Applies an update and navigates to the resulting query string on the current path,
/// so an open detail pane stays open while filters change.
pub fn use_update_search<S: SearchState>(search: Memo<S>) -> Callback<S::Update> {
    let navigate = use_navigate();
    let location = use_location();
    Callback::new(move |update: S::Update| {
        let next = search.get_untracked().apply(update);
        let path = location.pathname.get_untracked();
        navigate(
            &href_with_query(&path, &to_query_string(&next)),
            NavigateOptions::default(),
        );
    })
}

/// Id of the row opened under `base` (`/users/7` under `/users` is `Some(7)`). Other
/// child routes such as `/users/new` select nothing.
pub fn selected_id_from_path(pathname: &str, base: &str) -> Option<u64> {
    pathname
        .strip_prefix(base)?
        .strip_prefix('/')?
        .trim_end_matches('/')
        .parse()
        .ok()
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

fn parse_page(value: &str) -> u64 {
    value.parse::<u64>().ok().filter(|page| *page >= 1).unwrap_or(1)
}

fn parse_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn push_page(pairs: &mut Vec<(&'static str, String)>, page: u64) {
    if page > 1 {
        pairs.push(("page", page.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearch {
    pub q: Option<String>,
    pub role: Option<UserRole>,
    pub page: u64,
}

impl Default for UserSearch {
    fn default() -> Self {
        Self {
            q: None,
            role: None,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSearchUpdate {
    Query(Option<String>),
    Role(Option<UserRole>),
    Page(u64),
}

impl SearchState for UserSearch {
    type Update = UserSearchUpdate;
    const KEYS: &'static [&'static str] = &["q", "role", "page"];

    fn parse<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            match key {
                "q" => state.q = parse_text(value),
                "role" => state.role = UserRole::parse(value),
                "page" => state.page = parse_page(value),
                _ => {}
            }
        }
        state
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        push_page(&mut pairs, self.page);
        pairs
    }

    fn apply(&self, update: UserSearchUpdate) -> Self {
        let mut next = self.clone();
        next.page = 1;
        match update {
            UserSearchUpdate::Query(q) => next.q = q.filter(|q| !q.is_empty()),
            UserSearchUpdate::Role(role) => next.role = role,
            UserSearchUpdate::Page(page) => next.page = page.max(1),
        }
        next
    }

    fn page(&self) -> u64 {
        self.page
    }
}

impl UserSearch {
    pub fn to_list_query(&self) -> UserListQuery {
        UserListQuery {
            q: self.q.clone(),
            role: self.role,
            page: self.page,
            page_size: Some(PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoSearch {
    pub q: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub assignee_id: Option<u64>,
    pub page: u64,
}

impl Default for TodoSearch {
    fn default() -> Self {
        Self {
            q: None,
            status: None,
            priority: None,
            assignee_id: None,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSearchUpdate {
    Query(Option<String>),
    Status(Option<TodoStatus>),
    Priority(Option<TodoPriority>),
    Assignee(Option<u64>),
    Page(u64),
}

impl SearchState for TodoSearch {
    type Update = TodoSearchUpdate;
    const KEYS: &'static [&'static str] = &["q", "status", "priority", "assigneeId", "page"];

    fn parse<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            match key {
                "q" => state.q = parse_text(value),
                "status" => state.status = TodoStatus::parse(value),
                "priority" => state.priority = TodoPriority::parse(value),
                "assigneeId" => state.assignee_id = value.parse().ok(),
                "page" => state.page = parse_page(value),
                _ => {}
            }
        }
        state
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(assignee_id) = self.assignee_id {
            pairs.push(("assigneeId", assignee_id.to_string()));
        }
        push_page(&mut pairs, self.page);
        pairs
    }

    fn apply(&self, update: TodoSearchUpdate) -> Self {
        let mut next = self.clone();
        next.page = 1;
        match update {
            TodoSearchUpdate::Query(q) => next.q = q.filter(|q| !q.is_empty()),
            TodoSearchUpdate::Status(status) => next.status = status,
            TodoSearchUpdate::Priority(priority) => next.priority = priority,
            TodoSearchUpdate::Assignee(assignee_id) => next.assignee_id = assignee_id,
            TodoSearchUpdate::Page(page) => next.page = page.max(1),
        }
        next
    }

    fn page(&self) -> u64 {
        self.page
    }
}

impl TodoSearch {
    pub fn to_list_query(&self) -> TodoListQuery {
        TodoListQuery {
            q: self.q.clone(),
            status: self.status,
            priority: self.priority,
            assignee_id: self.assignee_id,
            page: self.page,
            page_size: Some(PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogSearch {
    pub action: Option<AuditAction>,
    pub actor_id: Option<u64>,
    pub target_type: Option<AuditTargetType>,
    pub page: u64,
}

impl Default for AuditLogSearch {
    fn default() -> Self {
        Self {
            action: None,
            actor_id: None,
            target_type: None,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditLogSearchUpdate {
    Action(Option<AuditAction>),
    Actor(Option<u64>),
    TargetType(Option<AuditTargetType>),
    Page(u64),
}

impl SearchState for AuditLogSearch {
    type Update = AuditLogSearchUpdate;
    const KEYS: &'static [&'static str] = &["action", "actorId", "targetType", "page"];

    fn parse<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();
        for (key, value) in pairs {
            match key {
                "action" => state.action = AuditAction::parse(value),
                "actorId" => state.actor_id = value.parse().ok(),
                "targetType" => state.target_type = AuditTargetType::parse(value),
                "page" => state.page = parse_page(value),
                _ => {}
            }
        }
        state
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(action) = self.action {
            pairs.push(("action", action.as_str().to_string()));
        }
        if let Some(actor_id) = self.actor_id {
            pairs.push(("actorId", actor_id.to_string()));
        }
        if let Some(target_type) = self.target_type {
            pairs.push(("targetType", target_type.as_str().to_string()));
        }
        push_page(&mut pairs, self.page);
        pairs
    }

    fn apply(&self, update: AuditLogSearchUpdate) -> Self {
        let mut next = self.clone();
        next.page = 1;
        match update {
            AuditLogSearchUpdate::Action(action) => next.action = action,
            AuditLogSearchUpdate::Actor(actor_id) => next.actor_id = actor_id,
            AuditLogSearchUpdate::TargetType(target_type) => next.target_type = target_type,
            AuditLogSearchUpdate::Page(page) => next.page = page.max(1),
        }
        next
    }

    fn page(&self) -> u64 {
        self.page
    }
}

impl AuditLogSearch {
    pub fn to_list_query(&self) -> AuditLogListQuery {
        AuditLogListQuery {
            action: self.action,
            actor_id: self.actor_id,
            target_type: self.target_type,
            page: self.page,
            page_size: Some(PAGE_SIZE),
        }
    }
}
