//! Models that represent users, authentication payloads, and role metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::types::UserId;

/// Stored representation of a user account.
///
/// Not `Serialize`. Outbound representations go through [`UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// Name shown in the UI and snapshotted into audit entries.
    pub display_name: String,
    /// Plain-text mock credential.
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    /// Returns the canonical snake_case representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            display_name: user.display_name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload for creating a new user account.
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    #[validate(length(min = 1))]
    pub display_name: String,
    #[validate(length(min = 4))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Partial update; username and password cannot be changed here.
pub struct UpdateUser {
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    #[validate(length(min = 1))]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Bearer token and profile returned after a successful login.
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl User {
    /// Builds a user from a validated payload. The caller allocates the id.
    pub fn new(id: UserId, payload: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: payload.username,
            email: payload.email,
            role: payload.role,
            display_name: payload.display_name,
            password: payload.password,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Applies the fields present in `changes` and refreshes `updated_at`.
    pub fn apply(&mut self, changes: UpdateUser, now: DateTime<Utc>) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(display_name) = changes.display_name {
            self.display_name = display_name;
        }
        self.updated_at = now;
    }

    /// Case-insensitive substring match over username, display name and email.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.username.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}
