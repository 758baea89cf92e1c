//! Bearer token handling.
//!
//! The token only identifies a user; there are no roles or permissions beyond
//! resolving it against the store.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{
    models::{audit_log::Actor, user::User},
    repositories::user::find_user,
    services::session::user_id_from_token,
    store::Store,
    types::UserId,
};

/// What the `Authorization` header carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bearer {
    Missing,
    /// Header present but not `Bearer mock-token-<id>`.
    Invalid,
    User(UserId),
}

impl Bearer {
    pub fn from_header(header: Option<&str>) -> Self {
        let Some(raw) = header else {
            return Bearer::Missing;
        };
        parse_bearer_token(raw)
            .and_then(user_id_from_token)
            .map_or(Bearer::Invalid, Bearer::User)
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Bearer::User(id) => Some(*id),
            Bearer::Missing | Bearer::Invalid => None,
        }
    }

    /// The user behind the token, if it resolves.
    pub fn resolve<'a>(&self, store: &'a Store) -> Option<&'a User> {
        self.user_id().and_then(|id| find_user(store, id))
    }

    /// Actor snapshot for audit entries, falling back to the system actor.
    pub fn actor(&self, store: &Store) -> Actor {
        self.resolve(store)
            .map(|user| Actor {
                id: user.id,
                name: user.display_name.clone(),
            })
            .unwrap_or_else(Actor::system)
    }
}

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default());
        Ok(Bearer::from_header(header))
    }
}

/// Accepts the `Bearer` scheme in any letter case.
pub fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(rest.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn parse_bearer_token_is_case_insensitive() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER   abc"), Some("abc"));
        assert_eq!(parse_bearer_token("Basic abc"), None);
        assert_eq!(parse_bearer_token("Bearer"), None);
    }

    #[test]
    fn from_header_distinguishes_missing_and_invalid() {
        assert_eq!(Bearer::from_header(None), Bearer::Missing);
        assert_eq!(Bearer::from_header(Some("Bearer nope")), Bearer::Invalid);
        assert_eq!(Bearer::from_header(Some("")), Bearer::Invalid);
        assert_eq!(
            Bearer::from_header(Some("Bearer mock-token-3")),
            Bearer::User(UserId::new(3))
        );
    }

    #[test]
    fn actor_falls_back_to_system() {
        let store = Store::seeded(Utc::now());
        assert_eq!(Bearer::Missing.actor(&store), Actor::system());
        assert_eq!(Bearer::User(UserId::new(99)).actor(&store), Actor::system());

        let actor = Bearer::User(UserId::new(2)).actor(&store);
        assert_eq!(actor.id, UserId::new(2));
        assert_eq!(actor.name, "田中太郎");
    }
}
