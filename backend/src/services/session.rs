//! Mock bearer tokens of the form `mock-token-<userId>`.
//!
//! Tokens never expire and are not revoked by logout.

use crate::types::UserId;

pub const TOKEN_PREFIX: &str = "mock-token-";

pub fn issue_token(user_id: UserId) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/// Extracts the user id from a token. Anything other than the prefix followed
/// by ASCII digits is rejected.
pub fn user_id_from_token(token: &str) -> Option<UserId> {
    let digits = token.strip_prefix(TOKEN_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
