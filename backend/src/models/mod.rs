//! Data models shared across the store, services and API handlers.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub mod audit_log;
pub mod stats;
pub mod todo;
pub mod user;

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records of the requested page, possibly empty.
    pub items: Vec<T>,
    /// Number of records matching the filters before slicing.
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    /// Converts every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Plain acknowledgement body, e.g. after a delete or logout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Deserializes a field where `null` and absence mean different things:
/// absent stays `None`, `null` becomes `Some(None)`.
///
/// Pair with `#[serde(default)]` so a missing key falls back to `None`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
