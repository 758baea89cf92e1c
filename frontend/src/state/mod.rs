pub mod auth;
pub mod debounce;
pub mod list;
pub mod request_guard;
pub mod search;
pub mod toast;
