//! Mock administration API: users, todos and an append-only audit trail held
//! in an in-memory store.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

pub use routes::build_router;
