use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{config::Config, store::Store};

pub type SharedStore = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }

    /// Builds the state the server starts with, seeding the store unless
    /// `SEED_DATA` turned it off.
    pub fn from_config(config: Config) -> Self {
        let store = if config.seed_data {
            Store::seeded(Utc::now())
        } else {
            Store::empty()
        };
        Self::new(store, config)
    }
}
