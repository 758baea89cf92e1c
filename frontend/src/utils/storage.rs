use std::{cell::RefCell, rc::Rc};
use web_sys::{Storage, Window};

pub const AUTH_TOKEN_KEY: &str = "auth_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Where the bearer token lives between requests. The browser build persists it in
/// `localStorage`; host tests keep it in memory.
#[derive(Debug, Clone)]
pub enum TokenStore {
    LocalStorage,
    Memory(Rc<RefCell<Option<String>>>),
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::LocalStorage
    }
}

impl TokenStore {
    pub fn memory() -> Self {
        Self::Memory(Rc::new(RefCell::new(None)))
    }

    pub fn get(&self) -> Option<String> {
        match self {
            Self::LocalStorage => local_storage()
                .ok()
                .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
                .filter(|token| !token.is_empty()),
            Self::Memory(slot) => slot.borrow().clone(),
        }
    }

    pub fn set(&self, token: &str) {
        match self {
            Self::LocalStorage => {
                if let Ok(storage) = local_storage() {
                    if storage.set_item(AUTH_TOKEN_KEY, token).is_err() {
                        log::warn!("failed to persist auth token");
                    }
                }
            }
            Self::Memory(slot) => *slot.borrow_mut() = Some(token.to_string()),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::LocalStorage => {
                if let Ok(storage) = local_storage() {
                    let _ = storage.remove_item(AUTH_TOKEN_KEY);
                }
            }
            Self::Memory(slot) => *slot.borrow_mut() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = TokenStore::memory();
        assert_eq!(store.get(), None);
        store.set("mock-token-1");
        assert_eq!(store.get().as_deref(), Some("mock-token-1"));

        let shared = store.clone();
        shared.clear();
        assert_eq!(store.get(), None);
    }
}
