use leptos::*;
use std::future::Future;

use super::request_guard::{RequestGeneration, Ticket};
use crate::api::{ApiError, Page};

/// State of a paged list that keeps the last resolved page on screen while the next
/// one loads.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub data: Option<Page<T>>,
    pub error: Option<ApiError>,
    pub loading: bool,
    guard: RequestGeneration,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            guard: RequestGeneration::default(),
        }
    }
}

impl<T: Clone> ListState<T> {
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.guard.begin()
    }

    /// Applies a response. Returns `false` when the ticket is stale and the response
    /// was discarded.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Page<T>, ApiError>) -> bool {
        if !self.guard.accepts(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.data = Some(page);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Nothing has resolved yet, so a skeleton is the only thing to show.
    pub fn is_initial_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    /// A previous page is visible but a newer one is on its way.
    pub fn is_stale(&self) -> bool {
        self.loading && self.data.is_some()
    }

    pub fn items(&self) -> Vec<T> {
        self.data
            .as_ref()
            .map(|page| page.items.clone())
            .unwrap_or_default()
    }

    pub fn total(&self) -> Option<u64> {
        self.data.as_ref().map(|page| page.total)
    }
}

/// Shared invalidation counter for the list on screen. Detail and create panes bump it
/// after a successful mutation so the list re-fetches.
#[derive(Debug, Clone, Copy)]
pub struct ListReload(pub RwSignal<u32>);

impl ListReload {
    pub fn provide() -> Self {
        let reload = Self(create_rw_signal(0));
        provide_context(reload);
        reload
    }

    pub fn use_context() -> Self {
        use_context::<Self>().unwrap_or_else(|| Self(create_rw_signal(0)))
    }

    pub fn bump(&self) {
        self.0.update(|value| *value = value.wrapping_add(1));
    }
}

/// Re-fetches whenever `key` or `reload` changes and feeds results through the
/// request guard.
pub fn use_list_state<K, T, F, Fut>(
    key: Memo<K>,
    reload: RwSignal<u32>,
    fetch: F,
) -> RwSignal<ListState<T>>
where
    K: Clone + PartialEq + 'static,
    T: Clone + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let state = create_rw_signal(ListState::<T>::default());
    create_effect(move |_| {
        let key = key.get();
        let _ = reload.get();
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        let request = fetch(key);
        spawn_local(async move {
            let result = request.await;
            state.update(|s| {
                if !s.resolve(ticket, result) {
                    log::debug!("discarded stale list response");
                }
            });
        });
    });
    state
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Loaded(T),
    NotFound,
    Failed(ApiError),
}

impl<T> DetailState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Loads a single record for the detail pane. An id that does not parse renders as
/// not found without a request.
pub fn use_detail_state<T, F, Fut>(
    id: Memo<Option<u64>>,
    reload: RwSignal<u32>,
    fetch: F,
) -> RwSignal<DetailState<T>>
where
    T: Clone + 'static,
    F: Fn(u64) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let initial = match id.get_untracked() {
        Some(_) => DetailState::<T>::Loading,
        None => DetailState::NotFound,
    };
    let state = create_rw_signal(initial);
    let guard = store_value(RequestGeneration::default());
    create_effect(move |_| {
        let _ = reload.get();
        let Some(id) = id.get() else {
            state.set(DetailState::NotFound);
            return;
        };
        let Some(issued) = guard.try_update_value(|g| g.begin()) else {
            return;
        };
        state.set(DetailState::Loading);
        let request = fetch(id);
        spawn_local(async move {
            let result = request.await;
            if guard.with_value(|g| g.accepts(issued)) {
                state.set(DetailState::from_result(result));
            }
        });
    });
    state
}
