use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage::TokenStore};

/// Thin wrapper over `reqwest` that knows the API base URL and injects the bearer
/// token on every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: TokenStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: TokenStore::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            tokens: TokenStore::default(),
        }
    }

    pub fn with_token_store(mut self, tokens: TokenStore) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        absolute_base_url(base)
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends an authorized request and decodes either the success payload or the
    /// API error body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)));
        }

        self.handle_unauthorized_status(status);
        let fallback = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let error = response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::new(status.as_u16(), fallback));
        log::debug!("API error {}: {}", error.code, error.message);
        Err(error)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            redirect_to_login_if_needed();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn absolute_base_url(base: String) -> String {
    if !base.starts_with('/') {
        return base;
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}{base}"))
        .unwrap_or(base)
}

#[cfg(not(target_arch = "wasm32"))]
fn absolute_base_url(base: String) -> String {
    base
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}
