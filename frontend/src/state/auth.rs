use crate::api::{ApiClient, ApiError, LoginRequest, User};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.loading = false;
    }

    fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let api_client = use_api_client();

    if api_client.tokens().get().is_none() {
        return (auth_state, set_auth_state);
    }

    set_auth_state.update(|state| state.loading = true);
    spawn_local(async move {
        match resolve_session(&api_client).await {
            Ok(user) => set_auth_state.update(|state| state.signed_in(user)),
            Err(err) => {
                log::info!("saved session rejected: {}", err);
                set_auth_state.update(AuthState::signed_out);
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Resolves the saved token through `/auth/me`. A rejected token is cleared by the
/// client on the 401.
async fn resolve_session(api_client: &ApiClient) -> Result<User, ApiError> {
    api_client.get_me().await
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api_client.login(&request).await {
        Ok(response) => {
            log::info!("signed in as {}", response.user.username);
            set_auth_state.update(|state| state.signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.logout().await;
    set_auth_state.update(AuthState::signed_out);
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage::TokenStore;
    use httpmock::prelude::*;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    fn admin_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "role": "admin",
            "displayName": "管理者",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(serde_json::json!({
                    "token": "mock-token-1",
                    "user": admin_json()
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/logout");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "ログアウトしました" }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let tokens = TokenStore::memory();
        let api = ApiClient::new_with_base_url(server.url("/api")).with_token_store(tokens.clone());

        login_request(
            LoginRequest {
                username: "admin".into(),
                password: "admin".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.map(|u| u.id), Some(1));
        assert_eq!(tokens.get().as_deref(), Some("mock-token-1"));

        logout(&api, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert_eq!(tokens.get(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(401).json_body(serde_json::json!({
                    "code": 401,
                    "message": "ユーザー名またはパスワードが正しくありません"
                }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_token_store(TokenStore::memory());

        let err = login_request(
            LoginRequest {
                username: "admin".into(),
                password: "wrong".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();
        assert!(err.is_unauthorized());
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
